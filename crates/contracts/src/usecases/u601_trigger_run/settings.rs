use serde::{Deserialize, Serialize};

/// Presentation settings of the trigger form.
///
/// Stored as a JSON blob by the host screen; missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerFormSettings {
    /// Initial state of the "Validate JSON" checkbox
    pub validate_json_by_default: bool,
    /// Visible rows of the conf textarea
    pub config_rows: u32,
    pub date_placeholder: String,
    pub run_id_placeholder: String,
}

impl Default for TriggerFormSettings {
    fn default() -> Self {
        Self {
            validate_json_by_default: false,
            config_rows: 6,
            date_placeholder: "mm / dd / yyyy".to_string(),
            run_id_placeholder: "Run ID (Optional - autogenerated if left empty)".to_string(),
        }
    }
}

impl TriggerFormSettings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
