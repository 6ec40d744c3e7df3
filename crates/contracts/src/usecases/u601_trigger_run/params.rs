use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::payload::validate_config;
use super::request::{TriggerRunError, TriggerRunRequest};

/// Values behind the trigger form. Owned by the screen that opens the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Workflow the run belongs to. Shown in the form, never edited by it.
    pub dag_id: String,

    /// Logical date in `YYYY-MM-DD` format
    pub logical_date: String,

    /// Empty means the server generates the run id
    #[serde(default)]
    pub run_id: String,

    /// Free JSON text. Empty means no conf override.
    #[serde(default)]
    pub config_json: String,
}

/// Editable keys of [`RunParams`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunParamField {
    LogicalDate,
    RunId,
    ConfigJson,
}

impl RunParamField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunParamField::LogicalDate => "logical_date",
            RunParamField::RunId => "run_id",
            RunParamField::ConfigJson => "config_json",
        }
    }
}

impl RunParams {
    /// Fresh bundle for a modal opening: given date, no run id, empty JSON object.
    pub fn for_dag(dag_id: impl Into<String>, logical_date: NaiveDate) -> Self {
        Self {
            dag_id: dag_id.into(),
            logical_date: logical_date.format("%Y-%m-%d").to_string(),
            run_id: String::new(),
            config_json: "{}".to_string(),
        }
    }

    pub fn get(&self, field: RunParamField) -> &str {
        match field {
            RunParamField::LogicalDate => &self.logical_date,
            RunParamField::RunId => &self.run_id,
            RunParamField::ConfigJson => &self.config_json,
        }
    }

    /// Build the launch request body.
    ///
    /// The logical date becomes midnight UTC of that day. Blank run id and
    /// blank conf are omitted.
    pub fn to_request(&self) -> Result<TriggerRunRequest, TriggerRunError> {
        let date_raw = self.logical_date.trim();
        if date_raw.is_empty() {
            return Err(TriggerRunError::MissingLogicalDate);
        }
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            TriggerRunError::InvalidLogicalDate {
                value: date_raw.to_string(),
            }
        })?;

        let run_id = self.run_id.trim();

        Ok(TriggerRunRequest {
            dag_run_id: if run_id.is_empty() {
                None
            } else {
                Some(run_id.to_string())
            },
            logical_date: TriggerRunRequest::logical_date_from(date),
            conf: validate_config(&self.config_json)?,
        })
    }
}

/// Keyed partial update: returns a copy of `params` with only `field` replaced.
pub fn update_field(
    params: &RunParams,
    field: RunParamField,
    value: impl Into<String>,
) -> RunParams {
    let mut next = params.clone();
    let value = value.into();
    match field {
        RunParamField::LogicalDate => next.logical_date = value,
        RunParamField::RunId => next.run_id = value,
        RunParamField::ConfigJson => next.config_json = value,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: [RunParamField; 3] = [
        RunParamField::LogicalDate,
        RunParamField::RunId,
        RunParamField::ConfigJson,
    ];

    fn sample() -> RunParams {
        RunParams {
            dag_id: "example_dag".into(),
            logical_date: "2024-03-15".into(),
            run_id: "manual_1".into(),
            config_json: r#"{"a":1}"#.into(),
        }
    }

    #[test]
    fn test_update_field_touches_one_key() {
        let base = sample();
        for field in FIELDS {
            let next = update_field(&base, field, "changed");
            assert_eq!(next.get(field), "changed");
            assert_eq!(next.dag_id, base.dag_id);
            for other in FIELDS.into_iter().filter(|f| *f != field) {
                assert_eq!(
                    next.get(other),
                    base.get(other),
                    "{} leaked into {}",
                    field.as_str(),
                    other.as_str()
                );
            }
        }
    }

    #[test]
    fn test_update_field_keeps_exact_text() {
        let next = update_field(&sample(), RunParamField::ConfigJson, "{ \"a\" :");
        assert_eq!(next.config_json, "{ \"a\" :");
    }

    #[test]
    fn test_for_dag_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let params = RunParams::for_dag("etl", date);
        assert_eq!(params.logical_date, "2024-01-05");
        assert_eq!(params.run_id, "");
        assert_eq!(params.config_json, "{}");
    }

    #[test]
    fn test_to_request_full() {
        let request = sample().to_request().unwrap();
        assert_eq!(request.dag_run_id.as_deref(), Some("manual_1"));
        assert_eq!(request.logical_date, "2024-03-15T00:00:00Z");
        assert_eq!(request.conf, Some(json!({"a": 1})));
    }

    #[test]
    fn test_to_request_blank_optionals() {
        let mut params = sample();
        params.run_id = "  ".into();
        params.config_json = String::new();
        let request = params.to_request().unwrap();
        assert_eq!(request.dag_run_id, None);
        assert_eq!(request.conf, None);
    }

    #[test]
    fn test_to_request_errors() {
        let mut params = sample();
        params.logical_date = String::new();
        assert!(matches!(params.to_request(), Err(TriggerRunError::MissingLogicalDate)));

        params.logical_date = "15.03.2024".into();
        assert!(matches!(
            params.to_request(),
            Err(TriggerRunError::InvalidLogicalDate { .. })
        ));

        params.logical_date = "2024-03-15".into();
        params.config_json = "{bad".into();
        assert!(matches!(params.to_request(), Err(TriggerRunError::InvalidConf(_))));
    }
}
