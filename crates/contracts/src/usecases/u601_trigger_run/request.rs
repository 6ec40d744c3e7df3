use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::payload::PayloadParseError;

/// Body of the "create DAG run" call sent by the screen hosting the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerRunRequest {
    /// Omitted when the user left the run id empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dag_run_id: Option<String>,

    /// RFC 3339 timestamp, e.g. "2024-03-15T00:00:00Z"
    pub logical_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf: Option<Value>,
}

impl TriggerRunRequest {
    pub fn logical_date_from(date: NaiveDate) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[derive(Debug, Error)]
pub enum TriggerRunError {
    #[error("logical date is required")]
    MissingLogicalDate,

    #[error("logical date `{value}` is not a YYYY-MM-DD date")]
    InvalidLogicalDate { value: String },

    #[error("invalid conf: {0}")]
    InvalidConf(#[from] PayloadParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let request = TriggerRunRequest {
            dag_run_id: None,
            logical_date: "2024-03-15T00:00:00Z".into(),
            conf: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "logical_date": "2024-03-15T00:00:00Z" })
        );
    }

    #[test]
    fn test_logical_date_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(TriggerRunRequest::logical_date_from(date), "2024-12-31T00:00:00Z");
    }
}
