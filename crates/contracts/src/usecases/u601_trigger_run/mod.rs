pub mod params;
pub mod payload;
pub mod request;
pub mod settings;

pub use params::{update_field, RunParamField, RunParams};
pub use payload::{
    canonical_json, is_trigger_allowed, normalize_config, validate_config, PayloadParseError,
};
pub use request::{TriggerRunError, TriggerRunRequest};
pub use settings::TriggerFormSettings;

use crate::usecases::common::UseCaseMetadata;

pub struct TriggerRun;

impl UseCaseMetadata for TriggerRun {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "trigger_run"
    }

    fn display_name() -> &'static str {
        "Trigger DAG run"
    }

    fn description() -> &'static str {
        "Manual launch of a workflow run with a logical date, optional run id and JSON conf"
    }
}
