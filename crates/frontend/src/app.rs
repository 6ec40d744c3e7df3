use crate::usecases::u601_trigger_run::TriggerRunPage;
use contracts::usecases::u601_trigger_run::TriggerFormSettings;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Workflow the standalone build opens the trigger form for
const DEFAULT_DAG_ID: &str = "example_dag";

/// Form settings shipped with the build; missing keys take defaults
const FORM_SETTINGS_JSON: &str = r#"{
    "validate_json_by_default": false,
    "config_rows": 8
}"#;

fn load_form_settings(raw: &str) -> TriggerFormSettings {
    TriggerFormSettings::from_json(raw).unwrap_or_else(|e| {
        log::warn!("invalid form settings, using defaults: {}", e);
        TriggerFormSettings::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let settings = load_form_settings(FORM_SETTINGS_JSON);

    view! {
        <ConfigProvider>
            <TriggerRunPage dag_id=DEFAULT_DAG_ID settings=settings />
        </ConfigProvider>
    }
}
