//! ViewModel for the trigger-run form

use super::model::{needs_write, reduce, FormAction, FormState};
use contracts::usecases::u601_trigger_run::{
    PayloadParseError, RunParamField, RunParams, TriggerFormSettings,
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TriggerRunFormVm {
    /// Owned by the host screen; the form is its only writer while mounted
    pub params: RwSignal<RunParams>,
    /// "Validate JSON" checkbox, reset with every new form instance
    pub validate_json: RwSignal<bool>,
}

impl TriggerRunFormVm {
    pub fn new(params: RwSignal<RunParams>, settings: &TriggerFormSettings) -> Self {
        let opened = params.get_untracked();
        let state = FormState::new(opened.clone(), settings.validate_json_by_default);
        if state.params != opened {
            params.set(state.params);
        }
        Self {
            params,
            validate_json: RwSignal::new(state.validate_json),
        }
    }

    // === Commands ===

    /// Apply one transition: the edit itself, then conf normalization.
    pub fn apply(&self, action: FormAction) {
        let current = FormState {
            params: self.params.get_untracked(),
            validate_json: self.validate_json.get_untracked(),
        };
        let next = reduce(current.clone(), action.clone());

        if next.validate_json != current.validate_json {
            log::debug!("u601: JSON validation {}", if next.validate_json { "on" } else { "off" });
            self.validate_json.set(next.validate_json);
        }
        if let FormAction::Edit { field, value } = &action {
            if next.params.get(*field) != value.as_str() {
                log::debug!("u601: {} reformatted to canonical JSON", field.as_str());
            }
        }
        // Also written when unchanged, so a field showing the typed text resyncs
        if needs_write(&current, &action, &next) {
            self.params.set(next.params);
        }
    }

    pub fn set_field(&self, field: RunParamField, value: String) {
        self.apply(FormAction::Edit { field, value });
    }

    pub fn set_validation_enabled(&self, enabled: bool) {
        self.apply(FormAction::SetValidation(enabled));
    }

    // === Derived signals ===

    pub fn field(&self, field: RunParamField) -> Signal<String> {
        let params = self.params;
        Signal::derive(move || params.with(|p| p.get(field).to_string()))
    }

    /// Current state as seen by the reducer. Tracks both signals.
    fn snapshot(&self) -> Signal<FormState> {
        let params = self.params;
        let validate_json = self.validate_json;
        Signal::derive(move || FormState {
            params: params.get(),
            validate_json: validate_json.get(),
        })
    }

    pub fn is_trigger_allowed(&self) -> Signal<bool> {
        let state = self.snapshot();
        Signal::derive(move || state.with(FormState::trigger_allowed))
    }

    pub fn config_error(&self) -> Signal<Option<PayloadParseError>> {
        let state = self.snapshot();
        Signal::derive(move || state.with(FormState::config_error))
    }

    pub fn config_error_message(&self) -> Signal<Option<String>> {
        let state = self.snapshot();
        Signal::derive(move || state.with(|s| s.config_error_message().map(str::to_string)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(config_json: &str) -> RunParams {
        RunParams {
            dag_id: "example_dag".into(),
            logical_date: "2024-03-15".into(),
            run_id: String::new(),
            config_json: config_json.into(),
        }
    }

    #[test]
    fn test_edits_write_through_host_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let host = RwSignal::new(params(""));
            let vm = TriggerRunFormVm::new(host, &TriggerFormSettings::default());

            vm.set_field(RunParamField::ConfigJson, r#"{"a":1}"#.into());
            assert_eq!(host.get_untracked().config_json, r#"{"a":1}"#);

            vm.set_validation_enabled(true);
            assert_eq!(host.get_untracked().config_json, "{\n  \"a\": 1\n}");
            assert!(vm.is_trigger_allowed().get_untracked());

            vm.set_field(RunParamField::ConfigJson, "{bad".into());
            assert_eq!(host.get_untracked().config_json, "{bad");
            assert!(!vm.is_trigger_allowed().get_untracked());
            assert!(vm.config_error().get_untracked().is_some());
            assert_eq!(
                vm.config_error_message().get_untracked().as_deref(),
                Some("Invalid JSON format")
            );

            vm.set_validation_enabled(false);
            assert_eq!(host.get_untracked().config_json, "{bad");
            assert!(vm.is_trigger_allowed().get_untracked());
            assert!(vm.config_error().get_untracked().is_none());
        });
    }

    #[test]
    fn test_validation_by_default_normalizes_on_open() {
        let owner = Owner::new();
        owner.with(|| {
            let host = RwSignal::new(params(r#"{"b":[1]}"#));
            let settings = TriggerFormSettings {
                validate_json_by_default: true,
                ..TriggerFormSettings::default()
            };
            let vm = TriggerRunFormVm::new(host, &settings);
            assert!(vm.validate_json.get_untracked());
            assert_eq!(
                host.get_untracked().config_json,
                "{\n  \"b\": [\n    1\n  ]\n}"
            );
        });
    }

    #[test]
    fn test_whitespace_edit_resyncs_to_stored_canonical_text() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let owner = Owner::new();
        owner.with(|| {
            let canonical = "{\n  \"a\": 1\n}";
            let host = RwSignal::new(params(canonical));
            let settings = TriggerFormSettings {
                validate_json_by_default: true,
                ..TriggerFormSettings::default()
            };
            let vm = TriggerRunFormVm::new(host, &settings);

            // Counts host notifications: the memo reruns only after a write.
            let writes = Arc::new(AtomicUsize::new(0));
            let counter = Memo::new({
                let writes = Arc::clone(&writes);
                move |_| {
                    host.track();
                    writes.fetch_add(1, Ordering::SeqCst)
                }
            });
            counter.get_untracked();
            let before = writes.load(Ordering::SeqCst);

            vm.set_field(RunParamField::ConfigJson, format!("{canonical}\n\n   "));
            counter.get_untracked();

            assert_eq!(host.get_untracked().config_json, canonical);
            assert_eq!(writes.load(Ordering::SeqCst), before + 1);

            vm.set_validation_enabled(true);
            counter.get_untracked();
            assert_eq!(writes.load(Ordering::SeqCst), before + 1);
        });
    }
}
