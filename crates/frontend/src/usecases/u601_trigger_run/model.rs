//! Form state and its reducer.
//!
//! Every transition goes through [`reduce`], which applies the edit and then
//! runs the conf normalizer as an explicit follow-up step. Nothing is cached:
//! validity is derived from the current text each time it is asked for.

use contracts::usecases::u601_trigger_run::{
    is_trigger_allowed, normalize_config, update_field, validate_config, PayloadParseError,
    RunParamField, RunParams,
};

/// Message under the conf field when validation is on and the text does not parse
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit { field: RunParamField, value: String },
    SetValidation(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub params: RunParams,
    pub validate_json: bool,
}

impl FormState {
    pub fn new(params: RunParams, validate_json: bool) -> Self {
        // Normalize once so a form opened with validation on starts canonical
        reduce(
            Self {
                params,
                validate_json: false,
            },
            FormAction::SetValidation(validate_json),
        )
    }

    pub fn trigger_allowed(&self) -> bool {
        is_trigger_allowed(&self.params.config_json, self.validate_json)
    }

    /// Parse error of the conf text; always `None` while validation is off.
    pub fn config_error(&self) -> Option<PayloadParseError> {
        if !self.validate_json {
            return None;
        }
        validate_config(&self.params.config_json).err()
    }

    /// Text of the inline indicator under the conf field
    pub fn config_error_message(&self) -> Option<&'static str> {
        self.config_error().map(|_| INVALID_JSON_MESSAGE)
    }
}

pub fn reduce(state: FormState, action: FormAction) -> FormState {
    let mut next = match action {
        FormAction::Edit { field, value } => FormState {
            params: update_field(&state.params, field, value),
            ..state
        },
        FormAction::SetValidation(enabled) => FormState {
            validate_json: enabled,
            ..state
        },
    };

    if let Some(canonical) = normalize_config(&next.params.config_json, next.validate_json) {
        next.params = update_field(&next.params, RunParamField::ConfigJson, canonical);
    }
    next
}

/// Whether `next` has to be written to the host signal.
///
/// An edit is written back whenever the stored value differs from what was
/// typed, even if the state as a whole did not change: the input still shows
/// the typed text and only a write brings it back in line.
pub fn needs_write(current: &FormState, action: &FormAction, next: &FormState) -> bool {
    let typed_differs = match action {
        FormAction::Edit { field, value } => next.params.get(*field) != value.as_str(),
        FormAction::SetValidation(_) => false,
    };
    typed_differs || next.params != current.params
}
