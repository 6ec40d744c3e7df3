//! Trigger-run form rendered inside the host's modal

use super::view_model::TriggerRunFormVm;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::icons::icon;
use contracts::usecases::u601_trigger_run::{RunParamField, RunParams, TriggerFormSettings};
use leptos::prelude::*;
use thaw::*;

/// Reports intent only: `on_trigger` and `on_cancel` are forwarded to the
/// host, which launches the run or closes the modal.
#[component]
pub fn TriggerRunForm(
    params: RwSignal<RunParams>,
    #[prop(optional)] settings: Option<TriggerFormSettings>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_trigger: Callback<()>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let vm = TriggerRunFormVm::new(params, &settings);

    let dag_id = move || params.with(|p| p.dag_id.clone());
    let trigger_allowed = vm.is_trigger_allowed();
    let config_error = vm.config_error();
    let error_message = vm.config_error_message();

    view! {
        <div class="modal-header">
            <h2 class="modal-title">"Trigger DAG: " {dag_id}</h2>
            <div class="modal-header-actions">
                <button class="button button--icon modal__close" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                </button>
            </div>
        </div>

        <div class="modal-body">
            <Flex vertical=true gap=FlexGap::Large>
                <DateInput
                    id="u601-logical-date"
                    label="Logical date"
                    required=true
                    placeholder=settings.date_placeholder.clone()
                    value=vm.field(RunParamField::LogicalDate)
                    on_change=move |v| vm.set_field(RunParamField::LogicalDate, v)
                />

                <Input
                    id="u601-run-id"
                    label="Run ID (Optional)"
                    muted=true
                    placeholder=settings.run_id_placeholder.clone()
                    value=vm.field(RunParamField::RunId)
                    on_input=Callback::new(move |v: String| vm.set_field(RunParamField::RunId, v))
                />

                <div>
                    <Textarea
                        id="u601-config-json"
                        label="Configuration JSON"
                        code=true
                        rows=settings.config_rows
                        value=vm.field(RunParamField::ConfigJson)
                        error=error_message
                        on_input=Callback::new(move |v: String| vm.set_field(RunParamField::ConfigJson, v))
                    />
                    {move || config_error.get().map(|e| view! {
                        <div class="form__hint" style="font-size: var(--font-size-sm); color: var(--color-text-secondary);">
                            {icon("alert")} {format!(" line {}, column {}", e.line, e.column)}
                        </div>
                    })}
                </div>

                <Checkbox
                    id="u601-validate-json"
                    label="Validate JSON"
                    checked=vm.validate_json
                    on_change=Callback::new(move |checked: bool| vm.set_validation_enabled(checked))
                />
            </Flex>
        </div>

        <div class="modal-footer">
            <Flex justify=FlexJustify::SpaceBetween>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !trigger_allowed.get())
                    on_click=move |_| on_trigger.run(())
                >
                    {icon("play")} " Trigger"
                </Button>
            </Flex>
        </div>
    }
}
