//! Host screen: owns the run parameters and the modal's open/close lifecycle

use super::form::TriggerRunForm;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use chrono::Utc;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_trigger_run::{
    RunParams, TriggerFormSettings, TriggerRun, TriggerRunRequest,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TriggerRunPage(
    #[prop(into)] dag_id: String,
    #[prop(optional)] settings: Option<TriggerFormSettings>,
) -> impl IntoView {
    let dag_id = StoredValue::new(dag_id);
    let settings = StoredValue::new(settings.unwrap_or_default());

    let params = RwSignal::new(RunParams::default());
    let is_open = RwSignal::new(false);
    let error_msg = RwSignal::new(None::<String>);
    let last_request = RwSignal::new(None::<TriggerRunRequest>);

    // A new bundle per opening; the form resets its own toggle on mount
    let open_modal = move |_| {
        params.set(RunParams::for_dag(dag_id.get_value(), Utc::now().date_naive()));
        error_msg.set(None);
        is_open.set(true);
    };

    let close_modal = Callback::new(move |_: ()| {
        is_open.set(false);
        error_msg.set(None);
        params.set(RunParams::default());
    });

    let handle_trigger = Callback::new(move |_: ()| match params.with_untracked(RunParams::to_request) {
        Ok(request) => {
            log::info!(
                "{}: trigger requested for {}: {}",
                TriggerRun::full_name(),
                dag_id.get_value(),
                serde_json::to_string(&request).unwrap_or_default()
            );
            last_request.set(Some(request));
            close_modal.run(());
        }
        Err(e) => {
            log::warn!("{}: cannot build trigger request: {}", TriggerRun::full_name(), e);
            error_msg.set(Some(e.to_string()));
        }
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{TriggerRun::display_name()}</h1>
                    <span class="page__subtitle">{move || dag_id.get_value()}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=open_modal>
                        {icon("play")} " Trigger"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || last_request.get().map(|request| view! {
                    <div class="details-section">
                        <h4 class="details-section__title">"Last request"</h4>
                        <pre style="font-family: monospace; font-size: 12px;">
                            {serde_json::to_string_pretty(&request).unwrap_or_default()}
                        </pre>
                    </div>
                })}
            </div>

            <Show when=move || is_open.get()>
                <ModalFrame on_close=close_modal modal_style="width: 560px; max-width: 95vw;">
                    {move || error_msg.get().map(|e| view! {
                        <div
                            class="warning-box"
                            style="background: var(--color-error-50); border-color: var(--color-error-100); margin-bottom: var(--spacing-md);"
                        >
                            <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                            <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                        </div>
                    })}
                    <TriggerRunForm
                        params=params
                        settings=settings.get_value()
                        on_cancel=close_modal
                        on_trigger=handle_trigger
                    />
                </ModalFrame>
            </Show>
        </div>
    }
}
