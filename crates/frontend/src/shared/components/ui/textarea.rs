use leptos::prelude::*;

/// Multi-line text editor with label and an optional error line under it.
///
/// The value is bound through `prop:value`, so rewrites made by the owner
/// (e.g. JSON pretty-printing) show up while the field has focus.
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional)]
    rows: Option<u32>,
    /// Monospace font, whitespace preserved
    #[prop(optional)]
    code: bool,
    /// Shown under the field when `Some`
    #[prop(optional, into)]
    error: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    let textarea_class = move || {
        let mut class = String::from("form__textarea");
        if code {
            class.push_str(" form__textarea--code");
        }
        if error.get().is_some() {
            class.push_str(" form__textarea--invalid");
        }
        class
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {l}
                </label>
            })}
            <textarea
                id=textarea_id
                class=textarea_class
                rows=textarea_rows
                style=code.then_some("white-space: pre-wrap; font-family: monospace;")
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || error.get().map(|message| view! {
                <div class="form__error" style="color: var(--color-error); font-size: var(--font-size-sm); margin-top: 8px;">
                    {message}
                </div>
            })}
        </div>
    }
}
