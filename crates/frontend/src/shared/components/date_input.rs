use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays the date in its locale, the value is always yyyy-mm-dd
#[component]
pub fn DateInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// The date value in yyyy-mm-dd format, empty while the user clears it
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format or "")
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <input
                id=input_id
                type="date"
                class="form__input"
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
            />
        </div>
    }
}
