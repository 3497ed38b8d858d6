use crate::core::form::{FieldError, FieldId, FieldRules, FormState, InputKind};
use crate::ui::app_config::use_messages;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled input bound to one field of a shared form state
///
/// The field's value and error are read from `form`; typing writes back
/// through it. A required field registers its rule on first render.
#[component]
pub fn Input(
    id: FieldId,
    /// Field label text
    #[prop(into)]
    label: Signal<&'static str>,
    #[prop(default = InputKind::Text)]
    kind: InputKind,
    form: RwSignal<FormState>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    let messages = use_messages();

    if required {
        form.update_untracked(|f| f.register(id, FieldRules::required()));
    }

    let error = move || form.with(|f| f.error(id));

    view! {
        <div class="space-y-1.5">
            <label class="label" for=id.key()>
                {move || label.get()}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id.key()
                name=id.key()
                type=kind.as_str()
                class="input-base"
                class:border-red-500=move || error().is_some()
                prop:value=move || form.with(|f| f.value(id).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set_value(id, value));
                }
                disabled=move || disabled.get()
            />
            {move || {
                error().map(|err| {
                    let text = match err {
                        FieldError::Required => messages.get().required_field,
                    };
                    view! {
                        <div class="flex items-center text-sm text-theme-error">
                            <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                            <span>{text}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
