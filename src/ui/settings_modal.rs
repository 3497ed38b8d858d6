//! Profile settings modal
//!
//! Lets the signed-in user change their display name and avatar. The avatar
//! is uploaded through the hosted widget; only the resulting URL is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::SettingsSubmission;
use crate::core::auth::{Notifier, SettingsRequest};
use crate::core::form::{FieldId, FormState};
use crate::core::upload::{UploadResult, apply_upload, avatar_src};
use crate::ui::app_config::use_app_config;
use crate::ui::auth::use_session_context;
use crate::ui::clients::{HttpAccountApi, SessionRefresher, busy_signal};
use crate::ui::common::{BaseModal, Button, ButtonVariant, Input};
use crate::ui::notifications::use_toasts;
use crate::ui::upload_widget::UploadWidget;

const SETTINGS_FIELDS: [FieldId; 2] = [FieldId::Name, FieldId::Image];

#[component]
pub fn SettingsModal(is_open: RwSignal<bool>) -> impl IntoView {
    let session = use_session_context();
    let config = use_app_config();
    let messages = config.messages();
    let toasts = use_toasts();
    let busy = busy_signal();
    let form = RwSignal::new(FormState::new());

    // Reseed from the account each time the modal opens
    Effect::new(move |_| {
        let user = session.user.get();
        if is_open.get() {
            let (name, image) = user
                .map(|u| (u.name.unwrap_or_default(), u.image.unwrap_or_default()))
                .unwrap_or_default();
            form.update(|f| {
                f.set_value(FieldId::Name, name);
                f.set_value(FieldId::Image, image);
            });
        }
    });

    let close = Callback::new(move |_| is_open.set(false));
    let disabled = Signal::derive(move || busy.get());

    let avatar = move || {
        let image = form.with(|f| f.value(FieldId::Image).to_string());
        session.user.with(|user| {
            avatar_src(
                &image,
                user.as_ref().and_then(|u| u.image.as_deref()),
            )
        })
    };

    let widget = StoredValue::new_local(UploadWidget::new(move |result: UploadResult| {
        if result.is_success() {
            form.update(|f| {
                apply_upload(f, &result);
            });
        }
    }));

    let on_change_photo = move |_| {
        let options = config.client.with_untracked(|c| c.upload_options());
        let opened = widget.with_value(|w| w.open(&options));
        if let Err(err) = opened {
            leptos::logging::warn!("{}", err);
            toasts.error(messages.get_untracked().unknown_error);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let valid = form
            .try_update(|f| f.validate(&SETTINGS_FIELDS))
            .unwrap_or(false);
        if !valid {
            return;
        }

        let request = form.with_untracked(SettingsRequest::from_form);
        let submission = SettingsSubmission::new(
            HttpAccountApi,
            toasts,
            SessionRefresher::new(session),
            busy,
        )
        .with_locale(config.client.with_untracked(|c| c.locale()));

        spawn_local(async move {
            submission.submit(request, move || is_open.set(false)).await;
        });
    };

    view! {
        <BaseModal
            title=Signal::derive(move || messages.get().settings_title)
            subtitle=Signal::derive(move || messages.get().settings_subtitle)
            is_open=is_open.into()
            on_close=close
            max_width="max-w-lg"
        >
            <form on:submit=on_submit class="space-y-8">
                <div class="space-y-6">
                    <Input
                        id=FieldId::Name
                        label=Signal::derive(move || messages.get().settings_name_label)
                        form=form
                        disabled=disabled
                        required=true
                    />

                    <div>
                        <span class="label">{move || messages.get().photo_label}</span>
                        <div class="mt-2 flex items-center gap-x-3">
                            <img
                                width="48"
                                height="48"
                                class="rounded-full w-12 h-12 object-cover"
                                src=avatar
                                alt="Avatar"
                            />
                            <Button
                                variant=ButtonVariant::Secondary
                                disabled=disabled
                                on_click=Callback::new(on_change_photo)
                            >
                                {move || messages.get().change_photo}
                            </Button>
                        </div>
                    </div>
                </div>

                <div class="flex items-center justify-end gap-x-6">
                    <Button variant=ButtonVariant::Ghost disabled=disabled on_click=close>
                        {move || messages.get().cancel}
                    </Button>
                    <Button button_type="submit" disabled=disabled>
                        {move || messages.get().save}
                    </Button>
                </div>
            </form>
        </BaseModal>
    }
}
