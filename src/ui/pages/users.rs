//! Landing page after sign-in

use leptos::prelude::*;

use crate::core::upload::avatar_src;
use crate::ui::app_config::use_messages;
use crate::ui::auth::use_session_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::settings_modal::SettingsModal;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session_context();
    let messages = use_messages();
    let settings_open = RwSignal::new(false);

    let avatar = move || {
        session
            .user
            .with(|user| avatar_src("", user.as_ref().and_then(|u| u.image.as_deref())))
    };
    let display_name = move || {
        session.user.with(|user| {
            user.as_ref()
                .and_then(|u| u.name.clone().or_else(|| u.email.clone()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen bg-gray-100">
            <header class="flex items-center justify-between px-6 py-4 bg-white border-b">
                <div class="flex items-center gap-3">
                    <img class="rounded-full w-9 h-9 object-cover" src=avatar alt="Avatar"/>
                    <span class="font-medium text-gray-900">{display_name}</span>
                </div>
                <button
                    type="button"
                    class="btn-icon"
                    title=move || messages.get().open_settings
                    aria-label=move || messages.get().open_settings
                    on:click=move |_| settings_open.set(true)
                >
                    <Icon name=icons::SETTINGS class="icon-standalone"/>
                </button>
            </header>

            <SettingsModal is_open=settings_open/>
        </div>
    }
}
