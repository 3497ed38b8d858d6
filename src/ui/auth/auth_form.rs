//! Combined login/register form
//!
//! The same form switches between signing in and creating an account. Typed
//! values survive a mode switch; the name field is only shown when registering.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::context::use_session_context;
use super::social_button::SocialButtonRow;
use crate::core::auth::{
    AuthMode, Credentials, Provider, SessionRedirectGuard, SubmissionOrchestrator, field_spec,
};
use crate::core::form::FormState;
use crate::ui::app_config::use_app_config;
use crate::ui::clients::{HttpAccountApi, HttpIdentityClient, RouterNavigator, busy_signal};
use crate::ui::common::{Button, Input};
use crate::ui::notifications::use_toasts;

#[component]
pub fn AuthForm() -> impl IntoView {
    let session = use_session_context();
    let config = use_app_config();
    let messages = config.messages();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::default());
    let form = RwSignal::new(FormState::new());
    let busy = busy_signal();

    let navigator = RouterNavigator::new(
        move |path: &str| navigate(path, Default::default()),
        session,
    );

    // Leave the auth screen once a session appears
    let guard = SessionRedirectGuard::new();
    let guard_navigator = navigator.clone();
    Effect::new(move |_| {
        guard.observe(session.status.get(), &guard_navigator);
    });

    // Locale is read per attempt, after the config fetch
    let orchestrator = move || {
        SubmissionOrchestrator::new(
            HttpIdentityClient::new(session),
            HttpAccountApi,
            toasts,
            navigator.clone(),
            busy,
        )
        .with_locale(config.client.with_untracked(|c| c.locale()))
    };

    let on_submit = {
        let orchestrator = orchestrator.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let current = mode.get_untracked();
            let valid = form
                .try_update(|f| f.validate(current.fields()))
                .unwrap_or(false);
            if !valid {
                return;
            }

            let credentials = form.with_untracked(Credentials::from_form);
            let orchestrator = orchestrator();
            spawn_local(async move {
                orchestrator.submit(current, credentials).await;
            });
        }
    };

    let on_social = move |provider: Provider| {
        let orchestrator = orchestrator();
        spawn_local(async move {
            orchestrator.social_sign_in(provider).await;
        });
    };

    let disabled = Signal::derive(move || busy.get());

    view! {
        <div class="card p-6 sm:p-10">
            <form on:submit=on_submit class="space-y-6">
                {move || {
                    let msg = messages.get();
                    mode.get()
                        .fields()
                        .iter()
                        .map(|&id| {
                            let (label, kind) = field_spec(id, msg);
                            view! {
                                <Input id=id label=label kind=kind form=form disabled=disabled/>
                            }
                        })
                        .collect_view()
                }}
                <Button button_type="submit" disabled=disabled full_width=true>
                    {move || mode.get().submit_label(messages.get())}
                </Button>
            </form>

            <div class="mt-6">
                <div class="relative">
                    <div class="absolute inset-0 flex items-center">
                        <div class="w-full border-t border-theme"></div>
                    </div>
                    <div class="relative flex justify-center text-sm">
                        <span class="bg-white px-2 text-theme-muted">
                            {move || messages.get().continue_with}
                        </span>
                    </div>
                </div>

                <SocialButtonRow disabled=disabled on_select=on_social/>
            </div>

            <div class="flex gap-2 justify-center text-sm mt-6 px-2 text-theme-muted">
                <span>{move || mode.get().switch_prompt(messages.get()).0}</span>
                <button
                    type="button"
                    class="underline cursor-pointer"
                    on:click=move |_| mode.update(AuthMode::toggle)
                >
                    {move || mode.get().switch_prompt(messages.get()).1}
                </button>
            </div>
        </div>
    }
}
