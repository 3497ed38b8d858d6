//! Auth page
//!
//! Entry screen with the logo, heading and the login/register form.

use leptos::prelude::*;

use crate::ui::app_config::use_messages;
use crate::ui::auth::AuthForm;

#[component]
pub fn AuthPage() -> impl IntoView {
    let messages = use_messages();

    view! {
        <div class="flex min-h-full flex-col justify-center py-12 sm:px-6 lg:px-8 bg-gray-100">
            <div class="sm:mx-auto sm:w-full sm:max-w-md">
                <img
                    height="48"
                    width="48"
                    class="mx-auto w-auto"
                    src="/images/logo.png"
                    alt="Logo"
                />
                <h2 class="mt-6 text-center text-3xl font-bold tracking-tight text-gray-900">
                    {move || messages.get().auth_heading}
                </h2>
            </div>
            <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
                <AuthForm/>
            </div>
        </div>
    }
}
