//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::app_config::use_messages;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let messages = use_messages();

    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-white rounded-full flex items-center justify-center">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12"/>
                </div>

                <h1 class="text-6xl font-bold text-gray-900 mb-4">"404"</h1>
                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    {move || messages.get().not_found}
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-sky-500 hover:bg-sky-600 text-white font-medium rounded-lg transition-colors"
                >
                    "Gunita"
                </A>
            </div>
        </div>
    }
}
