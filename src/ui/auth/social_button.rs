//! Social identity buttons
//!
//! One button per social provider, laid out as two rows of three.

use leptos::prelude::*;

use crate::core::auth::{Provider, SOCIAL_PROVIDERS};
use crate::ui::icon::Icon;

const ROW_LEN: usize = 3;

/// Single provider button; reports its provider when clicked
#[component]
pub fn SocialButton<F>(provider: Provider, disabled: Signal<bool>, on_select: F) -> impl IntoView
where
    F: Fn(Provider) + 'static,
{
    view! {
        <button
            type="button"
            class="btn-base btn-secondary flex-1 justify-center"
            title=provider.display_name()
            aria-label=provider.display_name()
            disabled=move || disabled.get()
            class:opacity-50=move || disabled.get()
            on:click=move |_| on_select(provider)
        >
            <Icon name=provider.id() class="w-5 h-5"/>
        </button>
    }
}

/// All social providers, disabled while a submission is in flight
#[component]
pub fn SocialButtonRow<F>(disabled: Signal<bool>, on_select: F) -> impl IntoView
where
    F: Fn(Provider) + Clone + 'static,
{
    let rows = SOCIAL_PROVIDERS
        .chunks(ROW_LEN)
        .map(|row| {
            let buttons = row
                .iter()
                .map(|provider| {
                    view! {
                        <SocialButton
                            provider=*provider
                            disabled=disabled
                            on_select=on_select.clone()
                        />
                    }
                })
                .collect_view();
            view! { <div class="flex gap-2">{buttons}</div> }
        })
        .collect_view();

    view! { <div class="mt-6 flex flex-col gap-2">{rows}</div> }
}
