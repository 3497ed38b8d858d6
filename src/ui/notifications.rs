//! Toast notifications
//!
//! A small stack of success/error messages shown in the top-right corner.
//! Success toasts dismiss themselves; errors stay until closed.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::core::auth::Notifier;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 5;

/// Delay before a success toast disappears
const SUCCESS_DISMISS_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            auto_dismiss_ms: Some(SUCCESS_DISMISS_MS),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            auto_dismiss_ms: None,
        }
    }
}

/// Toast item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Handle to the toast stack, shared through context
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }

    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push_back(ToastItem { id, toast });

            // Remove oldest if we exceed max
            while t.len() > MAX_TOASTS {
                t.pop_front();
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|i| i.id != id));
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastManager {
    fn success(&self, message: &str) {
        self.push(Toast::success(message));
    }

    fn error(&self, message: &str) {
        self.push(Toast::error(message));
    }
}

/// Provide the toast stack to the component tree
pub fn provide_toasts() -> ToastManager {
    let manager = ToastManager::new();
    provide_context(manager);
    manager
}

pub fn use_toasts() -> ToastManager {
    expect_context::<ToastManager>()
}

/// Renders the toast stack. Place once near the root.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let manager = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            <For
                each=move || manager.toasts().get()
                key=|item| item.id
                children=move |item| view! { <ToastView item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn ToastView(item: ToastItem, manager: ToastManager) -> impl IntoView {
    let id = item.id;

    // Auto-dismiss if specified
    if let Some(_ms) = item.toast.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                manager.dismiss(id);
            });
        }
    }

    let (container_class, icon_path) = match item.toast.kind {
        ToastKind::Success => (
            "flex items-start gap-3 p-4 rounded-lg border shadow-lg bg-white border-green-500/30 text-green-600",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        ToastKind::Error => (
            "flex items-start gap-3 p-4 rounded-lg border shadow-lg bg-white border-red-500/30 text-red-600",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    view! {
        <div class=container_class role="status">
            <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <p class="flex-1 text-sm text-gray-900">{item.toast.message}</p>
            <button
                class="text-gray-400 hover:text-gray-700 transition-colors"
                aria-label="Close"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_stack() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ToastManager::new();
            for i in 0..(MAX_TOASTS + 2) {
                manager.push(Toast::error(format!("e{i}")));
            }

            let toasts = manager.toasts().get_untracked();
            assert_eq!(toasts.len(), MAX_TOASTS);
            assert_eq!(
                toasts.front().map(|t| t.toast.message.as_str()),
                Some("e2")
            );
        });
    }

    #[test]
    fn test_notifier_kinds_and_dismiss() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = ToastManager::new();
            Notifier::success(&manager, "ok");
            Notifier::error(&manager, "bad");

            let toasts = manager.toasts().get_untracked();
            assert_eq!(toasts[0].toast, Toast::success("ok"));
            assert_eq!(toasts[1].toast.auto_dismiss_ms, None);

            manager.dismiss(toasts[0].id);
            assert_eq!(manager.toasts().get_untracked().len(), 1);
        });
    }
}
