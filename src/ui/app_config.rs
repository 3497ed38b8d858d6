//! Runtime configuration served by the backend
//!
//! Defaults are rendered on the server and replaced after hydration by the
//! values from `/api/client-config`.

use leptos::prelude::*;

use crate::core::config::ClientConfig;
use crate::core::messages::Messages;

pub const CLIENT_CONFIG_URL: &str = "/api/client-config";

#[derive(Clone, Copy)]
pub struct AppConfig {
    pub client: RwSignal<ClientConfig>,
}

impl AppConfig {
    /// Message catalog of the configured locale
    pub fn messages(&self) -> Signal<&'static Messages> {
        let client = self.client;
        Signal::derive(move || client.with(|c| c.locale().messages()))
    }
}

pub fn provide_app_config() -> AppConfig {
    let config = AppConfig {
        client: RwSignal::new(ClientConfig::default()),
    };

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        leptos::task::spawn_local(async move {
            use gloo_net::http::Request;

            let fetched = match Request::get(CLIENT_CONFIG_URL).send().await {
                Ok(resp) if resp.ok() => resp.json::<ClientConfig>().await.ok(),
                _ => None,
            };
            match fetched {
                Some(client) => config.client.set(client),
                None => leptos::logging::warn!("Using default client config"),
            }
        });
    });

    provide_context(config);
    config
}

pub fn use_app_config() -> AppConfig {
    expect_context::<AppConfig>()
}

/// Message catalog from context, for components that only render text
pub fn use_messages() -> Signal<&'static Messages> {
    use_app_config().messages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::messages::{EN, VI};

    #[test]
    fn test_messages_follow_locale() {
        let owner = Owner::new();
        owner.with(|| {
            let config = AppConfig {
                client: RwSignal::new(ClientConfig::default()),
            };
            assert_eq!(config.messages().get_untracked().login_button, VI.login_button);

            config.client.update(|c| c.locale = "en".to_string());
            assert_eq!(config.messages().get_untracked().login_button, EN.login_button);
        });
    }
}
