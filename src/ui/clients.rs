//! Browser implementations of the auth and settings collaborators
//!
//! Requests go to the backend's JSON routes through `gloo-net`. On the server
//! these are never called; the stubs only keep the SSR build linking.

use leptos::prelude::*;

use super::auth::SessionContext;
use crate::core::auth::{
    AccountApi, ClientError, IdentityClient, Navigator, Provider, RegisterRequest,
    SettingsRequest, SignInOptions, SignInResponse,
};

pub const REGISTER_URL: &str = "/api/register";
pub const SETTINGS_URL: &str = "/api/settings";

/// Sign-in route of the identity layer for a provider
pub fn sign_in_url(provider: Provider) -> String {
    format!("/api/auth/callback/{}", provider.id())
}

#[cfg(not(feature = "ssr"))]
async fn post_json<T: serde::Serialize>(
    url: &str,
    body: &T,
) -> Result<gloo_net::http::Response, ClientError> {
    use gloo_net::http::Request;

    Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ClientError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))
}

/// Backend account endpoints over HTTP
#[derive(Clone, Copy, Default)]
pub struct HttpAccountApi;

impl AccountApi for HttpAccountApi {
    #[cfg(not(feature = "ssr"))]
    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        let response = post_json(REGISTER_URL, request).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ClientError::Status(response.status()))
        }
    }

    #[cfg(feature = "ssr")]
    async fn register(&self, _request: &RegisterRequest) -> Result<(), ClientError> {
        Err(ClientError::Network(
            "Register not available on server".to_string(),
        ))
    }

    #[cfg(not(feature = "ssr"))]
    async fn update_settings(&self, request: &SettingsRequest) -> Result<(), ClientError> {
        let response = post_json(SETTINGS_URL, request).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ClientError::Status(response.status()))
        }
    }

    #[cfg(feature = "ssr")]
    async fn update_settings(&self, _request: &SettingsRequest) -> Result<(), ClientError> {
        Err(ClientError::Network(
            "Settings not available on server".to_string(),
        ))
    }
}

/// Identity layer sign-in over HTTP
///
/// A successful sign-in marks the session authenticated, which lets the
/// redirect guard react. With `redirect: true` the browser follows the URL the
/// identity layer returns.
#[derive(Clone, Copy)]
pub struct HttpIdentityClient {
    session: SessionContext,
}

impl HttpIdentityClient {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl IdentityClient for HttpIdentityClient {
    #[cfg(not(feature = "ssr"))]
    async fn sign_in(
        &self,
        provider: Provider,
        options: SignInOptions,
    ) -> Result<SignInResponse, ClientError> {
        let response = post_json(&sign_in_url(provider), &options).await?;
        let status = response.status();

        let mut result = response
            .json::<SignInResponse>()
            .await
            .unwrap_or_default();
        result.status = status;
        result.ok = response.ok() && result.error.is_none();
        if !response.ok() && result.error.is_none() {
            result.error = Some(format!("HTTP {}", status));
        }

        if result.is_success() {
            if options.redirect {
                if let Some(url) = result.url.as_deref() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().assign(url);
                    }
                }
            }
            self.session.mark_authenticated();
            self.session.refresh();
        }

        Ok(result)
    }

    #[cfg(feature = "ssr")]
    async fn sign_in(
        &self,
        _provider: Provider,
        _options: SignInOptions,
    ) -> Result<SignInResponse, ClientError> {
        let _ = self.session;
        Err(ClientError::Network(
            "Sign-in not available on server".to_string(),
        ))
    }
}

/// Router-backed navigation; `refresh` re-reads the session
///
/// Build it from `use_navigate()` while the router context is available.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
    session: SessionContext,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str) + Clone,
{
    pub fn new(navigate: F, session: SessionContext) -> Self {
        Self { navigate, session }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str) + Clone,
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path);
    }

    fn refresh(&self) {
        self.session.refresh();
    }
}

/// Navigation handle for views that only need data refreshes
#[derive(Clone, Copy)]
pub struct SessionRefresher {
    session: SessionContext,
}

impl SessionRefresher {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl Navigator for SessionRefresher {
    fn navigate(&self, path: &str) {
        leptos::logging::warn!("Navigation to {} ignored by SessionRefresher", path);
    }

    fn refresh(&self) {
        self.session.refresh();
    }
}

/// Loading flag backed by a signal, so controls disable reactively
pub fn busy_signal() -> RwSignal<bool> {
    RwSignal::new(false)
}

impl crate::core::auth::BusyFlag for RwSignal<bool> {
    fn is_busy(&self) -> bool {
        self.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::BusyFlag;

    #[test]
    fn test_sign_in_url_per_provider() {
        assert_eq!(
            sign_in_url(Provider::Credentials),
            "/api/auth/callback/credentials"
        );
        assert_eq!(sign_in_url(Provider::Zalo), "/api/auth/callback/zalo");
    }

    #[test]
    fn test_signal_busy_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let busy = busy_signal();
            assert!(!busy.is_busy());
            busy.set_busy(true);
            assert!(busy.get_untracked());
        });
    }
}
