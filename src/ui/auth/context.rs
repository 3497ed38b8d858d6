//! Session context for the signed-in account
//!
//! This module provides a reactive session observer that:
//! - Exposes the session status (`loading`, `authenticated`, `unauthenticated`)
//! - Holds the current user, if any
//! - Re-reads the session from the server on demand

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

use crate::core::auth::{ClientError, SessionResponse, SessionStatus, User};

/// Session endpoint of the identity layer
pub const SESSION_URL: &str = "/api/auth/session";

/// Session context providing status and user
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session status
    pub status: RwSignal<SessionStatus>,
    /// Signed-in user (if authenticated)
    pub user: RwSignal<Option<User>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            // Start with Loading on both server and client to avoid hydration mismatch
            status: RwSignal::new(SessionStatus::Loading),
            user: RwSignal::new(None),
        }
    }

    /// Apply a session response from the server
    pub fn apply(&self, response: SessionResponse) {
        self.status.set(response.status());
        self.user.set(response.user);
    }

    /// Mark the session as signed in before the next session fetch settles
    pub fn mark_authenticated(&self) {
        self.status.set(SessionStatus::Authenticated);
    }

    /// Re-read the session from the server
    pub fn refresh(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let ctx = *self;
            spawn_local(async move {
                match fetch_session().await {
                    Ok(response) => ctx.apply(response),
                    Err(err) => {
                        leptos::logging::warn!("Session fetch failed: {}", err);
                        ctx.apply(SessionResponse::default());
                    }
                }
            });
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext::new();

    // Resolve the session after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| ctx.refresh());

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Fetch the current session
#[cfg(not(feature = "ssr"))]
pub async fn fetch_session() -> Result<SessionResponse, ClientError> {
    use gloo_net::http::Request;

    let response = Request::get(SESSION_URL)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Status(response.status()));
    }

    // An empty object means no session
    response
        .json::<SessionResponse>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(feature = "ssr")]
pub async fn fetch_session() -> Result<SessionResponse, ClientError> {
    Err(ClientError::Network(
        "Session not available on server".to_string(),
    ))
}
