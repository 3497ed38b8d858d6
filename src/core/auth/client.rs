//! Seams to the external services the auth and settings forms talk to
//!
//! Every collaborator is passed in explicitly. Browser implementations live in
//! `ui::clients`; tests use in-memory fakes.

#![allow(async_fn_in_trait)]

use std::cell::Cell;
use std::rc::Rc;

use super::provider::{Provider, RegisterRequest, SettingsRequest, SignInOptions, SignInResponse};

/// Failure talking to an external service
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Identity layer sign-in entry point
pub trait IdentityClient {
    async fn sign_in(
        &self,
        provider: Provider,
        options: SignInOptions,
    ) -> Result<SignInResponse, ClientError>;
}

/// Backend account endpoints
pub trait AccountApi {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError>;

    async fn update_settings(&self, request: &SettingsRequest) -> Result<(), ClientError>;
}

/// Toast sink
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Router handle
pub trait Navigator {
    fn navigate(&self, path: &str);

    /// Re-fetch server data backing the current view
    fn refresh(&self);
}

/// Loading flag shared between a form's controls and its submit handler
pub trait BusyFlag {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

impl BusyFlag for Rc<Cell<bool>> {
    fn is_busy(&self) -> bool {
        self.get()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// Clears the busy flag when dropped, so every settle path resets it
pub(crate) struct BusyGuard<'a, F: BusyFlag + ?Sized> {
    flag: &'a F,
}

impl<'a, F: BusyFlag + ?Sized> BusyGuard<'a, F> {
    /// Set the flag, or return None when an attempt is already in flight
    pub(crate) fn acquire(flag: &'a F) -> Option<Self> {
        if flag.is_busy() {
            return None;
        }
        flag.set_busy(true);
        Some(Self { flag })
    }
}

impl<F: BusyFlag + ?Sized> Drop for BusyGuard<'_, F> {
    fn drop(&mut self) {
        self.flag.set_busy(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_guard_sets_and_clears() {
        let flag = Rc::new(Cell::new(false));
        {
            let _guard = BusyGuard::acquire(&flag).unwrap();
            assert!(flag.is_busy());
        }
        assert!(!flag.is_busy());
    }

    #[test]
    fn test_busy_guard_rejects_reentry() {
        let flag = Rc::new(Cell::new(false));
        let _guard = BusyGuard::acquire(&flag).unwrap();
        assert!(BusyGuard::acquire(&flag).is_none());
        assert!(flag.is_busy());
    }

    #[test]
    fn test_client_error_display() {
        assert_eq!(
            ClientError::Status(422).to_string(),
            "Request failed with status 422"
        );
    }
}
