//! Redirect away from the auth screen once a session exists

use std::cell::Cell;

use super::client::Navigator;
use super::orchestrator::DEFAULT_LANDING_PATH;
use super::provider::SessionStatus;

/// Watches session status changes and navigates to the landing route on sign-in
#[derive(Debug, Default)]
pub struct SessionRedirectGuard {
    last_status: Cell<Option<SessionStatus>>,
}

impl SessionRedirectGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current status. Navigates once per change to `Authenticated`.
    ///
    /// Returns whether a navigation was issued.
    pub fn observe<V: Navigator + ?Sized>(&self, status: SessionStatus, navigator: &V) -> bool {
        let previous = self.last_status.replace(Some(status));
        if previous == Some(status) {
            return false;
        }

        if status == SessionStatus::Authenticated {
            navigator.navigate(DEFAULT_LANDING_PATH);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::core::auth::orchestrator::fakes::{Event, Recorder, orchestrator};
    use crate::core::auth::{AuthMode, Credentials, SignInResponse};

    fn navigations(rec: &Recorder) -> usize {
        rec.events()
            .iter()
            .filter(|e| matches!(e, Event::Navigate(_)))
            .count()
    }

    #[test]
    fn test_authenticated_navigates_once() {
        let guard = SessionRedirectGuard::new();
        let rec = Recorder::default();

        assert!(!guard.observe(SessionStatus::Loading, &rec));
        assert!(guard.observe(SessionStatus::Authenticated, &rec));

        assert_eq!(rec.events(), vec![Event::Navigate("/users".to_string())]);
    }

    #[test]
    fn test_other_statuses_never_navigate() {
        let guard = SessionRedirectGuard::new();
        let rec = Recorder::default();

        guard.observe(SessionStatus::Loading, &rec);
        guard.observe(SessionStatus::Unauthenticated, &rec);
        guard.observe(SessionStatus::Loading, &rec);

        assert_eq!(navigations(&rec), 0);
    }

    #[test]
    fn test_repeated_status_is_not_a_change() {
        let guard = SessionRedirectGuard::new();
        let rec = Recorder::default();

        guard.observe(SessionStatus::Authenticated, &rec);
        guard.observe(SessionStatus::Authenticated, &rec);

        assert_eq!(navigations(&rec), 1);
    }

    #[test]
    fn test_sign_out_and_back_in_navigates_again() {
        let guard = SessionRedirectGuard::new();
        let rec = Recorder::default();

        guard.observe(SessionStatus::Authenticated, &rec);
        guard.observe(SessionStatus::Unauthenticated, &rec);
        guard.observe(SessionStatus::Authenticated, &rec);

        assert_eq!(navigations(&rec), 2);
    }

    #[test]
    fn test_guard_and_direct_login_share_landing_route() {
        let (orch, login_rec) = orchestrator(Ok(SignInResponse::success()), Ok(()));
        let credentials = Credentials {
            name: String::new(),
            email: "lan@gunita.vn".to_string(),
            password: "pw".to_string(),
        };
        block_on(orch.submit(AuthMode::Login, credentials));

        let guard = SessionRedirectGuard::new();
        let guard_rec = Recorder::default();
        guard.observe(SessionStatus::Authenticated, &guard_rec);

        let expected = Event::Navigate(DEFAULT_LANDING_PATH.to_string());
        assert_eq!(login_rec.events().last(), Some(&expected));
        assert_eq!(guard_rec.events(), vec![expected]);
    }
}
