//! Submission workflow of the auth screen
//!
//! One attempt runs `Idle -> Submitting -> Succeeded | Failed -> Idle`. The
//! busy flag is held for the whole attempt and released on every settle path.

use leptos::logging::{log, warn};

use super::client::{
    AccountApi, BusyFlag, BusyGuard, ClientError, IdentityClient, Navigator, Notifier,
};
use super::mode::AuthMode;
use super::provider::{Credentials, Provider, SignInOptions, SignInResponse};
use crate::core::form::{FieldId, FormState};
use crate::core::messages::{Locale, Messages};

/// Route shown to signed-in users
pub const DEFAULT_LANDING_PATH: &str = "/users";

/// How a submission attempt settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was still in flight
    Ignored,
    Succeeded,
    Failed,
}

impl Credentials {
    /// Snapshot the credential fields of a form
    pub fn from_form(form: &FormState) -> Self {
        Self {
            name: form.value(FieldId::Name).to_string(),
            email: form.value(FieldId::Email).to_string(),
            password: form.value(FieldId::Password).to_string(),
        }
    }
}

/// Dispatches form submits and social sign-ins to the identity layer
#[derive(Clone)]
pub struct SubmissionOrchestrator<I, A, N, V, B> {
    identity: I,
    accounts: A,
    notifier: N,
    navigator: V,
    busy: B,
    messages: &'static Messages,
}

impl<I, A, N, V, B> SubmissionOrchestrator<I, A, N, V, B>
where
    I: IdentityClient,
    A: AccountApi,
    N: Notifier,
    V: Navigator,
    B: BusyFlag,
{
    pub fn new(identity: I, accounts: A, notifier: N, navigator: V, busy: B) -> Self {
        Self {
            identity,
            accounts,
            notifier,
            navigator,
            busy,
            messages: Locale::default().messages(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.messages = locale.messages();
        self
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Handle a form submit in the given mode
    pub async fn submit(&self, mode: AuthMode, credentials: Credentials) -> SubmitOutcome {
        let Some(guard) = BusyGuard::acquire(&self.busy) else {
            return SubmitOutcome::Ignored;
        };

        match mode {
            AuthMode::Register => {
                let outcome = self.register(&credentials).await;
                // Loading ends with the registration; the follow-up sign-in runs unguarded
                drop(guard);
                if outcome == SubmitOutcome::Succeeded {
                    self.follow_up_sign_in(credentials).await;
                }
                outcome
            }
            AuthMode::Login => self.credential_sign_in(credentials).await,
        }
    }

    /// Handle a social button activation. Never navigates itself.
    pub async fn social_sign_in(&self, provider: Provider) -> SubmitOutcome {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            return SubmitOutcome::Ignored;
        };

        let result = self
            .identity
            .sign_in(provider, SignInOptions::social())
            .await;
        self.settle_sign_in(provider, result)
    }

    async fn register(&self, credentials: &Credentials) -> SubmitOutcome {
        match self.accounts.register(credentials).await {
            Ok(()) => {
                log!("Registered account for {}", credentials.email);
                self.notifier.success(self.messages.register_success);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                warn!("Registration failed: {}", err);
                self.notifier.error(self.messages.register_failed);
                SubmitOutcome::Failed
            }
        }
    }

    /// Result not inspected: the identity layer redirects on its own
    async fn follow_up_sign_in(&self, credentials: Credentials) {
        if let Err(err) = self
            .identity
            .sign_in(
                Provider::Credentials,
                SignInOptions::credentials(credentials, true),
            )
            .await
        {
            warn!("Sign-in after registration failed: {}", err);
        }
    }

    async fn credential_sign_in(&self, credentials: Credentials) -> SubmitOutcome {
        let result = self
            .identity
            .sign_in(
                Provider::Credentials,
                SignInOptions::credentials(credentials, false),
            )
            .await;

        let outcome = self.settle_sign_in(Provider::Credentials, result);
        if outcome == SubmitOutcome::Succeeded {
            self.navigator.navigate(DEFAULT_LANDING_PATH);
        }
        outcome
    }

    fn settle_sign_in(
        &self,
        provider: Provider,
        result: Result<SignInResponse, ClientError>,
    ) -> SubmitOutcome {
        match result {
            Ok(response) if response.error.is_some() => {
                warn!(
                    "Sign-in with {} rejected: {:?}",
                    provider.id(),
                    response.error
                );
                self.notifier.error(self.messages.invalid_credentials);
                SubmitOutcome::Failed
            }
            Ok(response) if response.ok => {
                self.notifier.success(self.messages.login_success);
                SubmitOutcome::Succeeded
            }
            Ok(response) => {
                warn!(
                    "Sign-in with {} settled without result (status {})",
                    provider.id(),
                    response.status
                );
                SubmitOutcome::Failed
            }
            Err(err) => {
                warn!("Sign-in with {} failed: {}", provider.id(), err);
                self.notifier.error(self.messages.invalid_credentials);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::core::auth::provider::{RegisterRequest, SettingsRequest};

    /// Records every side effect in call order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        Register(RegisterRequest),
        Settings(SettingsRequest),
        SignIn(Provider, SignInOptions),
        Success(String),
        Error(String),
        Navigate(String),
        Refresh,
    }

    #[derive(Clone, Default)]
    pub struct Recorder {
        pub events: Rc<RefCell<Vec<Event>>>,
        /// Busy flag value observed at each external call
        pub busy_during_calls: Rc<RefCell<Vec<bool>>>,
        pub busy: Rc<Cell<bool>>,
    }

    impl Recorder {
        pub fn events(&self) -> Vec<Event> {
            self.events.borrow().clone()
        }

        fn push(&self, event: Event) {
            self.events.borrow_mut().push(event);
        }

        fn observe_busy(&self) {
            self.busy_during_calls.borrow_mut().push(self.busy.get());
        }
    }

    #[derive(Clone)]
    pub struct FakeIdentity {
        pub recorder: Recorder,
        pub response: Result<SignInResponse, ClientError>,
    }

    impl IdentityClient for FakeIdentity {
        async fn sign_in(
            &self,
            provider: Provider,
            options: SignInOptions,
        ) -> Result<SignInResponse, ClientError> {
            self.recorder.observe_busy();
            self.recorder.push(Event::SignIn(provider, options));
            self.response.clone()
        }
    }

    #[derive(Clone)]
    pub struct FakeAccounts {
        pub recorder: Recorder,
        pub result: Result<(), ClientError>,
    }

    impl AccountApi for FakeAccounts {
        async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
            self.recorder.observe_busy();
            self.recorder.push(Event::Register(request.clone()));
            self.result.clone()
        }

        async fn update_settings(&self, request: &SettingsRequest) -> Result<(), ClientError> {
            self.recorder.observe_busy();
            self.recorder.push(Event::Settings(request.clone()));
            self.result.clone()
        }
    }

    impl Notifier for Recorder {
        fn success(&self, message: &str) {
            self.push(Event::Success(message.to_string()));
        }

        fn error(&self, message: &str) {
            self.push(Event::Error(message.to_string()));
        }
    }

    impl Navigator for Recorder {
        fn navigate(&self, path: &str) {
            self.push(Event::Navigate(path.to_string()));
        }

        fn refresh(&self) {
            self.push(Event::Refresh);
        }
    }

    pub type TestOrchestrator =
        SubmissionOrchestrator<FakeIdentity, FakeAccounts, Recorder, Recorder, Rc<Cell<bool>>>;

    pub fn orchestrator(
        sign_in: Result<SignInResponse, ClientError>,
        register: Result<(), ClientError>,
    ) -> (TestOrchestrator, Recorder) {
        let recorder = Recorder::default();
        let orchestrator = SubmissionOrchestrator::new(
            FakeIdentity {
                recorder: recorder.clone(),
                response: sign_in,
            },
            FakeAccounts {
                recorder: recorder.clone(),
                result: register,
            },
            recorder.clone(),
            recorder.clone(),
            recorder.busy.clone(),
        );
        (orchestrator, recorder)
    }
}
