//! Authentication workflow of the sign-in screen
//!
//! Framework-free: the reactive components in `ui::auth` drive these types and
//! hand them the browser collaborators.

mod client;
mod guard;
mod mode;
mod orchestrator;
mod provider;

pub use client::{AccountApi, BusyFlag, ClientError, IdentityClient, Navigator, Notifier};
pub(crate) use client::BusyGuard;
pub use guard::SessionRedirectGuard;
pub use mode::{AuthMode, field_spec};
pub use orchestrator::{DEFAULT_LANDING_PATH, SubmissionOrchestrator, SubmitOutcome};
pub use provider::{
    Credentials, Provider, RegisterRequest, SOCIAL_PROVIDERS, SessionResponse, SessionStatus,
    SettingsRequest, SignInOptions, SignInResponse, User,
};

#[cfg(test)]
pub(crate) use orchestrator::fakes;
