//! Authentication UI module
//!
//! Session context, the login/register form and the social sign-in buttons.

mod auth_form;
mod context;
mod social_button;

pub use auth_form::AuthForm;
pub use context::{
    SESSION_URL, SessionContext, fetch_session, provide_session_context, use_session_context,
};
pub use social_button::{SocialButton, SocialButtonRow};
