//! Common reusable UI components
//!
//! Building blocks shared by the auth screen and the settings modal.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{Button, ButtonVariant};
pub use form::Input;
pub use modal::BaseModal;
