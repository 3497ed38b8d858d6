//! Login/register mode of the auth screen

use crate::core::form::{FieldId, InputKind};
use crate::core::messages::Messages;

/// Which variant of the auth form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// Flip between login and register
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Fields rendered in this mode, in display order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            AuthMode::Login => &[FieldId::Email, FieldId::Password],
            AuthMode::Register => &[FieldId::Name, FieldId::Email, FieldId::Password],
        }
    }

    pub fn submit_label(&self, msg: &Messages) -> &'static str {
        match self {
            AuthMode::Login => msg.login_button,
            AuthMode::Register => msg.register_button,
        }
    }

    /// Prompt and link text of the mode switcher
    pub fn switch_prompt(&self, msg: &Messages) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => (msg.no_account, msg.switch_to_register),
            AuthMode::Register => (msg.have_account, msg.switch_to_login),
        }
    }
}

/// Label and input type for an auth field
pub fn field_spec(id: FieldId, msg: &Messages) -> (&'static str, InputKind) {
    match id {
        FieldId::Name => (msg.name_label, InputKind::Text),
        FieldId::Email => (msg.email_label, InputKind::Email),
        FieldId::Password => (msg.password_label, InputKind::Password),
        FieldId::Image => (msg.photo_label, InputKind::Text),
    }
}
