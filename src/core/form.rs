//! Form state shared between field inputs and submit handlers
//!
//! A `FormState` holds the current string value of every registered field and
//! the set of fields that failed validation. Inputs write into it on every
//! keystroke; submit handlers take a snapshot of it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Password,
    Image,
}

impl FieldId {
    /// Key used for the field in request bodies and DOM ids
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::Image => "image",
        }
    }
}

/// HTML input type of a rendered field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

/// Validation failure attached to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
}

/// Rules declared for a field when it is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldRules {
    pub required: bool,
}

impl FieldRules {
    pub fn required() -> Self {
        Self { required: true }
    }

    fn check(&self, value: &str) -> Option<FieldError> {
        if self.required && value.trim().is_empty() {
            Some(FieldError::Required)
        } else {
            None
        }
    }
}

/// Values and validation errors of a single form instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<FieldId, String>,
    errors: HashMap<FieldId, FieldError>,
    rules: HashMap<FieldId, FieldRules>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form with the given default values
    pub fn with_defaults<I, S>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (FieldId, S)>,
        S: Into<String>,
    {
        Self {
            values: defaults.into_iter().map(|(id, v)| (id, v.into())).collect(),
            ..Self::default()
        }
    }

    /// Declare the validation rules of a field
    pub fn register(&mut self, id: FieldId, rules: FieldRules) {
        self.rules.insert(id, rules);
    }

    /// Current value of a field, empty when never set
    pub fn value(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Write a value from user input. Clears the field's error.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
        self.errors.remove(&id);
    }

    /// Write a value and immediately re-run the field's rules
    pub fn set_value_validated(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
        self.validate_field(id);
    }

    pub fn error(&self, id: FieldId) -> Option<FieldError> {
        self.errors.get(&id).copied()
    }

    pub fn has_error(&self, id: FieldId) -> bool {
        self.errors.contains_key(&id)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn validate_field(&mut self, id: FieldId) -> bool {
        let rules = self.rules.get(&id).copied().unwrap_or_default();
        match rules.check(self.value(id)) {
            Some(err) => {
                self.errors.insert(id, err);
                false
            }
            None => {
                self.errors.remove(&id);
                true
            }
        }
    }

    /// Check the rules of the given fields. Returns true when all pass.
    ///
    /// Only fields currently rendered are validated, so a required field of
    /// the other auth mode never blocks a submit.
    pub fn validate(&mut self, fields: &[FieldId]) -> bool {
        self.errors.retain(|id, _| fields.contains(id));
        fields
            .iter()
            .fold(true, |ok, id| self.validate_field(*id) && ok)
    }
}
