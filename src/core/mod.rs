//! Framework-free domain logic: form state, auth workflow, settings, config

pub mod auth;
pub mod config;
pub mod form;
pub mod messages;
pub mod settings;
pub mod upload;

pub use settings::SettingsSubmission;
