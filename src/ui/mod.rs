pub mod app_config;
pub mod auth;
pub mod clients;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod settings_modal;
pub mod upload_widget;

pub use app_config::{AppConfig, provide_app_config, use_app_config, use_messages};
pub use icon::{Icon, icons};
pub use notifications::{ToastContainer, provide_toasts, use_toasts};
pub use settings_modal::SettingsModal;
