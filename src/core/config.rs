//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The browser receives the public subset as a [`ClientConfig`].

use serde::{Deserialize, Serialize};

use crate::core::messages::Locale;
use crate::core::upload::UploadWidgetOptions;

/// Upload preset used when `UPLOAD_PRESET` is not set
pub const DEFAULT_UPLOAD_PRESET: &str = "lz6eovct";

/// Image host account used when `UPLOAD_CLOUD_NAME` is not set
pub const DEFAULT_UPLOAD_CLOUD_NAME: &str = "gunita";

/// Settings the front-end needs at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub upload_cloud_name: String,
    pub upload_preset: String,
    pub locale: String,
}

impl ClientConfig {
    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }

    pub fn upload_options(&self) -> UploadWidgetOptions {
        UploadWidgetOptions::new(&self.upload_cloud_name, &self.upload_preset)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            upload_cloud_name: DEFAULT_UPLOAD_CLOUD_NAME.to_string(),
            upload_preset: DEFAULT_UPLOAD_PRESET.to_string(),
            locale: "vi".to_string(),
        }
    }
}

/// Application configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Account name of the hosted image upload widget
    pub upload_cloud_name: Option<String>,

    /// Preset of the hosted image upload widget
    pub upload_preset: Option<String>,

    /// UI language tag ("vi" or "en")
    pub locale: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            upload_cloud_name: std::env::var("UPLOAD_CLOUD_NAME").ok(),
            upload_preset: std::env::var("UPLOAD_PRESET").ok(),
            locale: std::env::var("APP_LOCALE").ok(),
        }
    }

    /// Check if a custom upload preset is configured
    pub fn has_upload_preset(&self) -> bool {
        self.upload_preset.is_some()
    }

    /// Public subset sent to the browser, with defaults filled in
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            upload_cloud_name: self
                .upload_cloud_name
                .clone()
                .unwrap_or(defaults.upload_cloud_name),
            upload_preset: self.upload_preset.clone().unwrap_or(defaults.upload_preset),
            locale: self.locale.clone().unwrap_or(defaults.locale),
        }
    }
}
