//! Image upload widget integration
//!
//! The hosted upload widget calls back with a result object; the uploaded
//! image URL sits at `info.secure_url`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::form::{FieldId, FormState};

/// Shown when neither the form nor the account has an avatar
pub const PLACEHOLDER_AVATAR: &str = "/images/placeholder.jpg";

/// Event name of a finished upload
pub const UPLOAD_SUCCESS_EVENT: &str = "success";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Upload widget script not loaded")]
    Unavailable,

    #[error("Invalid upload widget options: {0}")]
    Options(String),

    #[error("Upload widget failed to open: {0}")]
    Open(String),
}

/// Options passed to the upload widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadWidgetOptions {
    pub cloud_name: String,
    pub upload_preset: String,
    pub max_files: u32,
}

impl UploadWidgetOptions {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            max_files: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadInfo {
    #[serde(default)]
    pub secure_url: Option<String>,
}

/// Result object delivered to the widget callback
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub info: Option<UploadInfo>,
}

impl UploadResult {
    pub fn is_success(&self) -> bool {
        self.event.as_deref() == Some(UPLOAD_SUCCESS_EVENT)
    }

    pub fn secure_url(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.secure_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Write the uploaded URL into the form's `image` field, marking it valid.
///
/// Returns false when the result carries no URL; the form is left unchanged.
pub fn apply_upload(form: &mut FormState, result: &UploadResult) -> bool {
    match result.secure_url() {
        Some(url) => {
            form.set_value_validated(FieldId::Image, url);
            true
        }
        None => false,
    }
}

/// Avatar source: the form value, then the stored account image, then the placeholder
pub fn avatar_src(form_image: &str, account_image: Option<&str>) -> String {
    if !form_image.is_empty() {
        return form_image.to_string();
    }
    account_image
        .filter(|image| !image.is_empty())
        .unwrap_or(PLACEHOLDER_AVATAR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UploadResult {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_secure_url_from_nested_info() {
        let result = parse(
            r#"{"event":"success","info":{"secure_url":"https://res.cloudinary.com/x/a.jpg","bytes":10}}"#,
        );
        assert_eq!(
            result.secure_url(),
            Some("https://res.cloudinary.com/x/a.jpg")
        );
    }

    #[test]
    fn test_only_success_event_counts() {
        assert!(parse(r#"{"event":"success","info":{}}"#).is_success());
        assert!(!parse(r#"{"event":"queues-end"}"#).is_success());
        assert!(!UploadResult::default().is_success());
    }

    #[test]
    fn test_missing_info_yields_none() {
        assert_eq!(parse(r#"{"event":"close"}"#).secure_url(), None);
        assert_eq!(parse(r#"{"info":{}}"#).secure_url(), None);
    }

    #[test]
    fn test_apply_upload_updates_avatar_over_prior_value() {
        let mut form = FormState::with_defaults([(FieldId::Image, "https://old/a.jpg")]);
        let result = parse(r#"{"info":{"secure_url":"https://new/b.jpg"}}"#);

        assert!(apply_upload(&mut form, &result));
        assert_eq!(
            avatar_src(form.value(FieldId::Image), Some("https://stored/c.jpg")),
            "https://new/b.jpg"
        );
        assert!(!form.has_error(FieldId::Image));
    }

    #[test]
    fn test_apply_upload_without_url_keeps_form() {
        let mut form = FormState::with_defaults([(FieldId::Image, "https://old/a.jpg")]);
        assert!(!apply_upload(&mut form, &UploadResult::default()));
        assert_eq!(form.value(FieldId::Image), "https://old/a.jpg");
    }

    #[test]
    fn test_avatar_fallbacks() {
        assert_eq!(avatar_src("", Some("https://stored/c.jpg")), "https://stored/c.jpg");
        assert_eq!(avatar_src("", None), PLACEHOLDER_AVATAR);
        assert_eq!(avatar_src("", Some("")), PLACEHOLDER_AVATAR);
    }

    #[test]
    fn test_widget_options_serialize_camel_case() {
        let json = serde_json::to_value(UploadWidgetOptions::new("gunita", "lz6eovct")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cloudName": "gunita", "uploadPreset": "lz6eovct", "maxFiles": 1})
        );
    }
}
