//! Identity providers and the wire types exchanged with the auth backend

use serde::{Deserialize, Serialize};

/// Identity provider a sign-in is issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Credentials,
    Github,
    Google,
    Facebook,
    Discord,
    Linkedin,
    Zalo,
}

/// Social providers in the order their buttons are laid out (two rows of three)
pub const SOCIAL_PROVIDERS: [Provider; 6] = [
    Provider::Github,
    Provider::Google,
    Provider::Facebook,
    Provider::Discord,
    Provider::Linkedin,
    Provider::Zalo,
];

impl Provider {
    pub fn id(&self) -> &'static str {
        match self {
            Provider::Credentials => "credentials",
            Provider::Github => "github",
            Provider::Google => "google",
            Provider::Facebook => "facebook",
            Provider::Discord => "discord",
            Provider::Linkedin => "linkedin",
            Provider::Zalo => "zalo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Credentials => "Email",
            Provider::Github => "GitHub",
            Provider::Google => "Google",
            Provider::Facebook => "Facebook",
            Provider::Discord => "Discord",
            Provider::Linkedin => "LinkedIn",
            Provider::Zalo => "Zalo",
        }
    }

    pub fn is_social(&self) -> bool {
        !matches!(self, Provider::Credentials)
    }
}

/// Credential payload shared by registration and sign-in
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of the create-account request
pub type RegisterRequest = Credentials;

/// Body of the account settings update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRequest {
    pub name: String,
    pub image: Option<String>,
}

/// Options of a sign-in call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInOptions {
    #[serde(flatten)]
    pub credentials: Option<Credentials>,
    /// When false the identity layer returns a result instead of redirecting
    pub redirect: bool,
}

impl SignInOptions {
    pub fn credentials(credentials: Credentials, redirect: bool) -> Self {
        Self {
            credentials: Some(credentials),
            redirect,
        }
    }

    pub fn social() -> Self {
        Self {
            credentials: None,
            redirect: false,
        }
    }
}

/// Settled result of a sign-in call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignInResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub url: Option<String>,
}

impl SignInResponse {
    pub fn success() -> Self {
        Self {
            error: None,
            ok: true,
            status: 200,
            url: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ok: false,
            status: 401,
            url: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.ok && self.error.is_none()
    }
}

/// Authentication status reported by the session observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Signed-in account as returned by the session endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// Body of the session endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<User>,
}

impl SessionResponse {
    pub fn status(&self) -> SessionStatus {
        if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_providers_exclude_credentials() {
        assert_eq!(SOCIAL_PROVIDERS.len(), 6);
        assert!(SOCIAL_PROVIDERS.iter().all(Provider::is_social));
        assert!(!Provider::Credentials.is_social());
    }

    #[test]
    fn test_provider_serializes_as_id() {
        let json = serde_json::to_string(&Provider::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
        assert_eq!(Provider::Linkedin.id(), "linkedin");
    }

    #[test]
    fn test_credentials_sign_in_body() {
        let opts = SignInOptions::credentials(
            Credentials {
                name: String::new(),
                email: "a@b.vn".to_string(),
                password: "pw".to_string(),
            },
            false,
        );
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.vn", "password": "pw", "redirect": false})
        );
    }

    #[test]
    fn test_social_sign_in_body() {
        let json = serde_json::to_value(SignInOptions::social()).unwrap();
        assert_eq!(json, serde_json::json!({"redirect": false}));
    }

    #[test]
    fn test_register_body_includes_name() {
        let req = RegisterRequest {
            name: "Lan".to_string(),
            email: "lan@x.vn".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Lan");
        assert_eq!(json["email"], "lan@x.vn");
    }

    #[test]
    fn test_sign_in_response_deserializes_partial() {
        let resp: SignInResponse =
            serde_json::from_str(r#"{"error":"CredentialsSignin","status":401}"#).unwrap();
        assert!(!resp.ok);
        assert!(!resp.is_success());
        assert_eq!(resp.error.as_deref(), Some("CredentialsSignin"));
    }

    #[test]
    fn test_ok_with_error_is_not_success() {
        let resp = SignInResponse {
            ok: true,
            error: Some("x".to_string()),
            ..SignInResponse::default()
        };
        assert!(!resp.is_success());
    }

    #[test]
    fn test_session_status_from_response() {
        let empty: SessionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.status(), SessionStatus::Unauthenticated);

        let signed_in: SessionResponse =
            serde_json::from_str(r#"{"user":{"name":"Mai","email":null,"image":null}}"#).unwrap();
        assert_eq!(signed_in.status(), SessionStatus::Authenticated);
    }
}
