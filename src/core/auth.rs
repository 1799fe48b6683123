//! Login credentials, the session header and the login service's replies.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::check::{self, patterns};
use super::error::ValidationError;

pub const DEFAULT_MESSAGE_LANGUAGE: &str = "en_US";
pub const MAX_LENGTH_AUTH_TOKEN: usize = 64;

/// Login data for the authentication service.
///
/// `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    delis_id: String,
    password: String,
    message_language: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("delis_id", &self.delis_id)
            .field("password", &"[REDACTED]")
            .field("message_language", &self.message_language)
            .finish()
    }
}

impl Credentials {
    /// Credentials with the default message language `en_US`.
    ///
    /// ```
    /// use paket::core::Credentials;
    ///
    /// assert!(Credentials::new("12345678", "secret").is_ok());
    /// assert!(Credentials::new("123", "secret").is_err());
    /// ```
    pub fn new(
        delis_id: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_message_language(delis_id, password, DEFAULT_MESSAGE_LANGUAGE)
    }

    pub fn with_message_language(
        delis_id: impl Into<String>,
        password: impl Into<String>,
        message_language: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            delis_id: check::matches("delisId", delis_id.into(), &patterns::DELIS_ID)?,
            password: password.into(),
            message_language: check::matches(
                "messageLanguage",
                message_language.into(),
                &patterns::MESSAGE_LANGUAGE,
            )?,
        })
    }

    pub fn delis_id(&self) -> &str {
        &self.delis_id
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn message_language(&self) -> &str {
        &self.message_language
    }
}

/// Session header sent with every shipment and tracking call.
///
/// `Debug` redacts the token.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    delis_id: String,
    auth_token: String,
    message_language: String,
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("delis_id", &self.delis_id)
            .field("auth_token", &"[REDACTED]")
            .field("message_language", &self.message_language)
            .finish()
    }
}

impl Authentication {
    pub fn new(
        delis_id: impl Into<String>,
        auth_token: impl Into<String>,
        message_language: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            delis_id: check::matches("delisId", delis_id.into(), &patterns::DELIS_ID)?,
            auth_token: check::max_chars("authToken", auth_token.into(), MAX_LENGTH_AUTH_TOKEN)?,
            message_language: check::matches(
                "messageLanguage",
                message_language.into(),
                &patterns::MESSAGE_LANGUAGE,
            )?,
        })
    }

    /// Session header for a successful login.
    ///
    /// The login reply is re-validated, so a token the service returned in
    /// an unexpected shape is reported here rather than on the next call.
    pub fn from_login(
        login: &Login,
        message_language: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            login.delis_id.clone().unwrap_or_default(),
            login.auth_token.clone().unwrap_or_default(),
            message_language,
        )
    }

    pub fn delis_id(&self) -> &str {
        &self.delis_id
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn message_language(&self) -> &str {
        &self.message_language
    }
}

/// Successful reply of the login service.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    pub(crate) delis_id: Option<String>,
    pub(crate) customer_uid: Option<String>,
    pub(crate) auth_token: Option<String>,
    pub(crate) depot: Option<String>,
    pub(crate) auth_token_expires: Option<String>,
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("delis_id", &self.delis_id)
            .field("customer_uid", &self.customer_uid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("depot", &self.depot)
            .field("auth_token_expires", &self.auth_token_expires)
            .finish()
    }
}

impl Login {
    pub fn delis_id(&self) -> Option<&str> {
        self.delis_id.as_deref()
    }

    pub fn customer_uid(&self) -> Option<&str> {
        self.customer_uid.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Home depot of the customer.
    pub fn depot(&self) -> Option<&str> {
        self.depot.as_deref()
    }

    /// Expiry timestamp as sent by the service (ISO 8601 text).
    pub fn auth_token_expires(&self) -> Option<&str> {
        self.auth_token_expires.as_deref()
    }
}

/// Fault raised by the carrier when a login or session token is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationFault {
    error_code: String,
    error_message: String,
}

impl AuthenticationFault {
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }

    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl fmt::Display for AuthenticationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication fault {}: {}", self.error_code, self.error_message)
    }
}
