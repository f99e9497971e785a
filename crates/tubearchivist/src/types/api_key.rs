//! API key type.

use std::fmt;

use reqwest::header::HeaderValue;

use crate::error::{Error, InvalidInputError};

/// A TubeArchivist API token.
///
/// Sent as `Authorization: Token <key>` on every request.
///
/// # Security
///
/// The key is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use tubearchivist::ApiKey;
///
/// let key = ApiKey::new("0123456789abcdef").unwrap();
/// assert!(!format!("{key:?}").contains("0123456789abcdef"));
/// ```
#[derive(Clone)]
pub struct ApiKey {
    header: HeaderValue,
}

impl ApiKey {
    /// Create a new API key.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or cannot be sent in a header.
    pub fn new(key: impl AsRef<str>) -> Result<Self, Error> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(InvalidInputError::ApiKey {
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let mut header =
            HeaderValue::from_str(&format!("Token {key}")).map_err(|_| InvalidInputError::ApiKey {
                reason: "contains characters not allowed in an HTTP header".to_string(),
            })?;
        header.set_sensitive(true);

        Ok(Self { header })
    }

    /// The `Authorization` header value for this key.
    pub(crate) fn authorization(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}
