//! Archive base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Path of the video collection, relative to the archive base URL.
const VIDEO_COLLECTION: &str = "api/video/";

/// A validated TubeArchivist base URL.
///
/// The URL must be absolute, use HTTP or HTTPS, and have a host. A trailing
/// slash is dropped; any path prefix (for an instance mounted behind a
/// reverse proxy) is kept.
///
/// # Example
///
/// ```
/// use tubearchivist::ArchiveUrl;
///
/// let url = ArchiveUrl::new("https://yt.example.com/").unwrap();
/// assert_eq!(url.videos_url(), "https://yt.example.com/api/video/");
/// assert_eq!(url.video_url("dQw4w9WgXcQ"), "https://yt.example.com/api/video/dQw4w9WgXcQ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArchiveUrl(Url);

impl ArchiveUrl {
    /// Create a new archive URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ArchiveUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut normalized = url;
        let path = normalized.path().trim_end_matches('/').to_string();
        normalized.set_path(&path);
        normalized.set_query(None);
        normalized.set_fragment(None);

        Ok(Self(normalized))
    }

    /// URL of the paginated video collection.
    pub fn videos_url(&self) -> String {
        format!("{}/{}", self.base(), VIDEO_COLLECTION)
    }

    /// URL of a single video resource.
    pub fn video_url(&self, video_id: &str) -> String {
        format!("{}/{}{}", self.base(), VIDEO_COLLECTION, video_id)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    // `Url` always renders a root path as "/".
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ArchiveUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::ArchiveUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ArchiveUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ArchiveUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())
    }
}

impl FromStr for ArchiveUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ArchiveUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
