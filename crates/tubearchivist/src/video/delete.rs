//! Single-video deletion.

use std::fmt;

use reqwest::StatusCode;
use tracing::instrument;

use crate::Result;
use crate::api::ArchiveClient;

/// How the service answered a deletion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// 204: the video is gone.
    Deleted { video_id: String },
    /// 404: the service does not know the video.
    NotFound { video_id: String },
    /// Any other status, with the raw response body.
    Failed {
        video_id: String,
        status: u16,
        body: String,
    },
}

impl DeleteOutcome {
    /// Classify a deletion response by status code alone.
    pub fn from_status(video_id: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let video_id = video_id.into();
        match status {
            204 => Self::Deleted { video_id },
            404 => Self::NotFound { video_id },
            _ => Self::Failed {
                video_id,
                status,
                body: body.into(),
            },
        }
    }

    pub fn video_id(&self) -> &str {
        match self {
            Self::Deleted { video_id }
            | Self::NotFound { video_id }
            | Self::Failed { video_id, .. } => video_id,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deleted { video_id } => {
                write!(f, "Video with ID {video_id} deleted successfully.")
            }
            Self::NotFound { video_id } => write!(f, "Video with ID {video_id} not found."),
            Self::Failed {
                video_id,
                status,
                body,
            } => write!(
                f,
                "Failed to delete video with ID {video_id}. Status code: {status}, Response: {body}"
            ),
        }
    }
}

impl ArchiveClient {
    /// Delete one video.
    ///
    /// Issues exactly one `DELETE` and never retries. Any HTTP status is a
    /// [`DeleteOutcome`]; only transport failures are errors.
    #[instrument(skip(self), fields(archive = %self.url()))]
    pub async fn delete_video(&self, video_id: &str) -> Result<DeleteOutcome> {
        let response = self.delete_resource(video_id).await?;
        let status = response.status();

        let body = match status {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => String::new(),
            _ => response.text().await?,
        };

        Ok(DeleteOutcome::from_status(video_id, status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_status() {
        assert_eq!(
            DeleteOutcome::from_status("abc", 204, ""),
            DeleteOutcome::Deleted {
                video_id: "abc".to_string()
            }
        );
        assert_eq!(
            DeleteOutcome::from_status("abc", 404, "ignored"),
            DeleteOutcome::NotFound {
                video_id: "abc".to_string()
            }
        );
        assert!(DeleteOutcome::from_status("abc", 200, "").is_failure());
        assert!(DeleteOutcome::from_status("abc", 403, "").is_failure());
    }

    #[test]
    fn outcome_text() {
        assert_eq!(
            DeleteOutcome::from_status("abc", 204, "").to_string(),
            "Video with ID abc deleted successfully."
        );
        assert_eq!(
            DeleteOutcome::from_status("abc", 404, "").to_string(),
            "Video with ID abc not found."
        );
        assert_eq!(
            DeleteOutcome::from_status("abc", 500, "{\"detail\":\"boom\"}").to_string(),
            "Failed to delete video with ID abc. Status code: 500, Response: {\"detail\":\"boom\"}"
        );
    }

    #[test]
    fn video_id_accessor() {
        let outcome = DeleteOutcome::from_status("xyz", 502, "bad gateway");
        assert_eq!(outcome.video_id(), "xyz");
    }
}
