//! HTTP client for the TubeArchivist API.

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::error::{InvalidInputError, ProtocolError};
use crate::types::{ApiKey, ArchiveUrl};

use super::endpoints::VideoPage;

/// Result of requesting one page of the video collection.
#[derive(Debug)]
pub(crate) enum PageFetch {
    /// The service answered 200 with a page document.
    Page(VideoPage),
    /// The service answered with any other status.
    Rejected { status: u16, body: String },
}

/// HTTP client bound to one archive instance and API key.
///
/// Requests carry no timeout and are never retried.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    url: ArchiveUrl,
    api_key: ApiKey,
}

impl ArchiveClient {
    /// Create a new client for the given archive.
    pub fn new(url: ArchiveUrl, api_key: ApiKey) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tubearchivist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InvalidInputError::Client {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url,
            api_key,
        })
    }

    /// Returns the archive URL this client is configured for.
    pub fn url(&self) -> &ArchiveUrl {
        &self.url
    }

    /// `GET /api/video/?page={page}`.
    #[instrument(skip(self), fields(archive = %self.url))]
    pub(crate) async fn fetch_page(&self, page: u32) -> Result<PageFetch> {
        let url = self.url.videos_url();
        debug!(%url, "requesting video page");

        let response = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .header(AUTHORIZATION, self.api_key.authorization().clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(%status, len = body.len(), "video page response");

        if status != StatusCode::OK {
            return Ok(PageFetch::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let page_doc =
            serde_json::from_str(&body).map_err(|e| ProtocolError::MalformedPage {
                page,
                reason: e.to_string(),
            })?;

        Ok(PageFetch::Page(page_doc))
    }

    /// `DELETE /api/video/{video_id}`.
    #[instrument(skip(self), fields(archive = %self.url))]
    pub(crate) async fn delete_resource(&self, video_id: &str) -> Result<reqwest::Response> {
        let url = self.url.video_url(video_id);
        debug!(%url, "deleting video");

        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, self.api_key.authorization().clone())
            .send()
            .await?;

        trace!(status = %response.status(), "delete response");
        Ok(response)
    }
}
