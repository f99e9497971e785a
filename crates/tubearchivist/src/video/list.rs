//! Paginated video listing.

use tracing::{debug, instrument, warn};

use crate::Result;
use crate::api::{ArchiveClient, PageFetch, Video};

impl ArchiveClient {
    /// Fetch every video in the archive, in page order.
    ///
    /// Pages are requested from 1 until the current page reaches the
    /// `last_page` the server reports. There is no upper bound of its own.
    ///
    /// A page answered with a status other than 200 stops the walk: the
    /// records gathered so far are returned as `Ok`, and a warning is logged.
    /// Callers get no other signal that the list was cut short.
    ///
    /// # Errors
    ///
    /// Transport failures and unreadable page bodies.
    #[instrument(skip(self), fields(archive = %self.url()))]
    pub async fn list_videos(&self) -> Result<Vec<Video>> {
        let mut videos = Vec::new();
        let mut page = 1;

        loop {
            let doc = match self.fetch_page(page).await? {
                PageFetch::Page(doc) => doc,
                PageFetch::Rejected { status, body } => {
                    warn!(
                        status,
                        page,
                        "Failed to retrieve videos. Status code: {status}, Response: {body}, Page: {page}"
                    );
                    break;
                }
            };

            debug!(
                page,
                last_page = doc.paginate.last_page,
                total_hits = ?doc.paginate.total_hits,
                count = doc.data.len(),
                "fetched video page"
            );
            videos.extend(doc.data);

            if page >= doc.paginate.last_page {
                break;
            }
            page += 1;
        }

        Ok(videos)
    }
}
