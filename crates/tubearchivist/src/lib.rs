//! tubearchivist - client for the TubeArchivist video API
//!
//! Covers the two video endpoints: the paginated collection and single-video
//! deletion. The [`purge`] module chains them into a delete-everything run.
//!
//! # Example
//!
//! ```no_run
//! use tubearchivist::{ApiKey, ArchiveClient, ArchiveUrl};
//!
//! # async fn example() -> Result<(), tubearchivist::Error> {
//! let url = ArchiveUrl::new("https://yt.example.com")?;
//! let client = ArchiveClient::new(url, ApiKey::new("my-api-token")?)?;
//!
//! for video in client.list_videos().await? {
//!     if let Some(id) = video.id() {
//!         println!("{}", client.delete_video(id).await?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod purge;
pub mod types;
pub mod video;

pub use api::{ArchiveClient, Video};
pub use error::Error;
pub use purge::{Countdown, PurgeConfig, PurgeEvent, PurgeSummary};
pub use types::{ApiKey, ArchiveUrl};
pub use video::DeleteOutcome;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
