//! HTTP client and wire types for the TubeArchivist REST API.

mod client;
mod endpoints;

pub use client::ArchiveClient;
pub(crate) use client::PageFetch;
pub use endpoints::{Paginate, Video, VideoPage};
