//! Wire types for the video endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One page of `GET /api/video/`.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoPage {
    /// Video records on this page, in server order.
    pub data: Vec<Video>,
    /// Pagination metadata.
    pub paginate: Paginate,
}

/// Pagination block of a [`VideoPage`].
#[derive(Debug, Clone, Deserialize)]
pub struct Paginate {
    /// Total number of pages.
    ///
    /// The service reports `false` (or `null`) instead of a number when the
    /// whole collection fits on one page; that reads as `0`.
    #[serde(deserialize_with = "page_count")]
    pub last_page: u32,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_hits: Option<u64>,
}

/// A single video record.
///
/// Only the identifier is interpreted. Every other field is carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Video {
    /// The video identifier, if present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.youtube_id.as_deref().filter(|id| !id.is_empty())
    }
}

fn page_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Count(u32),
        Flag(bool),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Count(n)) => n,
        Some(Raw::Flag(_)) | None => 0,
    })
}
