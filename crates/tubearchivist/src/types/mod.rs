//! Validated input types.

mod api_key;
mod archive_url;

pub use api_key::ApiKey;
pub use archive_url::ArchiveUrl;
