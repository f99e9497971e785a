//! Video listing and deletion on [`ArchiveClient`](crate::ArchiveClient).

mod delete;
mod list;

pub use delete::DeleteOutcome;
