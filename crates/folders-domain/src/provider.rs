use async_trait::async_trait;

use crate::error::DomainResult;
use crate::folder::Folder;

/// Trait for folder data sources
/// Infrastructure layer (e.g., folders-fixture) implements this trait
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FolderProvider: Send + Sync {
    /// Return the full folder collection
    ///
    /// Enumeration order must be stable across calls within one process
    /// lifetime; the query surface relies on it for cursor resumption.
    async fn get_folders(&self) -> DomainResult<Vec<Folder>>;
}
