use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use folders_domain::{DomainResult, Folder, FolderProvider};

use crate::models::FolderRecord;

/// Bundled sample dataset, in document order
const SAMPLE_DATA: &str = include_str!("../data/sample.json");

/// Well-known organization exercised by the demo entry point and tests
pub const DEFAULT_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// In-memory FolderProvider backed by the bundled JSON document
///
/// The document is deserialized once at construction; enumeration order is
/// the document's array order and is stable for the process lifetime.
#[derive(Debug, Clone)]
pub struct SampleFolderProvider {
    folders: Vec<Folder>,
}

impl SampleFolderProvider {
    /// Build a provider from the bundled sample document
    pub fn from_embedded() -> anyhow::Result<Self> {
        Self::from_json_str(SAMPLE_DATA)
    }

    /// Build a provider from an arbitrary JSON array of folder records
    pub fn from_json_str(data: &str) -> anyhow::Result<Self> {
        let records: Vec<FolderRecord> =
            serde_json::from_str(data).context("failed to parse folder document")?;

        let folders: Vec<Folder> = records.into_iter().map(Folder::from).collect();

        debug!(count = folders.len(), "Loaded folder dataset");
        Ok(Self { folders })
    }
}

#[async_trait]
impl FolderProvider for SampleFolderProvider {
    async fn get_folders(&self) -> DomainResult<Vec<Folder>> {
        Ok(self.folders.clone())
    }
}
