use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::cursor::{decode_cursor, encode_cursor};
use crate::error::{DomainError, DomainResult};
use crate::folder::{
    FetchFolderRequest, FetchFolderResponse, Folder, PaginatedFetchRequest,
    PaginatedFetchResponse,
};
use crate::provider::FolderProvider;

/// Hard ceiling on the page size a client may request
pub const MAX_PAGE_LIMIT: i32 = 100;

/// Domain service for the folder query surface
pub struct FolderService {
    provider: Arc<dyn FolderProvider>,
}

impl FolderService {
    pub fn new(provider: Arc<dyn FolderProvider>) -> Self {
        Self { provider }
    }

    /// Fetch every folder owned by an organization
    pub async fn get_all_folders(
        &self,
        request: FetchFolderRequest,
    ) -> DomainResult<FetchFolderResponse> {
        if request.org_id.is_nil() {
            return Err(DomainError::InvalidOrganizationId(
                "Organization ID cannot be nil".to_string(),
            ));
        }

        debug!(org_id = %request.org_id, "Fetching all folders");

        let folders = self.fetch_folders_by_org_id(request.org_id).await?;

        info!(org_id = %request.org_id, count = folders.len(), "Fetched folders");
        Ok(FetchFolderResponse { folders })
    }

    /// Fetch one page of an organization's folders
    ///
    /// Resume a scan by passing back the `next_cursor` of the previous
    /// response; an empty cursor in the response means the scan is complete.
    pub async fn get_folders_paginated(
        &self,
        request: PaginatedFetchRequest,
    ) -> DomainResult<PaginatedFetchResponse> {
        if request.org_id.is_nil() {
            return Err(DomainError::InvalidOrganizationId(
                "Organization ID cannot be nil".to_string(),
            ));
        }

        if request.limit <= 0 {
            return Err(DomainError::InvalidLimit(
                "limit must be positive".to_string(),
            ));
        }

        if request.limit > MAX_PAGE_LIMIT {
            return Err(DomainError::InvalidLimit(format!(
                "limit exceeds {MAX_PAGE_LIMIT}"
            )));
        }

        let start = decode_cursor(&request.cursor)?;

        debug!(org_id = %request.org_id, limit = request.limit, start, "Fetching folder page");

        let folders = self.fetch_folders_by_org_id(request.org_id).await?;

        // A cursor issued against an earlier snapshot can point past the end
        // of the collection; treat it as an exhausted scan, not a fault.
        let start = start.min(folders.len());
        let end = (start + request.limit as usize).min(folders.len());

        let next_cursor = if end < folders.len() {
            encode_cursor(end)
        } else {
            String::new()
        };

        let page = folders[start..end].to_vec();

        info!(
            org_id = %request.org_id,
            count = page.len(),
            more = !next_cursor.is_empty(),
            "Fetched folder page"
        );
        Ok(PaginatedFetchResponse {
            folders: page,
            next_cursor,
        })
    }

    /// Single order-preserving pass over the provider's collection
    async fn fetch_folders_by_org_id(&self, org_id: Uuid) -> DomainResult<Vec<Folder>> {
        let folders = self.provider.get_folders().await?;

        Ok(folders
            .into_iter()
            .filter(|folder| folder.organization_id == org_id)
            .collect())
    }
}
