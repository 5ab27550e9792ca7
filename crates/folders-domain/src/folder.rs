use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Folder domain entity
///
/// The `deleted` flag and timestamps are carried through from the data
/// source verbatim; the query surface does not interpret them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub organization_id: Uuid,
    pub deleted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request to fetch every folder owned by an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFolderRequest {
    pub org_id: Uuid,
}

/// Response carrying all folders for the requested organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFolderResponse {
    pub folders: Vec<Folder>,
}

/// Request for one page of an organization's folders
///
/// An empty `cursor` starts the scan from the beginning; any other value
/// must be a token issued by a previous response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedFetchRequest {
    pub org_id: Uuid,
    pub limit: i32,
    pub cursor: String,
}

/// One page of folders plus the token for the next page
///
/// An empty `next_cursor` signals end-of-stream and only end-of-stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedFetchResponse {
    pub folders: Vec<Folder>,
    pub next_cursor: String,
}
