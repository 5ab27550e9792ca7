use folders_domain::Folder;

use crate::models::FolderRecord;

/// Convert a stored record to the domain Folder
impl From<FolderRecord> for Folder {
    fn from(record: FolderRecord) -> Self {
        Folder {
            id: record.id,
            name: record.name,
            organization_id: record.org_id,
            deleted: record.deleted,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
