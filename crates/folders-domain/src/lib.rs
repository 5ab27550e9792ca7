pub mod cursor;
pub mod error;
pub mod folder;
pub mod folder_service;
pub mod provider;

pub use cursor::{decode_cursor, encode_cursor};
pub use error::{DomainError, DomainResult};
pub use folder::*;
pub use folder_service::{FolderService, MAX_PAGE_LIMIT};
pub use provider::FolderProvider;
