mod conversions;
mod models;
mod sample_provider;

pub use models::FolderRecord;
pub use sample_provider::{SampleFolderProvider, DEFAULT_ORG_ID};
