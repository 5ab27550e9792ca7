mod config;
mod telemetry;

use std::process;
use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use folders_domain::{
    DomainResult, FetchFolderRequest, Folder, FolderService, PaginatedFetchRequest,
};
use folders_fixture::SampleFolderProvider;

use crate::config::ServiceConfig;
use crate::telemetry::init_telemetry;

#[tokio::main]
async fn main() {
    let config = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    init_telemetry(&config.log_level);

    let org_id = match Uuid::parse_str(&config.org_id) {
        Ok(id) => id,
        Err(e) => {
            error!("Invalid org_id in configuration: {}", e);
            process::exit(1);
        }
    };

    let provider = match SampleFolderProvider::from_embedded() {
        Ok(provider) => provider,
        Err(e) => {
            error!("Failed to load folder dataset: {}", e);
            process::exit(1);
        }
    };
    let service = FolderService::new(Arc::new(provider));

    info!(org_id = %org_id, "Fetching folders");

    let response = match service.get_all_folders(FetchFolderRequest { org_id }).await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to fetch folders: {}", e);
            process::exit(1);
        }
    };

    print_folders(&response.folders);

    if config.page_limit > 0 {
        if let Err(e) = walk_pages(&service, org_id, config.page_limit).await {
            error!("Failed to walk folder pages: {}", e);
            process::exit(1);
        }
    }
}

fn print_folders(folders: &[Folder]) {
    println!("{} folder(s):", folders.len());
    for folder in folders {
        println!(
            "  {}  {}  org={}",
            folder.id, folder.name, folder.organization_id
        );
    }
}

async fn walk_pages(service: &FolderService, org_id: Uuid, limit: i32) -> DomainResult<()> {
    let mut cursor = String::new();
    let mut page_number = 1;

    loop {
        let page = service
            .get_folders_paginated(PaginatedFetchRequest {
                org_id,
                limit,
                cursor: cursor.clone(),
            })
            .await?;

        println!("page {}:", page_number);
        print_folders(&page.folders);

        if page.next_cursor.is_empty() {
            break;
        }
        cursor = page.next_cursor;
        page_number += 1;
    }

    Ok(())
}
