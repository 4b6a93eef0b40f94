//! Catalog commands: search and add-by-id.
//!
//! Catalog failures are reported to the user and the command ends normally;
//! only storage failures propagate.

use super::{error, info, print_table, warn};
use anyhow::Result;
use readify_core::{CatalogClient, CatalogVolume, LibraryStore, ReadifyError};
use tracing::debug;

pub async fn search(client: &CatalogClient, query: &str, max_results: u32) -> Result<()> {
    let results = match client.search(query, max_results).await {
        Ok(results) => results,
        Err(e) => return report_catalog_error(e),
    };

    if results.is_empty() {
        warn("No results.");
        return Ok(());
    }

    print_table(
        &["#", "volume_id", "title", "authors", "year"],
        &search_rows(&results),
    );
    Ok(())
}

pub async fn add(client: &CatalogClient, store: &LibraryStore, volume_id: &str) -> Result<()> {
    let volume = match client.get_volume(volume_id).await {
        Ok(volume) => volume,
        Err(e) => return report_catalog_error(e),
    };

    let book = store.upsert_book(volume.into())?;
    info(&format!("Added: {}", book.title));
    Ok(())
}

fn search_rows(results: &[CatalogVolume]) -> Vec<Vec<String>> {
    results
        .iter()
        .enumerate()
        .map(|(i, volume)| {
            vec![
                (i + 1).to_string(),
                volume.id.clone(),
                volume.title.clone(),
                volume.authors.join(", "),
                volume.year().to_string(),
            ]
        })
        .collect()
}

/// Show catalog and input problems without failing the process.
fn report_catalog_error(err: ReadifyError) -> Result<()> {
    if err.is_catalog() {
        debug!("Catalog failure: {:?}", err);
        error(&format!("API error: {}", err));
        Ok(())
    } else if let ReadifyError::Validation { message, .. } = &err {
        warn(message);
        Ok(())
    } else {
        Err(err.into())
    }
}
