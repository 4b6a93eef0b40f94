//! `stats` command.

use super::print_table;
use anyhow::Result;
use readify_core::{compute_stats, LibraryStats, LibraryStore};

pub fn show(store: &LibraryStore) -> Result<()> {
    let stats = compute_stats(&store.load()?);

    print_table(&["metric", "value"], &metric_rows(&stats));

    println!("\nBy status:");
    print_table(&["status", "count"], &status_rows(&stats));

    if !stats.top_authors.is_empty() {
        println!("\nTop authors:");
        let rows: Vec<Vec<String>> = stats
            .top_authors
            .iter()
            .map(|a| vec![a.name.clone(), a.count.to_string()])
            .collect();
        print_table(&["author", "count"], &rows);
    }
    Ok(())
}

fn metric_rows(stats: &LibraryStats) -> Vec<Vec<String>> {
    vec![
        vec!["total".to_string(), stats.total.to_string()],
        vec![
            "pages_completed".to_string(),
            stats.pages_completed.to_string(),
        ],
    ]
}

fn status_rows(stats: &LibraryStats) -> Vec<Vec<String>> {
    stats
        .by_status
        .iter()
        .map(|(status, count)| vec![status.to_string(), count.to_string()])
        .collect()
}
