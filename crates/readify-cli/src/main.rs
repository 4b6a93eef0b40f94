//! Readify CLI - search the catalog, manage the reading list, show stats.
//!
//! A thin front end over `readify-core`: every command is one or two calls
//! into the library store or the catalog client plus table output.

mod handlers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use handlers::library::SortKey;
use readify_core::config::CatalogConfig;
use readify_core::{default_library_path, CatalogClient, LibraryStore, ReadingStatus};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "readify")]
#[command(about = "Readify - personal book tracker", version)]
struct Args {
    /// Path to JSON storage
    #[arg(long, env = "READIFY_DB", global = true)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Alternative catalog volumes endpoint
    #[arg(long, env = "READIFY_CATALOG_URL", global = true, hide = true)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search books on Google Books
    Search {
        /// Title, author or ISBN
        #[arg(long = "q")]
        query: String,

        /// Maximum number of results
        #[arg(long = "max", default_value_t = CatalogConfig::DEFAULT_MAX_RESULTS)]
        max_results: u32,
    },

    /// Add a book to your library by volume ID
    Add {
        #[arg(long = "id")]
        volume_id: String,
    },

    /// List books
    List {
        /// Only show books with this status (planned, reading, completed, dropped)
        #[arg(long)]
        status: Option<ReadingStatus>,

        #[arg(long, value_enum, default_value_t = SortKey::Title)]
        sort: SortKey,

        /// Case-insensitive match against title and authors
        #[arg(long)]
        text: Option<String>,
    },

    /// Update status/rating/notes by ID
    Update {
        #[arg(long)]
        id: String,

        /// planned, reading, completed or dropped
        #[arg(long)]
        status: Option<ReadingStatus>,

        /// 1-5, out-of-range values are clamped
        #[arg(long, allow_negative_numbers = true)]
        rating: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a book by ID
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Show library statistics
    Stats,

    /// Export the library to CSV
    Export {
        #[arg(long = "csv")]
        csv_path: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging; stdout is reserved for command output
    let default_level = if args.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    // One global switch covers both streams; errors go to stderr
    if !std::io::stdout().is_terminal() || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let db_path = args.db.clone().unwrap_or_else(default_library_path);
    debug!("Library path: {}", db_path.display());
    let store = LibraryStore::new(db_path);

    match args.command {
        Command::Search { query, max_results } => {
            let client = catalog_client(args.catalog_url.as_deref())?;
            handlers::catalog::search(&client, &query, max_results).await
        }
        Command::Add { volume_id } => {
            let client = catalog_client(args.catalog_url.as_deref())?;
            handlers::catalog::add(&client, &store, &volume_id).await
        }
        Command::List { status, sort, text } => {
            handlers::library::list(&store, status, sort, text.as_deref())
        }
        Command::Update {
            id,
            status,
            rating,
            notes,
        } => handlers::library::update(&store, &id, status, rating, notes),
        Command::Delete { id } => handlers::library::delete(&store, &id),
        Command::Stats => handlers::stats::show(&store),
        Command::Export { csv_path } => handlers::export::export(&store, &csv_path),
    }
}

fn catalog_client(base_url: Option<&str>) -> Result<CatalogClient> {
    let client = CatalogClient::new()?;
    let client = match base_url {
        Some(url) => client.with_base_url(url),
        None => client,
    };
    debug!("Catalog endpoint: {}", client.base_url());
    Ok(client)
}
