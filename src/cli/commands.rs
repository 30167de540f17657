//! # CLI Command Implementations
//!
//! `serve` boots the HTTP server on a tokio runtime. The client commands are
//! thin: they drive the filter composer and browsing state exactly the way
//! the interactive frontend does, issue the request, and print the envelope
//! outcome. Create/update/delete failures surface as errors; search failures
//! leave previously printed state alone.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::api::{CatalogServer, Envelope, ServerConfig};
use crate::catalog::{Book, BookDraft, BookStore, MemoryStore};
use crate::client::{ApiClient, CatalogState, FilterForm};
use crate::query::Page;

use super::args::{BookArgs, Cli, Command, EditArgs, SearchArgs};
use super::errors::{CliError, CliResult};

/// Entry point: parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();

    match cli.command {
        Command::Serve { config, seed } => serve(&config, seed.as_deref()),
        Command::Search(args) => search(args),
        Command::Add(args) => add(args),
        Command::Edit(args) => edit(args),
        Command::Delete { server, id } => delete(&server, id),
        Command::Show { server, id } => show(&server, id),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load the server config, falling back to defaults when the file is absent
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(ServerConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

/// Boot the catalog server
pub fn serve(config_path: &Path, seed: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;

    let store = Arc::new(MemoryStore::new());
    if let Some(seed_path) = seed {
        let count = seed_store(store.as_ref(), seed_path)?;
        tracing::info!(count, "seeded catalog");
    }

    let server = CatalogServer::new(store, config);

    let rt = runtime()?;
    rt.block_on(server.start())?;
    Ok(())
}

/// Load books from a JSON array file, validating each entry
fn seed_store(store: &MemoryStore, path: &Path) -> CliResult<usize> {
    let raw =
        fs::read_to_string(path).map_err(|e| CliError::Seed(format!("{}: {}", path.display(), e)))?;
    let entries: Vec<Value> = serde_json::from_str(&raw)
        .map_err(|e| CliError::Seed(format!("{}: {}", path.display(), e)))?;

    for (index, entry) in entries.iter().enumerate() {
        let draft = BookDraft::from_json(entry)
            .map_err(|e| CliError::Seed(format!("entry {}: {}", index, e)))?;
        store
            .insert(draft)
            .map_err(|e| CliError::Seed(e.to_string()))?;
    }

    Ok(entries.len())
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Runtime(format!("failed to create tokio runtime: {}", e)))
}

/// Run a filtered search and print one page of results
fn search(args: SearchArgs) -> CliResult<()> {
    let mut state = CatalogState::new();
    {
        let form = state.form_mut();
        form.title = args.title.unwrap_or_default();
        form.author = args.author.unwrap_or_default();
        form.description = args.description.unwrap_or_default();
        if let Some(op) = &args.year_op {
            form.operator = op.parse().map_err(CliError::InvalidArgument)?;
        }
        if let Some(from) = args.year_from {
            form.year_start = from;
        }
        if let Some(to) = args.year_to {
            form.year_end = to;
        }
    }

    let query = state.apply_filter();
    let client = ApiClient::new(&args.server);

    let rt = runtime()?;
    rt.block_on(async {
        let envelope = client.search(state.shown_page(), &query).await?;
        ingest(&mut state, envelope)?;

        if args.page > 1 {
            // Requested page is clamped against the server-reported bounds,
            // then fetched like any other page change.
            state.goto_page(args.page);
            if state.shown_page() > 1 {
                let envelope = client.search(state.shown_page(), &query).await?;
                ingest(&mut state, envelope)?;
            }
        }
        Ok::<(), CliError>(())
    })?;

    print_results(&state);
    Ok(())
}

/// Apply a successful search response to the state
fn ingest(state: &mut CatalogState, envelope: Envelope<Page>) -> CliResult<()> {
    if !envelope.success {
        return Err(CliError::OperationFailed(envelope.message));
    }
    tracing::debug!(message = %envelope.message, "search response");

    let page = envelope
        .data
        .ok_or_else(|| CliError::OperationFailed("server returned success without data".to_string()))?;
    state.apply_response(page);
    Ok(())
}

fn print_results(state: &CatalogState) {
    if state.results().is_empty() {
        println!("No book found");
        return;
    }

    println!("Page {} of {}", state.shown_page(), state.last_page());
    for (index, book) in state.results().iter().enumerate() {
        let description = book.description.as_deref().unwrap_or("");
        println!(
            "{:>4}  #{:<6} {}  by {}  ({})  {}",
            state.row_number(index),
            book.id,
            book.title,
            book.author,
            book.publish_year,
            description
        );
    }
}

fn add(args: BookArgs) -> CliResult<()> {
    let form = book_form(&args)?;
    let client = ApiClient::new(&args.server);

    let rt = runtime()?;
    let envelope = rt.block_on(client.create(&form.book_payload()))?;
    report(envelope)
}

fn edit(args: EditArgs) -> CliResult<()> {
    let form = book_form(&args.book)?;
    let client = ApiClient::new(&args.book.server);

    let rt = runtime()?;
    let envelope = rt.block_on(client.update(args.id, &form.book_payload()))?;
    report(envelope)
}

fn delete(server: &str, id: u64) -> CliResult<()> {
    let client = ApiClient::new(server);

    let rt = runtime()?;
    let envelope = rt.block_on(client.delete(id))?;
    report(envelope)
}

fn show(server: &str, id: u64) -> CliResult<()> {
    let client = ApiClient::new(server);

    let rt = runtime()?;
    let envelope = rt.block_on(client.fetch(id))?;
    report(envelope)
}

/// Build the submission form, applying the client-side gating the
/// interactive frontend enforces before enabling Add/Edit
fn book_form(args: &BookArgs) -> CliResult<FilterForm> {
    let mut form = FilterForm::new();
    form.title = args.title.clone();
    form.author = args.author.clone();
    form.year_start = args.year;
    form.description = args.description.clone().unwrap_or_default();

    if !form.can_submit() {
        return Err(CliError::InvalidArgument(
            "title and author must not be empty".to_string(),
        ));
    }
    Ok(form)
}

/// Print a mutation outcome; a failure envelope becomes an error
fn report(envelope: Envelope<Book>) -> CliResult<()> {
    if !envelope.success {
        return Err(CliError::OperationFailed(envelope.message));
    }

    println!("{}", envelope.message);
    if let Some(book) = envelope.data {
        let description = book.description.as_deref().unwrap_or("");
        println!(
            "  #{}  {}  by {}  ({})  {}",
            book.id, book.title, book.author, book.publish_year, description
        );
    }
    Ok(())
}
