//! # CLI Layer
//!
//! One possible UI client for the roster library, and the only place that
//! knows about stdout, stderr, stdin prompts and exit codes.
//!
//! - `run()`: parse arguments, set up logging, dispatch (called by `main.rs`)
//! - `init_context()`: resolves the data directory and opens the store
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Rendering lives in `render.rs`; end-to-end behaviour is covered by
//! `tests/cli.rs`.

use super::render::{
    print_messages, render_full_records, render_record_table, render_text_list,
};
use super::setup::{Cli, Commands, FieldArgs};
use clap::Parser;
use roster::api::{ConfigAction, RecordPatch, RosterApi};
use roster::error::{Result, RosterError};
use roster::init::{initialize, resolve_data_dir};
use roster::store::FsBackend;
use roster::validation::RecordInput;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. `debug`).
const LOG_ENV: &str = "ROSTER_LOG";

struct AppContext {
    api: RosterApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::List { search, sort }) => handle_list(&mut ctx, search, sort),
        Some(Commands::Search { term }) => handle_search(&mut ctx, term),
        Some(Commands::View { selectors }) => handle_view(&mut ctx, selectors),
        Some(Commands::Update { selector, fields }) => handle_update(&mut ctx, selector, fields),
        Some(Commands::Delete { selectors, yes }) => handle_delete(&mut ctx, selectors, yes),
        Some(Commands::Export { output }) => handle_export(&mut ctx, output),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

/// `--verbose` forces debug output. Otherwise `ROSTER_LOG` applies, falling
/// back to warnings only.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = initialize(&data_dir)?;
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, fields: FieldArgs) -> Result<()> {
    let input = RecordInput {
        id: fields.id.unwrap_or_default(),
        name: fields.name.unwrap_or_default(),
        role: fields.role.unwrap_or_default(),
        department: fields.department.unwrap_or_default(),
        email: fields.email.unwrap_or_default(),
        phone: fields.phone.unwrap_or_default(),
        hire_date: fields.hire_date.unwrap_or_default(),
        status: fields.status.unwrap_or_default(),
    };
    let result = ctx.api.add_record(&input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, sort: Option<String>) -> Result<()> {
    let result = ctx.api.list_records(search, sort.as_deref())?;
    print!("{}", render_record_table(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_records(&term)?;
    if !result.listed_records.is_empty() {
        print!("{}", render_record_table(&result.listed_records));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_records(&selectors)?;
    print!("{}", render_full_records(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, selector: String, fields: FieldArgs) -> Result<()> {
    let patch = RecordPatch {
        id: fields.id,
        name: fields.name,
        role: fields.role,
        department: fields.department,
        email: fields.email,
        phone: fields.phone,
        hire_date: fields.hire_date,
        status: fields.status,
    };
    let result = ctx.api.update_record(&selector, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if !yes {
        // Resolve first so a bad selector fails before any prompt.
        let targets = ctx.api.view_records(&selectors)?;
        print!("{}", render_record_table(&targets.listed_records));
        if !confirm(&format!(
            "Delete {} record(s)?",
            targets.listed_records.len()
        ))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_records(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, output: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_records(output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.entries())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Asks a yes/no question on stdin. Without a terminal there is nobody to
/// answer, so the caller must pass `--yes` instead.
fn confirm(question: &str) -> Result<bool> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Err(RosterError::Api(
            "Refusing to delete without confirmation; pass --yes".into(),
        ));
    }

    print!("{} [y/N] ", question);
    std::io::stdout().flush().map_err(RosterError::Io)?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer).map_err(RosterError::Io)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
