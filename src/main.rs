mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use inbox_config::Config;
use inbox_core::{filter, sample_records, source, ConversationRecord, ListState, Needle, Segment};
use inbox_tui::{App, AppOptions, LogNavigator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = inbox_config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, config.log_file_path().as_deref())?;
    debug!("configuration loaded");

    if let Some(cmd) = &cli.command {
        match cmd {
            Commands::Completions { shell } => {
                cli::print_completions(*shell);
                return Ok(());
            }
            Commands::ShowConfig => {
                println!("{}", serde_yaml::to_string(&config)?);
                return Ok(());
            }
            Commands::Search { query, json } => {
                let list = build_list(&cli, &config)?;
                return print_search(&list, query, *json);
            }
        }
    }

    run_tui(cli, Arc::new(config)).await
}

/// Initial conversation list: `--data` / `data.file` when given, otherwise
/// generated placeholders.
fn build_list(cli: &Cli, config: &Config) -> anyhow::Result<ListState> {
    let records = match cli.data.clone().or_else(|| config.data.file_path()) {
        Some(path) => source::load_records(&path)
            .with_context(|| format!("loading conversations from {}", path.display()))?,
        None => sample_records(cli.samples.unwrap_or(config.data.sample_count)),
    };
    ListState::new(records).context("building conversation list")
}

/// Render segments as plain text with matched runs in brackets.
fn bracket_matches(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched {
                format!("[{}]", s.text)
            } else {
                s.text.to_string()
            }
        })
        .collect()
}

/// One `search --json` row; field names match the data file format.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RowJson<'a> {
    id: &'a str,
    name: &'a str,
    date: &'a str,
    unread_count: u32,
    has_photo: bool,
    segments: Vec<Segment<'a>>,
}

impl<'a> RowJson<'a> {
    fn new(record: &'a ConversationRecord, needle: &Needle) -> Self {
        Self {
            id: &record.id,
            name: &record.name,
            date: &record.date,
            unread_count: record.unread_count,
            has_photo: record.has_photo,
            segments: needle.segments(&record.message),
        }
    }
}

fn print_search(list: &ListState, query: &str, as_json: bool) -> anyhow::Result<()> {
    let needle = Needle::new(query);
    let rows = filter(list.records(), query);

    if as_json {
        let out: Vec<RowJson<'_>> = rows.iter().map(|r| RowJson::new(r, &needle)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching conversations.");
        return Ok(());
    }

    let id_w = rows.iter().map(|r| r.id.len()).max().unwrap_or(2).max(2);
    let name_w = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(4).max(4);

    println!(
        "{:<id_w$}  {:<name_w$}  {:<6}  {:>6}  MESSAGE",
        "ID", "NAME", "DATE", "UNREAD",
    );
    println!("{}", "-".repeat(id_w + name_w + 30));
    for r in &rows {
        println!(
            "{:<id_w$}  {:<name_w$}  {:<6}  {:>6}  {}",
            r.id,
            r.name,
            r.date,
            r.unread_count,
            bracket_matches(&needle.segments(&r.message)),
        );
    }
    println!("\nTotal: {} of {} conversation(s)", rows.len(), list.records().len());
    Ok(())
}

async fn run_tui(cli: Cli, config: Arc<Config>) -> anyhow::Result<()> {
    use ratatui::crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
    };

    let list = build_list(&cli, &config)?;
    let mouse = config.tui.mouse;

    let terminal = ratatui::init();
    if mouse {
        let _ = execute!(std::io::stderr(), EnableMouseCapture);
    }

    let opts = AppOptions {
        initial_query: cli.query,
        ascii: cli.ascii,
        navigator: Box::new(LogNavigator),
    };

    let app = App::new(config, list, opts);
    let result = app.run(terminal).await;

    if mouse {
        let _ = execute!(std::io::stderr(), DisableMouseCapture);
    }
    ratatui::restore();

    result
}

fn init_logging(verbosity: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_ansi(false).with_writer(std::sync::Mutex::new(file)))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}
