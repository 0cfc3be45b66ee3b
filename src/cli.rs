// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "inbox",
    about = "A searchable, swipe-to-delete conversation list for the terminal",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// JSON array of conversations to show instead of the placeholder list
    #[arg(long, short = 'd', value_name = "PATH", env = "INBOX_DATA")]
    pub data: Option<PathBuf>,

    /// Number of placeholder conversations (ignored with --data)
    #[arg(long, value_name = "N")]
    pub samples: Option<usize>,

    /// Start with this search text
    #[arg(long, short = 'q', value_name = "TEXT")]
    pub query: Option<String>,

    /// Use plain ASCII borders and glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Print the effective configuration and exit
    ShowConfig,
    /// Print the conversations whose message contains QUERY, without the TUI.
    /// Matched text is shown in [brackets].
    Search {
        /// Search text (empty lists everything)
        #[arg(default_value = "")]
        query: String,
        /// Output as JSON, with highlight segments
        #[arg(long)]
        json: bool,
    },
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "inbox", &mut std::io::stdout());
}
