// Rust guideline compliant 2026-10-19

//! Wordbook CLI Application
//!
//! Command-line interface for the Wordbook vocabulary manager.

use clap::Parser;
use std::path::{Path, PathBuf};
use wordbook_app::{DisplayMode, Workspace};
use wordbook_cli::commands;
use wordbook_cli::commands::list::ListOptions;
use wordbook_cli::logging::{init_tracing, resolve_log_level};
use wordbook_cli::terminal::print_error;
use wordbook_cli::{create_formatter, should_use_color, OutputFormatter};
use wordbook_core::{CsvColumns, EntryId, Subject};

#[derive(Parser, Debug)]
#[command(
    name = "wb",
    version,
    about = "Wordbook: vocabulary flashcards on the command line",
    long_about = "Wordbook keeps a personal vocabulary list in a local JSONL store, lets you filter, search and shuffle it, exchange it as CSV, and drill it with multiple-choice quizzes.",
    after_help = "Examples:\n  wb init\n  wb add run \"to move fast\" --subject i-verb\n  wb list --filter noun,idiom --search ru\n  wb toggle 3\n  wb export --columns basic\n  wb quiz\n"
)]
struct Cli {
    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Wordbook workspace
    Init,

    /// Add a new entry
    Add {
        /// The word or phrase
        text: String,

        /// Its meaning
        meaning: String,

        /// Part of speech (noun, t-verb, i-verb, adjective, adverb, idiom)
        #[arg(long, short, value_parser = parse_subject, default_value = "noun")]
        subject: Subject,
    },

    /// Edit an entry
    Edit {
        /// Entry ID
        id: EntryId,

        /// New word
        #[arg(long)]
        text: Option<String>,

        /// New meaning
        #[arg(long)]
        meaning: Option<String>,

        /// New part of speech
        #[arg(long, value_parser = parse_subject)]
        subject: Option<Subject>,
    },

    /// Mark an entry as learned, or unmark it
    Toggle {
        /// Entry ID
        id: EntryId,
    },

    /// Remove an entry
    Remove {
        /// Entry ID
        id: EntryId,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Remove every checked entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// List entries
    List {
        /// Keep only these subjects
        #[arg(long, value_delimiter = ',', value_parser = parse_subject)]
        filter: Vec<Subject>,

        /// Search word and meaning
        #[arg(long)]
        search: Option<String>,

        /// Sort Z to A
        #[arg(long, conflicts_with = "shuffle")]
        desc: bool,

        /// Shuffle unchecked entries
        #[arg(long)]
        shuffle: bool,

        /// Columns to show (both, word, meaning)
        #[arg(long, value_parser = parse_display_mode)]
        display: Option<DisplayMode>,
    },

    /// Export entries to CSV
    Export {
        /// Output file (defaults to wordbook-YYYY-MM-DD.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Column set (full, basic)
        #[arg(long, value_parser = parse_columns)]
        columns: Option<CsvColumns>,
    },

    /// Import entries from CSV
    Import {
        /// Path to the CSV file
        path: PathBuf,
    },

    /// Start a multiple-choice quiz
    Quiz {
        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_subject(value: &str) -> Result<Subject, String> {
    value.parse().map_err(|e: wordbook_core::Error| e.to_string())
}

fn parse_display_mode(value: &str) -> Result<DisplayMode, String> {
    value.parse()
}

fn parse_columns(value: &str) -> Result<CsvColumns, String> {
    match value.trim().to_lowercase().as_str() {
        "full" => Ok(CsvColumns::Full),
        "basic" => Ok(CsvColumns::Basic),
        other => Err(format!("Invalid column set: {}", other)),
    }
}

/// Picks the output format: flags first, then workspace config, then table.
fn resolve_format(cli: &Cli) -> &'static str {
    match cli.format {
        Some(OutputFormat::Json) => return "json",
        Some(OutputFormat::Table) => return "table",
        Some(OutputFormat::Plain) => return "plain",
        None => {}
    }
    if cli.json {
        return "json";
    }

    let configured = Workspace::discover(cli.dir.as_deref())
        .and_then(|workspace| workspace.load_config())
        .map(|config| config.output_format);
    match configured {
        Ok(wordbook_core::OutputFormat::Json) => "json",
        Ok(wordbook_core::OutputFormat::Plain) => "plain",
        _ => "table",
    }
}

fn main() {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let level = match resolve_log_level(cli.log_level.as_deref()) {
        Ok(level) => level,
        Err(err) => {
            print_error(&err.to_string(), use_color);
            std::process::exit(2);
        }
    };
    init_tracing(level);

    let format = resolve_format(&cli);
    let formatter = create_formatter(format, use_color);

    if let Err(err) = dispatch(cli.command, cli.dir.as_deref(), formatter.as_ref()) {
        if format == "json" {
            println!("{}", formatter.format_error(&err));
        } else {
            print_error(&err.to_string(), use_color);
        }
        std::process::exit(1);
    }
}

fn dispatch(
    command: Option<Commands>,
    root: Option<&Path>,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        Some(Commands::Init) => {
            commands::init::execute(root, formatter)?;
        }
        Some(Commands::Add {
            text,
            meaning,
            subject,
        }) => {
            commands::add::execute(root, &text, &meaning, subject, formatter)?;
        }
        Some(Commands::Edit {
            id,
            text,
            meaning,
            subject,
        }) => {
            commands::edit::execute(root, id, text, meaning, subject, formatter)?;
        }
        Some(Commands::Toggle { id }) => {
            commands::toggle::execute(root, id, formatter)?;
        }
        Some(Commands::Remove { id, yes }) => {
            commands::remove::execute(root, id, yes, formatter)?;
        }
        Some(Commands::Clear { yes }) => {
            commands::clear::execute(root, yes, formatter)?;
        }
        Some(Commands::List {
            filter,
            search,
            desc,
            shuffle,
            display,
        }) => {
            let options = ListOptions {
                filters: filter,
                search,
                descending: desc,
                shuffle,
                display,
            };
            commands::list::execute(root, &options, formatter)?;
        }
        Some(Commands::Export { output, columns }) => {
            commands::export::execute(root, output, columns, formatter)?;
        }
        Some(Commands::Import { path }) => {
            commands::import::execute(root, &path, formatter)?;
        }
        Some(Commands::Quiz { seed }) => {
            commands::quiz::execute(root, seed, formatter)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
