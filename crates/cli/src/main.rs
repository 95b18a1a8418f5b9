//! Reflect CLI - reflect command

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use reflect_core::Collection;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;
mod render;
mod system_config;
mod util;

/// Reflect - personal knowledge base for vim commands, daily reports and notes
#[derive(Parser)]
#[command(name = "reflect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory (default: from config, then platform data dir)
    #[arg(long, global = true, env = "REFLECT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum CollectionArg {
    #[value(alias = "vim")]
    Vims,
    #[value(alias = "report")]
    Reports,
    #[value(alias = "note")]
    Notes,
}

impl From<CollectionArg> for Collection {
    fn from(arg: CollectionArg) -> Self {
        match arg {
            CollectionArg::Vims => Collection::Vims,
            CollectionArg::Reports => Collection::Reports,
            CollectionArg::Notes => Collection::Notes,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add a record
    #[command(subcommand)]
    Add(AddCommands),
    /// List records, oldest first
    List {
        /// Collection to list
        collection: CollectionArg,
        /// Only show the most recent N records
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show every field of a record
    Show {
        collection: CollectionArg,
        /// Record ID or unique prefix (at least 4 characters)
        id: String,
    },
    /// Modify a record
    #[command(subcommand)]
    Edit(EditCommands),
    /// Remove a record
    Rm {
        collection: CollectionArg,
        /// Record ID or unique prefix (at least 4 characters)
        id: String,
    },
    /// Filter a collection by tag substring
    Search {
        collection: CollectionArg,
        /// Tag substring (omit to show everything)
        #[arg(conflicts_with = "interactive")]
        term: Option<String>,
        /// Read one search term per line from stdin, re-filtering after a quiet period
        #[arg(short, long)]
        interactive: bool,
        /// Quiet period in milliseconds (default: filter.debounce_ms from config)
        #[arg(long, requires = "interactive")]
        delay_ms: Option<u64>,
    },
    /// Show store and configuration status
    Status,
    /// View or edit configuration
    Config {
        /// List all values (the default)
        #[arg(long)]
        list: bool,
        /// Print one value
        #[arg(long, value_name = "KEY")]
        get: Option<String>,
        /// Set one value
        #[arg(long, num_args = 2, value_names = ["KEY", "VALUE"])]
        set: Option<Vec<String>>,
        /// Print the config file path
        #[arg(long)]
        path: bool,
        /// With --path, create the file if missing
        #[arg(long, requires = "path")]
        create: bool,
        /// Print an annotated example config
        #[arg(long)]
        example: bool,
    },
}

#[derive(Subcommand)]
enum AddCommands {
    /// Add a vim command reference
    Vim {
        /// The key sequence or ex command
        command: String,
        /// What it does
        #[arg(short, long, default_value = "")]
        description: String,
        /// Search tag (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },
    /// Add a daily report
    Report {
        /// Report text
        body: String,
        #[arg(long)]
        title: Option<String>,
        /// Report date, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Search tag (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },
    /// Add a note
    Note {
        title: String,
        #[arg(short, long, default_value = "")]
        body: String,
        /// Search tag (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(Subcommand)]
enum EditCommands {
    /// Edit a vim command reference
    Vim {
        id: String,
        #[arg(long)]
        command: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        /// Replace tags (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },
    /// Edit a daily report
    Report {
        id: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        /// Replace tags (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },
    /// Edit a note
    Note {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        body: Option<String>,
        /// Replace tags (repeatable)
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
        /// Remove all tags
        #[arg(long, conflicts_with = "tags")]
        clear_tags: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Config commands never touch the data directory.
    if let Commands::Config { list: _, get, set, path, create, example } = cli.command {
        return run_config(get, set, path, create, example).await;
    }

    let data_dir = util::resolve_data_dir(cli.data_dir)?;
    tracing::debug!("Using data directory {}", data_dir.display());

    match cli.command {
        Commands::Add(add) => match add {
            AddCommands::Vim { command, description, tags } => {
                cmd::add::run_vim(&data_dir, &command, &description, &tags).await
            }
            AddCommands::Report { body, title, date, tags } => {
                cmd::add::run_report(&data_dir, &body, title.as_deref(), date, &tags).await
            }
            AddCommands::Note { title, body, tags } => {
                cmd::add::run_note(&data_dir, &title, &body, &tags).await
            }
        },
        Commands::List { collection, limit } => {
            cmd::list::run(&data_dir, collection.into(), limit).await
        }
        Commands::Show { collection, id } => {
            cmd::show::run(&data_dir, collection.into(), &id).await
        }
        Commands::Edit(edit) => match edit {
            EditCommands::Vim { id, command, description, tags, clear_tags } => {
                let tags = cmd::edit::TagChange::from_args(tags, clear_tags);
                cmd::edit::run_vim(&data_dir, &id, command, description, tags).await
            }
            EditCommands::Report { id, date, title, body, tags, clear_tags } => {
                let tags = cmd::edit::TagChange::from_args(tags, clear_tags);
                cmd::edit::run_report(&data_dir, &id, date, title, body, tags).await
            }
            EditCommands::Note { id, title, body, tags, clear_tags } => {
                let tags = cmd::edit::TagChange::from_args(tags, clear_tags);
                cmd::edit::run_note(&data_dir, &id, title, body, tags).await
            }
        },
        Commands::Rm { collection, id } => {
            cmd::remove::run(&data_dir, collection.into(), &id).await
        }
        Commands::Search { collection, term, interactive, delay_ms } => {
            cmd::search::run(&data_dir, collection.into(), term.as_deref(), interactive, delay_ms)
                .await
        }
        Commands::Status => cmd::status::run(&data_dir).await,
        Commands::Config { .. } => Ok(()),
    }
}

async fn run_config(
    get: Option<String>,
    set: Option<Vec<String>>,
    path: bool,
    create: bool,
    example: bool,
) -> Result<()> {
    if let Some(key) = get {
        cmd::config::run_get(&key).await
    } else if let Some(pair) = set {
        match pair.as_slice() {
            [key, value] => cmd::config::run_set(key, value).await,
            _ => anyhow::bail!("--set takes a key and a value"),
        }
    } else if path {
        cmd::config::run_path(create).await
    } else if example {
        cmd::config::run_example().await
    } else {
        cmd::config::run_list().await
    }
}
