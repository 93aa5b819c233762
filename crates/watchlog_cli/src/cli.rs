//! Command-line surface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use watchlog_core::{Category, ReadingKind, RecordId};

/// Track anime, seasonal watch progress and reading lists in CSV files.
#[derive(Parser)]
#[command(name = "watchlog")]
#[command(author, version = watchlog_core::core_version(), about, long_about = None)]
pub struct Cli {
    /// Directory holding the three CSV files
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// TOML file overriding data file locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write rolling log files here; file logging is off without it
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print rows as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the catalog, optionally filtered by name and genre
    #[command(alias = "ls")]
    List {
        /// Keep rows with this name (repeatable)
        #[arg(long = "name")]
        names: Vec<String>,
        /// Keep rows with this genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,
    },

    /// Add a catalog entry
    Add(CatalogArgs),

    /// Edit the first catalog entry with exactly this name
    Edit {
        /// Current name of the entry
        current_name: String,
        #[command(flatten)]
        fields: CatalogEditArgs,
    },

    /// Remove every catalog entry with exactly this name
    #[command(alias = "rm")]
    Remove { name: String },

    /// Seasonal watch-list
    Season {
        #[command(subcommand)]
        command: SeasonCommands,
    },

    /// Manga and book reading list
    Reading {
        #[command(subcommand)]
        command: ReadingCommands,
    },
}

#[derive(Args)]
pub struct CatalogArgs {
    #[arg(long)]
    pub name: String,
    /// Explicit List id (defaults to the next free one)
    #[arg(long, value_parser = clap::value_parser!(RecordId).range(1..))]
    pub id: Option<RecordId>,
    /// Rating, e.g. 7.5
    #[arg(long, default_value = "")]
    pub note: String,
    /// anime|manga|movie|cartoon|other
    #[arg(long, default_value = "anime")]
    pub category: Category,
    #[arg(long, default_value = "")]
    pub genre: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

/// Fields left out keep their current value.
#[derive(Args)]
pub struct CatalogEditArgs {
    #[arg(long, value_parser = clap::value_parser!(RecordId).range(1..))]
    pub id: Option<RecordId>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Subcommand)]
pub enum SeasonCommands {
    /// Show the seasonal watch-list
    #[command(alias = "ls")]
    List,

    /// Add an anime to the season, cataloguing it when new
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        note: String,
        #[arg(long, default_value = "anime")]
        category: Category,
        #[arg(long, default_value = "")]
        genre: String,
        /// Season label, e.g. "Verão 2025"
        #[arg(long, default_value = "")]
        season: String,
        /// Total episodes
        #[arg(long, default_value_t = 12)]
        episodes: u32,
        /// Episodes already watched
        #[arg(long, default_value_t = 0)]
        watched: u32,
        /// Update date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Set watched episodes of the first entry with exactly this name
    Progress { name: String, watched: u32 },

    /// Remove every seasonal entry with exactly this name
    #[command(alias = "rm")]
    Remove { name: String },
}

#[derive(Subcommand)]
pub enum ReadingCommands {
    /// Show the reading list
    #[command(alias = "ls")]
    List,

    /// Add a manga or book
    Add(ReadingArgs),

    /// Replace the reading item with this ID
    Edit {
        id: RecordId,
        #[command(flatten)]
        fields: ReadingArgs,
    },

    /// Remove every reading item with exactly this name
    #[command(alias = "rm")]
    Remove { name: String },
}

#[derive(Args)]
pub struct ReadingArgs {
    #[arg(long)]
    pub name: String,
    /// manga|book
    #[arg(long = "type", default_value = "manga")]
    pub kind: ReadingKind,
    #[arg(long, default_value = "")]
    pub genre: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub progress: String,
}
