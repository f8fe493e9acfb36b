//! CLI command definitions and handlers

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod event;
pub mod media;
pub mod status;
pub mod trip;

pub use args::{GlobalOptions, LocationArgs, OutputFormat, parse_datetime};
pub use context::CommandContext;

/// Ask before deleting something, unless `--yes` was given.
pub(crate) fn confirm_delete(what: &str, yes: bool) -> crate::error::Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// TripJournal CLI - keep a journal of your trips from the terminal
#[derive(Parser, Debug)]
#[command(name = "tripjournal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "TRIPJOURNAL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "TRIPJOURNAL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Journal service address (e.g. http://localhost:8000/)
    #[arg(long, global = true, env = "TRIPJOURNAL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TRIPJOURNAL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log in
    Register(CredentialArgs),

    /// Log in to the journal service
    Login(CredentialArgs),

    /// Forget the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Display version information
    Version,

    /// Manage trips
    #[command(subcommand)]
    Trip(TripCommands),

    /// Manage trip events
    #[command(subcommand)]
    Event(EventCommands),

    /// Manage event media
    #[command(subcommand)]
    Media(MediaCommands),
}

/// Username for register/login; the password is prompted for
#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    /// Account username (defaults to the last one used)
    #[arg(long, short = 'u')]
    pub username: Option<String>,
}

/// Trip management subcommands
#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// List all trips
    #[command(visible_alias = "ls")]
    List,

    /// Show a trip with its events
    Get {
        /// Trip ID
        trip_id: i64,
    },

    /// Create a trip
    Create {
        /// Trip name
        #[arg(long)]
        name: String,

        /// Start date (YYYY-MM-DD or ISO 8601)
        #[arg(long, value_parser = parse_datetime)]
        start: DateTime<Utc>,

        /// End date (YYYY-MM-DD or ISO 8601)
        #[arg(long, value_parser = parse_datetime)]
        end: DateTime<Utc>,
    },

    /// Update a trip; omitted fields keep their current value
    Update {
        /// Trip ID
        trip_id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New start date
        #[arg(long, value_parser = parse_datetime)]
        start: Option<DateTime<Utc>>,

        /// New end date
        #[arg(long, value_parser = parse_datetime)]
        end: Option<DateTime<Utc>>,
    },

    /// Delete a trip and everything in it
    #[command(visible_alias = "rm")]
    Delete {
        /// Trip ID
        trip_id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Event management subcommands
#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// Add an event to a trip
    Create {
        /// Trip the event belongs to
        #[arg(long = "trip")]
        trip_id: i64,

        /// Event name
        #[arg(long)]
        name: String,

        /// When it happened (YYYY-MM-DD or ISO 8601)
        #[arg(long, value_parser = parse_datetime)]
        date: DateTime<Utc>,

        /// Free-form note
        #[arg(long)]
        note: Option<String>,

        #[command(flatten)]
        location: LocationArgs,

        /// How you got here from the previous event
        #[arg(long)]
        transition: Option<String>,
    },

    /// Update an event; omitted fields keep their current value
    Update {
        /// Event ID
        event_id: i64,

        /// Trip the event belongs to (used to look up current values)
        #[arg(long = "trip")]
        trip_id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New date
        #[arg(long, value_parser = parse_datetime)]
        date: Option<DateTime<Utc>>,

        /// New note
        #[arg(long)]
        note: Option<String>,

        #[command(flatten)]
        location: LocationArgs,

        /// New transition description
        #[arg(long)]
        transition: Option<String>,
    },

    /// Delete an event
    #[command(visible_alias = "rm")]
    Delete {
        /// Event ID
        event_id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Media management subcommands
#[derive(Subcommand, Debug)]
pub enum MediaCommands {
    /// Upload a file and attach it to an event
    Create {
        /// Event the media belongs to
        #[arg(long = "event")]
        event_id: i64,

        /// File to upload
        #[arg(long)]
        file: PathBuf,

        /// Caption shown with the media
        #[arg(long)]
        caption: Option<String>,
    },

    /// Delete a media item
    #[command(visible_alias = "rm")]
    Delete {
        /// Media ID
        media_id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
