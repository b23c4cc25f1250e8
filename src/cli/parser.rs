use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for Athletica
#[derive(Parser)]
#[command(
    name = "athletica",
    version = env!("CARGO_PKG_VERSION"),
    about = "Athletica events: schedule matches, trainings and meetups, spot conflicts, filter the calendar",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Criteria shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Event type: all, match, training, meetup
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// all, upcoming or past (default from config)
    #[arg(long)]
    pub status: Option<String>,

    /// Case-insensitive text matched against title, description, location, opponent and category
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only events of this team
    #[arg(long, conflicts_with = "no_team")]
    pub team: Option<i64>,

    /// Only events without a team
    #[arg(long = "no-team")]
    pub no_team: bool,

    /// Only public events
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Only private events
    #[arg(long)]
    pub private: bool,

    /// asc or desc by start time (default from config)
    #[arg(long)]
    pub sort: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Schedule a new event
    Add {
        /// Event title
        title: String,

        /// Start (YYYY-MM-DD HH:MM, UTC, or RFC 3339)
        #[arg(long)]
        start: String,

        /// End (YYYY-MM-DD HH:MM, UTC, or RFC 3339)
        #[arg(long)]
        end: String,

        /// match, training or meetup
        #[arg(long = "type", value_name = "TYPE", default_value = "training")]
        kind: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long = "desc")]
        description: Option<String>,

        /// Owning team id
        #[arg(long)]
        team: Option<i64>,

        /// Visible to invited members only
        #[arg(long)]
        private: bool,

        #[arg(long)]
        opponent: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Refuse to save when the time slot conflicts with another event
        #[arg(long)]
        strict: bool,
    },

    /// Change an existing event
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long = "desc", conflicts_with = "no_desc")]
        description: Option<String>,

        /// Remove the description
        #[arg(long = "no-desc")]
        no_desc: bool,

        #[arg(long, conflicts_with = "no_team")]
        team: Option<i64>,

        /// Detach the event from its team
        #[arg(long = "no-team")]
        no_team: bool,

        /// public or private
        #[arg(long)]
        visibility: Option<String>,

        #[arg(long, conflicts_with = "no_opponent")]
        opponent: Option<String>,

        #[arg(long = "no-opponent")]
        no_opponent: bool,

        #[arg(long, conflicts_with = "no_category")]
        category: Option<String>,

        #[arg(long = "no-category")]
        no_category: bool,

        #[arg(long)]
        strict: bool,
    },

    /// Delete an event by id
    Del {
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// List events through the filter pipeline
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show which events overlap a time window
    Check {
        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,

        /// Only consider events of this team
        #[arg(long)]
        team: Option<i64>,

        /// Ignore this event (the one being edited)
        #[arg(long)]
        exclude: Option<i64>,
    },

    /// Export the filtered event list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
