use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for cronograma
#[derive(Parser)]
#[command(
    name = "cronograma",
    version = env!("CARGO_PKG_VERSION"),
    about = "Keep a yearly activity schedule in SQLite and view it as a table or a Gantt chart",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        /// Insert the initial 2025 calendar when the schedule is empty
        #[arg(long)]
        seed: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a schedule entry
    Add {
        /// Activity name
        activity: String,
        /// Category (Planejamento, Capacitação, Inovação, Projeto Piloto, Evento;
        /// English names are accepted too)
        category: String,
        /// Start date (YYYY-MM-DD)
        start: String,
        /// End date (YYYY-MM-DD)
        end: String,
        /// Month label; derived from the start date when omitted
        #[arg(long)]
        month: Option<String>,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id
        id: i64,
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        activity: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: i64,
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List entries as a table
    List {
        /// Only entries overlapping a period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges
        /// (YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD), or "all".
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Draw the schedule as a Gantt chart
    Gantt {
        /// Width of the time axis in terminal cells, 12 to 400 (default from config)
        #[arg(long, value_parser = clap::value_parser!(u16).range(12..=400))]
        width: Option<u16>,

        /// Disable colors
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Move or resize a chart bar (same path as a drag on the chart)
    Move {
        /// Chart task id, e.g. "item-7" (legacy "task-3" ids are accepted)
        task_id: String,
        /// New start date (YYYY-MM-DD)
        start: String,
        /// New end date (YYYY-MM-DD)
        end: String,
        /// Task name as shown on the chart (used for legacy ids)
        #[arg(long)]
        name: Option<String>,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,
    },

    /// Export the schedule
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only entries overlapping a period (same formats as `list --period`)
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
