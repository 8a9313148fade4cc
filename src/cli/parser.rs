use clap::{Parser, Subcommand};

/// Command-line interface definition for horario
/// CLI application to keep monthly work timesheets with SQLite
#[derive(Parser)]
#[command(
    name = "horario",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple timesheet CLI: record entry/exit times per day, compute worked hours and export monthly reports",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom stores)
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
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Record or update one day of a monthly timesheet
    Set {
        /// Month of the timesheet (YYYY-MM)
        period: String,

        /// Day of the month (1-31)
        day: u32,

        /// Worker name (falls back to default_worker from the config)
        #[arg(short = 'w', long = "worker")]
        worker: Option<String>,

        /// Entry time (HH:MM)
        #[arg(long = "in", help = "Entry time (HH:MM)")]
        entry: Option<String>,

        /// Exit time (HH:MM)
        #[arg(long = "out", help = "Exit time (HH:MM)")]
        exit: Option<String>,

        /// Incident notes for the day
        #[arg(long = "notes", help = "Incident notes for the day")]
        notes: Option<String>,

        /// Clear the recorded entry time
        #[arg(long = "clear-in", conflicts_with = "entry")]
        clear_in: bool,

        /// Clear the recorded exit time
        #[arg(long = "clear-out", conflicts_with = "exit")]
        clear_out: bool,
    },

    /// Show the month view of a timesheet
    Show {
        /// Month of the timesheet (YYYY-MM)
        period: String,

        /// Worker name (falls back to default_worker from the config)
        #[arg(short = 'w', long = "worker")]
        worker: Option<String>,
    },

    /// List all saved timesheets
    List,

    /// Load a saved timesheet and print a summary
    Load {
        /// Storage key to load (defaults to the most recently saved)
        #[arg(long = "key")]
        key: Option<String>,
    },

    /// Attach or clear the signature of a timesheet
    Sign {
        /// Month of the timesheet (YYYY-MM)
        period: String,

        /// Worker name (falls back to default_worker from the config)
        #[arg(short = 'w', long = "worker")]
        worker: Option<String>,

        /// Image file to attach as signature
        #[arg(long = "image", value_name = "FILE", conflicts_with = "clear")]
        image: Option<String>,

        /// Remove the stored signature
        #[arg(long = "clear")]
        clear: bool,
    },

    /// Export a timesheet as a plain-text report
    Export {
        /// Month of the timesheet (YYYY-MM)
        period: String,

        /// Worker name (falls back to default_worker from the config)
        #[arg(short = 'w', long = "worker")]
        worker: Option<String>,

        /// Output file (default: horario_<worker>_<year>_<month>.txt)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
