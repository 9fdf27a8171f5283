use crate::core::dashboard::Tab;
use crate::export::ExportFormat;
use crate::utils::date::DateBasis;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for hospitrack
#[derive(Parser)]
#[command(
    name = "hospitrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hospital asset and patient tracking dashboard for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override the state database path (useful for tests or a custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Free-text search shared by every list.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Case-insensitive text searched in names, ids and locations
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Calendar-day selection for timestamped records.
#[derive(Args, Debug, Clone, Default)]
pub struct DateArgs {
    /// Day to show (YYYY-MM-DD, `today` or `all`)
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Calendar used to cut timestamps into days (overrides `date_basis`)
    #[arg(long, value_enum)]
    pub basis: Option<DateBasis>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AssetFilterArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// active, inactive, maintenance, alert or all
    #[arg(long)]
    pub status: Option<String>,

    /// Floor number or all
    #[arg(long, short = 'f')]
    pub floor: Option<String>,

    /// Equipment category, e.g. "Medical Equipment"
    #[arg(long = "type")]
    pub kind: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatientFilterArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// stable, critical, emergency, discharged or all
    #[arg(long)]
    pub status: Option<String>,

    /// Floor number or all
    #[arg(long, short = 'f')]
    pub floor: Option<String>,

    /// inpatient, emergency, outpatient or all
    #[arg(long = "type")]
    pub kind: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AlertFilterArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// new, acknowledged, resolved or all
    #[arg(long)]
    pub status: Option<String>,

    /// geofence, emergency, maintenance, system or all
    #[arg(long = "type")]
    pub kind: Option<String>,

    /// Floor number or all
    #[arg(long, short = 'f')]
    pub floor: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct HistoryFilterArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// asset, patient or all
    #[arg(long = "item-type")]
    pub item_type: Option<String>,

    /// movement, statusChange, alert, maintenance or all
    #[arg(long = "event")]
    pub event: Option<String>,

    #[command(flatten)]
    pub date: DateArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TimeLogFilterArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Department name (case-insensitive) or all
    #[arg(long)]
    pub department: Option<String>,

    /// check-in, check-out, break-start, break-end, shift-change or all
    #[arg(long)]
    pub activity: Option<String>,

    #[command(flatten)]
    pub date: DateArgs,
}

/// Where and how an export is written.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Output file path
    #[arg(long, value_name = "FILE")]
    pub file: String,

    /// Overwrite output file without confirmation
    #[arg(long)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ExportTarget {
    /// Export history entries
    History {
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        filters: HistoryFilterArgs,
    },
    /// Export staff time logs
    Timelogs {
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        filters: TimeLogFilterArgs,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the state database
    Init,

    /// Show or validate the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Check configuration values
        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,
    },

    /// Unlock the dashboard
    Login {
        /// Access password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Lock the dashboard again
    Logout,

    /// Show whether the dashboard is unlocked
    Status,

    /// Summary, floor-plan markers and recent items
    Dashboard {
        /// Floor to show (default: `default_floor` from config)
        #[arg(long, short = 'f')]
        floor: Option<String>,

        /// Which items to list under "Recent items"
        #[arg(long, value_enum, default_value = "all")]
        tab: Tab,

        /// Draw the floor plan as a character map
        #[arg(long)]
        map: bool,
    },

    /// List tracked assets
    Assets {
        #[command(flatten)]
        filters: AssetFilterArgs,
    },

    /// List tracked patients
    Patients {
        #[command(flatten)]
        filters: PatientFilterArgs,
    },

    /// List alerts
    Alerts {
        #[command(flatten)]
        filters: AlertFilterArgs,
    },

    /// List asset and patient history
    History {
        #[command(flatten)]
        filters: HistoryFilterArgs,
    },

    /// List staff time logs
    Timelogs {
        #[command(flatten)]
        filters: TimeLogFilterArgs,
    },

    /// Find an asset or patient and show its floor-plan marker
    Locate {
        /// Asset or patient id, e.g. A001 or P004
        id: String,
    },

    /// Export history or time logs to CSV or JSON
    Export {
        #[command(subcommand)]
        target: ExportTarget,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
