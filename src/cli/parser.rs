use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for catlog
#[derive(Parser)]
#[command(
    name = "catlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small care log for cats: feeding, medication, weight, litter and vet visits",
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

/// Identity of a care event to edit or delete: either `--id`, or the
/// date/time/category/content the event was saved with.
#[derive(Args, Debug, Clone)]
pub struct CareTargetArgs {
    /// Record id shown by `list --ids`
    #[arg(long)]
    pub id: Option<String>,

    /// Date of the event (YYYY-MM-DD)
    #[arg(long, required_unless_present = "id")]
    pub date: Option<String>,

    /// Time of the event (HH:MM)
    #[arg(long, required_unless_present = "id")]
    pub time: Option<String>,

    /// Category of the event
    #[arg(long, required_unless_present = "id")]
    pub category: Option<String>,

    /// Content exactly as saved
    #[arg(long, required_unless_present = "id")]
    pub content: Option<String>,
}

/// Identity of a medical record: `--id`, or every field it was saved with
/// (omitted fields are matched as empty).
#[derive(Args, Debug, Clone)]
pub struct MedicalTargetArgs {
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, required_unless_present = "id")]
    pub date: Option<String>,

    #[arg(long, default_value = "")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub weight: String,

    #[arg(long, default_value = "")]
    pub hospital: String,

    #[arg(long, default_value = "")]
    pub details: String,

    #[arg(long, default_value = "")]
    pub link: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a care event
    Add {
        /// Cat name
        subject: String,

        /// Feeding (f), Medication (m), Weight (w), Litter (l) or Other (o)
        category: String,

        /// Spoons for Feeding, kg for Weight, free text otherwise
        content: String,

        /// Date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,

        /// Time (HH:MM), default now
        #[arg(long)]
        time: Option<String>,

        /// Optional note
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Change the content and/or note of a care event
    Edit {
        /// Cat name (default: `default_subject` from the config)
        subject: Option<String>,

        #[command(flatten)]
        target: CareTargetArgs,

        /// New content
        #[arg(long = "set-content")]
        set_content: Option<String>,

        /// New note (use "" to clear it)
        #[arg(long = "set-note")]
        set_note: Option<String>,
    },

    /// Delete a care event
    Del {
        subject: Option<String>,

        #[command(flatten)]
        target: CareTargetArgs,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// History of one cat, most recent first
    List {
        subject: Option<String>,

        /// Only this category
        #[arg(long)]
        category: Option<String>,

        /// Show record ids (needed by edit/del --id)
        #[arg(long)]
        ids: bool,
    },

    /// Daily summary for one cat
    Summary {
        subject: Option<String>,

        /// Day to summarize (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,
    },

    /// Daily feeding totals and trend
    Stats {
        subject: Option<String>,

        /// Days in the trend (default: `trend_days` from the config)
        #[arg(long)]
        days: Option<usize>,
    },

    /// Weight history and trend
    Weight { subject: Option<String> },

    /// List known cats
    Subjects,

    /// Veterinary records
    Medical {
        #[command(subcommand)]
        action: MedicalCommand,
    },

    /// Export a sheet to CSV (with UTF-8 BOM) or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Export the medical sheet instead of the care log
        #[arg(long)]
        medical: bool,

        /// Only rows of this cat
        #[arg(long)]
        subject: Option<String>,

        /// Output file (default: <subject|all>_<sheet>_<YYYYMMDD>.<ext> in --dir)
        #[arg(long, value_name = "FILE", conflicts_with = "dir")]
        file: Option<String>,

        /// Output directory for the default file name
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum MedicalCommand {
    /// Add a vet visit
    Add {
        subject: String,

        #[arg(long)]
        date: Option<String>,

        /// Vaccine, Checkup, Surgery, ...
        #[arg(long, default_value = "")]
        category: String,

        /// Weight measured at the visit (kg)
        #[arg(long, default_value = "")]
        weight: String,

        #[arg(long, default_value = "")]
        hospital: String,

        #[arg(long, default_value = "")]
        details: String,

        /// Link to a report or invoice
        #[arg(long, default_value = "")]
        link: String,
    },

    /// List vet visits, most recent first
    List {
        subject: Option<String>,

        #[arg(long)]
        ids: bool,
    },

    /// Change a vet visit (every field except the cat)
    Edit {
        subject: Option<String>,

        #[command(flatten)]
        target: MedicalTargetArgs,

        #[arg(long = "set-date")]
        set_date: Option<String>,
        #[arg(long = "set-category")]
        set_category: Option<String>,
        #[arg(long = "set-weight")]
        set_weight: Option<String>,
        #[arg(long = "set-hospital")]
        set_hospital: Option<String>,
        #[arg(long = "set-details")]
        set_details: Option<String>,
        #[arg(long = "set-link")]
        set_link: Option<String>,
    },

    /// Delete a vet visit
    Del {
        subject: Option<String>,

        #[command(flatten)]
        target: MedicalTargetArgs,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}
