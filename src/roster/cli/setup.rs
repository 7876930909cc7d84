use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Manage personnel records from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding records and config (overrides ROSTER_HOME)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Field values shared by `add` and `update`.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Employee id, two capital letters and four digits (e.g. AB1234)
    #[arg(long)]
    pub id: Option<String>,

    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Job title
    #[arg(long)]
    pub role: Option<String>,

    /// Department
    #[arg(long)]
    pub department: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number, 9 to 15 digits with optional leading + and 1
    #[arg(long)]
    pub phone: Option<String>,

    /// Hire date as YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub hire_date: Option<String>,

    /// Active, Inactive, On Leave or Terminated
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new record
    #[command(alias = "n", display_order = 1)]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List records in stored order
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show records whose id, name, role or department contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort the listing by a field (id, name, role, department, email, phone, hire-date, status)
        #[arg(long, value_name = "FIELD")]
        sort: Option<String>,
    },

    /// Search records (case-insensitive, id/name/role/department)
    #[command(display_order = 3)]
    Search { term: String },

    /// Show the full details of one or more records
    #[command(alias = "v", display_order = 10)]
    View {
        /// Ids or positions (e.g. AB1234 2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Change fields of a record
    #[command(alias = "e", display_order = 11)]
    Update {
        /// Id or position of the record
        selector: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete one or more records
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Ids or positions (e.g. AB1234 2)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export all records to a CSV file
    #[command(display_order = 20)]
    Export {
        /// Output file (defaults to export_YYYYMMDD_HHMMSS.csv in the current directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (data-file, atomic-save, escape-csv, unique-ids)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
