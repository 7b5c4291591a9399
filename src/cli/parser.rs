use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for repairdesk
#[derive(Parser)]
#[command(
    name = "repairdesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Phone-repair shop desk: repair guides, customer transactions and financial reports",
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
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log in and keep the session until `logout`
    Login { username: String, password: String },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Repair guides catalog
    #[command(subcommand)]
    Damage(DamageCommands),

    /// Customer repair transactions
    #[command(subcommand)]
    Tx(TxCommands),

    /// Shop expenses (add/remove restricted to the owner)
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Financial summary: revenue, expenses, net profit, most common damage
    Report,

    /// Export a collection to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "transactions")]
        what: ExportTarget,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum DamageCommands {
    /// List damages, optionally filtered
    List {
        #[arg(long, short, help = "Case-insensitive match on name or category")]
        search: Option<String>,

        #[arg(long, short, default_value = "all", help = "Category, or `all`")]
        category: String,
    },

    /// List the known categories
    Categories,

    /// Show a repair guide
    Show { id: String },

    /// Add a new damage with its repair guide
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long = "video", default_value = "", help = "YouTube link (watch, share or embed)")]
        video: String,

        #[arg(long = "step", help = "One repair step; repeat for each step")]
        step: Vec<String>,

        #[arg(long = "steps", help = "All steps at once, one per line")]
        steps: Option<String>,

        #[arg(long, default_value = "0", help = "Estimated cost (IDR)")]
        cost: String,
    },
}

#[derive(Subcommand)]
pub enum TxCommands {
    /// List transactions
    List,

    /// Register a new repair order
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long, help = "Damage id (default: first damage in the catalog)")]
        damage: Option<String>,

        #[arg(long, help = "Entry date YYYY-MM-DD (default: today)")]
        entry: Option<String>,

        #[arg(long, help = "Pickup date YYYY-MM-DD")]
        pickup: Option<String>,
    },

    /// Change the status of a transaction
    Status {
        id: String,

        #[arg(help = "pending | completed | picked-up")]
        status: String,
    },

    /// Set (or clear, without a date) the pickup date
    Pickup { id: String, date: Option<String> },
}

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List expenses
    List,

    /// Add an expense
    Add {
        description: String,

        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove an expense by id
    Del { id: i64 },
}
