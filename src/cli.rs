//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "produksi-form")]
#[command(version)]
#[command(about = "Machine production form data entry for a small cigarette factory")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered machines
    Machines,

    /// Show one machine's full profile
    Show {
        /// Machine id (e.g. GARANT)
        machine: String,
    },

    /// Resolve a scanned or typed barcode to a machine
    Scan {
        /// Barcode text (e.g. GAR001)
        barcode: String,
    },

    /// Build a prefilled production form
    New {
        /// Machine id; omit when using --barcode
        machine: Option<String>,

        /// Select the machine by barcode instead of id
        #[arg(long, short = 'b')]
        barcode: Option<String>,

        /// Operator name (required when saving)
        #[arg(long)]
        operator: Option<String>,

        /// Override the SHIFT line (defaults to the current shift)
        #[arg(long)]
        shift: Option<String>,

        /// Override the HARI/TANGGAL line (defaults to today)
        #[arg(long)]
        tanggal: Option<String>,

        /// Crew name lines, up to five (repeatable)
        #[arg(long)]
        nama: Vec<String>,

        /// Set a material's MASUK cell as NAME=VALUE (repeatable)
        #[arg(long)]
        masuk: Vec<String>,

        /// Set a material's KELUAR cell as NAME=VALUE (repeatable)
        #[arg(long)]
        keluar: Vec<String>,

        /// Set a waste amount as NAME=VALUE (repeatable)
        #[arg(long)]
        waste: Vec<String>,

        /// KETERANGAN (remarks)
        #[arg(long)]
        keterangan: Option<String>,

        /// PART YANG DIGANTI (replaced parts)
        #[arg(long)]
        part_diganti: Option<String>,

        /// Persist the form to the store after filling it
        #[arg(long)]
        save: bool,
    },

    /// Compute a SISA value from MASUK and KELUAR text
    Sisa {
        /// MASUK cell text (e.g. "20 (400)")
        masuk: String,

        /// KELUAR cell text
        keluar: String,
    },

    /// List saved forms
    Forms {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,

        /// Delete all saved forms
        #[arg(long)]
        clear: bool,
    },

    /// Show one saved form
    Form {
        /// Saved form id
        form_id: String,
    },

    /// Export a saved form to a file
    Export {
        /// Saved form id
        form_id: String,

        /// Output file path; .csv writes CSV, anything else JSON
        #[arg(long, short = 'o')]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the form store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set an external machine profile JSON file
        #[arg(long)]
        set_machines_file: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
