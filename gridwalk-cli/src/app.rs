use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// gridwalk - protection zones and bus analysis for IEC 61850 substation files
#[derive(Debug, Parser)]
#[command(name = "gridwalk", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Exactly one starting point for a zone search.
#[derive(Debug, Args)]
#[group(id = "start", required = true, multiple = false)]
pub struct ZoneStartArgs {
    /// Start at a connectivity node path (e.g., XAT/220/Bus_A/L1).
    #[arg(long, value_name = "PATH")]
    pub node: Option<String>,

    /// Start at the first terminal of a power transformer.
    #[arg(long, value_name = "NAME")]
    pub transformer: Option<String>,

    /// Start at a bus bar.
    #[arg(long, value_name = "NAME")]
    pub bus: Option<String>,

    /// Start at the first terminal of a piece of conducting equipment.
    #[arg(long, value_name = "NAME")]
    pub equipment: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the protection zone around a starting point.
    Zone {
        /// Path to the SCL file (SSD or SCD).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[command(flatten)]
        start: ZoneStartArgs,

        /// Equipment type code that closes the zone.
        #[arg(long, default_value = "CBR")]
        boundary: String,

        /// Build the topology without transformer and neutral links.
        #[arg(long)]
        minimal: bool,
    },

    /// List bus bars with their connectivity node and voltage level.
    Buses {
        /// Path to the SCL file (SSD or SCD).
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// List the bays connected to a bus and the IEDs serving them.
    Bays {
        /// Path to the SCL file (SSD or SCD).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Bus bar name.
        #[arg(long)]
        bus: String,
    },

    /// List primary equipment eligible for secondary system configuration.
    Primary {
        /// Path to the SCL file (SSD or SCD).
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Minimum voltage level in volts.
        #[arg(long, value_name = "VOLTS")]
        min_voltage: Option<f64>,
    },
}
