//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Garden entity hierarchy with growth simulation and cross-garden analytics
#[derive(Parser, Debug)]
#[command(name = "gardenkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the garden management demo
    Demo,

    /// Build a garden network and list its owners
    Network {
        /// Owner names (default: configured network)
        names: Vec<String>,
    },

    /// Create a batch of plants and report them
    Factory,

    /// Show each plant type with its kind-specific action
    Types,

    /// Simulate a plant growing over several days
    Week {
        /// Days to simulate (default: 6)
        #[arg(long, default_value_t = 6)]
        days: u32,
    },

    /// Show validated setters rejecting bad input
    Security {
        /// Height to attempt
        #[arg(long, default_value_t = -5, allow_negative_numbers = true)]
        height: i64,
    },

    /// Print a gardening tip
    Tip,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show global config path
    Path,
}
