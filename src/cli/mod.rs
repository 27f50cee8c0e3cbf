//! CLI module for Routemap.
//!
//! Commands:
//! - routes: consolidated route listing of a source model
//! - stats: route counts per HTTP method

pub mod routes;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::format::OutputFormat;

#[derive(Parser)]
#[command(name = "routemap")]
#[command(about = "Routemap - HTTP routes from request-mapping annotations", long_about = None)]
pub struct Cli {
    /// Config file (default: ./routemap.toml)
    #[arg(short, long, global = true, default_value = "routemap.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every route declared in a source model
    Routes {
        /// Source model file (.json, .yaml or .yml)
        model: PathBuf,

        /// Output format: text or json (default: from config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Only routes for this HTTP method
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Show route counts per HTTP method
    Stats {
        /// Source model file (.json, .yaml or .yml)
        model: PathBuf,
    },
}
