mod commands;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "castlist")]
#[command(about = "Browse, search, and curate a celebrity roster", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: platform data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, global = true, help = "Roster file to load, bypassing the config")]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
