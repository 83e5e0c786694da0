use crate::types::ExportFormat;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize the castlist configuration and seed roster")]
    Init {
        #[arg(long, help = "Overwrite an existing configuration")]
        force: bool,
    },

    #[command(about = "Browse the roster interactively")]
    Browse,

    #[command(about = "List the roster")]
    List {
        #[arg(
            long,
            help = "Search term; matches float to the top, non-matches follow"
        )]
        search: Option<String>,
    },

    #[command(about = "Show one profile in full")]
    Show {
        #[arg(help = "Profile id")]
        id: i64,
    },

    #[command(about = "Export the roster")]
    Export {
        #[arg(long, default_value = "json")]
        format: ExportFormat,

        #[arg(long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}
