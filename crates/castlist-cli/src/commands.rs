use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use castlist_runtime::{Config, resolve_data_dir};
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = &cli.command else {
        let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init { force } => {
            let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
            handlers::init::handle(&data_dir, *force)
        }

        Commands::Browse => {
            let roster_path = resolve_roster_path(&cli)?;
            handlers::browse::handle(&roster_path)
        }

        Commands::List { search } => {
            let roster_path = resolve_roster_path(&cli)?;
            handlers::list::handle(&roster_path, search.as_deref(), cli.format)
        }

        Commands::Show { id } => {
            let roster_path = resolve_roster_path(&cli)?;
            handlers::show::handle(&roster_path, *id, cli.format)
        }

        Commands::Export { format, output } => {
            let roster_path = resolve_roster_path(&cli)?;
            handlers::export::handle(&roster_path, *format, output.as_deref())
        }
    }
}

/// Roster path priority: explicit `--file`, then the configured
/// `data_file`, which defaults to `roster.json` in the data directory.
/// An explicit file never touches the data directory at all.
fn resolve_roster_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config = Config::load_or_default(&data_dir)?;
    Ok(config.data_file)
}

fn show_guidance(data_dir: &Path) {
    let config_exists = data_dir.join("config.toml").exists();

    println!("castlist - Celebrity roster browser\n");

    if !config_exists {
        println!("Get started:");
        println!("  castlist init\n");
        println!("The init command will:");
        println!("  1. Create the data directory and config.toml");
        println!("  2. Seed a sample roster if you don't have one");
        println!("  3. Point you at the interactive browser\n");
    } else {
        println!("Quick commands:");
        println!("  castlist browse                   # Interactive browser");
        println!("  castlist list --search <TERM>     # Matches first, rest below");
        println!("  castlist show <ID>                # One profile in full");
        println!("  castlist export --format csv      # Dump the roster\n");
    }

    println!("For more commands:");
    println!("  castlist --help");
}
