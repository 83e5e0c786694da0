use anyhow::Result;
use castlist_runtime::Config;
use owo_colors::OwoColorize;
use std::fs;
use std::path::Path;

const SAMPLE_ROSTER: &str = include_str!("../../data/roster.sample.json");

pub fn handle(data_dir: &Path, force: bool) -> Result<()> {
    println!("{}", "=== castlist init ===".bold());
    println!();

    fs::create_dir_all(data_dir)?;

    let config_path = data_dir.join("config.toml");
    let config = if config_path.exists() && !force {
        println!(
            "{} config already present at {}",
            "✓".green(),
            config_path.display()
        );
        Config::load_from(&config_path)?
    } else {
        let config = Config::default_in(data_dir);
        config.save_to(&config_path)?;
        println!("{} wrote {}", "✓".green(), config_path.display());
        config
    };

    if config.data_file.exists() && !force {
        println!(
            "{} roster already present at {}",
            "✓".green(),
            config.data_file.display()
        );
    } else {
        if let Some(parent) = config.data_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config.data_file, SAMPLE_ROSTER)?;
        println!(
            "{} seeded sample roster at {}",
            "✓".green(),
            config.data_file.display()
        );
    }

    println!();
    println!("Next:");
    println!("  castlist browse");

    Ok(())
}
