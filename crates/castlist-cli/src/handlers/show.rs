use crate::types::OutputFormat;
use crate::views::profile;
use anyhow::{Result, bail};
use castlist_runtime::load_roster;
use castlist_types::ProfileId;
use chrono::Local;
use std::path::Path;

pub fn handle(roster_path: &Path, id: i64, format: OutputFormat) -> Result<()> {
    let cast = load_roster(roster_path)?;
    let id = ProfileId(id);

    let Some(record) = cast.iter().find(|p| p.id == id) else {
        bail!("No profile with id {}", id);
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Plain => {
            let today = Local::now().date_naive();
            profile::print_detail(record, today);
        }
    }

    Ok(())
}
