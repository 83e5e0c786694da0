use crate::types::OutputFormat;
use crate::views::profile;
use anyhow::Result;
use castlist_engine::Roster;
use castlist_runtime::load_roster;
use chrono::Local;
use std::path::Path;

pub fn handle(roster_path: &Path, search: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut roster = Roster::new();
    roster.replace(load_roster(roster_path)?);

    if let Some(term) = search {
        roster.set_search(term);
    }

    let visible = roster.visible();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&visible)?);
        }
        OutputFormat::Plain => {
            let today = Local::now().date_naive();
            profile::print_roster(&visible, roster.search(), today);
        }
    }

    Ok(())
}
