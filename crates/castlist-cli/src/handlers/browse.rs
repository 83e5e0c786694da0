use crate::tui;
use anyhow::{Result, bail};
use castlist_engine::Roster;
use castlist_runtime::load_roster_or_empty;
use is_terminal::IsTerminal;
use std::io;
use std::path::Path;

pub fn handle(roster_path: &Path) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("castlist browse needs an interactive terminal");
    }

    // A failed load opens the browser with an empty list; the roster file
    // is the only source of truth and there is nothing to recover from.
    let mut roster = Roster::new();
    roster.replace(load_roster_or_empty(roster_path));

    tui::run(roster)
}
