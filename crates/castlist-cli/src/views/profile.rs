use castlist_engine::Roster;
use castlist_types::Profile;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Truncate and normalize string for display
/// - Replaces newlines with spaces
/// - Collapses multiple consecutive whitespace into single space
/// - Respects UTF-8 character boundaries
pub fn truncate_for_display(s: &str, max_chars: usize) -> String {
    let normalized = s
        .replace(['\n', '\r'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let truncated: String = normalized.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}

// Pad before colorizing; ANSI escapes would otherwise count against the
// column width.
fn pad(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn print_roster(visible: &[&Profile], term: &str, today: NaiveDate) {
    if visible.is_empty() {
        println!("{}", "Roster is empty.".dimmed());
        return;
    }

    println!(
        "{}  {} {}  {} {} {}",
        pad("ID", 4).bold(),
        pad("NAME", 24).bold(),
        pad("AGE", 4).bold(),
        pad("COUNTRY", 16).bold(),
        pad("GENDER", 14).bold(),
        "DESCRIPTION".bold(),
    );

    for p in visible {
        let name = pad(&truncate_for_display(&p.full_name(), 24), 24);
        let is_match = !term.is_empty() && Roster::matches(p, term);

        let name_cell = if is_match {
            name.green().bold().to_string()
        } else if term.is_empty() {
            name
        } else {
            name.dimmed().to_string()
        };

        println!(
            "{}  {} {}  {} {} {}",
            pad(&p.id.to_string(), 4).yellow(),
            name_cell,
            pad(&p.age_on(today).to_string(), 4),
            pad(&truncate_for_display(&p.country, 16), 16),
            pad(&truncate_for_display(&p.gender, 14), 14),
            truncate_for_display(&p.description, 48).dimmed(),
        );
    }
}

pub fn print_detail(p: &Profile, today: NaiveDate) {
    println!("{}", p.full_name().bold());
    println!("{}  {}", "Id:".dimmed(), p.id);
    println!("{}  {} ({} years)", "Born:".dimmed(), p.dob, p.age_on(today));
    println!("{}  {}", "Gender:".dimmed(), p.gender);
    println!("{}  {}", "Country:".dimmed(), p.country);
    println!("{}  {}", "Picture:".dimmed(), p.picture);
    println!();
    println!("{}", p.description);
}
