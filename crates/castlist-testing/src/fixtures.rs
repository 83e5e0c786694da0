//! Fixtures for sample cast generation and placement.
//!
//! The sample cast is deterministic and covers the interesting cases:
//! overlapping name substrings for partition tests, one minor for the
//! adult gate, and mixed-case names for case-insensitive search.

use anyhow::Result;
use castlist_types::{Profile, ProfileId};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

/// A single deterministic profile. `id` also seeds the picture name.
pub fn profile(id: i64, first: &str, last: &str, dob: NaiveDate) -> Profile {
    Profile {
        id: ProfileId(id),
        first: first.to_string(),
        last: last.to_string(),
        dob,
        gender: "Other".to_string(),
        country: "Norway".to_string(),
        description: format!("{} {} is a performer.", first, last),
        picture: format!("{}-{}.jpg", first.to_lowercase(), last.to_lowercase()),
    }
}

/// The canonical sample cast.
///
/// Ids 1..=5; "Vera Moss" (id 5) is a minor until 2030. "Marsh"/"Marsden"
/// overlap on the "mars" substring.
pub fn sample_cast() -> Vec<Profile> {
    vec![
        profile(1, "Ada", "Marsh", date(1988, 2, 20)),
        profile(2, "Ben", "Adler", date(1975, 11, 3)),
        profile(3, "Cleo", "Park", date(1992, 7, 30)),
        profile(4, "Dan", "Marsden", date(2001, 9, 14)),
        profile(5, "Vera", "Moss", date(2012, 4, 2)),
    ]
}

/// Serialize a cast in the roster file shape (a bare JSON array).
pub fn roster_json(cast: &[Profile]) -> String {
    serde_json::to_string_pretty(cast).expect("cast serializes")
}

/// Write a cast as a roster file at `path`.
pub fn write_roster(path: &Path, cast: &[Profile]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, roster_json(cast))?;
    Ok(())
}
