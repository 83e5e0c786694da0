use crate::{Error, Result};
use castlist_types::Profile;
use std::fs;
use std::path::Path;

/// One-shot read of the roster file: a JSON array of profile records.
///
/// There is no retry and no write-back; every mutation after this point is
/// session-local.
pub fn load_roster(path: &Path) -> Result<Vec<Profile>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| Error::Roster {
        path: path.to_path_buf(),
        source,
    })
}

/// Load for the interactive browser, where a failed load leaves the
/// collection empty and surfaces nothing.
pub fn load_roster_or_empty(path: &Path) -> Vec<Profile> {
    load_roster(path).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlist_testing::fixtures;
    use tempfile::TempDir;

    #[test]
    fn test_load_roster_reads_the_sample_cast() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("roster.json");
        fixtures::write_roster(&path, &fixtures::sample_cast()).unwrap();

        let cast = load_roster(&path).unwrap();
        assert_eq!(cast, fixtures::sample_cast());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let tmp = TempDir::new().unwrap();
        match load_roster(&tmp.path().join("absent.json")) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_names_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("roster.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_roster(&path).unwrap_err();
        assert!(err.to_string().contains("roster.json"));
    }

    #[test]
    fn test_or_empty_swallows_failures() {
        let tmp = TempDir::new().unwrap();
        assert!(load_roster_or_empty(&tmp.path().join("absent.json")).is_empty());
    }
}
