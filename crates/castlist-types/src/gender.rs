use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed option set offered by the gender selector in the edit form.
///
/// Committed records keep gender as free text; this set only constrains
/// what the edit control can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderOption {
    Male,
    Female,
    Transgender,
    RatherNotSay,
    Other,
}

impl GenderOption {
    pub const ALL: [GenderOption; 5] = [
        GenderOption::Male,
        GenderOption::Female,
        GenderOption::Transgender,
        GenderOption::RatherNotSay,
        GenderOption::Other,
    ];

    /// Display label, matching the committed free-text form.
    pub fn label(&self) -> &'static str {
        match self {
            GenderOption::Male => "Male",
            GenderOption::Female => "Female",
            GenderOption::Transgender => "Transgender",
            GenderOption::RatherNotSay => "Rather not say",
            GenderOption::Other => "Other",
        }
    }

    /// Match a committed gender value back to its option, if it is one of
    /// the fixed labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.label() == label)
    }

    /// Next option in selector order, wrapping.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|o| o == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous option in selector order, wrapping.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|o| o == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GenderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for option in GenderOption::ALL {
            assert_eq!(GenderOption::from_label(option.label()), Some(option));
        }
    }

    #[test]
    fn test_from_label_rejects_free_text() {
        assert_eq!(GenderOption::from_label("male"), None);
        assert_eq!(GenderOption::from_label("Nonbinary"), None);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(GenderOption::Other.next(), GenderOption::Male);
        assert_eq!(GenderOption::Male.prev(), GenderOption::Other);
    }
}
