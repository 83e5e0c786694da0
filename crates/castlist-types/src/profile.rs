use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum age for the edit/delete controls to be offered.
pub const ADULT_AGE: i32 = 18;

/// Stable record identifier assigned by the data source.
///
/// Uniqueness within a roster is guaranteed by the source file and never
/// re-validated after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub i64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProfileId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// One celebrity profile record.
///
/// Field names mirror the roster file exactly: a JSON array of objects with
/// `id`, `first`, `last`, `dob`, `gender`, `country`, `description`, and
/// `picture`. `dob` is a calendar date with no time component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub first: String,
    pub last: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub country: String,
    pub description: String,
    pub picture: String,
}

impl Profile {
    /// "first last" concatenation, the form the search filter matches on.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Age in completed years on `today`.
    ///
    /// Decrements when the birthday has not yet occurred this year.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.dob.year();
        if (today.month(), today.day()) < (self.dob.month(), self.dob.day()) {
            age -= 1;
        }
        age
    }

    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) >= ADULT_AGE
    }

    /// Merge a patch over the committed fields. Unset fields are untouched.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Replacement values for the editable fields of a record.
///
/// Produced by a committed edit; applied by the roster to the record with
/// the matching id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.gender.is_none() && self.country.is_none() && self.description.is_none()
    }
}
