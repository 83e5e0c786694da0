use castlist_types::{Profile, ProfileId, ProfilePatch};

/// List controller: owns the canonical collection, the active search term,
/// and the at-most-one expanded record.
///
/// All mutation of the collection goes through [`Roster::delete`] and
/// [`Roster::apply_edit`]; cards only report intent upward. Search never
/// removes records from view, it reorders them (see [`Roster::visible`]).
#[derive(Debug, Default)]
pub struct Roster {
    profiles: Vec<Profile>,
    search: String,
    expanded: Option<ProfileId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with a freshly loaded one.
    ///
    /// Happens once at startup; a failed load is represented by replacing
    /// with an empty vec.
    pub fn replace(&mut self, profiles: Vec<Profile>) {
        self.profiles = profiles;
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Update the live search term. Pure filter input; the collection is
    /// untouched.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Case-insensitive substring match of the term against "first last".
    pub fn matches(profile: &Profile, term: &str) -> bool {
        profile
            .full_name()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    /// Display ordering: a stable partition by the search predicate.
    ///
    /// Matching records come first in their original relative order,
    /// followed by non-matching records in their original relative order.
    /// Non-matches stay visible, de-prioritized rather than hidden. An
    /// empty term matches everything, yielding the original order.
    pub fn visible(&self) -> Vec<&Profile> {
        let (hits, misses): (Vec<&Profile>, Vec<&Profile>) = self
            .profiles
            .iter()
            .partition(|p| Self::matches(p, &self.search));
        hits.into_iter().chain(misses).collect()
    }

    pub fn expanded(&self) -> Option<ProfileId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: ProfileId) -> bool {
        self.expanded == Some(id)
    }

    /// Expand `id`, or collapse it if it is already the expanded record.
    /// At most one record is expanded at any time.
    pub fn toggle_expand(&mut self, id: ProfileId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Remove the record with the matching id. No-op if absent.
    ///
    /// A dangling expanded id after deletion selects nothing and is left
    /// as-is.
    pub fn delete(&mut self, id: ProfileId) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.id != id);
        self.profiles.len() != before
    }

    /// Merge `patch` over the record with the matching id. No-op if absent.
    pub fn apply_edit(&mut self, id: ProfileId, patch: ProfilePatch) -> bool {
        match self.profiles.iter_mut().find(|p| p.id == id) {
            Some(profile) => {
                profile.apply(patch);
                true
            }
            None => false,
        }
    }
}
