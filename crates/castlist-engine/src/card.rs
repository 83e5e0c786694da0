use crate::validate::{country_is_valid, description_is_valid};
use castlist_types::{Profile, ProfilePatch};
use chrono::NaiveDate;

/// Draft copies of the editable fields, seeded from committed values when
/// edit mode is entered and discarded on cancel or successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub gender: String,
    pub country: String,
    pub description: String,
}

impl EditDraft {
    fn seeded_from(profile: &Profile) -> Self {
        Self {
            gender: profile.gender.clone(),
            country: profile.country.clone(),
            description: profile.description.clone(),
        }
    }
}

/// Whether the card is showing committed values or the inline edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Display,
    Editing(EditDraft),
}

/// Validity and dirtiness of the current draft against the committed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftStatus {
    pub country_valid: bool,
    pub description_valid: bool,
    pub dirty: bool,
}

impl DraftStatus {
    pub fn is_valid(&self) -> bool {
        self.country_valid && self.description_valid
    }
}

/// Per-record transient form state.
///
/// Owned by each card instance, never shared across records, so two cards
/// mid-edit cannot interfere. Expanded/collapsed state is NOT held here; it
/// belongs to the roster and arrives as a read-only flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    mode: CardMode,
    confirm_delete: bool,
}

impl Default for CardState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardState {
    pub fn new() -> Self {
        Self {
            mode: CardMode::Display,
            confirm_delete: false,
        }
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing(_))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.mode {
            CardMode::Editing(draft) => Some(draft),
            CardMode::Display => None,
        }
    }

    /// Whether the edit/delete controls are offered at all.
    pub fn actions_offered(profile: &Profile, today: NaiveDate) -> bool {
        profile.is_adult_on(today)
    }

    /// Header activation toggles expansion unless an edit is in progress;
    /// suppressing the toggle protects unsaved drafts from an accidental
    /// collapse.
    pub fn allows_toggle(&self) -> bool {
        !self.is_editing()
    }

    /// Enter edit mode, seeding drafts from the committed values.
    ///
    /// Refused for minors (the control is never offered, and the state
    /// machine re-checks). No-op when already editing.
    pub fn begin_edit(&mut self, profile: &Profile, today: NaiveDate) -> bool {
        if self.is_editing() || !Self::actions_offered(profile, today) {
            return false;
        }
        self.mode = CardMode::Editing(EditDraft::seeded_from(profile));
        true
    }

    pub fn set_gender(&mut self, value: impl Into<String>) {
        if let CardMode::Editing(draft) = &mut self.mode {
            draft.gender = value.into();
        }
    }

    pub fn set_country(&mut self, value: impl Into<String>) {
        if let CardMode::Editing(draft) = &mut self.mode {
            draft.country = value.into();
        }
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        if let CardMode::Editing(draft) = &mut self.mode {
            draft.description = value.into();
        }
    }

    /// Recompute validity and dirtiness of the draft against the committed
    /// record. In display mode everything reads valid and clean.
    pub fn status(&self, profile: &Profile) -> DraftStatus {
        match &self.mode {
            CardMode::Editing(draft) => DraftStatus {
                country_valid: country_is_valid(&draft.country),
                description_valid: description_is_valid(&draft.description),
                dirty: draft.gender != profile.gender
                    || draft.country != profile.country
                    || draft.description != profile.description,
            },
            CardMode::Display => DraftStatus {
                country_valid: true,
                description_valid: true,
                dirty: false,
            },
        }
    }

    /// Save is enabled only when the draft is dirty AND valid AND the
    /// subject is an adult.
    pub fn can_save(&self, profile: &Profile, today: NaiveDate) -> bool {
        let status = self.status(profile);
        self.is_editing()
            && status.dirty
            && status.is_valid()
            && Self::actions_offered(profile, today)
    }

    /// Commit the draft: produce the patch to apply upward and return to
    /// display mode. Returns `None` (and stays in edit mode) if the save
    /// gate does not hold.
    pub fn commit(&mut self, profile: &Profile, today: NaiveDate) -> Option<ProfilePatch> {
        if !self.can_save(profile, today) {
            return None;
        }
        let CardMode::Editing(draft) = std::mem::replace(&mut self.mode, CardMode::Display) else {
            return None;
        };

        let mut patch = ProfilePatch::default();
        if draft.gender != profile.gender {
            patch.gender = Some(draft.gender);
        }
        if draft.country != profile.country {
            patch.country = Some(draft.country);
        }
        if draft.description != profile.description {
            patch.description = Some(draft.description);
        }
        Some(patch)
    }

    /// Discard drafts and return to display mode with no upward mutation.
    pub fn cancel_edit(&mut self) {
        self.mode = CardMode::Display;
    }

    pub fn delete_pending(&self) -> bool {
        self.confirm_delete
    }

    /// Open the delete confirmation prompt. Only available from display
    /// mode; edit mode offers save/cancel instead.
    pub fn request_delete(&mut self, profile: &Profile, today: NaiveDate) -> bool {
        if self.is_editing() || !Self::actions_offered(profile, today) {
            return false;
        }
        self.confirm_delete = true;
        true
    }

    /// Answer the confirmation prompt. Returns true when a pending request
    /// was confirmed; the caller then performs the upward delete.
    pub fn confirm_delete(&mut self) -> bool {
        let pending = self.confirm_delete;
        self.confirm_delete = false;
        pending
    }

    /// Close the prompt with no effect.
    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Reset transient prompts when the card collapses in display mode.
    pub fn on_collapsed(&mut self) {
        if !self.is_editing() {
            self.confirm_delete = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlist_types::ProfileId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 8, 7)
    }

    fn adult() -> Profile {
        Profile {
            id: ProfileId(1),
            first: "Ada".to_string(),
            last: "Marsh".to_string(),
            dob: date(1988, 2, 20),
            gender: "Female".to_string(),
            country: "Ireland".to_string(),
            description: "Stage actor".to_string(),
            picture: "ada.jpg".to_string(),
        }
    }

    fn minor() -> Profile {
        Profile {
            dob: date(2010, 5, 1),
            ..adult()
        }
    }

    #[test]
    fn test_begin_edit_seeds_drafts_from_committed_values() {
        let profile = adult();
        let mut card = CardState::new();
        assert!(card.begin_edit(&profile, today()));

        let draft = card.draft().unwrap();
        assert_eq!(draft.gender, "Female");
        assert_eq!(draft.country, "Ireland");
        assert_eq!(draft.description, "Stage actor");
        assert!(!card.status(&profile).dirty);
    }

    #[test]
    fn test_begin_edit_refused_for_minor() {
        let profile = minor();
        let mut card = CardState::new();
        assert!(!card.begin_edit(&profile, today()));
        assert!(!card.is_editing());
    }

    #[test]
    fn test_draft_edits_recompute_dirty_and_validity() {
        let profile = adult();
        let mut card = CardState::new();
        card.begin_edit(&profile, today());

        card.set_country("Brazil123");
        let status = card.status(&profile);
        assert!(!status.country_valid);
        assert!(status.description_valid);
        assert!(status.dirty);
        assert!(!card.can_save(&profile, today()));
    }

    #[test]
    fn test_clean_draft_cannot_save() {
        let profile = adult();
        let mut card = CardState::new();
        card.begin_edit(&profile, today());
        // Valid but identical to committed values.
        assert!(!card.can_save(&profile, today()));
        assert!(card.commit(&profile, today()).is_none());
        assert!(card.is_editing());
    }

    #[test]
    fn test_commit_produces_patch_of_changed_fields_only() {
        let profile = adult();
        let mut card = CardState::new();
        card.begin_edit(&profile, today());
        card.set_country("Spain");

        let patch = card.commit(&profile, today()).unwrap();
        assert_eq!(patch.country.as_deref(), Some("Spain"));
        assert!(patch.gender.is_none());
        assert!(patch.description.is_none());
        assert!(!card.is_editing());
    }

    #[test]
    fn test_empty_description_blocks_save() {
        let profile = adult();
        let mut card = CardState::new();
        card.begin_edit(&profile, today());
        card.set_description("   ");

        let status = card.status(&profile);
        assert!(status.dirty);
        assert!(!status.description_valid);
        assert!(!card.can_save(&profile, today()));
    }

    #[test]
    fn test_cancel_discards_drafts_without_mutation() {
        let profile = adult();
        let committed = profile.clone();
        let mut card = CardState::new();
        card.begin_edit(&profile, today());
        card.set_gender("Other");
        card.set_country("Chile");

        card.cancel_edit();
        assert!(!card.is_editing());
        assert_eq!(profile, committed);

        // Re-entering seeds from committed values again.
        card.begin_edit(&profile, today());
        assert_eq!(card.draft().unwrap().country, "Ireland");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let profile = adult();
        let mut card = CardState::new();

        // Nothing pending: confirm is a no-op.
        assert!(!card.confirm_delete());

        assert!(card.request_delete(&profile, today()));
        assert!(card.delete_pending());
        assert!(card.confirm_delete());
        assert!(!card.delete_pending());
    }

    #[test]
    fn test_delete_prompt_can_be_cancelled() {
        let profile = adult();
        let mut card = CardState::new();
        card.request_delete(&profile, today());
        card.cancel_delete();
        assert!(!card.delete_pending());
        assert!(!card.confirm_delete());
    }

    #[test]
    fn test_delete_not_offered_for_minor() {
        let profile = minor();
        let mut card = CardState::new();
        assert!(!card.request_delete(&profile, today()));
        assert!(!card.delete_pending());
    }

    #[test]
    fn test_delete_not_requestable_while_editing() {
        let profile = adult();
        let mut card = CardState::new();
        card.begin_edit(&profile, today());
        assert!(!card.request_delete(&profile, today()));
    }

    #[test]
    fn test_toggle_suppressed_while_editing() {
        let profile = adult();
        let mut card = CardState::new();
        assert!(card.allows_toggle());
        card.begin_edit(&profile, today());
        assert!(!card.allows_toggle());
        card.cancel_edit();
        assert!(card.allows_toggle());
    }

    #[test]
    fn test_collapse_clears_pending_prompt() {
        let profile = adult();
        let mut card = CardState::new();
        card.request_delete(&profile, today());
        card.on_collapsed();
        assert!(!card.delete_pending());
    }
}
