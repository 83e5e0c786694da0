use castlist_engine::{CardState, Roster};
use castlist_types::{GenderOption, ProfileId};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    List,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditField {
    Gender,
    Country,
    Description,
}

impl EditField {
    fn next(self) -> Self {
        match self {
            EditField::Gender => EditField::Country,
            EditField::Country => EditField::Description,
            EditField::Description => EditField::Gender,
        }
    }

    fn prev(self) -> Self {
        match self {
            EditField::Gender => EditField::Description,
            EditField::Country => EditField::Gender,
            EditField::Description => EditField::Country,
        }
    }
}

/// All browser state: the roster (canonical collection, search term,
/// expanded id), one CardState per record touched so far, and the cursor.
///
/// Key routing is deterministic and layered: an open delete prompt swallows
/// everything, then search focus, then an in-progress edit, then list
/// navigation.
pub(crate) struct AppState {
    pub roster: Roster,
    pub cards: HashMap<ProfileId, CardState>,
    pub focus: Focus,
    pub selected: usize,
    pub edit_field: EditField,
    pub today: NaiveDate,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(roster: Roster, today: NaiveDate) -> Self {
        Self {
            roster,
            cards: HashMap::new(),
            focus: Focus::List,
            selected: 0,
            edit_field: EditField::Gender,
            today,
            should_quit: false,
        }
    }

    pub fn visible_ids(&self) -> Vec<ProfileId> {
        self.roster.visible().iter().map(|p| p.id).collect()
    }

    pub fn selected_id(&self) -> Option<ProfileId> {
        self.visible_ids().get(self.selected).copied()
    }

    /// Card state for rendering; records never touched read as defaults.
    pub fn card(&self, id: ProfileId) -> CardState {
        self.cards.get(&id).cloned().unwrap_or_default()
    }

    fn card_mut(&mut self, id: ProfileId) -> &mut CardState {
        self.cards.entry(id).or_default()
    }

    /// The record whose delete confirmation prompt is open, if any.
    pub fn delete_prompt_target(&self) -> Option<ProfileId> {
        self.cards
            .iter()
            .find(|(_, card)| card.delete_pending())
            .map(|(id, _)| *id)
    }

    /// The record currently in edit mode, if any.
    pub fn editing_id(&self) -> Option<ProfileId> {
        self.cards
            .iter()
            .find(|(_, card)| card.is_editing())
            .map(|(id, _)| *id)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_ids().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_ids().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // An open confirmation prompt is modal.
        if let Some(id) = self.delete_prompt_target() {
            self.handle_confirm_key(id, key.code);
            return;
        }

        if self.focus == Focus::Search {
            self.handle_search_key(key.code);
            return;
        }

        if let Some(id) = self.editing_id() {
            self.handle_edit_key(id, key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('e') => self.begin_edit_selected(),
            KeyCode::Char('d') => self.request_delete_selected(),
            KeyCode::Esc => {
                self.roster.set_search("");
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, id: ProfileId, code: KeyCode) {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if self.card_mut(id).confirm_delete() {
                    self.roster.delete(id);
                    self.cards.remove(&id);
                    self.clamp_selection();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => self.card_mut(id).cancel_delete(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
                self.focus = Focus::List;
                self.clamp_selection();
            }
            // Live filter: the ordering updates on every keystroke.
            KeyCode::Backspace => {
                let mut term = self.roster.search().to_string();
                term.pop();
                self.roster.set_search(term);
                self.clamp_selection();
            }
            KeyCode::Char(c) => {
                let mut term = self.roster.search().to_string();
                term.push(c);
                self.roster.set_search(term);
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, id: ProfileId, code: KeyCode) {
        let Some(profile) = self.roster.get(id).cloned() else {
            // Record vanished under the editor; drop the draft.
            self.card_mut(id).cancel_edit();
            return;
        };

        match code {
            KeyCode::Esc => self.card_mut(id).cancel_edit(),
            KeyCode::Tab => self.edit_field = self.edit_field.next(),
            KeyCode::BackTab => self.edit_field = self.edit_field.prev(),
            KeyCode::Enter => {
                let today = self.today;
                if let Some(patch) = self.card_mut(id).commit(&profile, today) {
                    self.roster.apply_edit(id, patch);
                }
            }
            code => match self.edit_field {
                EditField::Gender => self.cycle_gender(id, code),
                EditField::Country | EditField::Description => self.edit_text(id, code),
            },
        }
    }

    fn cycle_gender(&mut self, id: ProfileId, code: KeyCode) {
        let current = self
            .card(id)
            .draft()
            .map(|d| d.gender.clone())
            .unwrap_or_default();
        // Free-text committed values start the selector at its first entry.
        let option = GenderOption::from_label(&current);
        let picked = match code {
            KeyCode::Left | KeyCode::Up => option.map(|o| o.prev()),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => option.map(|o| o.next()),
            _ => return,
        }
        .unwrap_or(GenderOption::Male);

        self.card_mut(id).set_gender(picked.label());
    }

    fn edit_text(&mut self, id: ProfileId, code: KeyCode) {
        let Some(draft) = self.card(id).draft().cloned() else {
            return;
        };
        let field = self.edit_field;
        let mut value = match field {
            EditField::Country => draft.country,
            EditField::Description => draft.description,
            EditField::Gender => return,
        };

        match code {
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char(c) => value.push(c),
            _ => return,
        }

        let card = self.card_mut(id);
        match field {
            EditField::Country => card.set_country(value),
            EditField::Description => card.set_description(value),
            EditField::Gender => {}
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if !self.card(id).allows_toggle() {
            return;
        }

        let was_expanded = self.roster.is_expanded(id);
        self.roster.toggle_expand(id);
        if was_expanded {
            self.card_mut(id).on_collapsed();
        }
    }

    fn begin_edit_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        // The edit control lives in the expanded card body.
        if !self.roster.is_expanded(id) {
            return;
        }
        let Some(profile) = self.roster.get(id).cloned() else {
            return;
        };

        let today = self.today;
        if self.card_mut(id).begin_edit(&profile, today) {
            self.edit_field = EditField::Gender;
        }
    }

    fn request_delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        if !self.roster.is_expanded(id) {
            return;
        }
        let Some(profile) = self.roster.get(id).cloned() else {
            return;
        };

        let today = self.today;
        self.card_mut(id).request_delete(&profile, today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castlist_types::Profile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile(id: i64, first: &str, last: &str, dob: NaiveDate) -> Profile {
        Profile {
            id: ProfileId(id),
            first: first.to_string(),
            last: last.to_string(),
            dob,
            gender: "Other".to_string(),
            country: "Norway".to_string(),
            description: "Performer".to_string(),
            picture: String::new(),
        }
    }

    fn app() -> AppState {
        let mut roster = Roster::new();
        roster.replace(vec![
            profile(1, "Ada", "Marsh", date(1988, 2, 20)),
            profile(2, "Ben", "Adler", date(1975, 11, 3)),
            profile(3, "Vera", "Moss", date(2012, 4, 2)),
        ]);
        AppState::new(roster, date(2026, 8, 7))
    }

    fn press(app: &mut AppState, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_typing_filters_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);

        type_str(&mut app, "adler");
        assert_eq!(app.roster.search(), "adler");
        assert_eq!(app.visible_ids()[0], ProfileId(2));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.roster.search(), "adle");
    }

    #[test]
    fn test_expand_edit_save_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Enter); // expand Ada
        assert!(app.roster.is_expanded(ProfileId(1)));

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editing_id(), Some(ProfileId(1)));

        // Gender field: cycle from free text to the first option.
        press(&mut app, KeyCode::Right);
        // Country field: retype the value.
        press(&mut app, KeyCode::Tab);
        for _ in 0.."Norway".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "Chile");

        press(&mut app, KeyCode::Enter); // save
        assert_eq!(app.editing_id(), None);

        let edited = app.roster.get(ProfileId(1)).unwrap();
        assert_eq!(edited.country, "Chile");
        assert_eq!(edited.gender, "Male");
    }

    #[test]
    fn test_invalid_country_blocks_save() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab); // country
        type_str(&mut app, "123");

        press(&mut app, KeyCode::Enter); // save refused, still editing
        assert_eq!(app.editing_id(), Some(ProfileId(1)));
        assert_eq!(app.roster.get(ProfileId(1)).unwrap().country, "Norway");

        press(&mut app, KeyCode::Esc); // cancel discards the draft
        assert_eq!(app.editing_id(), None);
        assert_eq!(app.roster.get(ProfileId(1)).unwrap().country, "Norway");
    }

    #[test]
    fn test_toggle_is_suppressed_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));

        // Enter now means "save", not "collapse"; the card stays expanded,
        // and with a clean draft it stays in edit mode too.
        press(&mut app, KeyCode::Enter);
        assert!(app.roster.is_expanded(ProfileId(1)));
        assert_eq!(app.editing_id(), Some(ProfileId(1)));
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.delete_prompt_target(), Some(ProfileId(1)));

        // Unrelated keys are swallowed by the modal.
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.delete_prompt_target(), None);
        assert_eq!(app.roster.len(), 2);
        assert!(app.roster.get(ProfileId(1)).is_none());
    }

    #[test]
    fn test_delete_can_be_declined() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.delete_prompt_target(), None);
        assert_eq!(app.roster.len(), 3);
    }

    #[test]
    fn test_minor_cannot_enter_edit_or_delete() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down); // Vera Moss, the minor
        press(&mut app, KeyCode::Enter);
        assert!(app.roster.is_expanded(ProfileId(3)));

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.editing_id(), None);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.delete_prompt_target(), None);
    }

    #[test]
    fn test_selection_clamps_when_filter_shrinks_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_id(), Some(ProfileId(3)));

        // Every record stays visible under any term, so the selection
        // index stays in range; the record under the cursor may change.
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "moss");
        assert_eq!(app.visible_ids().len(), 3);
        assert_eq!(app.visible_ids()[0], ProfileId(3));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
