//! End-to-end card/roster flows: the card reports intent, the roster is
//! the sole mutator of the canonical collection.

use castlist_engine::{CardState, Roster};
use castlist_testing::fixtures;
use castlist_types::ProfileId;
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn loaded_roster() -> Roster {
    let mut roster = Roster::new();
    roster.replace(fixtures::sample_cast());
    roster
}

#[test]
fn test_save_flow_updates_exactly_one_record() {
    let mut roster = loaded_roster();
    let id = ProfileId(3);
    let mut card = CardState::new();

    let profile = roster.get(id).unwrap().clone();
    assert!(card.begin_edit(&profile, today()));
    card.set_country("New Zealand");
    card.set_description("Documentary narrator.");

    let patch = card.commit(&profile, today()).expect("save gate holds");
    assert!(roster.apply_edit(id, patch));

    assert_eq!(roster.len(), 5);
    let edited = roster.get(id).unwrap();
    assert_eq!(edited.country, "New Zealand");
    assert_eq!(edited.description, "Documentary narrator.");
    assert_eq!(edited.gender, profile.gender);

    for other in fixtures::sample_cast().iter().filter(|p| p.id != id) {
        assert_eq!(roster.get(other.id).unwrap(), other);
    }
}

#[test]
fn test_cancel_flow_leaves_record_untouched() {
    let mut roster = loaded_roster();
    let id = ProfileId(1);
    let mut card = CardState::new();

    let before = roster.get(id).unwrap().clone();
    card.begin_edit(&before, today());
    card.set_gender("Other");
    card.set_country("Chile");
    card.cancel_edit();

    assert_eq!(roster.get(id).unwrap(), &before);
    assert!(!card.is_editing());
}

#[test]
fn test_confirmed_delete_flow() {
    let mut roster = loaded_roster();
    let id = ProfileId(2);
    let mut card = CardState::new();

    let profile = roster.get(id).unwrap().clone();
    assert!(card.request_delete(&profile, today()));
    if card.confirm_delete() {
        roster.delete(id);
    }

    assert_eq!(roster.len(), 4);
    assert!(roster.get(id).is_none());
}

#[test]
fn test_cancelled_delete_flow_changes_nothing() {
    let mut roster = loaded_roster();
    let id = ProfileId(2);
    let mut card = CardState::new();

    let profile = roster.get(id).unwrap().clone();
    card.request_delete(&profile, today());
    card.cancel_delete();
    if card.confirm_delete() {
        roster.delete(id);
    }

    assert_eq!(roster.len(), 5);
    assert!(roster.get(id).is_some());
}

#[test]
fn test_minor_gets_no_edit_or_delete() {
    let roster = loaded_roster();
    // Vera Moss, born 2012: under 18 on the evaluation date.
    let minor = roster.get(ProfileId(5)).unwrap();
    assert!(!minor.is_adult_on(today()));

    let mut card = CardState::new();
    assert!(!card.begin_edit(minor, today()));
    assert!(!card.request_delete(minor, today()));
}

#[test]
fn test_expanded_record_survives_unrelated_delete() {
    let mut roster = loaded_roster();
    roster.toggle_expand(ProfileId(3));
    roster.delete(ProfileId(1));
    assert!(roster.is_expanded(ProfileId(3)));
}
