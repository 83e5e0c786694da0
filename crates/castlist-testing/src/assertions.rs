//! Custom assertions for castlist-specific invariants.

use castlist_types::Profile;

fn name_matches(profile: &Profile, term: &str) -> bool {
    profile
        .full_name()
        .to_lowercase()
        .contains(&term.to_lowercase())
}

/// Assert that `visible` is a stable partition of `all` by the search term:
/// every match precedes every non-match, both groups keep their original
/// relative order, and no record was added or dropped.
pub fn assert_stable_partition(all: &[Profile], visible: &[&Profile], term: &str) {
    assert_eq!(
        visible.len(),
        all.len(),
        "partition changed the record count"
    );

    let boundary = visible.iter().take_while(|p| name_matches(p, term)).count();
    assert!(
        visible[boundary..].iter().all(|p| !name_matches(p, term)),
        "a match appears after a non-match for term {:?}",
        term
    );

    let original_order = |group: &[&Profile]| {
        let positions: Vec<usize> = group
            .iter()
            .map(|p| all.iter().position(|q| q.id == p.id).expect("record from source"))
            .collect();
        positions.windows(2).all(|w| w[0] < w[1])
    };
    assert!(
        original_order(&visible[..boundary]),
        "matches lost their original relative order"
    );
    assert!(
        original_order(&visible[boundary..]),
        "non-matches lost their original relative order"
    );
}
