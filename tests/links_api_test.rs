//! Integration tests for the links public API.

use waypoint::key::ItemKey;
use waypoint::links::{LinkHistoryStore, LinkedPair};

#[test]
fn upsert_keeps_one_pair_with_latest_values() {
    let mut store = LinkHistoryStore::new();
    store.add_link("a", "b", Some(0.5));
    let first_stamp = store.pairs()[0].created_at;
    store.add_link("a", "b", Some(0.5));

    assert_eq!(store.total_links(), 1);
    assert_eq!(store.pairs()[0].confidence, Some(0.5));
    assert!(store.pairs()[0].created_at >= first_stamp);
}

#[test]
fn undo_redo_round_trip_restores_final_state() {
    let mut store = LinkHistoryStore::new();
    let n = 5;
    for i in 0..n {
        store.add_link(i, format!("new-{}", i), Some(0.1 * i as f64));
    }
    let final_state = store.pairs().to_vec();

    for remaining in (0..n).rev() {
        assert!(store.can_undo());
        assert!(store.undo());
        assert_eq!(store.total_links(), remaining as usize);
        assert!(store.can_redo());
    }
    assert!(!store.can_undo());

    for done in 1..=n {
        assert!(store.redo());
        assert_eq!(store.total_links(), done as usize);
        assert!(store.can_undo());
    }
    assert!(!store.can_redo());
    assert_eq!(store.pairs(), final_state.as_slice());
}

#[test]
fn sixty_operations_stay_within_history_bound() {
    let mut store = LinkHistoryStore::new();
    for i in 0..60 {
        store.add_link(i, i + 1000, None);
    }

    assert!(store.history_len() <= 50);
    assert_eq!(store.current_index(), store.history_len() - 1);
    assert!(store.undo());
    assert_eq!(store.total_links(), 59);
}

#[test]
fn average_confidence_treats_missing_as_zero() {
    let mut store = LinkHistoryStore::new();
    store.add_links(vec![
        LinkedPair::new("x", "y").with_confidence(0.9),
        LinkedPair::new("p", "q"),
    ]);
    assert!((store.average_confidence() - 0.45).abs() < f64::EPSILON);
}

#[test]
fn import_is_soft_on_bad_input() {
    let mut store = LinkHistoryStore::new();
    store.add_link("keep", "me", Some(1.0));

    assert!(!store.import_links("not json at all"));
    assert!(store.is_old_item_linked(&ItemKey::from("keep")));

    assert!(store.import_links(r#"[{"oldId": 1, "newId": "one"}]"#));
    assert!(store.is_new_item_linked(&ItemKey::from("one")));
    assert!(!store.is_old_item_linked(&ItemKey::from("keep")));

    assert!(store.undo());
    assert!(store.is_old_item_linked(&ItemKey::from("keep")));
}
