//! Unit tests for the selection slots

use super::*;

fn manager(slots: usize) -> SelectionManager {
    SelectionManager::new(slots).unwrap()
}

#[test]
fn test_new_bounds() {
    assert!(SelectionManager::new(1).is_err());
    assert!(SelectionManager::new(5).is_err());
    for n in MIN_SLOTS..=MAX_SLOTS {
        let m = manager(n);
        assert_eq!(m.slot_count(), n);
        assert!(m.occupied_selections().is_empty());
    }
    assert_eq!(SelectionManager::default().slot_count(), MIN_SLOTS);
}

#[test]
fn test_select_and_occupied_order() {
    let mut m = manager(4);
    m.select_at(2, "C").unwrap();
    m.select_at(0, "A").unwrap();
    assert_eq!(m.occupied_selections(), vec!["A", "C"]);
    assert_eq!(m.occupied_slots().collect::<Vec<_>>(), vec![(0, "A"), (2, "C")]);
    assert_eq!(m.first_empty(), Some(1));
}

#[test]
fn test_duplicate_selection_rejected() {
    let mut m = manager(2);
    m.select_at(0, "A").unwrap();

    match m.select_at(1, "A") {
        Err(CompareError::DuplicateSelection { id, slot }) => {
            assert_eq!(id, "A");
            assert_eq!(slot, 0);
        }
        other => panic!("Expected DuplicateSelection, got {:?}", other),
    }
    assert_eq!(m.get(1), None);
    assert_eq!(m.occupied_selections(), vec!["A"]);
}

#[test]
fn test_select_is_idempotent() {
    let mut once = manager(3);
    once.select_at(1, "B").unwrap();

    let mut twice = manager(3);
    twice.select_at(1, "B").unwrap();
    twice.select_at(1, "B").unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_rebind_replaces_different_id() {
    let mut m = manager(2);
    m.select_at(0, "A").unwrap();
    m.select_at(0, "B").unwrap();
    assert_eq!(m.occupied_selections(), vec!["B"]);
    assert!(!m.is_selected("A"));

    // The released id can now go elsewhere.
    m.select_at(1, "A").unwrap();
    assert_eq!(m.occupied_selections(), vec!["B", "A"]);
}

#[test]
fn test_select_out_of_range() {
    let mut m = manager(2);
    assert!(matches!(
        m.select_at(2, "A"),
        Err(CompareError::SlotOutOfRange {
            index: 2,
            slot_count: 2
        })
    ));
    assert!(m.occupied_selections().is_empty());
}

#[test]
fn test_clear_always_succeeds() {
    let mut m = manager(2);
    assert_eq!(m.clear_at(0), None);
    assert_eq!(m.clear_at(9), None);

    m.select_at(1, "A").unwrap();
    assert_eq!(m.clear_at(1), Some("A".to_string()));
    assert_eq!(m.clear_at(1), None);
    assert!(m.occupied_selections().is_empty());
}

#[test]
fn test_clear_all_keeps_slot_count() {
    let mut m = manager(3);
    m.select_at(0, "A").unwrap();
    m.select_at(2, "C").unwrap();
    m.clear_all();
    assert_eq!(m.slot_count(), 3);
    assert!(m.occupied_selections().is_empty());
}

#[test]
fn test_slot_count_grows_one_at_a_time() {
    let mut m = manager(2);
    assert!(m.set_slot_count(4).is_err());
    m.set_slot_count(2).unwrap();
    m.set_slot_count(3).unwrap();
    m.add_slot().unwrap();
    assert_eq!(m.slot_count(), 4);

    match m.add_slot() {
        Err(CompareError::InvalidSlotCount {
            requested, current, ..
        }) => {
            assert_eq!(requested, 5);
            assert_eq!(current, 4);
        }
        other => panic!("Expected InvalidSlotCount, got {:?}", other),
    }
}

#[test]
fn test_slot_count_never_decreases() {
    let mut m = manager(3);
    m.select_at(0, "A").unwrap();
    assert!(m.set_slot_count(2).is_err());
    assert_eq!(m.slot_count(), 3);
    assert_eq!(m.occupied_selections(), vec!["A"]);

    // Even with every slot empty.
    m.clear_all();
    assert!(m.set_slot_count(2).is_err());
    assert!(m.set_slot_count(1).is_err());
}

#[test]
fn test_uniqueness_over_operation_sequence() {
    let ids = ["A", "B", "C", "D", "E"];
    let mut m = manager(4);

    // Deterministic pseudo-random walk over select/clear calls.
    let mut seed: u32 = 17;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let slot = (seed >> 8) as usize % 4;
        let id = ids[(seed >> 16) as usize % ids.len()];
        if seed % 5 == 0 {
            m.clear_at(slot);
        } else {
            let _ = m.select_at(slot, id);
        }

        let occupied = m.occupied_selections();
        assert!(occupied.len() <= m.slot_count());
        let mut unique = occupied.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), occupied.len(), "duplicate in {:?}", occupied);
    }
}
