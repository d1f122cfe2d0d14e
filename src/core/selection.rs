//! Bounded, ordered player selection for the comparison view.
//!
//! Slots are independent cells, each empty or bound to one player id. The
//! only cross-slot rule is uniqueness: an id is bound to at most one slot.
//! Slot count starts between [`MIN_SLOTS`] and [`MAX_SLOTS`] and can grow one
//! slot at a time; it never shrinks, so no selection is ever dropped silently.
//!
//! Mutations take `&mut self`; callers sharing a manager across threads must
//! wrap it in a lock so only one mutation is in flight.

use crate::error::{CompareError, Result};
use log::debug;
use serde::Serialize;

#[cfg(test)]
mod tests;

pub const MIN_SLOTS: usize = 2;
pub const MAX_SLOTS: usize = 4;

/// Ordered comparison slots.
///
/// # Examples
///
/// ```rust
/// use nba_compare::{CompareError, SelectionManager};
///
/// let mut selection = SelectionManager::new(2).unwrap();
/// selection.select_at(0, "A").unwrap();
///
/// let err = selection.select_at(1, "A").unwrap_err();
/// assert!(matches!(err, CompareError::DuplicateSelection { slot: 0, .. }));
/// assert_eq!(selection.occupied_selections(), vec!["A"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionManager {
    slots: Vec<Option<String>>,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self {
            slots: vec![None; MIN_SLOTS],
        }
    }
}

impl SelectionManager {
    /// Create a manager with `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Result<Self> {
        if !(MIN_SLOTS..=MAX_SLOTS).contains(&slot_count) {
            return Err(invalid_slot_count(slot_count, 0));
        }
        Ok(Self {
            slots: vec![None; slot_count],
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// The id bound at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// Change the slot count.
    ///
    /// Setting the current count is a no-op. Growth is one slot at a time up
    /// to [`MAX_SLOTS`]; any decrease is rejected.
    pub fn set_slot_count(&mut self, n: usize) -> Result<()> {
        let current = self.slots.len();
        if n == current {
            return Ok(());
        }
        if n != current + 1 || n > MAX_SLOTS {
            debug!("rejecting slot count change {} -> {}", current, n);
            return Err(invalid_slot_count(n, current));
        }
        self.slots.push(None);
        Ok(())
    }

    /// Grow by one empty slot.
    pub fn add_slot(&mut self) -> Result<()> {
        self.set_slot_count(self.slots.len() + 1)
    }

    /// Bind slot `index` to `id`.
    ///
    /// Rebinding a slot to its current id is a no-op. A slot bound to a
    /// different id is cleared and rebound.
    pub fn select_at(&mut self, index: usize, id: &str) -> Result<()> {
        let slot_count = self.slots.len();
        if index >= slot_count {
            return Err(CompareError::SlotOutOfRange { index, slot_count });
        }

        if let Some(slot) = self.slot_of(id) {
            if slot == index {
                return Ok(());
            }
            debug!("{} already selected in slot {}", id, slot);
            return Err(CompareError::DuplicateSelection {
                id: id.to_string(),
                slot,
            });
        }

        if let Some(previous) = self.clear_at(index) {
            debug!("replacing {} in slot {} with {}", previous, index, id);
        }
        self.slots[index] = Some(id.to_string());
        Ok(())
    }

    /// Empty slot `index` and return what it held. Never fails; an empty or
    /// out-of-range slot is left as it is.
    pub fn clear_at(&mut self, index: usize) -> Option<String> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Empty every slot; the slot count is unchanged.
    pub fn clear_all(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Bound ids in slot order.
    pub fn occupied_selections(&self) -> Vec<&str> {
        self.slots.iter().filter_map(|s| s.as_deref()).collect()
    }

    /// Bound `(slot index, id)` pairs in slot order.
    pub fn occupied_slots(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|id| (i, id)))
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.slot_of(id).is_some()
    }

    /// First empty slot, for "add to comparison" actions.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn slot_of(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.as_deref() == Some(id))
    }
}

fn invalid_slot_count(requested: usize, current: usize) -> CompareError {
    CompareError::InvalidSlotCount {
        requested,
        current,
        min: MIN_SLOTS,
        max: MAX_SLOTS,
    }
}
