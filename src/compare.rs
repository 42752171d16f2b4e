//! Comparison selection
//!
//! An ordered set of hotels picked for side-by-side comparison, keyed by
//! `hotel_id` and capped at [`COMPARISON_CAPACITY`] members.
//!
//! # Invariants
//!
//! - Never holds more than [`COMPARISON_CAPACITY`] hotels
//! - No two members share a `hotel_id`
//! - Members stay in the order they were added
//!
//! Adding a hotel to a full set is a silent no-op, reported to the caller
//! as [`ToggleOutcome::Ignored`] but never as an error.

use crate::types::Hotel;

/// Maximum number of hotels that can be compared at once
pub const COMPARISON_CAPACITY: usize = 4;

/// What a call to [`ComparisonSet::toggle`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The set was full and the hotel was not a member
    Ignored,
}

/// Hotels selected for comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonSet {
    hotels: Vec<Hotel>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the hotel if present, otherwise append it when there is room
    pub fn toggle(&mut self, hotel: &Hotel) -> ToggleOutcome {
        if let Some(pos) = self.position(&hotel.hotel_id) {
            self.hotels.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.is_full() {
            return ToggleOutcome::Ignored;
        }
        self.hotels.push(hotel.clone());
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.hotels.clear();
    }

    pub fn contains(&self, hotel_id: &str) -> bool {
        self.position(hotel_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.hotels.len() >= COMPARISON_CAPACITY
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hotel> {
        self.hotels.iter()
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    fn position(&self, hotel_id: &str) -> Option<usize> {
        self.hotels.iter().position(|h| h.hotel_id == hotel_id)
    }
}

impl<'a> IntoIterator for &'a ComparisonSet {
    type Item = &'a Hotel;
    type IntoIter = std::slice::Iter<'a, Hotel>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str) -> Hotel {
        Hotel::new(id, format!("Hotel {}", id))
    }

    fn ids(set: &ComparisonSet) -> Vec<&str> {
        set.iter().map(|h| h.hotel_id.as_str()).collect()
    }

    #[test]
    fn test_toggle_appends_in_order() {
        let mut set = ComparisonSet::new();
        assert_eq!(set.toggle(&hotel("A")), ToggleOutcome::Added);
        assert_eq!(set.toggle(&hotel("B")), ToggleOutcome::Added);
        assert_eq!(ids(&set), vec!["A", "B"]);
    }

    #[test]
    fn test_toggle_removes_only_that_hotel() {
        let mut set = ComparisonSet::new();
        set.toggle(&hotel("A"));
        set.toggle(&hotel("B"));
        assert_eq!(set.toggle(&hotel("A")), ToggleOutcome::Removed);
        assert_eq!(ids(&set), vec!["B"]);
    }

    #[test]
    fn test_toggle_full_set_is_ignored() {
        let mut set = ComparisonSet::new();
        for id in ["A", "B", "C", "D"] {
            set.toggle(&hotel(id));
        }
        assert!(set.is_full());
        assert_eq!(set.toggle(&hotel("E")), ToggleOutcome::Ignored);
        assert_eq!(ids(&set), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_full_set_still_allows_removal() {
        let mut set = ComparisonSet::new();
        for id in ["A", "B", "C", "D"] {
            set.toggle(&hotel(id));
        }
        assert_eq!(set.toggle(&hotel("C")), ToggleOutcome::Removed);
        assert_eq!(set.toggle(&hotel("E")), ToggleOutcome::Added);
        assert_eq!(ids(&set), vec!["A", "B", "D", "E"]);
    }

    #[test]
    fn test_membership_is_by_id() {
        let mut set = ComparisonSet::new();
        set.toggle(&hotel("A"));
        let renamed = Hotel::new("A", "Different name");
        assert_eq!(set.toggle(&renamed), ToggleOutcome::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut set = ComparisonSet::new();
        set.toggle(&hotel("A"));
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains("A"));
    }
}
