//! Single-profile knapsack solver.
//!
//! Picks the subset of pending cuts that uses as much of one profile as
//! possible. This is a 0/1 knapsack dynamic program in the Gilmore-Gomory
//! tradition: the profile length is the knapsack capacity, a cut's weight is
//! its length plus the kerf, and its value is the bare length.
//!
//! # Algorithm
//!
//! The DP state is the achievable cumulative weight. The state table maps
//! each reachable weight (up to the capacity) to the best cumulative value
//! for exactly that weight, together with the item indices producing it.
//! Items are processed in caller order; each item extends a snapshot of the
//! table taken before the item, so no item can enter a selection twice.
//! States keep their insertion order: when several weights tie for the best
//! value, the earliest discovered state wins.
//!
//! The item examined while the table still holds only the empty state is
//! charged no leading kerf: its weight is reduced by the full kerf before the
//! capacity check. Which item that is depends on caller order, and the
//! reduction applies whether or not the item ends up selected.
//!
//! # Example
//!
//! ```rust
//! use u_cutstock_core::knapsack::{solve, WeightedItem};
//!
//! let items = [WeightedItem::for_cut(400, 5), WeightedItem::for_cut(300, 5)];
//! let selection = solve(&items, 1000, 5);
//!
//! assert_eq!(selection.indices, vec![0, 1]);
//! assert_eq!(selection.total_value, 700);
//! assert_eq!(selection.leftover, 295);
//! ```

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Length;

/// One candidate cut as the solver sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightedItem {
    /// Capacity cost: the cut length plus the kerf.
    pub weight: Length,

    /// Material gained: the bare cut length.
    pub value: Length,
}

impl WeightedItem {
    /// Builds the solver item for a cut of `length` under the given kerf.
    pub fn for_cut(length: Length, tolerance: Length) -> Self {
        Self {
            weight: length + tolerance,
            value: length,
        }
    }
}

/// Best subset found for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    /// Indices into the solver input, in discovery order.
    pub indices: Vec<usize>,

    /// Sum of the selected values.
    pub total_value: Length,

    /// Material left on the profile after the selected cuts and the kerf
    /// between them. Negative when a lone kerf-exempt cut leaves less than
    /// one kerf behind.
    pub leftover: i64,
}

#[derive(Debug, Clone)]
struct State {
    weight: Length,
    value: Length,
    picks: Vec<usize>,
}

/// Solves the 0/1 knapsack for one profile.
///
/// Items heavier than the remaining capacity are silently never selected.
/// An empty item list yields an empty selection with `leftover == capacity`.
pub fn solve(items: &[WeightedItem], capacity: Length, tolerance: Length) -> Selection {
    // Insertion-ordered state table: `states` holds discovery order, `slots`
    // maps a cumulative weight to its position in `states`.
    let mut states = vec![State {
        weight: 0,
        value: 0,
        picks: Vec::new(),
    }];
    let mut slots: HashMap<Length, usize> = HashMap::from([(0, 0)]);

    for (index, item) in items.iter().enumerate() {
        // No leading kerf while only the empty state is reachable.
        let weight = if states.len() == 1 {
            item.weight.saturating_sub(tolerance)
        } else {
            item.weight
        };

        let snapshot = states.clone();
        for state in &snapshot {
            let reached = state.weight + weight;
            if reached > capacity {
                continue;
            }
            let value = state.value + item.value;
            match slots.get(&reached).copied() {
                Some(slot) if states[slot].value >= value => {}
                Some(slot) => {
                    states[slot].value = value;
                    states[slot].picks = with_pick(&state.picks, index);
                }
                None => {
                    slots.insert(reached, states.len());
                    states.push(State {
                        weight: reached,
                        value,
                        picks: with_pick(&state.picks, index),
                    });
                }
            }
        }
    }

    // Earliest state wins a value tie.
    let best = states
        .iter()
        .reduce(|best, state| if state.value > best.value { state } else { best })
        .expect("state table holds at least the empty state");

    Selection {
        indices: best.picks.clone(),
        total_value: best.value,
        leftover: leftover(best.picks.len(), best.value, capacity, tolerance),
    }
}

fn with_pick(picks: &[usize], index: usize) -> Vec<usize> {
    let mut picks = picks.to_vec();
    picks.push(index);
    picks
}

/// Material left on the profile: `n - 1` kerf losses between `n` cuts,
/// except that a lone cut not filling the profile is still charged one kerf.
fn leftover(cuts: usize, value: Length, capacity: Length, tolerance: Length) -> i64 {
    if cuts == 0 {
        return capacity as i64;
    }
    if cuts == 1 && value != capacity {
        return capacity as i64 - value as i64 - tolerance as i64;
    }
    capacity as i64 - value as i64 - tolerance as i64 * (cuts as i64 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuts(lengths: &[Length], tolerance: Length) -> Vec<WeightedItem> {
        lengths
            .iter()
            .map(|&length| WeightedItem::for_cut(length, tolerance))
            .collect()
    }

    #[test]
    fn test_empty_items() {
        let selection = solve(&[], 1000, 5);
        assert!(selection.indices.is_empty());
        assert_eq!(selection.total_value, 0);
        assert_eq!(selection.leftover, 1000);
    }

    #[test]
    fn test_reference_scenario() {
        let selection = solve(&cuts(&[400, 300, 300], 5), 1000, 5);
        assert_eq!(selection.indices, vec![0, 1]);
        assert_eq!(selection.total_value, 700);
        assert_eq!(selection.leftover, 295);
    }

    #[test]
    fn test_oversize_item_excluded() {
        let selection = solve(&cuts(&[2000, 300], 0), 1000, 0);
        assert_eq!(selection.indices, vec![1]);
        assert_eq!(selection.total_value, 300);
    }

    #[test]
    fn test_discount_falls_to_next_item_after_oversize() {
        // The first item never fits, so the second is still examined against
        // the lone empty state and gets the kerf exemption; without it the
        // 10-long cut could not enter the 10-long profile.
        let selection = solve(&cuts(&[20, 10], 2), 10, 2);
        assert_eq!(selection.indices, vec![1]);
        assert_eq!(selection.total_value, 10);
        assert_eq!(selection.leftover, 0);
    }

    #[test]
    fn test_tie_break_prefers_earliest_state() {
        // Both cuts reach value 5, at weights 5 (discounted first item) and
        // 6. The earlier-inserted state wins, so item 0 is selected.
        let selection = solve(&cuts(&[5, 5], 1), 10, 1);
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.total_value, 5);
        assert_eq!(selection.leftover, 4);
    }

    #[test]
    fn test_single_cut_filling_profile() {
        let selection = solve(&cuts(&[300], 0), 300, 0);
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.leftover, 0);
    }

    #[test]
    fn test_single_cut_charges_one_kerf() {
        // One cut, profile not filled: one kerf is charged even though no
        // second cut follows.
        let selection = solve(&cuts(&[500], 10), 1000, 10);
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.leftover, 1000 - 500 - 10);
    }

    #[test]
    fn test_leftover_can_go_negative() {
        // A lone kerf-exempt cut of 8 on a 10-profile with kerf 5: the
        // remainder formula still charges the kerf.
        let selection = solve(&cuts(&[8], 5), 10, 5);
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.leftover, -3);
    }

    #[test]
    fn test_zero_tolerance() {
        let selection = solve(&cuts(&[60, 40, 30], 0), 100, 0);
        assert_eq!(selection.indices, vec![0, 1]);
        assert_eq!(selection.total_value, 100);
        assert_eq!(selection.leftover, 0);
    }

    #[test]
    fn test_better_value_replaces_state() {
        // Weight 8 is reached twice with t=0: first by 3+5, then by 8 alone.
        // Equal value keeps the earlier selection.
        let selection = solve(&cuts(&[3, 5, 8], 0), 8, 0);
        assert_eq!(selection.indices, vec![0, 1]);
        assert_eq!(selection.total_value, 8);
    }
}
