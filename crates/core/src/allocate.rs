//! Multi-profile allocation loop.
//!
//! Processes profiles largest first. Each profile gets one knapsack solve
//! over the cuts still pending; solved cuts leave the pool and the remaining
//! pool is re-sorted before the next profile. Cuts still pending when the
//! profiles run out are reported as unplaced.

use crate::config::PlanConfig;
use crate::knapsack::{self, WeightedItem};
use crate::remainder::classify;
use crate::result::{AllocationResult, CutPlan};
use crate::Length;

/// Allocates the order onto the profiles.
///
/// Inputs are multisets: equal lengths are distinct resources and distinct
/// requests. The caller guarantees positive lengths; the engine does not
/// re-validate them.
pub fn allocate(profiles: &[Length], order: &[Length], config: &PlanConfig) -> AllocationResult {
    let mut profiles = profiles.to_vec();
    profiles.sort_unstable_by(|a, b| b.cmp(a));

    let mut pool = order.to_vec();
    pool.sort_unstable_by(|a, b| b.cmp(a));

    // Profiles are descending, so the smallest is last.
    let threshold = config
        .reuse_threshold
        .or_else(|| profiles.last().copied())
        .unwrap_or(0);

    let mut plans = Vec::with_capacity(profiles.len());

    for &profile in &profiles {
        let items: Vec<WeightedItem> = pool
            .iter()
            .map(|&length| WeightedItem::for_cut(length, config.tolerance))
            .collect();

        let selection = knapsack::solve(&items, profile, config.tolerance);

        // Remove by position: equal lengths are distinct pool entries.
        let cuts: Vec<Length> = selection.indices.iter().map(|&i| pool[i]).collect();
        let mut taken = vec![false; pool.len()];
        for &i in &selection.indices {
            taken[i] = true;
        }
        let mut slot = 0;
        pool.retain(|_| {
            let keep = !taken[slot];
            slot += 1;
            keep
        });

        // The pool stays descending between profiles.
        pool.sort_unstable_by(|a, b| b.cmp(a));

        log::debug!(
            "profile {}: assigned {:?}, leftover {}, {} cut(s) pending",
            profile,
            cuts,
            selection.leftover,
            pool.len()
        );

        plans.push(CutPlan {
            profile,
            cuts,
            leftover: selection.leftover,
            remainder: classify(selection.leftover, threshold),
        });
    }

    if !pool.is_empty() {
        log::warn!(
            "{} cut(s) could not be placed on any profile: {:?}",
            pool.len(),
            pool
        );
    }

    AllocationResult {
        plans,
        unplaced: pool,
    }
}
