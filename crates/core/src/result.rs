//! Allocation result representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::remainder::RemainderKind;
use crate::Length;

/// Cutting map for one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutPlan {
    /// Stock length of this profile.
    pub profile: Length,

    /// Assigned cut lengths, in solver discovery order.
    pub cuts: Vec<Length>,

    /// Material left after the cuts and the kerf between them.
    pub leftover: i64,

    /// Disposition of the leftover.
    pub remainder: RemainderKind,
}

impl CutPlan {
    /// Total requested length produced from this profile.
    pub fn assigned(&self) -> Length {
        self.cuts.iter().sum()
    }

    /// Returns true if no cut was assigned to this profile.
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }
}

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResult {
    /// One cutting map per profile, largest profile first.
    pub plans: Vec<CutPlan>,

    /// Cut lengths no profile could take, longest first.
    pub unplaced: Vec<Length>,
}

impl AllocationResult {
    /// Returns true if every ordered cut was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Number of cuts placed across all profiles.
    pub fn placed_count(&self) -> usize {
        self.plans.iter().map(|plan| plan.cuts.len()).sum()
    }

    /// Number of cuts left without a profile.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Total leftover material across all profiles.
    pub fn total_leftover(&self) -> i64 {
        self.plans.iter().map(|plan| plan.leftover).sum()
    }

    /// Assigned length over total stock length, 0.0 for an empty profile set.
    pub fn utilization(&self) -> f64 {
        let stock: Length = self.plans.iter().map(|plan| plan.profile).sum();
        if stock == 0 {
            return 0.0;
        }
        let assigned: Length = self.plans.iter().map(CutPlan::assigned).sum();
        assigned as f64 / stock as f64
    }

    /// Condenses the result for reporting.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from(self)
    }
}

/// Summary statistics for an allocation run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Profiles available to the run.
    pub profiles: usize,
    /// Cuts placed.
    pub placed: usize,
    /// Cuts left unplaced.
    pub unplaced: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Total leftover material.
    pub total_leftover: i64,
}

impl From<&AllocationResult> for PlanSummary {
    fn from(result: &AllocationResult) -> Self {
        Self {
            profiles: result.plans.len(),
            placed: result.placed_count(),
            unplaced: result.unplaced_count(),
            utilization_percent: result.utilization() * 100.0,
            total_leftover: result.total_leftover(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(profile: Length, cuts: Vec<Length>, leftover: i64) -> CutPlan {
        CutPlan {
            profile,
            cuts,
            leftover,
            remainder: RemainderKind::Scrap,
        }
    }

    #[test]
    fn test_plan_assigned() {
        let plan = plan(1000, vec![400, 300], 295);
        assert_eq!(plan.assigned(), 700);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_result_counts() {
        let result = AllocationResult {
            plans: vec![plan(1000, vec![400, 300], 295), plan(500, vec![], 500)],
            unplaced: vec![300],
        };

        assert!(!result.all_placed());
        assert_eq!(result.placed_count(), 2);
        assert_eq!(result.unplaced_count(), 1);
        assert_eq!(result.total_leftover(), 795);
    }

    #[test]
    fn test_utilization() {
        let result = AllocationResult {
            plans: vec![plan(1000, vec![400, 300], 295), plan(500, vec![], 500)],
            unplaced: vec![],
        };

        assert!((result.utilization() - 700.0 / 1500.0).abs() < 1e-10);
    }

    #[test]
    fn test_utilization_without_profiles() {
        let result = AllocationResult {
            plans: vec![],
            unplaced: vec![300],
        };

        assert_eq!(result.utilization(), 0.0);
    }

    #[test]
    fn test_summary() {
        let result = AllocationResult {
            plans: vec![plan(1000, vec![400, 300], 295)],
            unplaced: vec![300],
        };

        let summary = result.summary();
        assert_eq!(summary.profiles, 1);
        assert_eq!(summary.placed, 2);
        assert_eq!(summary.unplaced, 1);
        assert!((summary.utilization_percent - 70.0).abs() < 1e-10);
        assert_eq!(summary.total_leftover, 295);
    }
}
