//! Offcut classification.
//!
//! A profile's leftover is either scrap to write off or a piece long enough
//! to go back on the rack as stock for a later run. The dividing line is the
//! smallest profile length known to the run, unless the configuration
//! overrides it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Length;

/// Disposition of a profile's leftover material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RemainderKind {
    /// Too short to reuse; written off.
    Scrap,
    /// Long enough to re-enter stock as raw material.
    Reusable,
}

impl std::fmt::Display for RemainderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scrap => write!(f, "Scrap"),
            Self::Reusable => write!(f, "Reusable"),
        }
    }
}

/// Classifies a leftover against the reuse threshold.
///
/// Strictly shorter than the threshold is scrap; exactly the threshold is
/// reusable. Classification is informational only: reusable offcuts do not
/// re-enter the current run's pool.
pub fn classify(leftover: i64, threshold: Length) -> RemainderKind {
    if leftover < threshold as i64 {
        RemainderKind::Scrap
    } else {
        RemainderKind::Reusable
    }
}
