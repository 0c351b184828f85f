//! # U-Cutstock Core
//!
//! Core optimization engine for 1-D (linear) cutting-stock allocation.
//!
//! Given the lengths of the stock profiles on the rack and the cut lengths an
//! order asks for, the engine decides which cuts to make from which profile so
//! that each profile wastes as little material as possible, charging the kerf
//! (material lost per saw pass) between adjacent cuts.
//!
//! ## Core Components
//!
//! - **Knapsack solver**: [`knapsack::solve`] - picks the best subset of
//!   pending cuts for one profile capacity
//! - **Allocation loop**: [`allocate`] - drives the solver across all
//!   profiles, largest first, over a shared shrinking pool of cuts
//! - **Remainder classification**: [`classify`] - scrap vs. reusable offcut
//!
//! Profiles are consumed greedily in descending length order, so the result
//! is locally optimal per profile rather than globally optimal across the
//! whole run.
//!
//! ## Example
//!
//! ```rust
//! use u_cutstock_core::{allocate, PlanConfig};
//!
//! let config = PlanConfig::new().with_tolerance(5);
//! let result = allocate(&[1000], &[400, 300, 300], &config);
//!
//! assert_eq!(result.plans[0].cuts, vec![400, 300]);
//! assert_eq!(result.plans[0].leftover, 295);
//! assert_eq!(result.unplaced, vec![300]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod allocate;
pub mod config;
pub mod knapsack;
pub mod remainder;
pub mod result;

pub use allocate::allocate;
pub use config::PlanConfig;
pub use knapsack::{solve, Selection, WeightedItem};
pub use remainder::{classify, RemainderKind};
pub use result::{AllocationResult, CutPlan, PlanSummary};

/// Integer length unit shared by profiles, cuts, and the kerf
/// (e.g. millimeters).
pub type Length = u64;
