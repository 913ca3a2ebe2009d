//! Tiered volume pricing.
//!
//! The monthly cost is a piecewise-linear function of node count: each tier
//! prices the nodes between its lower and upper bound, and the sum is raised
//! to the plan's minimum monthly fee.
//!
//! ```rust
//! use quotemap::pricing::{compute_pricing, PricingPlan};
//!
//! let result = compute_pricing(60_000, &PricingPlan::default());
//! assert_eq!(result.monthly_cost, 45_000.0);
//! assert_eq!(result.annual_cost, 540_000.0);
//! ```

pub mod bounds;
pub mod calculator;
pub mod tier;

pub use bounds::{NodeBounds, NodeCount, DEFAULT_NODES, MAX_NODES, MIN_NODES};
pub use calculator::{
    accrue_tiers, compute_pricing, PricingPlan, PricingResult, TierCharge,
    DEFAULT_ANNUAL_DISCOUNT_PERCENT, DEFAULT_MINIMUM_MONTHLY_FEE,
};
pub use tier::{PricingTier, TierSchedule};
