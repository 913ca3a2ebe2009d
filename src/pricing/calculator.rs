use super::bounds::{NodeBounds, NodeCount, DEFAULT_NODES};
use super::tier::TierSchedule;
use crate::errors::{QuotemapError, Result};
use serde::Serialize;
use tracing::debug;

pub const DEFAULT_MINIMUM_MONTHLY_FEE: f64 = 10_000.0;
pub const DEFAULT_ANNUAL_DISCOUNT_PERCENT: f64 = 20.0;

/// Immutable pricing configuration handed to [`compute_pricing`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub schedule: TierSchedule,
    pub minimum_monthly_fee: f64,
    /// Percentage shown as the saving for annual billing. Informational only.
    pub annual_discount_percent: f64,
    pub bounds: NodeBounds,
    pub default_node_count: u64,
}

impl Default for PricingPlan {
    fn default() -> Self {
        Self {
            schedule: TierSchedule::standard(),
            minimum_monthly_fee: DEFAULT_MINIMUM_MONTHLY_FEE,
            annual_discount_percent: DEFAULT_ANNUAL_DISCOUNT_PERCENT,
            bounds: NodeBounds::default(),
            default_node_count: DEFAULT_NODES,
        }
    }
}

impl PricingPlan {
    pub fn new(
        schedule: TierSchedule,
        minimum_monthly_fee: f64,
        annual_discount_percent: f64,
        bounds: NodeBounds,
        default_node_count: u64,
    ) -> Result<Self> {
        if !minimum_monthly_fee.is_finite() || minimum_monthly_fee < 0.0 {
            return Err(QuotemapError::constraint(
                "minimum_monthly_fee",
                "must be a non-negative number",
            ));
        }
        if !(0.0..=100.0).contains(&annual_discount_percent) {
            return Err(QuotemapError::constraint(
                "annual_discount_percent",
                "must be between 0 and 100",
            ));
        }
        Ok(Self {
            schedule,
            minimum_monthly_fee,
            annual_discount_percent,
            bounds,
            default_node_count,
        })
    }

    /// Price raw form input; see [`NodeBounds::coerce`].
    pub fn quote(&self, raw: &str) -> PricingResult {
        let nodes = self.bounds.coerce(raw, self.default_node_count);
        compute_pricing(nodes.get(), self)
    }
}

/// Nodes priced inside one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCharge {
    pub tier_index: usize,
    pub nodes: u64,
    pub unit_price: f64,
    pub subtotal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub node_count: NodeCount,
    /// Tier walk total before the floor.
    pub tiered_cost: f64,
    pub monthly_cost: f64,
    pub annual_cost: f64,
    pub effective_price_per_node: f64,
    /// Informational; never subtracted from `annual_cost`.
    pub annual_discount_amount: f64,
    pub floor_applied: bool,
    pub tier_breakdown: Vec<TierCharge>,
}

/// Walk the schedule, consuming `upper_bound - previous_upper_bound` nodes per
/// tier until none remain.
pub fn accrue_tiers(nodes: u64, schedule: &TierSchedule) -> (f64, Vec<TierCharge>) {
    let mut remaining = nodes;
    let mut previous_upper_bound = 0u64;
    let mut total = 0.0;
    let mut charges = Vec::new();

    for (tier_index, tier) in schedule.iter().enumerate() {
        if remaining == 0 {
            break;
        }
        let in_tier = match tier.upper_bound {
            Some(bound) => remaining.min(bound - previous_upper_bound),
            None => remaining,
        };
        let subtotal = in_tier as f64 * tier.unit_price;
        total += subtotal;
        charges.push(TierCharge {
            tier_index,
            nodes: in_tier,
            unit_price: tier.unit_price,
            subtotal,
        });
        remaining -= in_tier;
        if let Some(bound) = tier.upper_bound {
            previous_upper_bound = bound;
        }
    }

    (total, charges)
}

/// Monthly, annual and per-node cost for `node_count` under `plan`.
///
/// Out-of-range counts are clamped, never rejected. No rounding happens here;
/// currency rounding is a display concern.
pub fn compute_pricing(node_count: u64, plan: &PricingPlan) -> PricingResult {
    let nodes = plan.bounds.clamp(node_count);
    let (tiered_cost, tier_breakdown) = accrue_tiers(nodes.get(), &plan.schedule);

    let monthly_cost = tiered_cost.max(plan.minimum_monthly_fee);
    let annual_cost = monthly_cost * 12.0;
    let effective_price_per_node = monthly_cost / nodes.get() as f64;
    let annual_discount_amount = annual_cost * plan.annual_discount_percent / 100.0;
    let floor_applied = tiered_cost < plan.minimum_monthly_fee;

    debug!(
        requested = node_count,
        nodes = nodes.get(),
        tiered_cost,
        monthly_cost,
        floor_applied,
        "computed pricing"
    );

    PricingResult {
        node_count: nodes,
        tiered_cost,
        monthly_cost,
        annual_cost,
        effective_price_per_node,
        annual_discount_amount,
        floor_applied,
        tier_breakdown,
    }
}
