//! `[pricing]` section: tier schedule, fee floor and node domain.

use crate::errors::Result;
use crate::pricing::{
    NodeBounds, PricingPlan, PricingTier, TierSchedule, DEFAULT_ANNUAL_DISCOUNT_PERCENT,
    DEFAULT_MINIMUM_MONTHLY_FEE, DEFAULT_NODES, MAX_NODES, MIN_NODES,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Ordered tiers; the last one omits `upper_bound`.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<PricingTier>,

    #[serde(default = "default_minimum_monthly_fee")]
    pub minimum_monthly_fee: f64,

    /// Saving advertised for annual billing (0-100).
    #[serde(default = "default_annual_discount_percent")]
    pub annual_discount_percent: f64,

    #[serde(default = "default_min_nodes")]
    pub min_nodes: u64,

    #[serde(default = "default_max_nodes")]
    pub max_nodes: u64,

    /// Used when the node count is missing or not a number.
    #[serde(default = "default_node_count")]
    pub default_node_count: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            minimum_monthly_fee: default_minimum_monthly_fee(),
            annual_discount_percent: default_annual_discount_percent(),
            min_nodes: default_min_nodes(),
            max_nodes: default_max_nodes(),
            default_node_count: default_node_count(),
        }
    }
}

impl PricingConfig {
    pub fn to_plan(&self) -> Result<PricingPlan> {
        let schedule = TierSchedule::new(self.tiers.clone())?;
        let bounds = NodeBounds::new(self.min_nodes, self.max_nodes)?;
        PricingPlan::new(
            schedule,
            self.minimum_monthly_fee,
            self.annual_discount_percent,
            bounds,
            self.default_node_count,
        )
    }
}

pub fn default_tiers() -> Vec<PricingTier> {
    TierSchedule::standard().tiers().to_vec()
}

pub fn default_minimum_monthly_fee() -> f64 {
    DEFAULT_MINIMUM_MONTHLY_FEE
}

pub fn default_annual_discount_percent() -> f64 {
    DEFAULT_ANNUAL_DISCOUNT_PERCENT
}

pub fn default_min_nodes() -> u64 {
    MIN_NODES
}

pub fn default_max_nodes() -> u64 {
    MAX_NODES
}

pub fn default_node_count() -> u64 {
    DEFAULT_NODES
}
