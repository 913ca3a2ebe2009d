use crate::errors::{QuotemapError, Result};
use serde::{Deserialize, Serialize};

/// One band of a volume-discount schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Inclusive upper bound in nodes; `None` marks the final, unbounded tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<u64>,
    /// Monthly price per node inside this band.
    pub unit_price: f64,
}

impl PricingTier {
    pub const fn bounded(upper_bound: u64, unit_price: f64) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            unit_price,
        }
    }

    pub const fn unbounded(unit_price: f64) -> Self {
        Self {
            upper_bound: None,
            unit_price,
        }
    }
}

const STANDARD_TIERS: [PricingTier; 6] = [
    PricingTier::bounded(10_000, 1.00),
    PricingTier::bounded(50_000, 0.75),
    PricingTier::bounded(100_000, 0.50),
    PricingTier::bounded(250_000, 0.35),
    PricingTier::bounded(500_000, 0.25),
    PricingTier::unbounded(0.20),
];

/// Ordered tier list partitioning `[0, ∞)`.
///
/// Bounds are strictly increasing, unit prices never increase, and the list
/// ends with exactly one unbounded tier. A node count equal to a bound
/// belongs to the lower tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TierSchedule {
    tiers: Vec<PricingTier>,
}

impl TierSchedule {
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self> {
        validate_tiers(&tiers)?;
        Ok(Self { tiers })
    }

    /// The published six-band schedule, from $1.00 down to $0.20 per node.
    pub fn standard() -> Self {
        Self {
            tiers: STANDARD_TIERS.to_vec(),
        }
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricingTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Exclusive lower bound of the tier at `index`.
    pub fn lower_bound_of(&self, index: usize) -> u64 {
        index
            .checked_sub(1)
            .and_then(|prev| self.tiers.get(prev))
            .and_then(|tier| tier.upper_bound)
            .unwrap_or(0)
    }
}

impl Default for TierSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_tiers(tiers: &[PricingTier]) -> Result<()> {
    let Some(last) = tiers.last() else {
        return Err(QuotemapError::constraint(
            "tiers",
            "schedule must contain at least one tier",
        ));
    };
    if last.upper_bound.is_some() {
        return Err(QuotemapError::constraint(
            "tiers",
            "final tier must be unbounded",
        ));
    }

    let mut previous_bound = 0u64;
    let mut previous_price = f64::INFINITY;
    for (index, tier) in tiers.iter().enumerate() {
        if !tier.unit_price.is_finite() || tier.unit_price < 0.0 {
            return Err(QuotemapError::constraint(
                format!("tiers[{index}].unit_price"),
                "must be a non-negative number",
            ));
        }
        if tier.unit_price > previous_price {
            return Err(QuotemapError::constraint(
                format!("tiers[{index}].unit_price"),
                format!(
                    "{} exceeds the previous tier's {}; prices must not increase with volume",
                    tier.unit_price, previous_price
                ),
            ));
        }
        match tier.upper_bound {
            Some(bound) if bound <= previous_bound => {
                return Err(QuotemapError::constraint(
                    format!("tiers[{index}].upper_bound"),
                    format!("{bound} must be greater than {previous_bound}"),
                ));
            }
            Some(bound) => previous_bound = bound,
            None if index + 1 != tiers.len() => {
                return Err(QuotemapError::constraint(
                    format!("tiers[{index}].upper_bound"),
                    "only the final tier may be unbounded",
                ));
            }
            None => {}
        }
        previous_price = tier.unit_price;
    }
    Ok(())
}
