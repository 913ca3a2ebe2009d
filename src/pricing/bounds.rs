use crate::errors::{QuotemapError, Result};
use crate::input::parse_integer;
use serde::{Deserialize, Serialize};

pub const MIN_NODES: u64 = 100;
pub const MAX_NODES: u64 = 1_000_000;
/// Seed value shown when the calculator first mounts.
pub const DEFAULT_NODES: u64 = 10_000;

/// A node count already clamped into the configured domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeCount(u64);

impl NodeCount {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive domain for node counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeBounds {
    pub min: u64,
    pub max: u64,
}

impl Default for NodeBounds {
    fn default() -> Self {
        Self {
            min: MIN_NODES,
            max: MAX_NODES,
        }
    }
}

impl NodeBounds {
    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min == 0 {
            return Err(QuotemapError::constraint(
                "min_nodes",
                "must be at least 1 so the per-node price is defined",
            ));
        }
        if min > max {
            return Err(QuotemapError::constraint(
                "max_nodes",
                format!("{max} is below min_nodes {min}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Silently clamp into `[min, max]`.
    pub fn clamp(&self, raw: u64) -> NodeCount {
        NodeCount(raw.clamp(self.min, self.max))
    }

    /// Coerce text input: non-numeric text falls back to `default`, numbers
    /// are clamped. The fallback is clamped too.
    pub fn coerce(&self, raw: &str, default: u64) -> NodeCount {
        self.clamp(parse_integer(raw).unwrap_or(default))
    }

    pub fn contains(&self, nodes: u64) -> bool {
        (self.min..=self.max).contains(&nodes)
    }
}
