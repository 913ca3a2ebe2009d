// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod faq;
pub mod formatting;
pub mod input;
pub mod io;
pub mod observability;
pub mod pricing;
pub mod roi;

// Re-export commonly used types
pub use crate::errors::{ErrorCode, QuotemapError};

pub use crate::pricing::{
    accrue_tiers, compute_pricing, NodeBounds, NodeCount, PricingPlan, PricingResult, PricingTier,
    TierCharge, TierSchedule,
};

pub use crate::roi::{
    compute_roi, CurrentState, ProjectedState, RoiCoefficients, RoiField, RoiInput, RoiResult,
    Savings, SavingsCategory,
};

pub use crate::faq::{FaqBot, FaqEntry, Reply};

pub use crate::config::{load_config, QuotemapConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
