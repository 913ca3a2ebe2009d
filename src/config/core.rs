use serde::{Deserialize, Serialize};

use super::faq::FaqConfig;
use super::pricing::PricingConfig;
use super::roi::RoiConfig;
use crate::faq::FaqBot;
use crate::io::OutputFormat;
use crate::pricing::PricingPlan;
use crate::roi::RoiCoefficients;

/// Root configuration structure for quotemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuotemapConfig {
    /// Tier schedule and fee floor
    #[serde(default)]
    pub pricing: Option<PricingConfig>,

    /// ROI improvement coefficients
    #[serde(default)]
    pub roi: Option<RoiConfig>,

    /// FAQ dictionary override
    #[serde(default)]
    pub faq: Option<FaqConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl QuotemapConfig {
    /// Sections are validated at load time, so conversion here falls back to
    /// defaults only for configs built in code.
    pub fn pricing_plan(&self) -> PricingPlan {
        self.pricing
            .as_ref()
            .map(|section| {
                section.to_plan().unwrap_or_else(|e| {
                    log::warn!("Invalid [pricing] section: {}. Using defaults.", e);
                    PricingPlan::default()
                })
            })
            .unwrap_or_default()
    }

    pub fn roi_coefficients(&self) -> RoiCoefficients {
        self.roi
            .as_ref()
            .map(|section| {
                section.to_coefficients().unwrap_or_else(|e| {
                    log::warn!("Invalid [roi] section: {}. Using defaults.", e);
                    RoiCoefficients::default()
                })
            })
            .unwrap_or_default()
    }

    pub fn faq_bot(&self) -> FaqBot {
        self.faq
            .as_ref()
            .map(FaqConfig::to_bot)
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}
