use crate::errors::Result;
use crate::roi::model::{
    RoiCoefficients, BREACH_PREVENTION_FRACTION, FALSE_POSITIVE_REDUCTION_FRACTION,
    INVESTIGATION_TIME_REDUCTION_FRACTION, MTTD_REDUCTION_FRACTION,
    MTTD_SAVINGS_FRACTION_OF_BREACH_COST,
};
use serde::{Deserialize, Serialize};

/// `[roi]` section: improvement coefficients, each a fraction in [0.0, 1.0].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiConfig {
    #[serde(default = "default_mttd_reduction")]
    pub mttd_reduction: f64,

    #[serde(default = "default_false_positive_reduction")]
    pub false_positive_reduction: f64,

    #[serde(default = "default_investigation_time_reduction")]
    pub investigation_time_reduction: f64,

    #[serde(default = "default_breach_prevention")]
    pub breach_prevention: f64,

    #[serde(default = "default_mttd_savings_of_breach_cost")]
    pub mttd_savings_of_breach_cost: f64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            mttd_reduction: default_mttd_reduction(),
            false_positive_reduction: default_false_positive_reduction(),
            investigation_time_reduction: default_investigation_time_reduction(),
            breach_prevention: default_breach_prevention(),
            mttd_savings_of_breach_cost: default_mttd_savings_of_breach_cost(),
        }
    }
}

impl RoiConfig {
    pub fn to_coefficients(&self) -> Result<RoiCoefficients> {
        let coeffs = RoiCoefficients {
            mttd_reduction_fraction: self.mttd_reduction,
            false_positive_reduction_fraction: self.false_positive_reduction,
            investigation_time_reduction_fraction: self.investigation_time_reduction,
            breach_prevention_fraction: self.breach_prevention,
            mttd_savings_fraction_of_breach_cost: self.mttd_savings_of_breach_cost,
        };
        coeffs.validate()?;
        Ok(coeffs)
    }
}

pub fn default_mttd_reduction() -> f64 {
    MTTD_REDUCTION_FRACTION
}

pub fn default_false_positive_reduction() -> f64 {
    FALSE_POSITIVE_REDUCTION_FRACTION
}

pub fn default_investigation_time_reduction() -> f64 {
    INVESTIGATION_TIME_REDUCTION_FRACTION
}

pub fn default_breach_prevention() -> f64 {
    BREACH_PREVENTION_FRACTION
}

pub fn default_mttd_savings_of_breach_cost() -> f64 {
    MTTD_SAVINGS_FRACTION_OF_BREACH_COST
}
