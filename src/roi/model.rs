use super::input::RoiInput;
use crate::errors::{QuotemapError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const MTTD_REDUCTION_FRACTION: f64 = 0.75;
pub const FALSE_POSITIVE_REDUCTION_FRACTION: f64 = 0.90;
pub const INVESTIGATION_TIME_REDUCTION_FRACTION: f64 = 0.60;
pub const BREACH_PREVENTION_FRACTION: f64 = 0.40;
pub const MTTD_SAVINGS_FRACTION_OF_BREACH_COST: f64 = 0.15;

/// Fixed improvement assumptions applied to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiCoefficients {
    pub mttd_reduction_fraction: f64,
    pub false_positive_reduction_fraction: f64,
    pub investigation_time_reduction_fraction: f64,
    pub breach_prevention_fraction: f64,
    /// Flat share of breach cost credited to faster detection. Not derived
    /// from `mttd_reduction_fraction`.
    pub mttd_savings_fraction_of_breach_cost: f64,
}

impl Default for RoiCoefficients {
    fn default() -> Self {
        Self {
            mttd_reduction_fraction: MTTD_REDUCTION_FRACTION,
            false_positive_reduction_fraction: FALSE_POSITIVE_REDUCTION_FRACTION,
            investigation_time_reduction_fraction: INVESTIGATION_TIME_REDUCTION_FRACTION,
            breach_prevention_fraction: BREACH_PREVENTION_FRACTION,
            mttd_savings_fraction_of_breach_cost: MTTD_SAVINGS_FRACTION_OF_BREACH_COST,
        }
    }
}

impl RoiCoefficients {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("mttd_reduction_fraction", self.mttd_reduction_fraction),
            (
                "false_positive_reduction_fraction",
                self.false_positive_reduction_fraction,
            ),
            (
                "investigation_time_reduction_fraction",
                self.investigation_time_reduction_fraction,
            ),
            (
                "breach_prevention_fraction",
                self.breach_prevention_fraction,
            ),
            (
                "mttd_savings_fraction_of_breach_cost",
                self.mttd_savings_fraction_of_breach_cost,
            ),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(QuotemapError::constraint(
                    name,
                    format!("{value} must be between 0.0 and 1.0"),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentState {
    pub false_positives: f64,
    pub true_positives: f64,
    pub monthly_investigation_cost: f64,
    pub annual_investigation_cost: f64,
    pub mttd_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedState {
    pub reduced_incident_volume: f64,
    pub new_false_positive_rate_percent: f64,
    pub new_false_positives: f64,
    pub new_investigation_hours_per_incident: f64,
    pub new_monthly_investigation_cost: f64,
    pub new_annual_investigation_cost: f64,
    pub new_mttd_days: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SavingsCategory {
    Investigation,
    BreachPrevention,
    MttdImprovement,
}

impl SavingsCategory {
    pub const ALL: [SavingsCategory; 3] = [
        SavingsCategory::Investigation,
        SavingsCategory::BreachPrevention,
        SavingsCategory::MttdImprovement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Investigation => "Investigation efficiency",
            Self::BreachPrevention => "Breach prevention",
            Self::MttdImprovement => "Faster detection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Savings {
    pub investigation_savings: f64,
    pub breach_prevention_savings: f64,
    pub mttd_improvement_savings: f64,
    pub total_annual_savings: f64,
    pub annual_hours_saved: f64,
}

impl Savings {
    pub fn amount(&self, category: SavingsCategory) -> f64 {
        match category {
            SavingsCategory::Investigation => self.investigation_savings,
            SavingsCategory::BreachPrevention => self.breach_prevention_savings,
            SavingsCategory::MttdImprovement => self.mttd_improvement_savings,
        }
    }

    /// Percentage of the total contributed by `category`; 0 when nothing is saved.
    pub fn share_of_total(&self, category: SavingsCategory) -> f64 {
        if self.total_annual_savings == 0.0 {
            0.0
        } else {
            self.amount(category) / self.total_annual_savings * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiResult {
    /// The clamped input the projection was computed from.
    pub input: RoiInput,
    pub current_state: CurrentState,
    pub projected_state: ProjectedState,
    pub savings: Savings,
}

/// Project post-adoption metrics and annual savings.
///
/// Only eliminated false positives shrink the incident volume. Breach
/// prevention and detection savings are flat fractions of breach cost and do
/// not move with incident volume, false-positive rate or the projected MTTD.
pub fn compute_roi(input: &RoiInput, coeffs: &RoiCoefficients) -> RoiResult {
    let input = input.clamped();
    let incidents = f64::from(input.monthly_incidents);
    let fp_rate = f64::from(input.false_positive_rate_percent);
    let hours = input.avg_investigation_hours;
    let rate = input.analyst_hourly_rate;

    let false_positives = incidents * (fp_rate / 100.0);
    let new_false_positive_rate_percent =
        fp_rate * (1.0 - coeffs.false_positive_reduction_fraction);
    let new_false_positives = incidents * (new_false_positive_rate_percent / 100.0);
    let reduced_incident_volume = incidents - (false_positives - new_false_positives);
    let new_investigation_hours_per_incident =
        hours * (1.0 - coeffs.investigation_time_reduction_fraction);

    let monthly_investigation_cost = incidents * hours * rate;
    let new_monthly_investigation_cost =
        reduced_incident_volume * new_investigation_hours_per_incident * rate;
    let annual_investigation_cost = monthly_investigation_cost * 12.0;
    let new_annual_investigation_cost = new_monthly_investigation_cost * 12.0;
    let investigation_savings = annual_investigation_cost - new_annual_investigation_cost;

    let breach_prevention_savings = input.avg_breach_cost * coeffs.breach_prevention_fraction;
    let mttd_days = f64::from(input.current_mttd_days);
    let new_mttd_days = mttd_days * (1.0 - coeffs.mttd_reduction_fraction);
    let mttd_improvement_savings =
        input.avg_breach_cost * coeffs.mttd_savings_fraction_of_breach_cost;

    let total_annual_savings =
        investigation_savings + breach_prevention_savings + mttd_improvement_savings;
    let current_hours = incidents * hours;
    let projected_hours = reduced_incident_volume * new_investigation_hours_per_incident;
    let annual_hours_saved = (current_hours - projected_hours) * 12.0;

    debug!(
        monthly_incidents = input.monthly_incidents,
        reduced_incident_volume,
        total_annual_savings,
        "computed roi projection"
    );

    RoiResult {
        input,
        current_state: CurrentState {
            false_positives,
            true_positives: incidents - false_positives,
            monthly_investigation_cost,
            annual_investigation_cost,
            mttd_days,
        },
        projected_state: ProjectedState {
            reduced_incident_volume,
            new_false_positive_rate_percent,
            new_false_positives,
            new_investigation_hours_per_incident,
            new_monthly_investigation_cost,
            new_annual_investigation_cost,
            new_mttd_days,
        },
        savings: Savings {
            investigation_savings,
            breach_prevention_savings,
            mttd_improvement_savings,
            total_annual_savings,
            annual_hours_saved,
        },
    }
}
