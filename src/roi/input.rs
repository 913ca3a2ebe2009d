use crate::input::{at_least, parse_integer, parse_numeric};
use serde::{Deserialize, Serialize};

pub const MIN_MONTHLY_INCIDENTS: u32 = 1;
pub const MIN_INVESTIGATION_HOURS: f64 = 0.5;
pub const MIN_HOURLY_RATE: f64 = 25.0;
pub const MAX_FALSE_POSITIVE_PERCENT: u8 = 99;
pub const MIN_BREACH_COST: f64 = 100_000.0;
pub const MIN_MTTD_DAYS: u32 = 1;

/// Operational baseline the ROI projection starts from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInput {
    pub monthly_incidents: u32,
    /// Hours spent per incident.
    pub avg_investigation_hours: f64,
    pub analyst_hourly_rate: f64,
    pub false_positive_rate_percent: u8,
    pub avg_breach_cost: f64,
    pub current_mttd_days: u32,
}

impl Default for RoiInput {
    fn default() -> Self {
        Self {
            monthly_incidents: 50,
            avg_investigation_hours: 8.0,
            analyst_hourly_rate: 75.0,
            false_positive_rate_percent: 85,
            avg_breach_cost: 4_500_000.0,
            current_mttd_days: 280,
        }
    }
}

/// Names of the editable ROI fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoiField {
    MonthlyIncidents,
    InvestigationHours,
    HourlyRate,
    FalsePositiveRate,
    BreachCost,
    MttdDays,
}

impl RoiField {
    pub const ALL: [RoiField; 6] = [
        RoiField::MonthlyIncidents,
        RoiField::InvestigationHours,
        RoiField::HourlyRate,
        RoiField::FalsePositiveRate,
        RoiField::BreachCost,
        RoiField::MttdDays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MonthlyIncidents => "Monthly incidents",
            Self::InvestigationHours => "Avg. investigation hours",
            Self::HourlyRate => "Analyst hourly rate",
            Self::FalsePositiveRate => "False positive rate (%)",
            Self::BreachCost => "Avg. breach cost",
            Self::MttdDays => "Current MTTD (days)",
        }
    }
}

impl RoiInput {
    /// Raise every field into its domain.
    pub fn clamped(self) -> Self {
        Self {
            monthly_incidents: self.monthly_incidents.max(MIN_MONTHLY_INCIDENTS),
            avg_investigation_hours: at_least(
                self.avg_investigation_hours,
                MIN_INVESTIGATION_HOURS,
            ),
            analyst_hourly_rate: at_least(self.analyst_hourly_rate, MIN_HOURLY_RATE),
            false_positive_rate_percent: self
                .false_positive_rate_percent
                .min(MAX_FALSE_POSITIVE_PERCENT),
            avg_breach_cost: at_least(self.avg_breach_cost, MIN_BREACH_COST),
            current_mttd_days: self.current_mttd_days.max(MIN_MTTD_DAYS),
        }
    }

    /// Update one field from form text. Non-numeric text restores that
    /// field's seed value; numbers are clamped into the field's domain.
    pub fn coerce_field(&mut self, field: RoiField, raw: &str) {
        let seed = Self::default();
        match field {
            RoiField::MonthlyIncidents => {
                self.monthly_incidents = parse_integer(raw)
                    .map(saturate_u32)
                    .unwrap_or(seed.monthly_incidents)
                    .max(MIN_MONTHLY_INCIDENTS);
            }
            RoiField::InvestigationHours => {
                self.avg_investigation_hours = at_least(
                    parse_numeric(raw).unwrap_or(seed.avg_investigation_hours),
                    MIN_INVESTIGATION_HOURS,
                );
            }
            RoiField::HourlyRate => {
                self.analyst_hourly_rate = at_least(
                    parse_numeric(raw).unwrap_or(seed.analyst_hourly_rate),
                    MIN_HOURLY_RATE,
                );
            }
            RoiField::FalsePositiveRate => {
                self.false_positive_rate_percent = parse_integer(raw)
                    .map(|v| v.min(u64::from(MAX_FALSE_POSITIVE_PERCENT)) as u8)
                    .unwrap_or(seed.false_positive_rate_percent);
            }
            RoiField::BreachCost => {
                self.avg_breach_cost = at_least(
                    parse_numeric(raw).unwrap_or(seed.avg_breach_cost),
                    MIN_BREACH_COST,
                );
            }
            RoiField::MttdDays => {
                self.current_mttd_days = parse_integer(raw)
                    .map(saturate_u32)
                    .unwrap_or(seed.current_mttd_days)
                    .max(MIN_MTTD_DAYS);
            }
        }
    }
}

fn saturate_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamped_raises_lower_bounds() {
        let input = RoiInput {
            monthly_incidents: 0,
            avg_investigation_hours: 0.1,
            analyst_hourly_rate: 10.0,
            false_positive_rate_percent: 100,
            avg_breach_cost: 5_000.0,
            current_mttd_days: 0,
        }
        .clamped();

        assert_eq!(
            input,
            RoiInput {
                monthly_incidents: 1,
                avg_investigation_hours: 0.5,
                analyst_hourly_rate: 25.0,
                false_positive_rate_percent: 99,
                avg_breach_cost: 100_000.0,
                current_mttd_days: 1,
            }
        );
    }

    #[test]
    fn test_clamped_leaves_valid_input_alone() {
        let input = RoiInput::default();
        assert_eq!(input.clamped(), input);
    }

    #[test]
    fn test_coerce_field_non_numeric_restores_seed() {
        let mut input = RoiInput {
            monthly_incidents: 7,
            ..RoiInput::default()
        };
        input.coerce_field(RoiField::MonthlyIncidents, "many");
        assert_eq!(input.monthly_incidents, 50);
    }

    #[test]
    fn test_coerce_field_clamps_numbers() {
        let mut input = RoiInput::default();
        input.coerce_field(RoiField::FalsePositiveRate, "150");
        input.coerce_field(RoiField::HourlyRate, "$10");
        input.coerce_field(RoiField::InvestigationHours, "0");
        input.coerce_field(RoiField::MttdDays, "-3");
        input.coerce_field(RoiField::BreachCost, "2,000,000");

        assert_eq!(input.false_positive_rate_percent, 99);
        assert_eq!(input.analyst_hourly_rate, 25.0);
        assert_eq!(input.avg_investigation_hours, 0.5);
        assert_eq!(input.current_mttd_days, 1);
        assert_eq!(input.avg_breach_cost, 2_000_000.0);
    }

    #[test]
    fn test_coerce_field_zero_false_positive_rate_is_allowed() {
        let mut input = RoiInput::default();
        input.coerce_field(RoiField::FalsePositiveRate, "0");
        assert_eq!(input.false_positive_rate_percent, 0);
    }
}
