use crate::io::OutputWriter;
use crate::roi::{compute_roi, RoiCoefficients, RoiField, RoiInput, RoiResult};
use anyhow::Result;

/// Raw text for each ROI field; `None` keeps the seed value.
#[derive(Debug, Clone, Default)]
pub struct RoiArgs {
    pub monthly_incidents: Option<String>,
    pub investigation_hours: Option<String>,
    pub hourly_rate: Option<String>,
    pub false_positive_rate: Option<String>,
    pub breach_cost: Option<String>,
    pub mttd_days: Option<String>,
}

impl RoiArgs {
    fn raw(&self, field: RoiField) -> Option<&str> {
        let value = match field {
            RoiField::MonthlyIncidents => &self.monthly_incidents,
            RoiField::InvestigationHours => &self.investigation_hours,
            RoiField::HourlyRate => &self.hourly_rate,
            RoiField::FalsePositiveRate => &self.false_positive_rate,
            RoiField::BreachCost => &self.breach_cost,
            RoiField::MttdDays => &self.mttd_days,
        };
        value.as_deref()
    }

    pub fn to_input(&self) -> RoiInput {
        RoiField::ALL
            .iter()
            .fold(RoiInput::default(), |mut input, field| {
                if let Some(raw) = self.raw(*field) {
                    input.coerce_field(*field, raw);
                }
                input
            })
    }
}

pub fn run_roi(
    args: &RoiArgs,
    coeffs: &RoiCoefficients,
    writer: &mut dyn OutputWriter,
) -> Result<RoiResult> {
    let result = compute_roi(&args.to_input(), coeffs);
    writer.write_roi(&result)?;
    Ok(result)
}
