use crate::faq::Reply;
use crate::formatting::{format_currency, format_number, format_percent, Painter};
use crate::pricing::{PricingPlan, PricingResult};
use crate::roi::{RoiField, RoiResult, SavingsCategory};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_pricing(&mut self, result: &PricingResult) -> anyhow::Result<()>;
    fn write_roi(&mut self, result: &RoiResult) -> anyhow::Result<()>;
    fn write_schedule(&mut self, plan: &PricingPlan) -> anyhow::Result<()>;
    fn write_reply(&mut self, reply: &Reply) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    painter: Painter,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, painter)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

fn tier_range(plan: &PricingPlan, index: usize) -> String {
    let lower = format_number((plan.schedule.lower_bound_of(index) + 1) as f64);
    match plan.schedule.tiers()[index].upper_bound {
        Some(upper) => format!("{} - {}", lower, format_number(upper as f64)),
        None => format!("{lower}+"),
    }
}

fn roi_input_rows(result: &RoiResult) -> Vec<(&'static str, String)> {
    let input = &result.input;
    RoiField::ALL
        .iter()
        .map(|field| {
            let value = match field {
                RoiField::MonthlyIncidents => format_number(f64::from(input.monthly_incidents)),
                RoiField::InvestigationHours => format_number(input.avg_investigation_hours),
                RoiField::HourlyRate => format_currency(input.analyst_hourly_rate),
                RoiField::FalsePositiveRate => {
                    format_percent(f64::from(input.false_positive_rate_percent))
                }
                RoiField::BreachCost => format_currency(input.avg_breach_cost),
                RoiField::MttdDays => format_number(f64::from(input.current_mttd_days)),
            };
            (field.label(), value)
        })
        .collect()
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_pricing(&mut self, result: &PricingResult) -> anyhow::Result<()> {
        self.write_json(result)
    }

    fn write_roi(&mut self, result: &RoiResult) -> anyhow::Result<()> {
        self.write_json(result)
    }

    fn write_schedule(&mut self, plan: &PricingPlan) -> anyhow::Result<()> {
        self.write_json(plan)
    }

    fn write_reply(&mut self, reply: &Reply) -> anyhow::Result<()> {
        self.write_json(reply)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_row(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {label} | {value} |")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_pricing(&mut self, result: &PricingResult) -> anyhow::Result<()> {
        let nodes = format_number(result.node_count.get() as f64);
        writeln!(self.writer, "## Quote for {nodes} nodes")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Monthly cost", &format_currency(result.monthly_cost))?;
        self.write_row("Annual cost", &format_currency(result.annual_cost))?;
        self.write_row(
            "Effective price per node",
            &format!("${:.4}", result.effective_price_per_node),
        )?;
        self.write_row(
            "Annual billing saves",
            &format_currency(result.annual_discount_amount),
        )?;
        if result.floor_applied {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "_Minimum monthly fee applies (usage-based total {})._",
                format_currency(result.tiered_cost)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tier | Nodes | Unit price | Subtotal |")?;
        writeln!(self.writer, "|------|-------|------------|----------|")?;
        for charge in &result.tier_breakdown {
            writeln!(
                self.writer,
                "| {} | {} | ${:.2} | {} |",
                charge.tier_index + 1,
                format_number(charge.nodes as f64),
                charge.unit_price,
                format_currency(charge.subtotal)
            )?;
        }
        Ok(())
    }

    fn write_roi(&mut self, result: &RoiResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## ROI projection")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        for (label, value) in roi_input_rows(result) {
            self.write_row(label, &value)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Savings | Annual | Share |")?;
        writeln!(self.writer, "|---------|--------|-------|")?;
        for category in SavingsCategory::ALL {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                category.label(),
                format_currency(result.savings.amount(category)),
                format_percent(result.savings.share_of_total(category))
            )?;
        }
        writeln!(
            self.writer,
            "| **Total** | **{}** | 100% |",
            format_currency(result.savings.total_annual_savings)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Analyst hours saved per year: {}",
            format_number(result.savings.annual_hours_saved)
        )?;
        Ok(())
    }

    fn write_schedule(&mut self, plan: &PricingPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "## Pricing tiers")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tier | Nodes | Price per node |")?;
        writeln!(self.writer, "|------|-------|----------------|")?;
        for (index, tier) in plan.schedule.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | ${:.2} |",
                index + 1,
                tier_range(plan, index),
                tier.unit_price
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Minimum monthly fee: {}",
            format_currency(plan.minimum_monthly_fee)
        )?;
        Ok(())
    }

    fn write_reply(&mut self, reply: &Reply) -> anyhow::Result<()> {
        writeln!(self.writer, "> {}", reply.answer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    painter: Painter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, painter: Painter) -> Self {
        Self { writer, painter }
    }

    fn write_line(&mut self, label: &str, value: String) -> anyhow::Result<()> {
        writeln!(self.writer, "  {:<28} {}", label, value)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_pricing(&mut self, result: &PricingResult) -> anyhow::Result<()> {
        let title = format!(
            "Quote for {} nodes",
            format_number(result.node_count.get() as f64)
        );
        writeln!(self.writer, "{}", self.painter.header(&title))?;
        let monthly = self.painter.money(&format_currency(result.monthly_cost));
        self.write_line("Monthly cost", monthly)?;
        self.write_line("Annual cost", format_currency(result.annual_cost))?;
        self.write_line(
            "Effective price per node",
            format!("${:.4}", result.effective_price_per_node),
        )?;
        let saving = format_currency(result.annual_discount_amount);
        self.write_line("Annual billing saves", self.painter.dim(&saving))?;
        if result.floor_applied {
            let note = format!(
                "Minimum monthly fee applies (usage-based total {})",
                format_currency(result.tiered_cost)
            );
            writeln!(self.writer, "  {}", self.painter.warning(&note))?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.painter.bold("Tier breakdown"))?;
        for charge in &result.tier_breakdown {
            let label = format!(
                "Tier {} ({} x ${:.2})",
                charge.tier_index + 1,
                format_number(charge.nodes as f64),
                charge.unit_price
            );
            self.write_line(&label, format_currency(charge.subtotal))?;
        }
        Ok(())
    }

    fn write_roi(&mut self, result: &RoiResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.painter.header("ROI projection"))?;
        for (label, value) in roi_input_rows(result) {
            self.write_line(label, value)?;
        }

        writeln!(self.writer)?;
        let heading = self.painter.bold("Current vs. projected");
        writeln!(self.writer, "{heading}")?;
        let current = &result.current_state;
        let projected = &result.projected_state;
        self.write_line(
            "Incidents per month",
            format!(
                "{} -> {}",
                format_number(f64::from(result.input.monthly_incidents)),
                format_number(projected.reduced_incident_volume)
            ),
        )?;
        self.write_line(
            "False positives per month",
            format!(
                "{} -> {}",
                format_number(current.false_positives),
                format_number(projected.new_false_positives)
            ),
        )?;
        self.write_line(
            "Hours per investigation",
            format!(
                "{} -> {}",
                format_number(result.input.avg_investigation_hours),
                format_number(projected.new_investigation_hours_per_incident)
            ),
        )?;
        self.write_line(
            "Annual investigation cost",
            format!(
                "{} -> {}",
                format_currency(current.annual_investigation_cost),
                format_currency(projected.new_annual_investigation_cost)
            ),
        )?;
        self.write_line(
            "MTTD (days)",
            format!(
                "{} -> {}",
                format_number(current.mttd_days),
                format_number(projected.new_mttd_days)
            ),
        )?;

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.painter.bold("Annual savings"))?;
        for category in SavingsCategory::ALL {
            let value = format!(
                "{} ({})",
                format_currency(result.savings.amount(category)),
                format_percent(result.savings.share_of_total(category))
            );
            self.write_line(category.label(), value)?;
        }
        let total = self
            .painter
            .money(&format_currency(result.savings.total_annual_savings));
        self.write_line("Total", total)?;
        self.write_line(
            "Analyst hours saved",
            format_number(result.savings.annual_hours_saved),
        )?;
        Ok(())
    }

    fn write_schedule(&mut self, plan: &PricingPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.painter.header("Pricing tiers"))?;
        for (index, tier) in plan.schedule.iter().enumerate() {
            let label = format!("Tier {} ({})", index + 1, tier_range(plan, index));
            self.write_line(&label, format!("${:.2} / node", tier.unit_price))?;
        }
        self.write_line(
            "Minimum monthly fee",
            format_currency(plan.minimum_monthly_fee),
        )?;
        self.write_line(
            "Node range",
            format!(
                "{} - {}",
                format_number(plan.bounds.min as f64),
                format_number(plan.bounds.max as f64)
            ),
        )?;
        Ok(())
    }

    fn write_reply(&mut self, reply: &Reply) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", reply.answer)?;
        if let Some(keyword) = &reply.matched_keyword {
            let note = format!("(matched \"{keyword}\")");
            writeln!(self.writer, "{}", self.painter.dim(&note))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::FaqBot;
    use crate::pricing::compute_pricing;
    use crate::roi::{compute_roi, RoiCoefficients, RoiInput};

    fn render(
        f: impl FnOnce(&mut dyn OutputWriter) -> anyhow::Result<()>,
        format: OutputFormat,
    ) -> String {
        let mut buffer = Vec::new();
        match format {
            OutputFormat::Terminal => f(&mut TerminalWriter::new(&mut buffer, Painter::plain())),
            OutputFormat::Json => f(&mut JsonWriter::new(&mut buffer)),
            OutputFormat::Markdown => f(&mut MarkdownWriter::new(&mut buffer)),
        }
        .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_terminal_pricing_shows_rounded_currency() {
        let result = compute_pricing(60_000, &PricingPlan::default());
        let out = render(|w| w.write_pricing(&result), OutputFormat::Terminal);
        assert!(out.contains("Quote for 60,000 nodes"));
        assert!(out.contains("$45,000"));
        assert!(out.contains("$540,000"));
        assert!(!out.contains("Minimum monthly fee applies"));
    }

    #[test]
    fn test_terminal_pricing_notes_floor() {
        let result = compute_pricing(100, &PricingPlan::default());
        let out = render(|w| w.write_pricing(&result), OutputFormat::Terminal);
        let note = "Minimum monthly fee applies (usage-based total $100)";
        assert!(out.contains(note));
    }

    #[test]
    fn test_json_pricing_round_trips_fields() {
        let result = compute_pricing(60_000, &PricingPlan::default());
        let out = render(|w| w.write_pricing(&result), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["monthly_cost"], 45_000.0);
        assert_eq!(value["node_count"], 60_000);
        assert_eq!(value["tier_breakdown"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_markdown_roi_lists_all_categories() {
        let result = compute_roi(&RoiInput::default(), &RoiCoefficients::default());
        let out = render(|w| w.write_roi(&result), OutputFormat::Markdown);
        assert!(out.contains("| Breach prevention | $1,800,000 |"));
        assert!(out.contains("| Faster detection | $675,000 |"));
        assert!(out.contains("**$2,801,160**"));
    }

    #[test]
    fn test_schedule_ranges() {
        let plan = PricingPlan::default();
        let out = render(|w| w.write_schedule(&plan), OutputFormat::Markdown);
        assert!(out.contains("| 1 | 1 - 10,000 | $1.00 |"));
        assert!(out.contains("| 6 | 500,001+ | $0.20 |"));
    }

    #[test]
    fn test_terminal_reply_mentions_keyword() {
        let reply = FaqBot::standard().reply("tell me about your api");
        let out = render(|w| w.write_reply(&reply), OutputFormat::Terminal);
        assert!(out.contains("(matched \"api\")"));
    }

    #[test]
    fn test_output_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }
}
