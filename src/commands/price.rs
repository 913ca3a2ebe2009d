use crate::input::parse_integer;
use crate::io::OutputWriter;
use crate::pricing::{compute_pricing, PricingPlan, PricingResult};
use anyhow::Result;
use tracing::info;

/// Quote `raw_nodes` (form text) under `plan`, or the plan's seed count when
/// no value was given.
pub fn run_price(
    raw_nodes: Option<&str>,
    plan: &PricingPlan,
    writer: &mut dyn OutputWriter,
) -> Result<PricingResult> {
    let result = match raw_nodes {
        Some(raw) => {
            let result = plan.quote(raw);
            if input_was_coerced(raw, &result) {
                info!(
                    input = raw,
                    nodes = result.node_count.get(),
                    "node count coerced into range"
                );
            }
            result
        }
        None => compute_pricing(plan.default_node_count, plan),
    };

    writer.write_pricing(&result)?;
    Ok(result)
}

fn input_was_coerced(raw: &str, result: &PricingResult) -> bool {
    parse_integer(raw) != Some(result.node_count.get())
}

pub fn run_tiers(plan: &PricingPlan, writer: &mut dyn OutputWriter) -> Result<()> {
    writer.write_schedule(plan)
}
