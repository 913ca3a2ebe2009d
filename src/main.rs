use anyhow::Result;
use clap::Parser;
use quotemap::cli::{Cli, Commands};
use quotemap::config::{load_config, load_config_from, QuotemapConfig};
use quotemap::formatting::{FormattingConfig, Painter};
use quotemap::io::{create_writer, OutputFormat, OutputWriter};
use quotemap::observability::init_logging;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let painter = create_painter(cli.plain);
    let config_path = cli.config;

    match cli.command {
        Commands::Init { force } => {
            let path = quotemap::commands::init::init_config(force)?;
            println!("Created {} configuration file", path.display());
        }
        Commands::Price { nodes, format } => {
            let config = resolve_config(config_path.as_deref())?;
            let mut writer = stdout_writer(format, &config, painter);
            let plan = config.pricing_plan();
            quotemap::commands::price::run_price(nodes.as_deref(), &plan, writer.as_mut())?;
        }
        Commands::Roi { baseline, format } => {
            let config = resolve_config(config_path.as_deref())?;
            let mut writer = stdout_writer(format, &config, painter);
            let coeffs = config.roi_coefficients();
            quotemap::commands::roi::run_roi(&baseline.into(), &coeffs, writer.as_mut())?;
        }
        Commands::Tiers { format } => {
            let config = resolve_config(config_path.as_deref())?;
            let mut writer = stdout_writer(format, &config, painter);
            quotemap::commands::price::run_tiers(&config.pricing_plan(), writer.as_mut())?;
        }
        Commands::Ask { message, format } => {
            let config = resolve_config(config_path.as_deref())?;
            let mut writer = stdout_writer(format, &config, painter);
            let bot = config.faq_bot();
            quotemap::commands::ask::run_ask(&message.join(" "), &bot, writer.as_mut())?;
        }
    }

    Ok(())
}

fn resolve_config(path: Option<&Path>) -> Result<QuotemapConfig> {
    match path {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

fn create_painter(plain: bool) -> Painter {
    if plain {
        Painter::new(FormattingConfig::plain())
    } else {
        Painter::new(FormattingConfig::from_env())
    }
}

// Explicit flag wins over the config file, which wins over terminal output
fn stdout_writer(
    format: Option<OutputFormat>,
    config: &QuotemapConfig,
    painter: Painter,
) -> Box<dyn OutputWriter> {
    let format = format.or(config.output_format()).unwrap_or_default();
    create_writer(format, Box::new(std::io::stdout()), painter)
}
