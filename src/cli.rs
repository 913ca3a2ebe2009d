use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotemap")]
#[command(about = "Tiered pricing quotes and ROI projections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Configuration file (defaults to the nearest .quotemap.toml)
    #[arg(long, global = true, env = "QUOTEMAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote the monthly and annual price for a node count
    Price {
        /// Node count; clamped to the configured range
        #[arg(allow_negative_numbers = true)]
        nodes: Option<String>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Project savings from a security operations baseline
    Roi {
        #[command(flatten)]
        baseline: RoiBaseline,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the active pricing tiers
    Tiers {
        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Ask the FAQ assistant a question
    Ask {
        /// The question
        #[arg(num_args = 0..)]
        message: Vec<String>,

        /// Output format (defaults to the config file, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a default .quotemap.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// ROI baseline fields, taken as text and coerced like form input.
#[derive(Args, Debug, Clone, Default)]
pub struct RoiBaseline {
    /// Incidents per month (min 1)
    #[arg(long, allow_hyphen_values = true)]
    pub monthly_incidents: Option<String>,

    /// Hours per investigation (min 0.5)
    #[arg(long, allow_hyphen_values = true)]
    pub investigation_hours: Option<String>,

    /// Analyst cost per hour (min 25)
    #[arg(long, allow_hyphen_values = true)]
    pub hourly_rate: Option<String>,

    /// Percentage of incidents that are false positives (0-99)
    #[arg(long, allow_hyphen_values = true)]
    pub false_positive_rate: Option<String>,

    /// Average cost of a breach (min 100,000)
    #[arg(long, allow_hyphen_values = true)]
    pub breach_cost: Option<String>,

    /// Current mean time to detect, in days (min 1)
    #[arg(long, allow_hyphen_values = true)]
    pub mttd_days: Option<String>,
}

impl From<RoiBaseline> for crate::commands::roi::RoiArgs {
    fn from(baseline: RoiBaseline) -> Self {
        Self {
            monthly_incidents: baseline.monthly_incidents,
            investigation_hours: baseline.investigation_hours,
            hourly_rate: baseline.hourly_rate,
            false_positive_rate: baseline.false_positive_rate,
            breach_cost: baseline.breach_cost,
            mttd_days: baseline.mttd_days,
        }
    }
}
