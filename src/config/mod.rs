mod core;
mod faq;
mod loader;
mod pricing;
mod roi;

pub use self::core::{OutputConfig, QuotemapConfig};
pub use faq::FaqConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_in, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use pricing::PricingConfig;
pub use roi::RoiConfig;
