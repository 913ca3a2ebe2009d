use crate::faq::{standard_entries, FaqBot, FaqEntry, DEFAULT_FALLBACK};
use serde::{Deserialize, Serialize};

/// `[faq]` section. Entries replace the built-in dictionary entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqConfig {
    #[serde(default = "standard_entries")]
    pub entries: Vec<FaqEntry>,

    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            entries: standard_entries(),
            fallback: default_fallback(),
        }
    }
}

impl FaqConfig {
    pub fn to_bot(&self) -> FaqBot {
        FaqBot::new(self.entries.clone(), self.fallback.clone())
    }
}

pub fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}
