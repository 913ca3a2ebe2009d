//! Scripted FAQ assistant.
//!
//! Replies come from a static dictionary: the first entry with a keyword
//! that appears anywhere in the lower-cased message wins. There is no
//! ranking and no state between messages.

use serde::{Deserialize, Serialize};

pub const GREETING: &str =
    "Hi! Ask me about pricing, ROI, free trials, security, integrations or support.";
pub const DEFAULT_FALLBACK: &str =
    "I'm not sure about that one. Book a demo and our team will answer it directly.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub keywords: Vec<String>,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(keywords: &[&str], answer: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            answer: answer.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub answer: String,
    /// Keyword that selected the answer; `None` for greeting and fallback.
    pub matched_keyword: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FaqBot {
    entries: Vec<FaqEntry>,
    fallback: String,
}

impl FaqBot {
    /// Keywords are lower-cased once here; blank keywords are dropped so they
    /// cannot match every message.
    pub fn new(entries: Vec<FaqEntry>, fallback: impl Into<String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| FaqEntry {
                keywords: entry
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect(),
                answer: entry.answer,
            })
            .collect();
        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    pub fn standard() -> Self {
        Self::new(standard_entries(), DEFAULT_FALLBACK)
    }

    pub fn reply(&self, message: &str) -> Reply {
        let message = message.trim().to_lowercase();
        if message.is_empty() {
            return Reply {
                answer: GREETING.to_string(),
                matched_keyword: None,
            };
        }

        self.entries
            .iter()
            .find_map(|entry| {
                entry
                    .keywords
                    .iter()
                    .find(|keyword| message.contains(keyword.as_str()))
                    .map(|keyword| Reply {
                        answer: entry.answer.clone(),
                        matched_keyword: Some(keyword.clone()),
                    })
            })
            .unwrap_or_else(|| Reply {
                answer: self.fallback.clone(),
                matched_keyword: None,
            })
    }
}

impl Default for FaqBot {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn standard_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            &["price", "pricing", "cost", "how much"],
            "Pricing is per node per month with volume discounts: $1.00 for the first \
             10,000 nodes down to $0.20 above 500,000, with a $10,000 monthly minimum. \
             Run `quotemap price <nodes>` for an exact quote.",
        ),
        FaqEntry::new(
            &["roi", "return on investment", "savings", "save"],
            "Most teams recover investigation time by cutting false positives by 90% and \
             investigation effort by 60%. Run `quotemap roi` with your own numbers.",
        ),
        FaqEntry::new(
            &["trial", "free", "try"],
            "We offer a 30-day proof of value on your own data. No credit card required.",
        ),
        FaqEntry::new(
            &["security", "soc 2", "soc2", "compliance", "encrypt"],
            "Data is encrypted in transit and at rest, and the platform is SOC 2 Type II \
             audited annually.",
        ),
        FaqEntry::new(
            &["integrat", "siem", "splunk", "api"],
            "We ship connectors for the major SIEM, EDR and cloud log sources, plus a \
             typed API for anything custom.",
        ),
        FaqEntry::new(
            &["support", "help", "contact"],
            "Every plan includes 24/7 support by email and chat; enterprise plans add a \
             named engineer.",
        ),
        FaqEntry::new(
            &["demo", "sales", "talk"],
            "Book a demo from the contact page and a solutions engineer will walk you \
             through the platform.",
        ),
        FaqEntry::new(
            &["partner", "reseller", "mssp"],
            "Partners and MSSPs can apply through the partner program page; approved \
             partners get deal registration and margin on resold nodes.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_keyword_case_insensitively() {
        let bot = FaqBot::standard();
        let reply = bot.reply("What's your PRICING like?");
        assert_eq!(reply.matched_keyword.as_deref(), Some("pricing"));
        assert!(reply.answer.contains("$10,000"));
    }

    #[test]
    fn test_first_entry_in_order_wins() {
        let bot = FaqBot::standard();
        // "free" (trial) and "support" both appear; trial comes first.
        let reply = bot.reply("is support free?");
        assert_eq!(reply.matched_keyword.as_deref(), Some("free"));
    }

    #[test]
    fn test_substring_matching() {
        let bot = FaqBot::standard();
        let reply = bot.reply("do you have integrations?");
        assert_eq!(reply.matched_keyword.as_deref(), Some("integrat"));
    }

    #[test]
    fn test_unknown_message_gets_fallback() {
        let bot = FaqBot::standard();
        let reply = bot.reply("what is the weather");
        assert_eq!(reply.answer, DEFAULT_FALLBACK);
        assert!(reply.matched_keyword.is_none());
    }

    #[test]
    fn test_blank_message_gets_greeting() {
        let bot = FaqBot::standard();
        assert_eq!(bot.reply("   ").answer, GREETING);
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let bot = FaqBot::new(vec![FaqEntry::new(&["", "  "], "never")], "fallback");
        assert_eq!(bot.reply("anything").answer, "fallback");
    }

    #[test]
    fn test_custom_keywords_are_normalized() {
        let bot = FaqBot::new(vec![FaqEntry::new(&["  GDPR "], "yes")], "no");
        assert_eq!(bot.reply("are you gdpr ready").answer, "yes");
    }
}
