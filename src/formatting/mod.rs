//! Terminal styling and locale-style number display.

pub mod numbers;

pub use numbers::{format_currency, format_number, format_percent};

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Resolve `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` through `lookup`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Per no-color.org, presence alone disables color
        if lookup("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if lookup("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only, no colors.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Applies the configured color mode to text.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn money(&self, text: &str) -> String {
        self.paint(text, |t| t.green().bold())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_disables() {
        let config = FormattingConfig::from_vars(|k| (k == "NO_COLOR").then(String::new));
        assert_eq!(config.color, ColorMode::Never);
    }

    #[test]
    fn test_clicolor_force_wins() {
        let config = FormattingConfig::from_vars(|k| match k {
            "CLICOLOR" => Some("0".to_string()),
            "CLICOLOR_FORCE" => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn test_no_vars_is_auto() {
        let config = FormattingConfig::from_vars(|_| None);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_plain_painter_passes_text_through() {
        let painter = Painter::plain();
        assert_eq!(painter.header("Quote"), "Quote");
        assert_eq!(painter.money("$1"), "$1");
    }
}
