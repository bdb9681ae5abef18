pub mod numbers;

use colored::*;
use std::env;
use std::io::IsTerminal;

pub use numbers::{
    format_currency, format_number, format_per_point, format_roi,
    format_signed_currency,
};

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
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        // Check CLICOLOR environment variable
        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check CLICOLOR_FORCE environment variable
        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Create a plain output configuration (no colors)
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Styling for text printed outside the report tables.
pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        if config.color.should_use_color() {
            colored::control::set_override(true);
        } else {
            colored::control::set_override(false);
        }

        Self { config }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a formatter for the given configuration.
pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color.should_use_color() {
        Box::new(ColoredFormatter::new(config))
    } else {
        Box::new(PlainFormatter)
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check if stdout is a TTY
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_formatter_is_identity() {
        let formatter = PlainFormatter;
        assert_eq!(formatter.header("Portfolio"), "Portfolio");
        assert_eq!(formatter.dim("note"), "note");
    }

    #[test]
    fn never_mode_picks_plain_output() {
        let formatter = formatter_for(FormattingConfig::plain());
        assert_eq!(formatter.header("x"), "x");
    }

    #[test]
    fn explicit_modes_ignore_terminal_detection() {
        assert!(ColorMode::Always.should_use_color());
        assert!(!ColorMode::Never.should_use_color());
    }
}
