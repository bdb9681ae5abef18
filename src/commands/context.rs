use crate::config::AirdropConfig;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::output::OutputFormat;

/// Settings shared by every command, resolved once from CLI flags and
/// the loaded configuration.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: AirdropConfig,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    pub fn new(config: AirdropConfig, plain: bool) -> Self {
        let formatting = resolve_formatting(&config, plain);
        Self { config, formatting }
    }

    /// Flag wins, then `[display] default_format`, then terminal.
    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or_else(|| {
            self.config.default_format().and_then(|name| {
                let parsed = OutputFormat::parse(name);
                if parsed.is_none() {
                    log::warn!("Unknown default_format '{}' in config; using terminal", name);
                }
                parsed
            })
        })
        .unwrap_or(OutputFormat::Terminal)
    }
}

// --plain beats config, config beats environment detection
fn resolve_formatting(config: &AirdropConfig, plain: bool) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    match config.use_color() {
        Some(true) => FormattingConfig::new(ColorMode::Always),
        Some(false) => FormattingConfig::plain(),
        None => FormattingConfig::from_env(),
    }
}
