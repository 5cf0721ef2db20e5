use cgmistake_core::{AnnouncerConfig, AnnouncerConfigExt};

/// Holds all state for the CLI session.
pub struct CliContext {
    pub config: AnnouncerConfig,
    /// Seed applied to every replay unless overridden per command
    pub seed: Option<u64>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: AnnouncerConfig::load(),
            seed: None,
        }
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
