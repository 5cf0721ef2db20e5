//! Persistent user configuration

pub mod config;
mod error;

pub use config::{AnnouncerConfig, AnnouncerConfigExt, ChatChannel, MistakeCategory, PendingAttackPolicy};
pub use error::ConfigError;
