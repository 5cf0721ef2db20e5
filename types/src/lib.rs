//! Shared configuration types for the CG mistake announcer
//!
//! This crate contains serializable configuration types that are shared between
//! the announcer core (cgmistake-core) and the replay CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Mistake Categories
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of mistake the player made. Each category is bound to its own
/// configurable message list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MistakeCategory {
    /// Took a melee hit without Protect from Melee
    MeleePrayer,
    /// Took a ranged hit without Protect from Missiles
    RangePrayer,
    /// Took a magic hit without Protect from Magic
    MagePrayer,
    /// Stood on a tornado
    Tornado,
    /// Stood on a burning floor tile
    FloorDamage,
    /// Took an unprotected boss hit while prayer-specific tracking for that style is off
    AvoidableDamage,
}

impl MistakeCategory {
    pub const ALL: [MistakeCategory; 6] = [
        MistakeCategory::MeleePrayer,
        MistakeCategory::RangePrayer,
        MistakeCategory::MagePrayer,
        MistakeCategory::Tornado,
        MistakeCategory::FloorDamage,
        MistakeCategory::AvoidableDamage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MistakeCategory::MeleePrayer => "Melee prayer",
            MistakeCategory::RangePrayer => "Range prayer",
            MistakeCategory::MagePrayer => "Mage prayer",
            MistakeCategory::Tornado => "Tornado",
            MistakeCategory::FloorDamage => "Floor damage",
            MistakeCategory::AvoidableDamage => "Avoidable damage",
        }
    }
}

impl fmt::Display for MistakeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Correlation Policy
// ─────────────────────────────────────────────────────────────────────────────

/// What happens when the boss declares a new attack while an earlier one is
/// still waiting for its damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingAttackPolicy {
    /// Keep a single slot; the newest declaration replaces the old one unresolved.
    #[default]
    Overwrite,
    /// Keep every declaration; damage resolves the oldest unexpired one first.
    Queue,
}

/// Chat channel used when posting announcements to the chat log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatChannel {
    #[default]
    Public,
    Game,
}

// ─────────────────────────────────────────────────────────────────────────────
// Announcer Config
// ─────────────────────────────────────────────────────────────────────────────

/// User settings for the announcer.
///
/// Message lists are free text, comma-delimited. Commas inside a single
/// message are not supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnouncerConfig {
    /// Master switch for all mistake tracking
    #[serde(default = "default_true")]
    pub enable_mistake_tracking: bool,

    #[serde(default = "default_true")]
    pub show_overhead_text: bool,
    #[serde(default)]
    pub send_to_chat: bool,
    #[serde(default)]
    pub chat_channel: ChatChannel,

    #[serde(default = "default_true")]
    pub track_melee_prayer_misses: bool,
    #[serde(default = "default_true")]
    pub track_range_prayer_misses: bool,
    #[serde(default = "default_true")]
    pub track_mage_prayer_misses: bool,
    #[serde(default = "default_true")]
    pub track_tornadoes: bool,
    #[serde(default = "default_true")]
    pub track_floor_damage: bool,
    /// Fallback for unprotected hits whose style-specific toggle is off.
    #[serde(default = "default_true")]
    pub track_avoidable_damage: bool,

    /// Generic messages, used for avoidable damage
    #[serde(default = "default_mistake_messages")]
    pub mistake_messages: String,
    #[serde(default = "default_melee_prayer_messages")]
    pub melee_prayer_messages: String,
    #[serde(default = "default_range_prayer_messages")]
    pub range_prayer_messages: String,
    #[serde(default = "default_mage_prayer_messages")]
    pub mage_prayer_messages: String,
    #[serde(default = "default_tornado_messages")]
    pub tornado_messages: String,
    #[serde(default = "default_floor_damage_messages")]
    pub floor_damage_messages: String,

    #[serde(default)]
    pub pending_attack_policy: PendingAttackPolicy,
}

fn default_true() -> bool {
    true
}

fn default_mistake_messages() -> String {
    "Oops!, My bad!, I need to focus!, That was not optimal!".to_string()
}

fn default_melee_prayer_messages() -> String {
    "Forgot to pray melee!, Stomped!, Too close for comfort!".to_string()
}

fn default_range_prayer_messages() -> String {
    "Wrong prayer!, Should have prayed range!, Missed the switch!".to_string()
}

fn default_mage_prayer_messages() -> String {
    "Wrong prayer!, Should have prayed mage!, Missed the switch!".to_string()
}

fn default_tornado_messages() -> String {
    "Tornado got me!, Watch the tornadoes!, Spun around!".to_string()
}

fn default_floor_damage_messages() -> String {
    "The floor is lava!, Hot feet!, Watch your step!".to_string()
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            enable_mistake_tracking: true,
            show_overhead_text: true,
            send_to_chat: false,
            chat_channel: ChatChannel::default(),
            track_melee_prayer_misses: true,
            track_range_prayer_misses: true,
            track_mage_prayer_misses: true,
            track_tornadoes: true,
            track_floor_damage: true,
            track_avoidable_damage: true,
            mistake_messages: default_mistake_messages(),
            melee_prayer_messages: default_melee_prayer_messages(),
            range_prayer_messages: default_range_prayer_messages(),
            mage_prayer_messages: default_mage_prayer_messages(),
            tornado_messages: default_tornado_messages(),
            floor_damage_messages: default_floor_damage_messages(),
            pending_attack_policy: PendingAttackPolicy::default(),
        }
    }
}

impl AnnouncerConfig {
    /// Raw (unparsed) message list configured for a category
    pub fn messages_for(&self, category: MistakeCategory) -> &str {
        match category {
            MistakeCategory::MeleePrayer => &self.melee_prayer_messages,
            MistakeCategory::RangePrayer => &self.range_prayer_messages,
            MistakeCategory::MagePrayer => &self.mage_prayer_messages,
            MistakeCategory::Tornado => &self.tornado_messages,
            MistakeCategory::FloorDamage => &self.floor_damage_messages,
            MistakeCategory::AvoidableDamage => &self.mistake_messages,
        }
    }

    /// Whether detection for a category is switched on
    pub fn is_tracking(&self, category: MistakeCategory) -> bool {
        match category {
            MistakeCategory::MeleePrayer => self.track_melee_prayer_misses,
            MistakeCategory::RangePrayer => self.track_range_prayer_misses,
            MistakeCategory::MagePrayer => self.track_mage_prayer_misses,
            MistakeCategory::Tornado => self.track_tornadoes,
            MistakeCategory::FloorDamage => self.track_floor_damage,
            MistakeCategory::AvoidableDamage => self.track_avoidable_damage,
        }
    }
}
