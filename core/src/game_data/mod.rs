//! Static game data for the Corrupted/Crystalline Hunllef encounter
//!
//! Raw IDs are grouped into modules by kind, mirroring how the client
//! exposes them. Lookups that need more than a constant live in `hunllef`.

pub mod hunllef;

pub use hunllef::{AttackStyle, BossAnimation, boss_animation, is_boss, is_tornado, variant_style};

/// NPC definition IDs
pub mod npc_id {
    pub const CRYSTALLINE_HUNLLEF: u32 = 9021;
    pub const CRYSTALLINE_HUNLLEF_RANGE: u32 = 9022;
    pub const CRYSTALLINE_HUNLLEF_MAGE: u32 = 9023;
    pub const CRYSTALLINE_HUNLLEF_MELEE: u32 = 9024;
    pub const CRYSTALLINE_TORNADO: u32 = 9025;

    pub const CORRUPTED_HUNLLEF: u32 = 9035;
    pub const CORRUPTED_HUNLLEF_RANGE: u32 = 9036;
    pub const CORRUPTED_HUNLLEF_MAGE: u32 = 9037;
    pub const CORRUPTED_HUNLLEF_MELEE: u32 = 9038;
    pub const CORRUPTED_TORNADO: u32 = 9039;
}

/// Animation IDs played by the Hunllef
pub mod animation_id {
    pub const HUNLLEF_ATTACK: i32 = 8419;
    pub const HUNLLEF_MAGE_SWITCH: i32 = 8754;
    pub const HUNLLEF_RANGE_SWITCH: i32 = 8755;
}

/// Varbit IDs
pub mod varbit {
    /// Boss room stage flag. Advisory only: it toggles spuriously mid-fight.
    pub const GAUNTLET_BOSS_START: u32 = 9177;
    /// Maze stage flag. Advisory only.
    pub const GAUNTLET_MAZE: u32 = 9178;

    pub const PROTECT_FROM_MISSILES: u32 = 5489;
    pub const PROTECT_FROM_MAGIC: u32 = 5490;
    pub const PROTECT_FROM_MELEE: u32 = 5491;
}

/// Scene object IDs
pub mod object_id {
    /// Burning floor tile left behind by the Hunllef
    pub const DAMAGE_TILE: u32 = 36048;
}

/// Tick-based timing constants
pub mod timing {
    /// A damage hitsplat is attributed to an attack declared at most this many ticks earlier.
    pub const ATTACK_DAMAGE_WINDOW_TICKS: i32 = 3;
    /// Minimum gap between two announcements of the same hazard.
    pub const ANNOUNCE_COOLDOWN_TICKS: i32 = 3;
    /// How long overhead text stays above the player.
    pub const OVERHEAD_DURATION_TICKS: u32 = 100;
}
