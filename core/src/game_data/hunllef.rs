//! Hunllef variant and animation lookups

use phf::{phf_map, phf_set};
use serde::{Deserialize, Serialize};

use cgmistake_types::MistakeCategory;

use super::{animation_id, varbit};

/// Combat style of a boss attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackStyle {
    Melee,
    /// The Hunllef opens every fight on range, so this is the standing default.
    #[default]
    Ranged,
    Magic,
}

impl AttackStyle {
    /// Varbit that is 1 while the matching protection prayer is on
    pub fn protection_varbit(self) -> u32 {
        match self {
            AttackStyle::Melee => varbit::PROTECT_FROM_MELEE,
            AttackStyle::Ranged => varbit::PROTECT_FROM_MISSILES,
            AttackStyle::Magic => varbit::PROTECT_FROM_MAGIC,
        }
    }

    /// Mistake reported when this style lands unprotected
    pub fn prayer_category(self) -> MistakeCategory {
        match self {
            AttackStyle::Melee => MistakeCategory::MeleePrayer,
            AttackStyle::Ranged => MistakeCategory::RangePrayer,
            AttackStyle::Magic => MistakeCategory::MagePrayer,
        }
    }
}

/// Boss NPC IDs → attack style implied by the variant.
/// Base variants don't imply a style (`None`); callers fall back to the
/// last observed style switch.
static BOSS_VARIANTS: phf::Map<u32, Option<AttackStyle>> = phf_map! {
    9021u32 => None,
    9022u32 => Some(AttackStyle::Ranged),
    9023u32 => Some(AttackStyle::Magic),
    9024u32 => Some(AttackStyle::Melee),
    9035u32 => None,
    9036u32 => Some(AttackStyle::Ranged),
    9037u32 => Some(AttackStyle::Magic),
    9038u32 => Some(AttackStyle::Melee),
};

static TORNADO_IDS: phf::Set<u32> = phf_set! {
    9025u32,
    9039u32,
};

/// What a boss animation means for the correlator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossAnimation {
    /// Strike animation: an attack is on its way
    Attack,
    /// Style switch: subsequent strikes use this style
    SwitchStyle(AttackStyle),
}

pub fn is_boss(npc_id: u32) -> bool {
    BOSS_VARIANTS.contains_key(&npc_id)
}

pub fn is_tornado(npc_id: u32) -> bool {
    TORNADO_IDS.contains(&npc_id)
}

/// Attack style implied by a boss NPC variant, if any
pub fn variant_style(npc_id: u32) -> Option<AttackStyle> {
    BOSS_VARIANTS.get(&npc_id).copied().flatten()
}

pub fn boss_animation(animation: i32) -> Option<BossAnimation> {
    match animation {
        animation_id::HUNLLEF_ATTACK => Some(BossAnimation::Attack),
        animation_id::HUNLLEF_MAGE_SWITCH => Some(BossAnimation::SwitchStyle(AttackStyle::Magic)),
        animation_id::HUNLLEF_RANGE_SWITCH => Some(BossAnimation::SwitchStyle(AttackStyle::Ranged)),
        _ => None,
    }
}
