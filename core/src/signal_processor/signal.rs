use cgmistake_types::MistakeCategory;

use crate::game_data::AttackStyle;
use crate::host::{NpcHandle, Tick};

/// Signals emitted by the EventProcessor.
/// These represent "interesting things that happened" at a higher level
/// than raw client events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSignal {
    // Encounter lifecycle
    EncounterStarted {
        boss: NpcHandle,
        tick: Tick,
    },
    EncounterEnded {
        tick: Tick,
    },

    // ─── Correlator ────────────────────────────────────────────────────────────
    /// Style-switch animation observed; later strikes default to this style
    BossStyleSwitched {
        style: AttackStyle,
        tick: Tick,
    },
    AttackDeclared {
        style: AttackStyle,
        /// Protection prayer state captured at declaration
        defense_active: bool,
        tick: Tick,
    },
    /// Damage landed inside the window of a pending attack
    AttackResolved {
        style: AttackStyle,
        defense_active: bool,
        damage: i32,
        tick: Tick,
    },
    /// Window closed without damage
    AttackExpired {
        style: AttackStyle,
        declared_at: Tick,
        tick: Tick,
    },

    /// The player made a mistake worth announcing
    MistakeDetected {
        category: MistakeCategory,
        tick: Tick,
    },
}

impl GameSignal {
    /// Get the tick from any signal variant
    pub fn tick(&self) -> Tick {
        match self {
            Self::EncounterStarted { tick, .. }
            | Self::EncounterEnded { tick }
            | Self::BossStyleSwitched { tick, .. }
            | Self::AttackDeclared { tick, .. }
            | Self::AttackResolved { tick, .. }
            | Self::AttackExpired { tick, .. }
            | Self::MistakeDetected { tick, .. } => *tick,
        }
    }

    /// Category if this signal reports a mistake
    pub fn mistake(&self) -> Option<MistakeCategory> {
        match self {
            Self::MistakeDetected { category, .. } => Some(*category),
            _ => None,
        }
    }
}
