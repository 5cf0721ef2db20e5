//! Per-encounter state
//!
//! [`EncounterSession`] is the single owner of everything that has to be
//! forgotten when the boss leaves: the pending attack slot(s), hazard
//! cooldowns, the standing boss style and tracked tornadoes.

mod cooldown;
mod pending;

pub use cooldown::HazardCooldown;
pub use pending::{PendingAttack, PendingAttacks};

use hashbrown::HashMap;

use crate::game_data::AttackStyle;
use crate::host::{NpcHandle, Tick};

/// State of the tracked boss fight
#[derive(Debug, Clone, Default)]
pub struct EncounterSession {
    /// True while the boss NPC is present
    pub active: bool,
    pub boss: Option<NpcHandle>,
    pub last_reset_at: Tick,

    /// Style announced by the last style-switch animation
    pub current_boss_style: AttackStyle,
    pub pending: PendingAttacks,

    pub tornado_cooldown: HazardCooldown,
    pub floor_cooldown: HazardCooldown,
    /// Live tornadoes keyed by NPC index
    pub tornadoes: HashMap<u32, NpcHandle>,
}

impl EncounterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether `npc` is the boss instance this session tracks
    pub fn is_tracked_boss(&self, npc: NpcHandle) -> bool {
        self.boss.is_some_and(|boss| boss.index == npc.index)
    }

    /// Mark the encounter active for `boss`.
    ///
    /// Clears correlation state and cooldowns but keeps the standing style and
    /// tracked tornadoes, so a re-spawn mid-fight doesn't lose the live boss.
    /// Returns true if the encounter was not active before.
    pub fn begin(&mut self, boss: NpcHandle, now: Tick) -> bool {
        let started = !self.active;
        self.active = true;
        self.boss = Some(boss);
        self.last_reset_at = now;
        self.pending.clear();
        self.tornado_cooldown.reset();
        self.floor_cooldown.reset();
        started
    }

    /// Drop all encounter state as a unit
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn track_tornado(&mut self, npc: NpcHandle) {
        self.tornadoes.insert(npc.index, npc);
    }

    pub fn untrack_tornado(&mut self, npc: NpcHandle) {
        self.tornadoes.remove(&npc.index);
    }
}
