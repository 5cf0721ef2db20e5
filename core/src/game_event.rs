//! Events delivered by the host, in server tick order.

use serde::{Deserialize, Serialize};

use crate::host::{NpcHandle, Tick};

/// An actor that can play animations or receive hitsplats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    LocalPlayer,
    Player { name: String },
    Npc(NpcHandle),
}

/// Hitsplat type. Only [`HitsplatKind::Damage`] can resolve a boss attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitsplatKind {
    #[default]
    Damage,
    Block,
    Heal,
    Poison,
    Venom,
    Disease,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    NpcSpawned { npc: NpcHandle },
    NpcDespawned { npc: NpcHandle },
    AnimationChanged { actor: Actor, animation_id: i32 },
    HitsplatApplied { actor: Actor, amount: i32, kind: HitsplatKind },
    /// Heartbeat; runs after every other event of the same tick
    GameTick,
    VarbitChanged { varbit_id: u32, value: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    pub tick: Tick,
    pub kind: EventKind,
}

impl GameEvent {
    pub fn new(tick: Tick, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
