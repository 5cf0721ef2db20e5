//! Encounter lifecycle.
//!
//! The encounter is active exactly while the boss NPC is present. The stage
//! varbits look authoritative but flip on and off during the fight, so they
//! are logged and otherwise ignored.

use tracing::{debug, info, trace};

use crate::encounter::EncounterSession;
use crate::game_data::{self, varbit};
use crate::host::{NpcHandle, Tick};

use super::GameSignal;

pub(super) fn handle_npc_spawned(
    npc: NpcHandle,
    tick: Tick,
    session: &mut EncounterSession,
) -> Vec<GameSignal> {
    if game_data::is_tornado(npc.id) {
        trace!(index = npc.index, "tornado spawned");
        session.track_tornado(npc);
        return Vec::new();
    }
    if !game_data::is_boss(npc.id) {
        return Vec::new();
    }

    if session.begin(npc, tick) {
        info!(npc_id = npc.id, tick, "Hunllef spawned, encounter active");
        vec![GameSignal::EncounterStarted { boss: npc, tick }]
    } else {
        info!(npc_id = npc.id, tick, "Hunllef re-spawned, tracking new handle");
        Vec::new()
    }
}

pub(super) fn handle_npc_despawned(
    npc: NpcHandle,
    tick: Tick,
    session: &mut EncounterSession,
) -> Vec<GameSignal> {
    if game_data::is_tornado(npc.id) {
        trace!(index = npc.index, "tornado despawned");
        session.untrack_tornado(npc);
        return Vec::new();
    }
    if !game_data::is_boss(npc.id) {
        return Vec::new();
    }
    if !session.is_tracked_boss(npc) {
        debug!(index = npc.index, "ignoring despawn of untracked Hunllef handle");
        return Vec::new();
    }

    session.reset();
    info!(tick, "Hunllef despawned, encounter ended");
    vec![GameSignal::EncounterEnded { tick }]
}

pub(super) fn note_varbit(varbit_id: u32, value: i32, session: &EncounterSession) {
    if matches!(varbit_id, varbit::GAUNTLET_BOSS_START | varbit::GAUNTLET_MAZE) {
        trace!(
            varbit_id,
            value,
            active = session.is_active(),
            "stage varbit changed, not used for gating"
        );
    }
}
