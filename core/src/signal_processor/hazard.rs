//! Per-tick hazard detectors (tornado overlap, burning floor).
//!
//! Each detector has its own cooldown so standing on a hazard produces one
//! announcement per cooldown window instead of one per tick.

use tracing::{debug, info};

use cgmistake_types::{AnnouncerConfig, MistakeCategory};

use crate::encounter::EncounterSession;
use crate::game_data::object_id;
use crate::host::{GameState, LocalPlayer, Tick};

use super::GameSignal;

pub(super) fn scan_hazards(
    tick: Tick,
    player: &LocalPlayer,
    session: &mut EncounterSession,
    config: &AnnouncerConfig,
    host: &dyn GameState,
    cooldown_ticks: Tick,
) -> Vec<GameSignal> {
    let mut signals = Vec::new();

    if config.track_tornadoes
        && session.tornado_cooldown.ready(tick, cooldown_ticks)
        && standing_on_tornado(player, session, host)
    {
        session.tornado_cooldown.mark(tick);
        info!(tick, "player standing on a tornado");
        signals.push(GameSignal::MistakeDetected {
            category: MistakeCategory::Tornado,
            tick,
        });
    }

    if config.track_floor_damage
        && session.floor_cooldown.ready(tick, cooldown_ticks)
        && standing_on_damage_tile(player, host)
    {
        session.floor_cooldown.mark(tick);
        info!(tick, "player standing on a burning tile");
        signals.push(GameSignal::MistakeDetected {
            category: MistakeCategory::FloorDamage,
            tick,
        });
    }

    signals
}

fn standing_on_tornado(player: &LocalPlayer, session: &EncounterSession, host: &dyn GameState) -> bool {
    session
        .tornadoes
        .values()
        .any(|tornado| host.npc_location(*tornado) == Some(player.tile))
}

fn standing_on_damage_tile(player: &LocalPlayer, host: &dyn GameState) -> bool {
    match host.ground_object_at(player.tile) {
        Ok(object) => object == Some(object_id::DAMAGE_TILE),
        Err(err) => {
            debug!(error = %err, "floor damage lookup failed");
            false
        }
    }
}
