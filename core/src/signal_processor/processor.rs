use cgmistake_types::AnnouncerConfig;

use crate::encounter::EncounterSession;
use crate::game_data::timing::{ANNOUNCE_COOLDOWN_TICKS, ATTACK_DAMAGE_WINDOW_TICKS};
use crate::game_event::{EventKind, GameEvent};
use crate::host::{GameState, Tick};
use crate::signal_processor::signal::GameSignal;

use super::{attack, encounter_state, hazard};

/// Processes client events against an encounter session and emits signals.
/// This is the state machine that gates on the encounter and classifies mistakes.
pub struct EventProcessor {
    /// Max ticks between an attack declaration and the damage it caused
    attack_window_ticks: Tick,
    /// Min ticks between two announcements of the same hazard
    announce_cooldown_ticks: Tick,
}

impl Default for EventProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl EventProcessor {
    pub fn new() -> Self {
        Self {
            attack_window_ticks: ATTACK_DAMAGE_WINDOW_TICKS,
            announce_cooldown_ticks: ANNOUNCE_COOLDOWN_TICKS,
        }
    }

    pub fn with_timing(attack_window_ticks: Tick, announce_cooldown_ticks: Tick) -> Self {
        Self {
            attack_window_ticks,
            announce_cooldown_ticks,
        }
    }

    /// Process an incoming event.
    /// Updates the session and returns signals for cross-cutting concerns.
    pub fn process_event(
        &mut self,
        event: &GameEvent,
        session: &mut EncounterSession,
        config: &AnnouncerConfig,
        host: &dyn GameState,
    ) -> Vec<GameSignal> {
        let tick = event.tick;

        match &event.kind {
            // ═══════════════════════════════════════════════════════════════════
            // Bookkeeping: runs even with tracking disabled so the session stays
            // consistent when the user toggles tracking back on mid-fight.
            // ═══════════════════════════════════════════════════════════════════
            EventKind::NpcSpawned { npc } => encounter_state::handle_npc_spawned(*npc, tick, session),
            EventKind::NpcDespawned { npc } => {
                encounter_state::handle_npc_despawned(*npc, tick, session)
            }
            EventKind::VarbitChanged { varbit_id, value } => {
                encounter_state::note_varbit(*varbit_id, *value, session);
                Vec::new()
            }

            // ═══════════════════════════════════════════════════════════════════
            // Classification
            // ═══════════════════════════════════════════════════════════════════
            _ if !config.enable_mistake_tracking => Vec::new(),
            EventKind::AnimationChanged {
                actor,
                animation_id,
            } => attack::handle_animation(actor, *animation_id, tick, session, config, host),
            EventKind::HitsplatApplied {
                actor,
                amount,
                kind,
            } => attack::handle_hitsplat(
                actor,
                *amount,
                *kind,
                tick,
                session,
                config,
                host,
                self.attack_window_ticks,
            ),
            EventKind::GameTick => self.handle_tick(tick, session, config, host),
        }
    }

    fn handle_tick(
        &self,
        tick: Tick,
        session: &mut EncounterSession,
        config: &AnnouncerConfig,
        host: &dyn GameState,
    ) -> Vec<GameSignal> {
        if !session.is_active() {
            return Vec::new();
        }
        let Some(player) = host.local_player() else {
            return Vec::new();
        };

        let mut signals = attack::expire_pending(tick, session, self.attack_window_ticks);
        signals.extend(hazard::scan_hazards(
            tick,
            &player,
            session,
            config,
            host,
            self.announce_cooldown_ticks,
        ));
        signals
    }
}
