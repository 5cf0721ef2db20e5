use super::signal::GameSignal;
use crate::game_event::{Actor, EventKind, GameEvent, HitsplatKind};
use crate::host::{GameState, NpcHandle, Tick};

/// Trait for systems that react to game signals.
/// Implement this for announcers, counters, overlays, etc.
pub trait SignalHandler {
    /// Handle a single signal. The host is available for lookups such as
    /// the local player's name.
    fn handle_signal(&mut self, signal: &GameSignal, host: &dyn GameState);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[GameSignal], host: &dyn GameState) {
        for signal in signals {
            self.handle_signal(signal, host);
        }
    }

    /// Called when the boss appears (optional hook for reset logic)
    fn on_encounter_start(&mut self, _boss: NpcHandle) {}

    /// Called when the boss despawns (optional hook for cleanup)
    fn on_encounter_end(&mut self) {}
}

/// Typed entry point for the host's event stream.
///
/// Drivers call one method per event kind, synchronously and in tick order.
/// Implementors only need [`GameEventHandler::handle_event`].
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent, host: &dyn GameState) -> Vec<GameSignal>;

    fn on_npc_spawned(&mut self, tick: Tick, npc: NpcHandle, host: &dyn GameState) -> Vec<GameSignal> {
        self.handle_event(GameEvent::new(tick, EventKind::NpcSpawned { npc }), host)
    }

    fn on_npc_despawned(&mut self, tick: Tick, npc: NpcHandle, host: &dyn GameState) -> Vec<GameSignal> {
        self.handle_event(GameEvent::new(tick, EventKind::NpcDespawned { npc }), host)
    }

    fn on_animation_changed(
        &mut self,
        tick: Tick,
        actor: Actor,
        animation_id: i32,
        host: &dyn GameState,
    ) -> Vec<GameSignal> {
        self.handle_event(
            GameEvent::new(tick, EventKind::AnimationChanged { actor, animation_id }),
            host,
        )
    }

    fn on_hitsplat_applied(
        &mut self,
        tick: Tick,
        actor: Actor,
        amount: i32,
        kind: HitsplatKind,
        host: &dyn GameState,
    ) -> Vec<GameSignal> {
        self.handle_event(
            GameEvent::new(tick, EventKind::HitsplatApplied { actor, amount, kind }),
            host,
        )
    }

    fn on_game_tick(&mut self, tick: Tick, host: &dyn GameState) -> Vec<GameSignal> {
        self.handle_event(GameEvent::new(tick, EventKind::GameTick), host)
    }

    fn on_varbit_changed(
        &mut self,
        tick: Tick,
        varbit_id: u32,
        value: i32,
        host: &dyn GameState,
    ) -> Vec<GameSignal> {
        self.handle_event(
            GameEvent::new(tick, EventKind::VarbitChanged { varbit_id, value }),
            host,
        )
    }
}
