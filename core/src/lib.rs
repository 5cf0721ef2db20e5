pub mod announcer;
pub mod context;
pub mod encounter;
pub mod game_data;
pub mod game_event;
pub mod host;
pub mod plugin;
pub mod signal_processor;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use announcer::{Announcer, MessagePicker, parse_message_list};
pub use context::{
    AnnouncerConfig, AnnouncerConfigExt, ChatChannel, ConfigError, MistakeCategory,
    PendingAttackPolicy,
};
pub use encounter::{EncounterSession, HazardCooldown, PendingAttack, PendingAttacks};
pub use game_data::AttackStyle;
pub use game_event::{Actor, EventKind, GameEvent, HitsplatKind};
pub use host::{
    DisplayError, DisplaySink, GameState, LocalPlayer, NpcHandle, SceneError, Tick, WorldPoint,
};
pub use plugin::MistakeAnnouncer;
pub use signal_processor::{EventProcessor, GameEventHandler, GameSignal, SignalHandler};
