//! Host game client boundary
//!
//! The announcer never talks to the game client directly. The host exposes a
//! read-only query surface ([`GameState`]) and a display surface
//! ([`DisplaySink`]); both are implemented by whatever drives the core
//! (a client binding, the replay CLI, or a test fake).

mod error;

pub use error::{DisplayError, SceneError};

use serde::{Deserialize, Serialize};

use cgmistake_types::ChatChannel;

use crate::game_data::AttackStyle;

/// Game tick counter as reported by the client
pub type Tick = i32;

/// Absolute tile coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub plane: i32,
}

impl WorldPoint {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }
}

/// Handle to a live NPC.
///
/// `index` identifies the instance for its lifetime in the scene; `id` is the
/// definition ID, which may change when the NPC transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NpcHandle {
    pub index: u32,
    pub id: u32,
}

impl NpcHandle {
    pub const fn new(index: u32, id: u32) -> Self {
        Self { index, id }
    }
}

/// Snapshot of the local player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPlayer {
    pub name: String,
    pub tile: WorldPoint,
}

/// Read-only queries against current client state
pub trait GameState {
    /// The local player, or `None` while the client isn't logged in yet
    fn local_player(&self) -> Option<LocalPlayer>;

    /// Current tile of an NPC, or `None` if it's no longer in the scene
    fn npc_location(&self, npc: NpcHandle) -> Option<WorldPoint>;

    fn varbit_value(&self, varbit_id: u32) -> i32;

    /// ID of the ground decoration on a tile, if any
    fn ground_object_at(&self, tile: WorldPoint) -> Result<Option<u32>, SceneError>;

    /// Whether the protection prayer for `style` is currently on
    fn is_protection_active(&self, style: AttackStyle) -> bool {
        self.varbit_value(style.protection_varbit()) == 1
    }
}

/// Where announcements end up
pub trait DisplaySink {
    /// Show transient text above the local player's head
    fn set_overhead_text(&mut self, text: &str, duration_ticks: u32) -> Result<(), DisplayError>;

    fn post_chat_message(
        &mut self,
        channel: ChatChannel,
        sender: &str,
        message: &str,
    ) -> Result<(), DisplayError>;
}
