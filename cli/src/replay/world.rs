//! Scripted client used by the replay driver

use hashbrown::HashMap;

use cgmistake_core::{
    ChatChannel, DisplayError, DisplaySink, GameState, LocalPlayer, NpcHandle, SceneError,
    WorldPoint,
};

use super::script::ScriptPlayer;

/// Client state as described by the script so far
#[derive(Debug, Default)]
pub struct ReplayWorld {
    pub player: Option<LocalPlayer>,
    pub npc_tiles: HashMap<u32, WorldPoint>,
    pub varbits: HashMap<u32, i32>,
    pub ground_objects: HashMap<WorldPoint, u32>,
}

impl ReplayWorld {
    pub fn new(player: &ScriptPlayer) -> Self {
        Self {
            player: Some(LocalPlayer {
                name: player.name.clone(),
                tile: player.tile,
            }),
            ..Default::default()
        }
    }
}

impl GameState for ReplayWorld {
    fn local_player(&self) -> Option<LocalPlayer> {
        self.player.clone()
    }

    fn npc_location(&self, npc: NpcHandle) -> Option<WorldPoint> {
        self.npc_tiles.get(&npc.index).copied()
    }

    fn varbit_value(&self, varbit_id: u32) -> i32 {
        self.varbits.get(&varbit_id).copied().unwrap_or(0)
    }

    fn ground_object_at(&self, tile: WorldPoint) -> Result<Option<u32>, SceneError> {
        Ok(self.ground_objects.get(&tile).copied())
    }
}

/// Display sink that buffers lines for the console
#[derive(Debug, Default)]
pub struct ConsoleSink {
    pub lines: Vec<String>,
}

impl DisplaySink for ConsoleSink {
    fn set_overhead_text(&mut self, text: &str, duration_ticks: u32) -> Result<(), DisplayError> {
        self.lines
            .push(format!("overhead ({duration_ticks} ticks): {text}"));
        Ok(())
    }

    fn post_chat_message(
        &mut self,
        channel: ChatChannel,
        sender: &str,
        message: &str,
    ) -> Result<(), DisplayError> {
        self.lines
            .push(format!("chat [{channel:?}] {sender}: {message}"));
        Ok(())
    }
}
