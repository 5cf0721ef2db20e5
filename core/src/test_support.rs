//! Scripted host and recording display sink shared by unit tests

use hashbrown::HashMap;

use cgmistake_types::ChatChannel;

use crate::game_data::AttackStyle;
use crate::host::{
    DisplayError, DisplaySink, GameState, LocalPlayer, NpcHandle, SceneError, WorldPoint,
};

pub const PLAYER_NAME: &str = "Zezima";

/// Host whose state is set directly by the test
#[derive(Debug, Default)]
pub struct FakeHost {
    pub player: Option<LocalPlayer>,
    pub npc_tiles: HashMap<u32, WorldPoint>,
    pub varbits: HashMap<u32, i32>,
    pub ground_objects: HashMap<WorldPoint, u32>,
    pub scene_broken: bool,
}

impl FakeHost {
    /// Logged-in player standing at (3200, 5700, 0)
    pub fn with_player() -> Self {
        Self {
            player: Some(LocalPlayer {
                name: PLAYER_NAME.to_string(),
                tile: WorldPoint::new(3200, 5700, 0),
            }),
            ..Default::default()
        }
    }

    pub fn player_tile(&self) -> WorldPoint {
        self.player.as_ref().map(|p| p.tile).unwrap_or_default()
    }

    pub fn move_player(&mut self, tile: WorldPoint) {
        if let Some(player) = self.player.as_mut() {
            player.tile = tile;
        }
    }

    pub fn move_npc(&mut self, npc: NpcHandle, tile: WorldPoint) {
        self.npc_tiles.insert(npc.index, tile);
    }

    pub fn set_protection(&mut self, style: AttackStyle, active: bool) {
        self.varbits
            .insert(style.protection_varbit(), i32::from(active));
    }
}

impl GameState for FakeHost {
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
        if self.scene_broken {
            return Err(SceneError::NotLoaded);
        }
        Ok(self.ground_objects.get(&tile).copied())
    }
}

/// Something the recording sink was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Overhead { text: String, duration: u32 },
    Chat { channel: ChatChannel, sender: String, message: String },
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub shown: Vec<Shown>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn overhead_texts(&self) -> Vec<&str> {
        self.shown
            .iter()
            .filter_map(|s| match s {
                Shown::Overhead { text, .. } => Some(text.as_str()),
                Shown::Chat { .. } => None,
            })
            .collect()
    }
}

impl DisplaySink for RecordingSink {
    fn set_overhead_text(&mut self, text: &str, duration_ticks: u32) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Rejected {
                reason: "test sink".into(),
            });
        }
        self.shown.push(Shown::Overhead {
            text: text.to_string(),
            duration: duration_ticks,
        });
        Ok(())
    }

    fn post_chat_message(
        &mut self,
        channel: ChatChannel,
        sender: &str,
        message: &str,
    ) -> Result<(), DisplayError> {
        if self.fail {
            return Err(DisplayError::Rejected {
                reason: "test sink".into(),
            });
        }
        self.shown.push(Shown::Chat {
            channel,
            sender: sender.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
