//! Replay script format
//!
//! A script is a TOML file listing timestamped steps. Steps either change
//! what the scripted client reports (player position, prayers, NPC tiles,
//! ground objects) or are delivered to the announcer as client events.
//!
//! ```toml
//! [player]
//! name = "Zezima"
//! tile = { x = 3200, y = 5700 }
//!
//! [[step]]
//! tick = 90
//! event = "npc_spawned"
//! npc = { index = 1, id = 9037 }
//!
//! [[step]]
//! tick = 100
//! event = "animation"
//! npc = { index = 1, id = 9037 }
//! animation_id = 8419
//!
//! [[step]]
//! tick = 102
//! event = "hitsplat"
//! amount = 12
//! ```

use std::path::Path;

use serde::Deserialize;

use cgmistake_core::{AttackStyle, HitsplatKind, NpcHandle, Tick, WorldPoint};

use super::ReplayError;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub player: ScriptPlayer,
    /// Keep ticking until this tick even after the last step
    #[serde(default)]
    pub end_tick: Option<Tick>,
    #[serde(default, rename = "step")]
    pub steps: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptPlayer {
    #[serde(default = "default_player_name")]
    pub name: String,
    #[serde(default)]
    pub tile: WorldPoint,
}

impl Default for ScriptPlayer {
    fn default() -> Self {
        Self {
            name: default_player_name(),
            tile: WorldPoint::default(),
        }
    }
}

fn default_player_name() -> String {
    "Player".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    pub tick: Tick,
    #[serde(flatten)]
    pub action: StepAction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StepAction {
    // ─── Client events ──────────────────────────────────────────────────────
    NpcSpawned {
        npc: NpcHandle,
        #[serde(default)]
        tile: Option<WorldPoint>,
    },
    NpcDespawned {
        npc: NpcHandle,
    },
    Animation {
        npc: NpcHandle,
        animation_id: i32,
    },
    Hitsplat {
        amount: i32,
        #[serde(default)]
        kind: HitsplatKind,
        /// Name of another player; the local player when absent
        #[serde(default)]
        target: Option<String>,
    },
    Varbit {
        varbit_id: u32,
        value: i32,
    },

    // ─── World changes ──────────────────────────────────────────────────────
    Prayer {
        style: AttackStyle,
        active: bool,
    },
    PlayerMoved {
        tile: WorldPoint,
    },
    NpcMoved {
        index: u32,
        tile: WorldPoint,
    },
    /// Place (or with no `id`, clear) a ground object
    GroundObject {
        tile: WorldPoint,
        #[serde(default)]
        id: Option<u32>,
    },
    Logout,
}

impl ReplayScript {
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReplayError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ReplayError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Steps sorted by tick; steps sharing a tick keep file order
    pub fn ordered_steps(&self) -> Vec<&ScriptStep> {
        let mut steps: Vec<&ScriptStep> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.tick);
        steps
    }
}
