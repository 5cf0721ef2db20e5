//! Replay driver: plays a scripted encounter through the announcer
//!
//! Steps are applied tick by tick. Within a tick every scripted event is
//! delivered before the tick heartbeat, matching how the client orders them.

mod script;
mod world;

pub use script::{ReplayScript, ScriptPlayer, ScriptStep, StepAction};
pub use world::{ConsoleSink, ReplayWorld};

use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use cgmistake_core::{
    Actor, AnnouncerConfig, EventKind, GameEvent, GameEventHandler, GameSignal, LocalPlayer,
    MessagePicker, MistakeAnnouncer, MistakeCategory, Tick,
};

/// Errors while loading or running a replay
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay script {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse replay script {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("replay script has no steps")]
    Empty,

    #[error("failed to write replay output")]
    Output(#[from] std::io::Error),
}

/// Outcome of a replay
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub ticks: u32,
    pub encounters: u32,
    pub attacks: u32,
    /// Count per category, in `MistakeCategory::ALL` order
    pub mistakes: Vec<(MistakeCategory, u32)>,
    /// Everything the display sink was asked to show
    pub announcements: Vec<String>,
}

impl ReplaySummary {
    pub fn total_mistakes(&self) -> u32 {
        self.mistakes.iter().map(|(_, n)| n).sum()
    }

    pub fn count(&self, category: MistakeCategory) -> u32 {
        self.mistakes
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    fn record(&mut self, signals: &[GameSignal]) {
        for signal in signals {
            match signal {
                GameSignal::EncounterStarted { .. } => self.encounters += 1,
                GameSignal::AttackDeclared { .. } => self.attacks += 1,
                GameSignal::MistakeDetected { category, .. } => {
                    if let Some((_, n)) = self.mistakes.iter_mut().find(|(c, _)| c == category) {
                        *n += 1;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Play `script` and write announcements to `out` as they happen
pub fn run_replay(
    script: &ReplayScript,
    config: AnnouncerConfig,
    seed: Option<u64>,
    out: &mut impl Write,
) -> Result<ReplaySummary, ReplayError> {
    let steps = script.ordered_steps();
    let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
        return Err(ReplayError::Empty);
    };
    let start = first.tick;
    let end = script.end_tick.map_or(last.tick, |end| end.max(last.tick));

    let picker = match seed {
        Some(seed) => MessagePicker::seeded(seed),
        None => MessagePicker::from_entropy(),
    };
    let mut plugin = MistakeAnnouncer::with_picker(config, ConsoleSink::default(), picker);
    let mut world = ReplayWorld::new(&script.player);
    let mut summary = ReplaySummary {
        mistakes: MistakeCategory::ALL.iter().map(|c| (*c, 0)).collect(),
        ..Default::default()
    };
    let mut printed = 0;

    plugin.start_up();

    let mut pending = steps.into_iter().peekable();
    for tick in start..=end {
        while let Some(step) = pending.next_if(|step| step.tick == tick) {
            if let Some(event) = apply_step(&step.action, tick, &mut world, &script.player) {
                let signals = plugin.handle_event(event, &world);
                summary.record(&signals);
            }
        }

        let signals = plugin.on_game_tick(tick, &world);
        summary.record(&signals);
        summary.ticks += 1;

        for line in &plugin.sink().lines[printed..] {
            writeln!(out, "[tick {tick}] {line}")?;
        }
        printed = plugin.sink().lines.len();
    }

    plugin.shut_down();
    summary.announcements = plugin.sink().lines.clone();
    Ok(summary)
}

/// Apply a step to the world; returns the client event it represents, if any
fn apply_step(
    action: &StepAction,
    tick: Tick,
    world: &mut ReplayWorld,
    player: &ScriptPlayer,
) -> Option<GameEvent> {
    let kind = match action {
        StepAction::NpcSpawned { npc, tile } => {
            if let Some(tile) = tile {
                world.npc_tiles.insert(npc.index, *tile);
            }
            EventKind::NpcSpawned { npc: *npc }
        }
        StepAction::NpcDespawned { npc } => {
            world.npc_tiles.remove(&npc.index);
            EventKind::NpcDespawned { npc: *npc }
        }
        StepAction::Animation { npc, animation_id } => EventKind::AnimationChanged {
            actor: Actor::Npc(*npc),
            animation_id: *animation_id,
        },
        StepAction::Hitsplat {
            amount,
            kind,
            target,
        } => EventKind::HitsplatApplied {
            actor: match target {
                Some(name) => Actor::Player { name: name.clone() },
                None => Actor::LocalPlayer,
            },
            amount: *amount,
            kind: *kind,
        },
        StepAction::Varbit { varbit_id, value } => {
            world.varbits.insert(*varbit_id, *value);
            EventKind::VarbitChanged {
                varbit_id: *varbit_id,
                value: *value,
            }
        }
        StepAction::Prayer { style, active } => {
            world
                .varbits
                .insert(style.protection_varbit(), i32::from(*active));
            return None;
        }
        StepAction::PlayerMoved { tile } => {
            let current = world.player.get_or_insert_with(|| LocalPlayer {
                name: player.name.clone(),
                tile: *tile,
            });
            current.tile = *tile;
            return None;
        }
        StepAction::NpcMoved { index, tile } => {
            world.npc_tiles.insert(*index, *tile);
            return None;
        }
        StepAction::GroundObject { tile, id } => {
            match id {
                Some(id) => world.ground_objects.insert(*tile, *id),
                None => world.ground_objects.remove(tile),
            };
            return None;
        }
        StepAction::Logout => {
            debug!(tick, "scripted logout");
            world.player = None;
            return None;
        }
    };
    Some(GameEvent::new(tick, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
        end_tick = 60

        [player]
        name = "Zezima"
        tile = { x = 3200, y = 5700 }

        [[step]]
        tick = 40
        event = "npc_spawned"
        npc = { index = 1, id = 9037 }

        [[step]]
        tick = 41
        event = "npc_spawned"
        npc = { index = 40, id = 9039 }
        tile = { x = 3190, y = 5690 }

        [[step]]
        tick = 45
        event = "animation"
        npc = { index = 1, id = 9037 }
        animation_id = 8419

        [[step]]
        tick = 47
        event = "hitsplat"
        amount = 12

        [[step]]
        tick = 48
        event = "prayer"
        style = "magic"
        active = true

        [[step]]
        tick = 49
        event = "animation"
        npc = { index = 1, id = 9037 }
        animation_id = 8419

        [[step]]
        tick = 50
        event = "hitsplat"
        amount = 9

        [[step]]
        tick = 50
        event = "npc_moved"
        index = 40
        tile = { x = 3200, y = 5700 }

        [[step]]
        tick = 56
        event = "npc_moved"
        index = 40
        tile = { x = 3199, y = 5700 }

        [[step]]
        tick = 58
        event = "npc_despawned"
        npc = { index = 1, id = 9037 }
    "#;

    fn config() -> AnnouncerConfig {
        AnnouncerConfig {
            mage_prayer_messages: "Mage!".into(),
            tornado_messages: "Spin!".into(),
            ..Default::default()
        }
    }

    #[test]
    fn replay_counts_mistakes() {
        let script = ReplayScript::parse(SCRIPT).unwrap();
        let mut out = Vec::new();

        let summary = run_replay(&script, config(), Some(1), &mut out).unwrap();

        assert_eq!(summary.ticks, 21);
        assert_eq!(summary.encounters, 1);
        assert_eq!(summary.attacks, 2);
        assert_eq!(summary.count(MistakeCategory::MagePrayer), 1);
        // Tornado on the player's tile for ticks 50..=55
        assert_eq!(summary.count(MistakeCategory::Tornado), 2);
        assert_eq!(summary.total_mistakes(), 3);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[tick 47] overhead (100 ticks): Mage!"));
        assert!(output.contains("[tick 50] overhead (100 ticks): Spin!"));
        assert!(output.contains("[tick 53] overhead (100 ticks): Spin!"));
    }

    #[test]
    fn replay_honors_chat_toggle() {
        let script = ReplayScript::parse(SCRIPT).unwrap();
        let config = AnnouncerConfig {
            show_overhead_text: false,
            send_to_chat: true,
            ..config()
        };

        let summary = run_replay(&script, config, Some(1), &mut Vec::new()).unwrap();

        assert_eq!(summary.announcements.len(), 3);
        assert!(summary.announcements[0].starts_with("chat [Public] Zezima: "));
    }

    #[test]
    fn empty_script_is_rejected() {
        let script = ReplayScript::parse("").unwrap();
        let err = run_replay(&script, config(), None, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, ReplayError::Empty));
    }

    #[test]
    fn steps_are_ordered_by_tick() {
        let script = ReplayScript::parse(
            r#"
            [[step]]
            tick = 5
            event = "logout"

            [[step]]
            tick = 2
            event = "varbit"
            varbit_id = 9177
            value = 1
            "#,
        )
        .unwrap();

        let ticks: Vec<Tick> = script.ordered_steps().iter().map(|s| s.tick).collect();
        assert_eq!(ticks, vec![2, 5]);
    }
}
