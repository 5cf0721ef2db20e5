//! Attack/defense correlation.
//!
//! A strike animation declares an attack and snapshots the matching
//! protection prayer. The next qualifying damage hitsplat on the local player
//! within the window resolves it; the snapshot, not the prayer state at damage
//! time, decides whether it was a mistake.

use tracing::{debug, info, trace};

use cgmistake_types::{AnnouncerConfig, MistakeCategory};

use crate::encounter::{EncounterSession, PendingAttack};
use crate::game_data::{self, BossAnimation};
use crate::game_event::{Actor, HitsplatKind};
use crate::host::{GameState, Tick};

use super::GameSignal;

pub(super) fn handle_animation(
    actor: &Actor,
    animation_id: i32,
    tick: Tick,
    session: &mut EncounterSession,
    config: &AnnouncerConfig,
    host: &dyn GameState,
) -> Vec<GameSignal> {
    if !session.is_active() {
        return Vec::new();
    }
    let Actor::Npc(npc) = actor else {
        return Vec::new();
    };
    if !game_data::is_boss(npc.id) || !session.is_tracked_boss(*npc) {
        return Vec::new();
    }
    let Some(animation) = game_data::boss_animation(animation_id) else {
        return Vec::new();
    };

    match animation {
        BossAnimation::SwitchStyle(style) => {
            session.current_boss_style = style;
            info!(?style, tick, "Hunllef switched style");
            vec![GameSignal::BossStyleSwitched { style, tick }]
        }
        BossAnimation::Attack => {
            let style = game_data::variant_style(npc.id).unwrap_or(session.current_boss_style);
            let defense_active = host.is_protection_active(style);

            let dropped = session.pending.declare(
                PendingAttack::new(style, tick, defense_active),
                config.pending_attack_policy,
            );
            for attack in dropped {
                debug!(
                    style = ?attack.style,
                    declared_at = attack.declared_at,
                    "pending attack overwritten before its damage landed"
                );
            }

            debug!(?style, defense_active, tick, "Hunllef attack declared");
            vec![GameSignal::AttackDeclared {
                style,
                defense_active,
                tick,
            }]
        }
    }
}

pub(super) fn handle_hitsplat(
    actor: &Actor,
    amount: i32,
    kind: HitsplatKind,
    tick: Tick,
    session: &mut EncounterSession,
    config: &AnnouncerConfig,
    host: &dyn GameState,
    window_ticks: Tick,
) -> Vec<GameSignal> {
    if !session.is_active() || *actor != Actor::LocalPlayer {
        return Vec::new();
    }
    if host.local_player().is_none() {
        return Vec::new();
    }
    // Heals, poison and zero splats never resolve an attack
    if kind != HitsplatKind::Damage || amount <= 0 {
        trace!(?kind, amount, "ignoring non-damage hitsplat");
        return Vec::new();
    }

    let mut signals = expire_pending(tick, session, window_ticks);
    let Some(attack) = session.pending.take_oldest() else {
        debug!(amount, tick, "damage outside any attack window");
        return signals;
    };

    signals.push(GameSignal::AttackResolved {
        style: attack.style,
        defense_active: attack.defense_active,
        damage: amount,
        tick,
    });

    if let Some(category) = judge(&attack, config) {
        info!(%category, damage = amount, tick, "unprotected Hunllef hit");
        signals.push(GameSignal::MistakeDetected { category, tick });
    }

    signals
}

/// Drop every pending attack whose window has closed
pub(super) fn expire_pending(
    tick: Tick,
    session: &mut EncounterSession,
    window_ticks: Tick,
) -> Vec<GameSignal> {
    session
        .pending
        .expire(tick, window_ticks)
        .into_iter()
        .map(|attack| {
            debug!(style = ?attack.style, declared_at = attack.declared_at, "attack window elapsed");
            GameSignal::AttackExpired {
                style: attack.style,
                declared_at: attack.declared_at,
                tick,
            }
        })
        .collect()
}

/// Mistake category for a resolved attack, if any
fn judge(attack: &PendingAttack, config: &AnnouncerConfig) -> Option<MistakeCategory> {
    if attack.defense_active {
        return None;
    }

    let category = attack.style.prayer_category();
    if config.is_tracking(category) {
        Some(category)
    } else if config.track_avoidable_damage {
        Some(MistakeCategory::AvoidableDamage)
    } else {
        None
    }
}
