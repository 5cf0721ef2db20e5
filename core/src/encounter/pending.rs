//! Declared-but-unresolved boss attacks

use std::collections::VecDeque;

use cgmistake_types::PendingAttackPolicy;

use crate::game_data::AttackStyle;
use crate::host::Tick;

/// A boss attack waiting for its damage hitsplat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAttack {
    pub style: AttackStyle,
    pub declared_at: Tick,
    /// Whether the matching protection prayer was on when the attack was declared
    pub defense_active: bool,
}

impl PendingAttack {
    pub fn new(style: AttackStyle, declared_at: Tick, defense_active: bool) -> Self {
        Self {
            style,
            declared_at,
            defense_active,
        }
    }

    pub fn is_expired(&self, now: Tick, window_ticks: Tick) -> bool {
        now - self.declared_at > window_ticks
    }
}

/// Pending attacks, oldest first.
///
/// Under [`PendingAttackPolicy::Overwrite`] this never holds more than one entry.
#[derive(Debug, Clone, Default)]
pub struct PendingAttacks {
    slots: VecDeque<PendingAttack>,
}

impl PendingAttacks {
    /// Record a new declaration. Returns the attacks dropped unresolved to make room.
    pub fn declare(
        &mut self,
        attack: PendingAttack,
        policy: PendingAttackPolicy,
    ) -> Vec<PendingAttack> {
        let dropped = match policy {
            PendingAttackPolicy::Overwrite => self.slots.drain(..).collect(),
            PendingAttackPolicy::Queue => Vec::new(),
        };
        self.slots.push_back(attack);
        dropped
    }

    /// Remove and return every attack whose window has closed
    pub fn expire(&mut self, now: Tick, window_ticks: Tick) -> Vec<PendingAttack> {
        let mut expired = Vec::new();
        self.slots.retain(|attack| {
            if attack.is_expired(now, window_ticks) {
                expired.push(*attack);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Take the oldest attack for resolution
    pub fn take_oldest(&mut self) -> Option<PendingAttack> {
        self.slots.pop_front()
    }

    /// Most recently declared attack
    pub fn latest(&self) -> Option<&PendingAttack> {
        self.slots.back()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
