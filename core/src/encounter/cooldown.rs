use crate::host::Tick;

/// Debounce for a continuous hazard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HazardCooldown {
    /// `None` until the first announcement of the encounter
    pub last_announced: Option<Tick>,
}

impl HazardCooldown {
    /// True if at least `cooldown_ticks` have passed since the last announcement
    pub fn ready(&self, now: Tick, cooldown_ticks: Tick) -> bool {
        self.last_announced
            .is_none_or(|last| now - last >= cooldown_ticks)
    }

    pub fn mark(&mut self, now: Tick) {
        self.last_announced = Some(now);
    }

    pub fn reset(&mut self) {
        self.last_announced = None;
    }
}
