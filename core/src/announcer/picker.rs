//! Random message selection from comma-delimited lists

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Split a configured message list on commas, trimming whitespace and
/// dropping empty entries.
pub fn parse_message_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(String::from)
        .collect()
}

/// Picks one message uniformly at random.
///
/// The randomness source is injectable so tests can pin the choice.
#[derive(Debug, Clone)]
pub struct MessagePicker<R = StdRng> {
    rng: R,
}

impl MessagePicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MessagePicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick from a raw list; `None` if the list has no usable entries
    pub fn pick(&mut self, raw: &str) -> Option<String> {
        let mut messages = parse_message_list(raw);
        if messages.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..messages.len());
        Some(messages.swap_remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_entries() {
        assert_eq!(parse_message_list("A, B ,, C"), vec!["A", "B", "C"]);
        assert_eq!(parse_message_list("  Oops!  "), vec!["Oops!"]);
    }

    #[test]
    fn blank_lists_parse_to_nothing() {
        assert!(parse_message_list("").is_empty());
        assert!(parse_message_list("   ").is_empty());
        assert!(parse_message_list(" , ,, ").is_empty());
    }

    #[test]
    fn pick_returns_none_for_blank_list() {
        let mut picker = MessagePicker::seeded(1);
        assert_eq!(picker.pick(" , "), None);
    }

    #[test]
    fn pick_only_returns_configured_entries() {
        let mut picker = MessagePicker::seeded(7);
        let allowed = ["A", "B", "C"];
        for _ in 0..50 {
            let msg = picker.pick("A, B ,, C").unwrap();
            assert!(allowed.contains(&msg.as_str()), "unexpected message {msg}");
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = MessagePicker::seeded(42);
        let mut b = MessagePicker::seeded(42);
        let list = "one, two, three, four, five";
        let picks_a: Vec<_> = (0..10).map(|_| a.pick(list)).collect();
        let picks_b: Vec<_> = (0..10).map(|_| b.pick(list)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn every_entry_is_reachable() {
        let mut picker = MessagePicker::seeded(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(picker.pick("A,B,C").unwrap());
        }
        assert_eq!(seen.len(), 3);
    }
}
