//! Announcer: turns detected mistakes into overhead text and chat messages.

mod picker;


pub use picker::{MessagePicker, parse_message_list};

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use cgmistake_types::{AnnouncerConfig, MistakeCategory};

use crate::game_data::timing::OVERHEAD_DURATION_TICKS;
use crate::host::{DisplaySink, GameState};
use crate::signal_processor::{GameSignal, SignalHandler};

/// Routes `MistakeDetected` signals to the display sink.
///
/// Display failures are cosmetic: they are logged and dropped.
pub struct Announcer<S, R = StdRng> {
    config: AnnouncerConfig,
    picker: MessagePicker<R>,
    sink: S,
}

impl<S: DisplaySink> Announcer<S, StdRng> {
    pub fn new(config: AnnouncerConfig, sink: S) -> Self {
        Self::with_picker(config, sink, MessagePicker::from_entropy())
    }
}

impl<S: DisplaySink, R: Rng> Announcer<S, R> {
    pub fn with_picker(config: AnnouncerConfig, sink: S, picker: MessagePicker<R>) -> Self {
        Self {
            config,
            picker,
            sink,
        }
    }

    pub fn set_config(&mut self, config: AnnouncerConfig) {
        self.config = config;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Announce a mistake of `category`
    pub fn announce(&mut self, category: MistakeCategory, host: &dyn GameState) {
        let Some(player) = host.local_player() else {
            debug!(%category, "no local player, skipping announcement");
            return;
        };
        let Some(message) = self.picker.pick(self.config.messages_for(category)) else {
            debug!(%category, "no messages configured");
            return;
        };

        info!(
            %category,
            %message,
            overhead = self.config.show_overhead_text,
            chat = self.config.send_to_chat,
            "announcing mistake"
        );

        if self.config.show_overhead_text
            && let Err(err) = self.sink.set_overhead_text(&message, OVERHEAD_DURATION_TICKS)
        {
            debug!(error = %err, "failed to set overhead text");
        }

        if self.config.send_to_chat
            && let Err(err) =
                self.sink
                    .post_chat_message(self.config.chat_channel, &player.name, &message)
        {
            debug!(error = %err, "failed to post chat message");
        }
    }
}

impl<S: DisplaySink, R: Rng> SignalHandler for Announcer<S, R> {
    fn handle_signal(&mut self, signal: &GameSignal, host: &dyn GameState) {
        if let GameSignal::MistakeDetected { category, .. } = signal {
            self.announce(*category, host);
        }
    }
}
