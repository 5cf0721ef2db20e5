//! The announcer as the host sees it: one object that consumes the event
//! stream and owns the encounter session, processor and announcer.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::info;

use cgmistake_types::AnnouncerConfig;

use crate::announcer::{Announcer, MessagePicker};
use crate::encounter::EncounterSession;
use crate::game_event::GameEvent;
use crate::host::{DisplaySink, GameState};
use crate::signal_processor::{EventProcessor, GameEventHandler, GameSignal, SignalHandler};

pub struct MistakeAnnouncer<S, R = StdRng> {
    config: AnnouncerConfig,
    processor: EventProcessor,
    session: EncounterSession,
    announcer: Announcer<S, R>,
    /// Extra signal consumers, notified after the announcer
    handlers: Vec<Box<dyn SignalHandler>>,
}

impl<S: DisplaySink> MistakeAnnouncer<S, StdRng> {
    pub fn new(config: AnnouncerConfig, sink: S) -> Self {
        Self::with_picker(config, sink, MessagePicker::from_entropy())
    }
}

impl<S: DisplaySink, R: Rng> MistakeAnnouncer<S, R> {
    pub fn with_picker(config: AnnouncerConfig, sink: S, picker: MessagePicker<R>) -> Self {
        Self {
            announcer: Announcer::with_picker(config.clone(), sink, picker),
            config,
            processor: EventProcessor::new(),
            session: EncounterSession::new(),
            handlers: Vec::new(),
        }
    }

    pub fn with_processor(mut self, processor: EventProcessor) -> Self {
        self.processor = processor;
        self
    }

    pub fn add_handler(&mut self, handler: Box<dyn SignalHandler>) {
        self.handlers.push(handler);
    }

    pub fn start_up(&mut self) {
        info!(
            enable_mistake_tracking = self.config.enable_mistake_tracking,
            show_overhead_text = self.config.show_overhead_text,
            send_to_chat = self.config.send_to_chat,
            policy = ?self.config.pending_attack_policy,
            "CG Mistake Announcer started"
        );
        self.session.reset();
    }

    pub fn shut_down(&mut self) {
        info!("CG Mistake Announcer stopped");
        self.session.reset();
    }

    pub fn config(&self) -> &AnnouncerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnnouncerConfig) {
        self.announcer.set_config(config.clone());
        self.config = config;
    }

    pub fn session(&self) -> &EncounterSession {
        &self.session
    }

    pub fn announcer(&self) -> &Announcer<S, R> {
        &self.announcer
    }

    pub fn sink(&self) -> &S {
        self.announcer.sink()
    }

    fn notify_handlers(&mut self, signals: &[GameSignal], host: &dyn GameState) {
        for handler in &mut self.handlers {
            for signal in signals {
                match signal {
                    GameSignal::EncounterStarted { boss, .. } => handler.on_encounter_start(*boss),
                    GameSignal::EncounterEnded { .. } => handler.on_encounter_end(),
                    _ => {}
                }
                handler.handle_signal(signal, host);
            }
        }
    }
}

impl<S: DisplaySink, R: Rng> GameEventHandler for MistakeAnnouncer<S, R> {
    fn handle_event(&mut self, event: GameEvent, host: &dyn GameState) -> Vec<GameSignal> {
        let signals = self
            .processor
            .process_event(&event, &mut self.session, &self.config, host);
        if signals.is_empty() {
            return signals;
        }

        self.announcer.handle_signals(&signals, host);
        self.notify_handlers(&signals, host);
        signals
    }
}
