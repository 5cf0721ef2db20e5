pub mod handler;
pub mod processor;
pub mod signal;

mod attack;
mod encounter_state;
mod hazard;


pub use handler::{GameEventHandler, SignalHandler};
pub use processor::EventProcessor;
pub use signal::GameSignal;
