// Module declarations
mod builder;
mod engine;
mod state;

// Public API exports
pub use builder::{RtmEngineBuilder, RtmEngineOptions};
pub use engine::RtmEngine;
pub use state::{ClientState, EngineState};
