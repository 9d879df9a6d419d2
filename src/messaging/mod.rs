// Messaging module - Typed events and listener bookkeeping
pub mod emitter;
pub mod event;
pub mod payload;
pub mod registry;

pub use emitter::EventEmitter;
pub use event::{InvitationEvent, RtmEvent};
pub use payload::decode_payload;
pub use registry::{Callback, EventRegistry, Subscription};
