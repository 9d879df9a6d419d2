use super::{EventRegistry, RtmEvent};
use crate::types::{Result, RtmError};
use serde_json::Value;

/// Entry point for events coming out of the native engine.
///
/// Native adapters receive a clone of this handle from
/// [`RtmEngine::emitter`](crate::RtmEngine::emitter) and forward every native
/// emission through it.
#[derive(Clone)]
pub struct EventEmitter {
    registry: EventRegistry,
}

impl EventEmitter {
    pub(crate) fn new(registry: EventRegistry) -> Self {
        Self { registry }
    }

    /// Emit on a fully-qualified native channel such as `ag_rtm_tokenExpired`.
    ///
    /// Returns the number of listeners invoked.
    ///
    /// # Errors
    ///
    /// Returns [`RtmError::EventChannel`] if `channel` lacks the `ag_rtm_` prefix.
    pub async fn emit(&self, channel: &str, payload: Value) -> Result<usize> {
        let Some(event) = RtmEvent::from_channel(channel) else {
            tracing::warn!("Dropping event on unknown channel: {}", channel);
            return Err(RtmError::EventChannel(channel.to_string()));
        };

        Ok(self.registry.dispatch(&event, payload).await)
    }

    /// Emit an already-resolved event
    pub async fn emit_event(&self, event: &RtmEvent, payload: Value) -> usize {
        self.registry.dispatch(event, payload).await
    }
}
