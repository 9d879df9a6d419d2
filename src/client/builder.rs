use super::{ClientState, RtmEngine};
use crate::messaging::EventRegistry;
use crate::native::NativeEngine;
use crate::types::{DEFAULT_EVENT_CHANNEL_CAPACITY, Result, RtmError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tunables applied when an [`RtmEngine`] is built
#[derive(Debug, Clone)]
pub struct RtmEngineOptions {
    /// Buffer size of receivers returned by `on_stream`
    pub event_channel_capacity: usize,
}

impl Default for RtmEngineOptions {
    fn default() -> Self {
        Self {
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}

/// Builder for RtmEngine that validates options
pub struct RtmEngineBuilder {
    native: Arc<dyn NativeEngine>,
    options: RtmEngineOptions,
}

impl RtmEngineBuilder {
    pub fn new(native: Arc<dyn NativeEngine>) -> Self {
        Self {
            native,
            options: RtmEngineOptions::default(),
        }
    }

    pub fn options(mut self, options: RtmEngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn event_channel_capacity(mut self, capacity: usize) -> Self {
        self.options.event_channel_capacity = capacity;
        self
    }

    /// Build the engine. The native client is not created until
    /// [`RtmEngine::create_client`] is called.
    pub fn build(self) -> Result<RtmEngine> {
        // tokio mpsc panics on a zero-sized buffer
        if self.options.event_channel_capacity == 0 {
            return Err(RtmError::InvalidArgument(
                "event_channel_capacity must be greater than zero".to_string(),
            ));
        }

        Ok(self.into_engine())
    }

    pub(crate) fn into_engine(self) -> RtmEngine {
        RtmEngine {
            native: self.native,
            options: self.options,
            registry: EventRegistry::new(),
            state: Arc::new(RwLock::new(ClientState::new())),
        }
    }
}
