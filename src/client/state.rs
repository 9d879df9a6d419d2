/// Lifecycle of the native client owned by an [`RtmEngine`](super::RtmEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Initialized,
}

/// Consolidated mutable state for RtmEngine
#[derive(Debug, Default)]
pub struct ClientState {
    /// Whether the native client has been created
    pub lifecycle: EngineState,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }
}
