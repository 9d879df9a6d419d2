use thiserror::Error;

/// Errors surfaced by the RTM client facade.
///
/// The facade never translates errors: whatever a [`NativeEngine`](crate::NativeEngine)
/// returns reaches the caller as-is.
#[derive(Error, Debug)]
pub enum RtmError {
    /// Failure reported by the native engine (rejected login, oversized payload, etc.)
    #[error("Native error {code}: {reason}")]
    Native { code: i32, reason: String },

    /// Native engine was called before `init`
    #[error("Engine not initialized")]
    NotInitialized,

    /// Argument rejected by a native adapter or by the engine builder
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Raw event channel that does not carry the `ag_rtm_` prefix
    #[error("Unknown event channel: {0}")]
    EventChannel(String),
}

impl RtmError {
    /// Shorthand for building a [`RtmError::Native`] from a native adapter.
    pub fn native(code: i32, reason: impl Into<String>) -> Self {
        Self::Native {
            code,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for `Result<T, RtmError>`.
pub type Result<T> = std::result::Result<T, RtmError>;
