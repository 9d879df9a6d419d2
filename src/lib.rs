//! # Agora RTM Rust
//!
//! An unofficial Rust client facade for the Agora real-time messaging (RTM) engine.
//!
//! [`RtmEngine`] owns the native client lifecycle and the event listeners
//! registered by the host application. Every messaging operation (login,
//! channels, peer messages, attributes, invitations) is forwarded to a
//! [`NativeEngine`] implementation, and its result is returned unchanged.
//!
//! ## Example
//!
//! ```no_run
//! use agora_rtm_rs::{NativeEngine, RtmEngine, RtmEvent, UserInfo};
//! use std::sync::Arc;
//!
//! # async fn example(native: Arc<dyn NativeEngine>) -> agora_rtm_rs::Result<()> {
//! let engine = RtmEngine::new(native);
//! engine.create_client("your-app-id").await?;
//!
//! let (_subscription, mut messages) = engine.on_stream(RtmEvent::MessageReceived).await;
//! engine.login(UserInfo::new("alice").with_token("token")).await?;
//!
//! while let Some(message) = messages.recv().await {
//!     println!("peer message: {message}");
//! }
//!
//! engine.destroy_client().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod messaging;
pub mod native;
pub mod types;

pub use client::{EngineState, RtmEngine, RtmEngineBuilder, RtmEngineOptions};
pub use messaging::{EventEmitter, InvitationEvent, RtmEvent, Subscription, decode_payload};
pub use native::NativeEngine;
pub use types::{
    AG_RTM_CHANNEL, AttributeKeys, Attributes, ChannelMessage, ListPeerStatus,
    LocalInvitationProps, LogLevel, MemberInfo, MemberStatus, Members, PeerIds, PeerMessage,
    RemoteInvitationProps, Result, RtmAttribute, RtmError, SdkLogResult, SendMessageOptions,
    UserInfo, WRAPPER_VERSION,
};
