//! Typed views of common event payloads.
//!
//! Listeners always receive the raw `serde_json::Value` the native engine
//! emitted; these structs are an opt-in decoding layer on top of it.

use crate::types::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Decode a raw event payload into one of the typed views below
pub fn decode_payload<T: DeserializeOwned>(payload: Value) -> Result<T> {
    Ok(serde_json::from_value(payload)?)
}

/// `connectionStateChanged`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionStateChanged {
    pub state: i32,
    pub reason: i32,
}

/// `messageReceived`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeerMessageReceived {
    pub peer_id: String,
    pub text: String,
    #[serde(default)]
    pub ts: i64,
    #[serde(default)]
    pub offline: bool,
}

/// `channelMessageReceived`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMessageReceived {
    pub uid: String,
    pub channel_id: String,
    pub text: String,
    #[serde(default)]
    pub ts: i64,
    #[serde(default)]
    pub offline: bool,
}

/// `channelMemberJoined` / `channelMemberLeft`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMemberEvent {
    pub uid: String,
    pub channel_id: String,
}

/// `localInvitation*` events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalInvitationEvent {
    pub callee_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub state: Option<i32>,
    /// Only set on `localInvitationFailure`
    #[serde(default)]
    pub code: Option<i32>,
}

/// `remoteInvitation*` events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteInvitationEvent {
    pub caller_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub state: Option<i32>,
    /// Only set on `remoteInvitationFailure`
    #[serde(default)]
    pub code: Option<i32>,
}
