use serde::{Deserialize, Serialize};

use super::error::{Result, RtmError};

/// Native SDK log verbosity.
///
/// Values are bit flags: every level enables the bits of the levels below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum LogLevel {
    Off = 0,
    Critical = 0x08,
    Error = 0x0c,
    Warning = 0x0e,
    Info = 0x0f,
}

impl LogLevel {
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Whether messages logged at `other` are written at this level
    pub fn includes(self, other: LogLevel) -> bool {
        self.as_u32() & other.as_u32() == other.as_u32()
    }
}

impl TryFrom<u32> for LogLevel {
    type Error = RtmError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Off),
            0x08 => Ok(Self::Critical),
            0x0c => Ok(LogLevel::Error),
            0x0e => Ok(Self::Warning),
            0x0f => Ok(Self::Info),
            other => Err(RtmError::InvalidArgument(format!(
                "unknown log level {other:#x}"
            ))),
        }
    }
}

/// Which parts of a `set_sdk_log` call the native engine accepted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SdkLogResult {
    pub path: bool,
    pub level: bool,
    pub size: bool,
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserInfo {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Peer-to-peer message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PeerMessage {
    pub peer_id: String,
    pub offline: bool,
    pub text: String,
}

/// Channel message sending options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_offline_messaging: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_historical_messaging: Option<bool>,
}

/// Bundled arguments of the native `sendMessageByChannelId` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMessage {
    pub channel_id: String,
    pub text: String,
    pub options: SendMessageOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    pub uid: String,
    pub channel_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Members {
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}

/// Key/value attribute, used for both channel and user attributes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RtmAttribute {
    pub key: String,
    pub value: String,
}

impl RtmAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Attributes {
    #[serde(default)]
    pub attributes: Vec<RtmAttribute>,
}

/// Bundled arguments of the native `removeLocalUserAttributesByKeys` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AttributeKeys {
    pub keys: Vec<String>,
}

/// Bundled arguments of the native `queryPeersOnlineStatus` call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PeerIds {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberStatus {
    pub uid: String,
    pub online: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ListPeerStatus {
    #[serde(default)]
    pub items: Vec<MemberStatus>,
}

/// Invitation sent by the local user. `content` is limited to
/// [`MAX_MESSAGE_BYTES`](super::MAX_MESSAGE_BYTES) by the native engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalInvitationProps {
    pub uid: String,
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl LocalInvitationProps {
    pub fn new(uid: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            channel_id: channel_id.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Invitation received from a remote user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteInvitationProps {
    pub uid: String,
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl RemoteInvitationProps {
    pub fn new(uid: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            channel_id: channel_id.into(),
            response: None,
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }
}
