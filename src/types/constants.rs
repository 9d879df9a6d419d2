/// Version of this client facade
pub const WRAPPER_VERSION: &str = "1.0.0-alpha.1";

/// Prefix of every event channel emitted by the native engine
pub const AG_RTM_CHANNEL: &str = "ag_rtm_";

/// Default capacity of listener streams created by `on_stream`
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 100;

/// Native log file size limits (kilobytes). Sizes outside this range are
/// ignored by the native engine, not rejected here.
pub const LOG_FILE_SIZE_MIN_KB: u32 = 512;
pub const LOG_FILE_SIZE_MAX_KB: u32 = 10 * 1024;

/// Native payload limit for message text, invitation content and responses
pub const MAX_MESSAGE_BYTES: usize = 32 * 1024;

/// Native event identifiers (magic strings layer)
pub mod rtm_events {
    pub const ERROR: &str = "error";
    pub const CONNECTION_STATE_CHANGED: &str = "connectionStateChanged";
    pub const MESSAGE_RECEIVED: &str = "messageReceived";
    pub const TOKEN_EXPIRED: &str = "tokenExpired";
    pub const CHANNEL_MESSAGE_RECEIVED: &str = "channelMessageReceived";
    pub const CHANNEL_MEMBER_JOINED: &str = "channelMemberJoined";
    pub const CHANNEL_MEMBER_LEFT: &str = "channelMemberLeft";
    pub const CHANNEL_ATTRIBUTES_UPDATED: &str = "channelAttributesUpdated";
    pub const MEMBER_COUNT_UPDATED: &str = "memberCountUpdated";
    pub const LOCAL_INVITATION_RECEIVED_BY_PEER: &str = "localInvitationReceivedByPeer";
    pub const LOCAL_INVITATION_ACCEPTED: &str = "localInvitationAccepted";
    pub const LOCAL_INVITATION_REFUSED: &str = "localInvitationRefused";
    pub const LOCAL_INVITATION_CANCELED: &str = "localInvitationCanceled";
    pub const LOCAL_INVITATION_FAILURE: &str = "localInvitationFailure";
    pub const REMOTE_INVITATION_RECEIVED: &str = "remoteInvitationReceived";
    pub const REMOTE_INVITATION_ACCEPTED: &str = "remoteInvitationAccepted";
    pub const REMOTE_INVITATION_REFUSED: &str = "remoteInvitationRefused";
    pub const REMOTE_INVITATION_CANCELED: &str = "remoteInvitationCanceled";
    pub const REMOTE_INVITATION_FAILURE: &str = "remoteInvitationFailure";
}
