use crate::types::constants::{AG_RTM_CHANNEL, rtm_events};

/// Type-safe native engine events
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RtmEvent {
    /// Error reported by the native engine outside of any call
    Error,

    /// Connection state changed (payload carries state and reason codes)
    ConnectionStateChanged,

    /// Peer-to-peer message received
    MessageReceived,

    /// Login token expired, call `renew_token`
    TokenExpired,

    ChannelMessageReceived,
    ChannelMemberJoined,
    ChannelMemberLeft,
    ChannelAttributesUpdated,
    MemberCountUpdated,

    /// Local invitation lifecycle
    LocalInvitation(InvitationEvent),

    /// Remote invitation lifecycle
    RemoteInvitation(InvitationEvent),

    /// Event identifier unknown to this crate, routed by name
    Custom(String),
}

/// Stages of a call invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvitationEvent {
    /// Local: the callee received the invitation. Remote: an invitation arrived.
    Received,
    Accepted,
    Refused,
    Canceled,
    Failure,
}

impl RtmEvent {
    /// Parse a native event identifier (without the channel prefix)
    pub fn parse(s: &str) -> Self {
        match s {
            rtm_events::ERROR => Self::Error,
            rtm_events::CONNECTION_STATE_CHANGED => Self::ConnectionStateChanged,
            rtm_events::MESSAGE_RECEIVED => Self::MessageReceived,
            rtm_events::TOKEN_EXPIRED => Self::TokenExpired,
            rtm_events::CHANNEL_MESSAGE_RECEIVED => Self::ChannelMessageReceived,
            rtm_events::CHANNEL_MEMBER_JOINED => Self::ChannelMemberJoined,
            rtm_events::CHANNEL_MEMBER_LEFT => Self::ChannelMemberLeft,
            rtm_events::CHANNEL_ATTRIBUTES_UPDATED => Self::ChannelAttributesUpdated,
            rtm_events::MEMBER_COUNT_UPDATED => Self::MemberCountUpdated,
            rtm_events::LOCAL_INVITATION_RECEIVED_BY_PEER => {
                Self::LocalInvitation(InvitationEvent::Received)
            }
            rtm_events::LOCAL_INVITATION_ACCEPTED => Self::LocalInvitation(InvitationEvent::Accepted),
            rtm_events::LOCAL_INVITATION_REFUSED => Self::LocalInvitation(InvitationEvent::Refused),
            rtm_events::LOCAL_INVITATION_CANCELED => Self::LocalInvitation(InvitationEvent::Canceled),
            rtm_events::LOCAL_INVITATION_FAILURE => Self::LocalInvitation(InvitationEvent::Failure),
            rtm_events::REMOTE_INVITATION_RECEIVED => {
                Self::RemoteInvitation(InvitationEvent::Received)
            }
            rtm_events::REMOTE_INVITATION_ACCEPTED => {
                Self::RemoteInvitation(InvitationEvent::Accepted)
            }
            rtm_events::REMOTE_INVITATION_REFUSED => {
                Self::RemoteInvitation(InvitationEvent::Refused)
            }
            rtm_events::REMOTE_INVITATION_CANCELED => {
                Self::RemoteInvitation(InvitationEvent::Canceled)
            }
            rtm_events::REMOTE_INVITATION_FAILURE => {
                Self::RemoteInvitation(InvitationEvent::Failure)
            }
            _ => Self::Custom(s.to_string()),
        }
    }

    /// Resolve a fully-qualified native channel (`ag_rtm_<event>`).
    /// Returns `None` when the prefix is missing.
    pub fn from_channel(channel: &str) -> Option<Self> {
        channel.strip_prefix(AG_RTM_CHANNEL).map(Self::parse)
    }

    /// Native event identifier
    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => rtm_events::ERROR,
            Self::ConnectionStateChanged => rtm_events::CONNECTION_STATE_CHANGED,
            Self::MessageReceived => rtm_events::MESSAGE_RECEIVED,
            Self::TokenExpired => rtm_events::TOKEN_EXPIRED,
            Self::ChannelMessageReceived => rtm_events::CHANNEL_MESSAGE_RECEIVED,
            Self::ChannelMemberJoined => rtm_events::CHANNEL_MEMBER_JOINED,
            Self::ChannelMemberLeft => rtm_events::CHANNEL_MEMBER_LEFT,
            Self::ChannelAttributesUpdated => rtm_events::CHANNEL_ATTRIBUTES_UPDATED,
            Self::MemberCountUpdated => rtm_events::MEMBER_COUNT_UPDATED,
            Self::LocalInvitation(stage) => match stage {
                InvitationEvent::Received => rtm_events::LOCAL_INVITATION_RECEIVED_BY_PEER,
                InvitationEvent::Accepted => rtm_events::LOCAL_INVITATION_ACCEPTED,
                InvitationEvent::Refused => rtm_events::LOCAL_INVITATION_REFUSED,
                InvitationEvent::Canceled => rtm_events::LOCAL_INVITATION_CANCELED,
                InvitationEvent::Failure => rtm_events::LOCAL_INVITATION_FAILURE,
            },
            Self::RemoteInvitation(stage) => match stage {
                InvitationEvent::Received => rtm_events::REMOTE_INVITATION_RECEIVED,
                InvitationEvent::Accepted => rtm_events::REMOTE_INVITATION_ACCEPTED,
                InvitationEvent::Refused => rtm_events::REMOTE_INVITATION_REFUSED,
                InvitationEvent::Canceled => rtm_events::REMOTE_INVITATION_CANCELED,
                InvitationEvent::Failure => rtm_events::REMOTE_INVITATION_FAILURE,
            },
            Self::Custom(s) => s,
        }
    }

    /// Fully-qualified channel the native engine emits this event on
    pub fn channel_name(&self) -> String {
        format!("{}{}", AG_RTM_CHANNEL, self.as_str())
    }

    /// Same event with `Custom` names of known events resolved to their variant.
    /// Two events share a channel exactly when their normalized forms are equal.
    pub fn normalized(&self) -> Self {
        match self {
            Self::Custom(s) => Self::parse(s),
            other => other.clone(),
        }
    }
}

impl From<&str> for RtmEvent {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for RtmEvent {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl std::fmt::Display for RtmEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
