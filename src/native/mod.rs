//! Seam to the native real-time messaging engine.
//!
//! Each method mirrors one native SDK operation. Implementations own all
//! protocol work, size limits and error reporting; [`RtmEngine`](crate::RtmEngine)
//! forwards to them without inspecting arguments or results.

use crate::types::{
    Attributes, AttributeKeys, ChannelMessage, ListPeerStatus, LocalInvitationProps, LogLevel,
    Members, PeerIds, PeerMessage, RemoteInvitationProps, Result, SdkLogResult, UserInfo,
};
use async_trait::async_trait;
use serde_json::Value;

/// Operations consumed from the native engine.
///
/// Results typed as [`Value`] are native responses this crate does not
/// interpret.
#[async_trait]
pub trait NativeEngine: Send + Sync {
    /// Create the native client for `app_id`.
    async fn init(&self, app_id: &str) -> Result<()>;
    /// Release the native client and every channel and invitation it holds.
    async fn destroy(&self) -> Result<()>;

    async fn get_sdk_version(&self) -> Result<String>;
    /// `size` is in kilobytes.
    async fn set_sdk_log(&self, path: &str, level: LogLevel, size: u32) -> Result<SdkLogResult>;

    async fn login(&self, user: UserInfo) -> Result<Value>;
    async fn logout(&self) -> Result<Value>;
    async fn renew_token(&self, token: &str) -> Result<Value>;

    async fn send_message_to_peer(&self, message: PeerMessage) -> Result<Value>;

    async fn join_channel(&self, channel_id: &str) -> Result<Value>;
    async fn leave_channel(&self, channel_id: &str) -> Result<Value>;
    async fn get_channel_members_by_channel_id(&self, channel_id: &str) -> Result<Members>;
    async fn get_channel_attributes_by_channel_id(&self, channel_id: &str) -> Result<Attributes>;
    async fn add_or_update_channel_attribute_by_channel_id(
        &self,
        channel_id: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<Value>;
    async fn send_message_by_channel_id(&self, message: ChannelMessage) -> Result<Value>;

    async fn query_peers_online_status(&self, peers: PeerIds) -> Result<ListPeerStatus>;

    async fn set_local_user_attributes(&self, attributes: Attributes) -> Result<Value>;
    async fn replace_local_user_attributes(&self, attributes: Attributes) -> Result<Value>;
    async fn remove_local_user_attributes_by_keys(&self, keys: AttributeKeys) -> Result<Value>;
    async fn remove_all_local_user_attributes(&self) -> Result<Value>;
    async fn get_user_attributes_by_uid(&self, uid: &str) -> Result<Value>;

    async fn send_local_invitation(&self, invitation: LocalInvitationProps) -> Result<Value>;
    async fn cancel_local_invitation(&self, invitation: LocalInvitationProps) -> Result<Value>;
    /// Accepts a remote invitation.
    async fn send_remote_invitation(&self, invitation: RemoteInvitationProps) -> Result<Value>;
    async fn refuse_remote_invitation(&self, invitation: RemoteInvitationProps) -> Result<Value>;
}

