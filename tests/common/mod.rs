#![allow(dead_code)]

use agora_rtm_rs::{
    AttributeKeys, Attributes, ChannelMessage, ListPeerStatus, LocalInvitationProps, LogLevel,
    Members, NativeEngine, PeerIds, PeerMessage, RemoteInvitationProps, Result, RtmEngine,
    RtmError, SdkLogResult, UserInfo,
};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One recorded native call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub op: String,
    pub args: Value,
}

#[derive(Debug, Clone)]
enum Response {
    Ok(Value),
    Err(i32, String),
}

/// Recording stand-in for the native engine.
///
/// Rejects every call but `init` with `NotInitialized` until initialized, like
/// the real SDK does.
#[derive(Default)]
pub struct MockEngine {
    calls: Mutex<Vec<Call>>,
    responses: Mutex<HashMap<String, Response>>,
    initialized: Mutex<bool>,
    init_delay: Mutex<Option<Duration>>,
}

impl MockEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script a successful native result for `op`
    pub fn respond(&self, op: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(op.to_string(), Response::Ok(value));
    }

    /// Script a native failure for `op`
    pub fn fail(&self, op: &str, code: i32, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(op.to_string(), Response::Err(code, reason.to_string()));
    }

    pub fn clear_response(&self, op: &str) {
        self.responses.lock().unwrap().remove(op);
    }

    pub fn delay_init(&self, delay: Duration) {
        *self.init_delay.lock().unwrap() = Some(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, op: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|c| c.op == op)
            .map(|c| c.args)
            .collect()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls_to(op).len()
    }

    fn record(&self, op: &str, args: impl Serialize) -> Result<Value> {
        self.calls.lock().unwrap().push(Call {
            op: op.to_string(),
            args: serde_json::to_value(args)?,
        });

        if op != "init" && !*self.initialized.lock().unwrap() {
            return Err(RtmError::NotInitialized);
        }

        match self.responses.lock().unwrap().get(op).cloned() {
            Some(Response::Ok(value)) => Ok(value),
            Some(Response::Err(code, reason)) => Err(RtmError::native(code, reason)),
            None => Ok(Value::Null),
        }
    }

    fn record_typed<T: DeserializeOwned + Default>(
        &self,
        op: &str,
        args: impl Serialize,
    ) -> Result<T> {
        match self.record(op, args)? {
            Value::Null => Ok(T::default()),
            value => Ok(serde_json::from_value(value)?),
        }
    }
}

#[async_trait]
impl NativeEngine for MockEngine {
    async fn init(&self, app_id: &str) -> Result<()> {
        let delay = *self.init_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.record("init", app_id)?;
        *self.initialized.lock().unwrap() = true;
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        self.record("destroy", Value::Null)?;
        *self.initialized.lock().unwrap() = false;
        Ok(())
    }

    async fn get_sdk_version(&self) -> Result<String> {
        match self.record("getSdkVersion", Value::Null)? {
            Value::String(version) => Ok(version),
            _ => Ok("1.5.1".to_string()),
        }
    }

    async fn set_sdk_log(&self, path: &str, level: LogLevel, size: u32) -> Result<SdkLogResult> {
        self.record_typed(
            "setSdkLog",
            json!({ "path": path, "level": level.as_u32(), "size": size }),
        )
    }

    async fn login(&self, user: UserInfo) -> Result<Value> {
        self.record("login", user)
    }

    async fn logout(&self) -> Result<Value> {
        self.record("logout", Value::Null)
    }

    async fn renew_token(&self, token: &str) -> Result<Value> {
        self.record("renewToken", token)
    }

    async fn send_message_to_peer(&self, message: PeerMessage) -> Result<Value> {
        self.record("sendMessageToPeer", message)
    }

    async fn join_channel(&self, channel_id: &str) -> Result<Value> {
        self.record("joinChannel", channel_id)
    }

    async fn leave_channel(&self, channel_id: &str) -> Result<Value> {
        self.record("leaveChannel", channel_id)
    }

    async fn get_channel_members_by_channel_id(&self, channel_id: &str) -> Result<Members> {
        self.record_typed("getChannelMembersBychannelId", channel_id)
    }

    async fn get_channel_attributes_by_channel_id(&self, channel_id: &str) -> Result<Attributes> {
        self.record_typed("getChannelAttributesByChannelId", channel_id)
    }

    async fn add_or_update_channel_attribute_by_channel_id(
        &self,
        channel_id: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<Value> {
        self.record(
            "addOrUpdateChannelAttributeByChannelId",
            json!([channel_id, attribute_name, attribute_value]),
        )
    }

    async fn send_message_by_channel_id(&self, message: ChannelMessage) -> Result<Value> {
        self.record("sendMessageByChannelId", message)
    }

    async fn query_peers_online_status(&self, peers: PeerIds) -> Result<ListPeerStatus> {
        self.record_typed("queryPeersOnlineStatus", peers)
    }

    async fn set_local_user_attributes(&self, attributes: Attributes) -> Result<Value> {
        self.record("setLocalUserAttributes", attributes)
    }

    async fn replace_local_user_attributes(&self, attributes: Attributes) -> Result<Value> {
        self.record("replaceLocalUserAttributes", attributes)
    }

    async fn remove_local_user_attributes_by_keys(&self, keys: AttributeKeys) -> Result<Value> {
        self.record("removeLocalUserAttributesByKeys", keys)
    }

    async fn remove_all_local_user_attributes(&self) -> Result<Value> {
        self.record("removeAllLocalUserAttributes", Value::Null)
    }

    async fn get_user_attributes_by_uid(&self, uid: &str) -> Result<Value> {
        self.record("getUserAttributesByUid", uid)
    }

    async fn send_local_invitation(&self, invitation: LocalInvitationProps) -> Result<Value> {
        self.record("sendLocalInvitation", invitation)
    }

    async fn cancel_local_invitation(&self, invitation: LocalInvitationProps) -> Result<Value> {
        self.record("cancelLocalInvitation", invitation)
    }

    async fn send_remote_invitation(&self, invitation: RemoteInvitationProps) -> Result<Value> {
        self.record("sendRemoteInvitation", invitation)
    }

    async fn refuse_remote_invitation(&self, invitation: RemoteInvitationProps) -> Result<Value> {
        self.record("refuseRemoteInvitation", invitation)
    }
}

/// Engine over a fresh mock, plus the mock for inspection
pub fn engine() -> (RtmEngine, Arc<MockEngine>) {
    let mock = MockEngine::new();
    let engine = RtmEngine::new(mock.clone());
    (engine, mock)
}

/// Engine whose native client is already created
pub async fn ready_engine() -> (RtmEngine, Arc<MockEngine>) {
    let (engine, mock) = engine();
    engine
        .create_client("test-app")
        .await
        .expect("create_client should succeed");
    (engine, mock)
}

/// Callback that appends every payload to the returned log
pub fn recorder() -> (Arc<Mutex<Vec<Value>>>, impl Fn(Value) + Send + Sync + 'static) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_cb = Arc::clone(&log);
    (log, move |payload| log_cb.lock().unwrap().push(payload))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
