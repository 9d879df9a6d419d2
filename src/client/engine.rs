use super::{ClientState, EngineState, RtmEngineBuilder, RtmEngineOptions};
use crate::messaging::{EventEmitter, EventRegistry, RtmEvent, Subscription};
use crate::native::NativeEngine;
use crate::types::{
    AttributeKeys, Attributes, ChannelMessage, ListPeerStatus, LocalInvitationProps, LogLevel,
    Members, PeerIds, PeerMessage, RemoteInvitationProps, Result, RtmAttribute, SdkLogResult,
    SendMessageOptions, UserInfo,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{RwLock, mpsc};

/// The main entry point for the Agora real-time messaging engine.
///
/// `RtmEngine` owns the lifecycle of the native client and every listener
/// registered through it. All other calls are forwarded to the
/// [`NativeEngine`] unchanged: arguments are bundled into the structures the
/// native call expects, results and errors come back exactly as the native
/// engine produced them.
///
/// The engine is cheap to clone; clones share the same native client,
/// lifecycle and listeners.
///
/// # Example
///
/// ```no_run
/// use agora_rtm_rs::{RtmEngine, RtmEvent, UserInfo};
///
/// # async fn example(engine: RtmEngine) -> agora_rtm_rs::Result<()> {
/// engine.create_client("your-app-id").await?;
///
/// engine
///     .on(RtmEvent::MessageReceived, |payload| println!("message: {payload}"))
///     .await;
///
/// engine.login(UserInfo::new("alice")).await?;
/// // ...
/// engine.destroy_client().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RtmEngine {
    pub(crate) native: Arc<dyn NativeEngine>,
    pub(crate) options: RtmEngineOptions,

    // Listeners, shared with every EventEmitter handed out
    pub(crate) registry: EventRegistry,

    // Lifecycle of the native client
    pub(crate) state: Arc<RwLock<ClientState>>,
}

impl RtmEngine {
    /// Creates an engine over `native` with default options.
    ///
    /// This does not touch the native engine; call
    /// [`create_client()`](Self::create_client) to initialize it.
    pub fn new(native: Arc<dyn NativeEngine>) -> Self {
        Self::builder(native).into_engine()
    }

    /// Starts a builder for an engine with custom [`RtmEngineOptions`]
    pub fn builder(native: Arc<dyn NativeEngine>) -> RtmEngineBuilder {
        RtmEngineBuilder::new(native)
    }

    /// Handle the native adapter uses to deliver `ag_rtm_*` events
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter::new(self.registry.clone())
    }

    /// Current lifecycle of the native client
    pub async fn state(&self) -> EngineState {
        self.state.read().await.lifecycle
    }

    /// Whether [`create_client()`](Self::create_client) has succeeded and the
    /// client has not been destroyed since
    pub async fn is_initialized(&self) -> bool {
        self.state().await == EngineState::Initialized
    }

    /// Creates the native client for `app_id`.
    ///
    /// If the client already exists this returns immediately without calling
    /// the native engine. Concurrent calls are serialized, so the native
    /// engine is initialized at most once per session.
    ///
    /// # Errors
    ///
    /// Returns whatever the native `init` call fails with; the engine stays
    /// uninitialized in that case.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use agora_rtm_rs::RtmEngine;
    /// # async fn example(engine: RtmEngine) -> agora_rtm_rs::Result<()> {
    /// engine.create_client("your-app-id").await?;
    /// // A second call is a no-op
    /// engine.create_client("your-app-id").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_client(&self, app_id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.lifecycle == EngineState::Initialized {
            tracing::debug!("Client already created, ignoring create_client");
            return Ok(());
        }

        self.native.init(app_id).await?;
        state.lifecycle = EngineState::Initialized;

        tracing::info!("Created RTM client");
        Ok(())
    }

    /// Destroys the native client and removes every listener registered
    /// through [`on()`](Self::on).
    ///
    /// If the client does not exist this returns immediately and leaves
    /// listeners untouched.
    ///
    /// # Errors
    ///
    /// Returns whatever the native `destroy` call fails with. Listeners are
    /// already removed at that point and the engine stays initialized, so the
    /// call can be retried.
    pub async fn destroy_client(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if state.lifecycle == EngineState::Uninitialized {
            tracing::debug!("No client to destroy, ignoring destroy_client");
            return Ok(());
        }

        let removed = self.registry.remove_tracked().await;
        if removed > 0 {
            tracing::debug!("Removed {} listener(s)", removed);
        }
        self.native.destroy().await?;
        state.lifecycle = EngineState::Uninitialized;

        tracing::info!("Destroyed RTM client");
        Ok(())
    }

    /// Registers `callback` for `event` and returns its subscription.
    ///
    /// The callback receives the payload of every emission on the event's
    /// `ag_rtm_` channel. Several callbacks may listen to the same event; they
    /// run in registration order. The subscription is also tracked by the
    /// engine and removed by [`remove_events()`](Self::remove_events) or
    /// [`destroy_client()`](Self::destroy_client).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use agora_rtm_rs::{RtmEngine, RtmEvent};
    /// # async fn example(engine: RtmEngine) {
    /// let subscription = engine
    ///     .on(RtmEvent::TokenExpired, |_| println!("token expired, renew it"))
    ///     .await;
    ///
    /// // Later, stop listening
    /// subscription.remove().await;
    /// # }
    /// ```
    pub async fn on<F>(&self, event: impl Into<RtmEvent>, callback: F) -> Subscription
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        self.registry
            .add_tracked_listener(event.into(), Arc::new(callback))
            .await
    }

    /// Registers a listener that forwards payloads into a channel receiver.
    ///
    /// The receiver ends once the subscription is removed. Payloads arriving
    /// while the buffer is full are dropped.
    pub async fn on_stream(
        &self,
        event: impl Into<RtmEvent>,
    ) -> (Subscription, mpsc::Receiver<Value>) {
        let (tx, rx) = mpsc::channel(self.options.event_channel_capacity);
        let event = event.into();
        let channel = event.channel_name();

        let subscription = self
            .on(event, move |payload| {
                if let Err(e) = tx.try_send(payload) {
                    tracing::warn!(
                        "Failed to send event '{}' to listener: {}. Channel may be closed or full.",
                        channel,
                        e
                    );
                }
            })
            .await;

        (subscription, rx)
    }

    /// Removes every listener registered through this engine
    pub async fn remove_events(&self) {
        let removed = self.registry.remove_tracked().await;
        if removed > 0 {
            tracing::debug!("Removed {} listener(s)", removed);
        }
    }

    /// Number of listeners currently registered for `event`
    pub async fn listener_count(&self, event: &RtmEvent) -> usize {
        self.registry.listener_count(event).await
    }

    /// Number of listeners registered through [`on()`](Self::on) that are still
    /// active. Listeners removed through their [`Subscription`] no longer count.
    pub async fn tracked_listener_count(&self) -> usize {
        self.registry.tracked_count().await
    }

    pub async fn sdk_version(&self) -> Result<String> {
        self.native.get_sdk_version().await
    }

    /// Configures native logging. `size` is in kilobytes; the native engine
    /// ignores sizes outside 512 KB..=10 MB.
    pub async fn set_sdk_log(&self, path: &str, level: LogLevel, size: u32) -> Result<SdkLogResult> {
        self.native.set_sdk_log(path, level, size).await
    }

    pub async fn login(&self, user: UserInfo) -> Result<Value> {
        tracing::debug!("Logging in as {}", user.uid);
        self.native.login(user).await
    }

    pub async fn logout(&self) -> Result<Value> {
        tracing::debug!("Logging out");
        self.native.logout().await
    }

    /// Renews the login token, typically after [`RtmEvent::TokenExpired`]
    pub async fn renew_token(&self, token: &str) -> Result<Value> {
        self.native.renew_token(token).await
    }

    pub async fn send_message_to_peer(&self, message: PeerMessage) -> Result<Value> {
        self.native.send_message_to_peer(message).await
    }

    pub async fn join_channel(&self, channel_id: &str) -> Result<Value> {
        tracing::debug!("Joining channel {}", channel_id);
        self.native.join_channel(channel_id).await
    }

    pub async fn leave_channel(&self, channel_id: &str) -> Result<Value> {
        tracing::debug!("Leaving channel {}", channel_id);
        self.native.leave_channel(channel_id).await
    }

    pub async fn get_channel_members_by_channel_id(&self, channel_id: &str) -> Result<Members> {
        self.native.get_channel_members_by_channel_id(channel_id).await
    }

    pub async fn get_channel_attributes_by_channel_id(
        &self,
        channel_id: &str,
    ) -> Result<Attributes> {
        self.native
            .get_channel_attributes_by_channel_id(channel_id)
            .await
    }

    pub async fn add_or_update_channel_attribute_by_channel_id(
        &self,
        channel_id: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<Value> {
        self.native
            .add_or_update_channel_attribute_by_channel_id(
                channel_id,
                attribute_name,
                attribute_value,
            )
            .await
    }

    /// Sends `text` to everyone in the channel. The native engine limits
    /// `text` to 32 KB.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use agora_rtm_rs::{RtmEngine, SendMessageOptions};
    /// # async fn example(engine: RtmEngine) -> agora_rtm_rs::Result<()> {
    /// engine
    ///     .send_message_by_channel_id(
    ///         "lobby",
    ///         "hello",
    ///         SendMessageOptions {
    ///             enable_historical_messaging: Some(true),
    ///             ..Default::default()
    ///         },
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message_by_channel_id(
        &self,
        channel_id: impl Into<String>,
        text: impl Into<String>,
        options: SendMessageOptions,
    ) -> Result<Value> {
        let message = ChannelMessage {
            channel_id: channel_id.into(),
            text: text.into(),
            options,
        };
        self.native.send_message_by_channel_id(message).await
    }

    pub async fn query_peers_online_status<I, S>(&self, ids: I) -> Result<ListPeerStatus>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let peers = PeerIds {
            ids: ids.into_iter().map(Into::into).collect(),
        };
        self.native.query_peers_online_status(peers).await
    }

    pub async fn set_local_user_attributes(&self, attributes: Vec<RtmAttribute>) -> Result<Value> {
        self.native
            .set_local_user_attributes(Attributes { attributes })
            .await
    }

    /// Replaces existing local user attributes and adds the missing ones
    pub async fn replace_local_user_attributes(
        &self,
        attributes: Vec<RtmAttribute>,
    ) -> Result<Value> {
        self.native
            .replace_local_user_attributes(Attributes { attributes })
            .await
    }

    pub async fn remove_local_user_attributes_by_keys<I, S>(&self, keys: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = AttributeKeys {
            keys: keys.into_iter().map(Into::into).collect(),
        };
        self.native.remove_local_user_attributes_by_keys(keys).await
    }

    pub async fn remove_all_local_user_attributes(&self) -> Result<Value> {
        self.native.remove_all_local_user_attributes().await
    }

    pub async fn get_user_attributes_by_uid(&self, uid: &str) -> Result<Value> {
        self.native.get_user_attributes_by_uid(uid).await
    }

    pub async fn send_local_invitation(&self, invitation: LocalInvitationProps) -> Result<Value> {
        tracing::debug!(
            "Inviting {} to channel {}",
            invitation.uid,
            invitation.channel_id
        );
        self.native.send_local_invitation(invitation).await
    }

    pub async fn cancel_local_invitation(&self, invitation: LocalInvitationProps) -> Result<Value> {
        self.native.cancel_local_invitation(invitation).await
    }

    /// Accepts an invitation received through
    /// [`RtmEvent::RemoteInvitation`](crate::RtmEvent::RemoteInvitation)
    pub async fn accept_remote_invitation(
        &self,
        invitation: RemoteInvitationProps,
    ) -> Result<Value> {
        tracing::debug!(
            "Accepting invitation from {} to channel {}",
            invitation.uid,
            invitation.channel_id
        );
        self.native.send_remote_invitation(invitation).await
    }

    pub async fn refuse_remote_invitation(
        &self,
        invitation: RemoteInvitationProps,
    ) -> Result<Value> {
        self.native.refuse_remote_invitation(invitation).await
    }
}
