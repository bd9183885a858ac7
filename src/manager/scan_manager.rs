//! Scan manager, owns the scan results and drives one reader session at a time
//!
//! Reader callbacks can arrive on any thread. They are queued as [`ScanEvent`]s
//! and applied by a single event loop thread, which is the only writer of the
//! store. The frontend learns about changes through reconcile messages.

use std::sync::Arc;

use flume::{Receiver, Sender, WeakSender};
use nfc_reader_macros::impl_reconcile_send;
use nfc_reader_ndef::NdefMessage;
use nfc_reader_util::{result_ext::ResultExt as _, short_id};
use parking_lot::RwLock;
use tap::TapFallible as _;
use tracing::{debug, error, info, warn};

use crate::scan::{
    InvalidationReason, ListError, NfcScanCapability, ScanAlert, ScanConfig, ScanError,
    ScanListDataSource as _, ScanListPresenter, ScanResultStore, ScanSessionHandle,
    capability::{ScanEvent, SessionId},
    presenter::saturating_u32,
};

type Message = ScanManagerReconcileMessage;
type Action = ScanManagerAction;

#[derive(Debug, Clone, Hash, PartialEq, Eq, uniffi::Enum)]
pub enum ScanManagerReconcileMessage {
    ScanStarted,
    /// A new group was appended at this index, reload the list
    GroupAppended(u32),
    ScanFinished,
    ScanCancelled,
    ScanFailed(ScanError),
    ShowAlert(ScanAlert),
}

#[uniffi::export(callback_interface)]
pub trait ScanManagerReconciler: Send + Sync + std::fmt::Debug + 'static {
    /// Tells the frontend to reconcile the manager changes
    fn reconcile(&self, message: ScanManagerReconcileMessage);
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, uniffi::Enum)]
pub enum ScanManagerAction {
    StartScan,
    CancelScan,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum SessionState {
    #[default]
    Idle,
    Scanning(SessionId),
}

#[derive(Debug, Default)]
pub struct ScanManagerState {
    store: ScanResultStore,
    session: SessionState,
}

#[derive(Clone, Debug, uniffi::Object)]
pub struct RustScanManager {
    state: Arc<RwLock<ScanManagerState>>,
    config: Arc<ScanConfig>,
    capability: Arc<dyn NfcScanCapability>,
    events: Sender<ScanEvent>,
    pub reconciler: Sender<Message>,
    pub reconcile_receiver: Arc<Receiver<Message>>,
}

#[uniffi::export]
impl RustScanManager {
    #[uniffi::constructor]
    pub fn new(capability: Box<dyn NfcScanCapability>) -> Self {
        Self::with_config(capability, ScanConfig::default())
    }

    #[uniffi::constructor]
    pub fn with_config(capability: Box<dyn NfcScanCapability>, config: ScanConfig) -> Self {
        // one time init
        crate::logging::init();

        let (event_sender, event_receiver) = flume::unbounded();
        let (sender, receiver) = flume::bounded(1000);

        let state = Arc::new(RwLock::new(ScanManagerState::default()));
        let config = Arc::new(config);
        let capability: Arc<dyn NfcScanCapability> = Arc::from(capability);

        let event_loop = ScanEventLoop {
            state: state.clone(),
            config: config.clone(),
            capability: capability.clone(),
            events: event_sender.downgrade(),
            reconciler: sender.clone(),
        };

        std::thread::spawn(move || event_loop.run(event_receiver));

        Self {
            state,
            config,
            capability,
            events: event_sender,
            reconciler: sender,
            reconcile_receiver: Arc::new(receiver),
        }
    }

    #[uniffi::method]
    pub fn listen_for_updates(&self, reconciler: Box<dyn ScanManagerReconciler>) {
        let reconcile_receiver = self.reconcile_receiver.clone();

        std::thread::spawn(move || {
            while let Ok(field) = reconcile_receiver.recv() {
                // call the reconcile method on the frontend
                reconciler.reconcile(field);
            }
        });
    }

    /// Action from the frontend to change the state of the manager
    #[uniffi::method]
    pub fn dispatch(&self, action: Action) {
        match action {
            Action::StartScan => self.start_scan(),
            Action::CancelScan => self.cancel_scan(),
        }
    }

    /// Ask the reader for one session, the result arrives as reconcile messages
    #[uniffi::method]
    pub fn start_scan(&self) {
        debug!("start scan requested");
        self.queue(ScanEvent::StartRequested);
    }

    #[uniffi::method]
    pub fn cancel_scan(&self) {
        debug!("cancel scan requested");
        self.queue(ScanEvent::CancelRequested);
    }

    #[uniffi::method]
    pub fn is_scanning(&self) -> bool {
        matches!(self.state.read().session, SessionState::Scanning(_))
    }

    #[uniffi::method]
    pub fn is_capability_available(&self) -> bool {
        self.capability.is_available()
    }

    #[uniffi::method]
    pub fn group_count(&self) -> u32 {
        let state = self.state.read();
        saturating_u32(self.presenter(&state.store).group_count())
    }

    #[uniffi::method]
    pub fn row_count(&self, group: u32) -> Result<u32, ListError> {
        let state = self.state.read();
        self.presenter(&state.store)
            .row_count(group as usize)
            .map(saturating_u32)
            .tap_err(|error| error!("list asked for rows of a missing group: {error}"))
    }

    #[uniffi::method]
    pub fn row_text(&self, group: u32, row: u32) -> Result<String, ListError> {
        let state = self.state.read();
        self.presenter(&state.store)
            .row_text(group as usize, row as usize)
            .tap_err(|error| error!("list asked for a missing row: {error}"))
    }

    #[uniffi::method]
    pub fn group_title(&self, group: u32) -> String {
        let state = self.state.read();
        self.presenter(&state.store).group_title(group as usize)
    }
}

impl RustScanManager {
    fn presenter<'a>(&'a self, store: &'a ScanResultStore) -> ScanListPresenter<'a> {
        ScanListPresenter::new(store, &self.config.group_title)
    }

    fn queue(&self, event: ScanEvent) {
        if let Err(error) = self.events.send(event) {
            error!("scan event loop is not running: {error:?}");
        }
    }
}

struct ScanEventLoop {
    state: Arc<RwLock<ScanManagerState>>,
    config: Arc<ScanConfig>,
    capability: Arc<dyn NfcScanCapability>,
    events: WeakSender<ScanEvent>,
    reconciler: Sender<Message>,
}

impl_reconcile_send!(ScanEventLoop, Message);

impl ScanEventLoop {
    fn run(self, receiver: Receiver<ScanEvent>) {
        while let Ok(event) = receiver.recv() {
            self.handle(event);
        }

        debug!("scan event loop stopped");
    }

    fn handle(&self, event: ScanEvent) {
        match event {
            ScanEvent::StartRequested => self.begin_session(),
            ScanEvent::CancelRequested => self.cancel_session(),
            ScanEvent::Detected { session, messages } => self.detected(session, messages),
            ScanEvent::Invalidated { session, reason } => self.invalidated(session, reason),
        }
    }

    fn is_active(&self, session: &SessionId) -> bool {
        matches!(&self.state.read().session, SessionState::Scanning(id) if id == session)
    }

    fn begin_session(&self) {
        if !self.capability.is_available() {
            warn!("NFC scanning is not available, not starting a session");
            return self.send(Message::ShowAlert(ScanAlert::CapabilityUnavailable));
        }

        if let SessionState::Scanning(id) = &self.state.read().session {
            return debug!("session {} already in progress, ignoring start", short_id(id.as_str()));
        }

        // manager is gone, nobody would hear about the result
        if self.events.upgrade().is_none() {
            return debug!("scan manager dropped, not starting a session");
        }

        let id = SessionId::new();
        self.state.write().session = SessionState::Scanning(id.clone());

        let handle = Arc::new(ScanSessionHandle::new(id.clone(), self.events.clone()));
        let begin = self
            .capability
            .begin_session(self.config.as_ref().clone(), handle)
            .map_err_str(InvalidationReason::BeginFailed);

        match begin {
            Ok(()) => {
                info!("scan session {} started", short_id(id.as_str()));
                self.send(Message::ScanStarted);
            }

            Err(reason) => {
                self.end_session(&id);
                self.fail(reason);
            }
        }
    }

    fn cancel_session(&self) {
        let session = std::mem::take(&mut self.state.write().session);
        let SessionState::Scanning(id) = session else {
            return debug!("no scan session to cancel");
        };

        info!("cancelling scan session {}", short_id(id.as_str()));
        self.capability.invalidate_session();
        self.send(Message::ScanCancelled);
    }

    fn detected(&self, session: SessionId, messages: Vec<NdefMessage>) {
        if !self.is_active(&session) {
            return debug!("ignoring detection from stale session {}", short_id(session.as_str()));
        }

        if messages.is_empty() {
            return warn!("detection without messages, nothing to add");
        }

        let stop_after_first_read = self.config.stop_after_first_read;
        let index = {
            let mut state = self.state.write();
            let index = state.store.append(messages);

            if stop_after_first_read {
                state.session = SessionState::Idle;
            }

            index
        };

        debug!("appended scan results as group {index}");
        self.send(Message::GroupAppended(saturating_u32(index)));

        if stop_after_first_read {
            self.send(Message::ScanFinished);
        }
    }

    fn invalidated(&self, session: SessionId, reason: InvalidationReason) {
        if !self.end_session(&session) {
            return debug!(
                "ignoring invalidation of stale session {}: {reason}",
                short_id(session.as_str())
            );
        }

        if !reason.is_failure() {
            return self.send(Message::ScanFinished);
        }

        self.fail(reason);
    }

    /// Back to idle if `session` is the active one, returns whether it was
    fn end_session(&self, session: &SessionId) -> bool {
        let mut state = self.state.write();
        let is_active = matches!(&state.session, SessionState::Scanning(id) if id == session);

        if is_active {
            state.session = SessionState::Idle;
        }

        is_active
    }

    fn fail(&self, reason: InvalidationReason) {
        error!("scan session invalidated: {reason}");
        self.send(Message::ScanFailed(ScanError::SessionInvalidated(reason)));
    }
}
