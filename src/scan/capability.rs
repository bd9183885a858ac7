use std::sync::Arc;

use derive_more::{Display, From};
use flume::WeakSender;
use nfc_reader_ndef::NdefMessage;
use nfc_reader_macros::impl_default_for;
use nid::Nanoid;
use tracing::{debug, warn};

use super::{config::ScanConfig, error::InvalidationReason};

/// Platform NFC reader, implemented by the frontend
#[uniffi::export(callback_interface)]
pub trait NfcScanCapability: Send + Sync + std::fmt::Debug + 'static {
    /// Whether this device can read NFC tags at all
    fn is_available(&self) -> bool;

    /// Begin one reader session, results are reported through `handle`
    ///
    /// May call back on any thread, including before this returns
    fn begin_session(
        &self,
        config: ScanConfig,
        handle: Arc<ScanSessionHandle>,
    ) -> Result<(), NfcCapabilityError>;

    /// End the active reader session early
    fn invalidate_session(&self);
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum NfcCapabilityError {
    #[error("reader session is not supported: {0}")]
    NotSupported(String),

    #[error("unable to begin reader session: {0}")]
    BeginFailed(String),
}

impl From<uniffi::UnexpectedUniFFICallbackError> for NfcCapabilityError {
    fn from(error: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::BeginFailed(error.reason)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Display, From)]
pub struct SessionId(String);

impl_default_for!(SessionId);
impl SessionId {
    pub fn new() -> Self {
        let id: Nanoid = Nanoid::new();
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    StartRequested,
    CancelRequested,
    Detected {
        session: SessionId,
        messages: Vec<NdefMessage>,
    },
    Invalidated {
        session: SessionId,
        reason: InvalidationReason,
    },
}

/// Given to the platform reader for one session, safe to call from any thread
///
/// Holds the event queue weakly, a reader keeping its last handle around does
/// not keep the manager's event loop alive
#[derive(Debug, uniffi::Object)]
pub struct ScanSessionHandle {
    id: SessionId,
    events: WeakSender<ScanEvent>,
}

impl ScanSessionHandle {
    pub(crate) fn new(id: SessionId, events: WeakSender<ScanEvent>) -> Self {
        Self { id, events }
    }

    fn send(&self, event: ScanEvent) {
        let sent = self.events.upgrade().is_some_and(|events| events.send(event).is_ok());
        if !sent {
            debug!("scan manager is gone, dropping event for session {}", self.id);
        }
    }
}

#[uniffi::export]
impl ScanSessionHandle {
    pub fn session_id(&self) -> String {
        self.id.to_string()
    }

    /// The reader decoded one or more NDEF messages
    pub fn did_detect(&self, messages: Vec<NdefMessage>) {
        if messages.is_empty() {
            warn!("reader reported a detection without messages");
        }

        self.send(ScanEvent::Detected {
            session: self.id.clone(),
            messages,
        });
    }

    /// The reader session ended, see [`InvalidationReason`]
    pub fn did_invalidate(&self, reason: InvalidationReason) {
        self.send(ScanEvent::Invalidated {
            session: self.id.clone(),
            reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        let a = SessionId::new();
        let b = SessionId::new();

        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 21);
    }

    #[test]
    fn handle_tags_events_with_its_session() {
        let (sender, receiver) = flume::unbounded();
        let id = SessionId::new();
        let handle = ScanSessionHandle::new(id.clone(), sender.downgrade());

        handle.did_invalidate(InvalidationReason::Timeout);
        handle.did_detect(vec![]);

        assert_eq!(
            receiver.try_recv().unwrap(),
            ScanEvent::Invalidated {
                session: id.clone(),
                reason: InvalidationReason::Timeout
            }
        );
        assert_eq!(
            receiver.try_recv().unwrap(),
            ScanEvent::Detected {
                session: id,
                messages: vec![]
            }
        );
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        let (sender, receiver) = flume::unbounded();
        drop(receiver);

        let handle = ScanSessionHandle::new(SessionId::new(), sender.downgrade());
        handle.did_detect(vec![]);
    }

    #[test]
    fn handle_does_not_keep_the_queue_open() {
        let (sender, receiver) = flume::unbounded::<ScanEvent>();
        let handle = ScanSessionHandle::new(SessionId::new(), sender.downgrade());
        drop(sender);

        assert!(receiver.is_disconnected());

        handle.did_invalidate(InvalidationReason::Timeout);
        assert!(receiver.try_recv().is_err());
    }
}
