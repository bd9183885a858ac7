//! Scan results and the pieces around a single scan session

pub mod alert;
pub mod capability;
pub mod config;
pub mod error;
pub mod presenter;
pub mod store;

pub use alert::ScanAlert;
pub use capability::{NfcCapabilityError, NfcScanCapability, ScanSessionHandle};
pub use config::ScanConfig;
pub use error::{InvalidationReason, ListError, ScanError};
pub use presenter::{ScanListDataSource, ScanListPresenter, format_record};
pub use store::{MessageGroup, ScanResultStore};
