pub(crate) mod logging;

pub mod manager;
pub mod scan;

pub use nfc_reader_ndef as ndef;

uniffi::setup_scaffolding!();
