//! NDEF values handed to the core by the platform NFC stack
//!
//! Decoding tag bytes into these values is done by the operating system, the
//! types here only carry the already decoded records around.

uniffi::setup_scaffolding!();

pub mod message;
pub mod ndef_type;
pub mod record;

pub use message::NdefMessage;
pub use ndef_type::TypeNameFormat;
pub use record::NdefRecord;
