use crate::ndef_type::TypeNameFormat;

/// One decoded NDEF record, as reported by the platform NFC stack
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NdefRecord {
    pub type_name_format: TypeNameFormat,
    pub identifier: Vec<u8>,
    pub type_: Vec<u8>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    pub fn new(
        type_name_format: TypeNameFormat,
        identifier: impl Into<Vec<u8>>,
        type_: impl Into<Vec<u8>>,
        payload: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            type_name_format,
            identifier: identifier.into(),
            type_: type_.into(),
            payload: payload.into(),
        }
    }

    pub fn identifier_hex(&self) -> String {
        hex::encode(&self.identifier)
    }

    pub fn type_hex(&self) -> String {
        hex::encode(&self.type_)
    }

    pub fn payload_hex(&self) -> String {
        hex::encode(&self.payload)
    }

    /// The record type as text, `None` if it is not valid UTF-8
    pub fn type_string(&self) -> Option<&str> {
        std::str::from_utf8(&self.type_).ok()
    }
}

// only used for uniffi
mod ffi {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, uniffi::Object)]
    pub struct NdefRecordReader {
        record: NdefRecord,
    }

    #[uniffi::export]
    impl NdefRecordReader {
        #[uniffi::constructor]
        pub fn new(record: NdefRecord) -> Self {
            Self { record }
        }

        pub fn type_(&self) -> Option<String> {
            self.record.type_string().map(ToString::to_string)
        }

        pub fn identifier(&self) -> Option<String> {
            String::from_utf8(self.record.identifier.clone()).ok()
        }

        pub fn payload_hex(&self) -> String {
            self.record.payload_hex()
        }
    }
}
