use crate::record::NdefRecord;

/// An NDEF message, the records keep the order they had on the tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NdefMessage {
    pub records: Vec<NdefRecord>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum NdefMessageError {
    #[error("an NDEF message needs at least one record")]
    NoRecords,
}

pub type Error = NdefMessageError;
type Result<T, E = Error> = std::result::Result<T, E>;

impl NdefMessage {
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    /// Like [`NdefMessage::new`] but refuses a message without records
    pub fn try_new(records: Vec<NdefRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(NdefMessageError::NoRecords);
        }

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NdefRecord> {
        self.records.iter()
    }
}

impl From<Vec<NdefRecord>> for NdefMessage {
    fn from(records: Vec<NdefRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a NdefMessage {
    type Item = &'a NdefRecord;
    type IntoIter = std::slice::Iter<'a, NdefRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[uniffi::export]
fn ndef_message_try_new(records: Vec<NdefRecord>) -> Result<NdefMessage> {
    NdefMessage::try_new(records)
}
