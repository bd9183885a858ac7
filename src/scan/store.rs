use nfc_reader_ndef::NdefMessage;

/// The messages delivered by one successful read
pub type MessageGroup = Vec<NdefMessage>;

/// Append-only list of scan results, one group per successful read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResultStore {
    groups: Vec<MessageGroup>,
}

impl ScanResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group, returns the index it was stored at
    pub fn append(&mut self, group: MessageGroup) -> usize {
        self.groups.push(group);
        self.groups.len() - 1
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, index: usize) -> Option<&[NdefMessage]> {
        self.groups.get(index).map(Vec::as_slice)
    }

    pub fn message(&self, group: usize, row: usize) -> Option<&NdefMessage> {
        self.groups.get(group)?.get(row)
    }
}
