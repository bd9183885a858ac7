use derive_more::Display;

/// Why the platform ended a scan session
#[derive(Debug, Clone, Hash, PartialEq, Eq, Display, uniffi::Enum)]
pub enum InvalidationReason {
    /// The session read a tag and closed itself, not a failure
    #[display("first tag read")]
    FirstTagRead,

    #[display("cancelled by user")]
    UserCanceled,

    #[display("session timed out")]
    Timeout,

    #[display("system is busy")]
    SystemBusy,

    #[display("session terminated unexpectedly")]
    TerminatedUnexpectedly,

    #[display("tag could not be read: {_0}")]
    TagUnreadable(String),

    #[display("session could not begin: {_0}")]
    BeginFailed(String),

    #[display("{_0}")]
    Other(String),
}

impl InvalidationReason {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::FirstTagRead)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum ScanError {
    #[error("NFC scanning is not available on this device")]
    CapabilityUnavailable,

    #[error("scan session ended: {0}")]
    SessionInvalidated(InvalidationReason),
}

/// The list asked for a group or row that is not in the store
#[derive(Debug, Clone, Hash, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum ListError {
    #[error("group {index} is out of range, there are {count} groups")]
    GroupOutOfRange { index: u32, count: u32 },

    #[error("row {row} is out of range, group {group} has {count} rows")]
    RowOutOfRange { group: u32, row: u32, count: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_tag_read_is_not_a_failure() {
        assert!(!InvalidationReason::FirstTagRead.is_failure());
        assert!(InvalidationReason::UserCanceled.is_failure());
        assert!(InvalidationReason::TagUnreadable("crc".into()).is_failure());
    }

    #[test]
    fn errors_carry_the_reason() {
        let error = ScanError::SessionInvalidated(InvalidationReason::Timeout);
        assert_eq!(error.to_string(), "scan session ended: session timed out");

        let error = ScanError::SessionInvalidated(InvalidationReason::BeginFailed("busy".into()));
        assert_eq!(error.to_string(), "scan session ended: session could not begin: busy");
    }
}
