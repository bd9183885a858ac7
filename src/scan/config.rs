use nfc_reader_macros::impl_default_for;

pub const DEFAULT_GROUP_TITLE: &str = "NFC tag messages";
pub const DEFAULT_ALERT_MESSAGE: &str = "Hold your device near an NFC tag.";

/// Settings for scan sessions and the list built from their results
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct ScanConfig {
    /// End the session after the first successful read
    pub stop_after_first_read: bool,

    /// Shown by the system scanning sheet while a session is active
    pub alert_message: String,

    /// Title used for every group in the list
    pub group_title: String,
}

impl_default_for!(ScanConfig);
impl ScanConfig {
    pub fn new() -> Self {
        Self {
            stop_after_first_read: true,
            alert_message: DEFAULT_ALERT_MESSAGE.to_string(),
            group_title: DEFAULT_GROUP_TITLE.to_string(),
        }
    }
}

#[uniffi::export]
fn scan_config_default() -> ScanConfig {
    ScanConfig::default()
}
