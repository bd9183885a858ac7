/// A notice the frontend shows as a single-button, dismissable prompt
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, uniffi::Enum)]
pub enum ScanAlert {
    CapabilityUnavailable,
}

impl ScanAlert {
    pub fn title(&self) -> &'static str {
        match self {
            Self::CapabilityUnavailable => "Scanning Not Supported",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::CapabilityUnavailable => "This device doesn't support tag scanning.",
        }
    }

    pub fn button_label(&self) -> &'static str {
        "OK"
    }
}

mod ffi {
    use super::ScanAlert;

    #[uniffi::export]
    fn scan_alert_title(alert: ScanAlert) -> String {
        alert.title().to_string()
    }

    #[uniffi::export]
    fn scan_alert_message(alert: ScanAlert) -> String {
        alert.message().to_string()
    }

    #[uniffi::export]
    fn scan_alert_button_label(alert: ScanAlert) -> String {
        alert.button_label().to_string()
    }
}
