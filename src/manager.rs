pub mod scan_manager;

pub use scan_manager::{
    RustScanManager, ScanManagerAction, ScanManagerReconcileMessage, ScanManagerReconciler,
};
