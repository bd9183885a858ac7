use std::env;

/// Generates the frontend bindings for the nfc-reader library
///
/// Swift is the default, any argument mentioning kotlin switches to Kotlin
fn main() {
    let wants_kotlin = env::args().skip(1).any(|arg| arg.to_lowercase().contains("kotlin"));

    if wants_kotlin {
        uniffi::uniffi_bindgen_main();
    } else {
        uniffi::uniffi_bindgen_swift();
    }
}
