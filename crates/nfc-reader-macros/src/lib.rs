#[macro_export]
macro_rules! impl_default_for {
    ($name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Forward a manager's `send` to its reconcile channel, logging when the
/// frontend side of the channel has gone away
#[macro_export]
macro_rules! impl_reconcile_send {
    ($manager:ident, $message:ty) => {
        impl $manager {
            fn send(&self, message: $message) {
                if let Err(error) = self.reconciler.send(message) {
                    ::tracing::error!("unable to send reconcile message: {error:?}");
                }
            }
        }
    };
}
