use std::fmt::Display;

pub trait ResultExt<T, InitialError> {
    /// Map an error into a variant of another error that takes a `String`
    ///
    /// # Example
    /// ```rust
    /// use nfc_reader_util::result_ext::ResultExt;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum SessionError {
    ///     #[error("session could not begin: {0}")]
    ///     BeginFailed(String),
    /// }
    ///
    /// fn begin() -> Result<(), SessionError> {
    ///     "not a number".parse::<u8>().map_err_str(SessionError::BeginFailed)?;
    ///     Ok(())
    /// }
    ///
    /// assert!(begin().is_err());
    /// ```
    fn map_err_str<FinalError, F>(self, f: F) -> Result<T, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError;
}

impl<Type, InitialError> ResultExt<Type, InitialError> for Result<Type, InitialError> {
    fn map_err_str<FinalError, F>(self, f: F) -> Result<Type, FinalError>
    where
        InitialError: Display,
        F: FnOnce(String) -> FinalError,
    {
        self.map_err(|e| f(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Wrapped {
        Message(String),
    }

    #[test]
    fn map_err_str_uses_display() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let mapped = result.map_err_str(Wrapped::Message);
        assert_eq!(mapped, Err(Wrapped::Message(std::fmt::Error.to_string())));
    }
}
