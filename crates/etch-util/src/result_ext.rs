use std::fmt::Display;

pub trait ResultExt<T, InitialError> {
    /// Map an error to a string-based error variant
    ///
    /// This allows converting `Result<T, InitialError>` to `Result<T, FinalError>` where FinalError has a variant
    /// that takes a String, using the Display implementation of InitialError.
    ///
    /// # Example
    /// ```rust
    /// use etch_util::result_ext::ResultExt;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// enum WriteTextError {
    ///     #[error("invalid text payload: {0}")]
    ///     InvalidPayload(String),
    /// }
    ///
    /// fn message_size(encoded: &str) -> Result<u32, WriteTextError> {
    ///     encoded.parse::<u32>().map_err_str(WriteTextError::InvalidPayload)
    /// }
    ///
    /// assert!(message_size("26").is_ok());
    /// assert!(message_size("not a size").is_err());
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
