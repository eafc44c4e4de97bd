//! Driver error types.

/// Failure reported by a completion or model-lifecycle driver.
///
/// Drivers are opaque collaborators; all that survives the boundary is a
/// human-readable message plus the source location that raised it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Driver Error: {} at line {} in {}", message, line, file)]
pub struct DriverError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DriverError {
    /// Create a new DriverError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_error::DriverError;
    ///
    /// let err = DriverError::new("completion stream dropped");
    /// assert!(err.message.contains("dropped"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
