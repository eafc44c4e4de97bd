//! Top-level error wrapper types.

use crate::{ConfigError, DriverError, SessionError};

/// The foundation error enum for the Fabula workspace.
///
/// # Examples
///
/// ```
/// use fabula_error::{DriverError, FabulaError};
///
/// let driver_err = DriverError::new("connection refused");
/// let err: FabulaError = driver_err.into();
/// assert!(format!("{}", err).contains("Driver Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FabulaErrorKind {
    /// Completion or model-lifecycle driver error
    #[from(DriverError)]
    Driver(DriverError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Session state machine error
    #[from(SessionError)]
    Session(SessionError),
}

/// Fabula error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fabula_error::{FabulaResult, SessionError, SessionErrorKind};
///
/// fn might_fail() -> FabulaResult<()> {
///     Err(SessionError::new(SessionErrorKind::ModelNotReady))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fabula Error: {}", _0)]
pub struct FabulaError(Box<FabulaErrorKind>);

impl FabulaError {
    /// Create a new error from a kind.
    pub fn new(kind: FabulaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FabulaErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FabulaErrorKind
impl<T> From<T> for FabulaError
where
    T: Into<FabulaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Fabula operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{DriverError, FabulaResult};
///
/// fn generate() -> FabulaResult<String> {
///     Err(DriverError::new("model not loaded"))?
/// }
/// ```
pub type FabulaResult<T> = std::result::Result<T, FabulaError>;
