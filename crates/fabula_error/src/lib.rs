//! Error types for the Fabula story engine.
//!
//! This crate provides the foundation error types used throughout the Fabula
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fabula_error::{DriverError, FabulaResult};
//!
//! fn run_generation() -> FabulaResult<String> {
//!     Err(DriverError::new("model backend unreachable"))?
//! }
//!
//! match run_generation() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod driver;
mod error;
mod session;

pub use config::ConfigError;
pub use driver::DriverError;
pub use error::{FabulaError, FabulaErrorKind, FabulaResult};
pub use session::{SessionError, SessionErrorKind};
