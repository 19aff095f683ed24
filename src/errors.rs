//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! All public APIs that can fail return [`Result<T>`], an alias for
//! `std::result::Result<T, KinemaError>`.

use thiserror::Error;

/// The main error type for the Kinema engine.
#[derive(Error, Debug)]
pub enum KinemaError {
    /// The property cell a motion was being bound to is no longer alive.
    ///
    /// Raised before any scheduling takes place, so a failed bind leaves
    /// the scheduler untouched.
    #[error("Bind target has been dropped")]
    TargetDropped,

    /// A control operation referenced a motion that has already finished
    /// or been cancelled.
    #[error("Motion handle is no longer valid")]
    InvalidHandle,
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;
