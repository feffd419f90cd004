//! Error types for Plumline operations.
//!
//! This module defines [`PlumlineError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PlumlineError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PlumlineError::Other`) for unexpected errors
//! - The completeness evaluator itself is total and never returns an error;
//!   only file loading and CLI plumbing can fail

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Plumline operations.
#[derive(Debug, Error)]
pub enum PlumlineError {
    /// Profile file not found at the expected location.
    #[error("Profile not found: {path}")]
    ProfileNotFound { path: PathBuf },

    /// Failed to parse a profile file.
    #[error("Failed to parse profile at {path}: {message}")]
    ProfileParseError { path: PathBuf, message: String },

    /// Checklist file not found at the expected location.
    #[error("Checklist not found: {path}")]
    ChecklistNotFound { path: PathBuf },

    /// Failed to parse a checklist file.
    #[error("Failed to parse checklist at {path}: {message}")]
    ChecklistParseError { path: PathBuf, message: String },

    /// Invalid checklist contents (e.g. no fields listed).
    #[error("Invalid checklist: {message}")]
    ChecklistValidationError { message: String },

    /// File extension does not map to a supported format.
    #[error("Unsupported file format: {path} (expected .yml, .yaml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Plumline operations.
pub type Result<T> = std::result::Result<T, PlumlineError>;
