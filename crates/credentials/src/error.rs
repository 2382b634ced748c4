//! Error types for credential loading.
//!
//! Responsibilities:
//! - Define error variants for all flat-file key loading failures.
//!
//! Does NOT handle:
//! - Errors for the environment strategy (absence is a valid outcome
//!   there, not an error; see env.rs).
//!
//! Invariants:
//! - Error variants include the offending path for debugging.
//! - Error messages NEVER include key file contents to prevent secret
//!   leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a key from the key store.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("key file not found: {path}")]
    KeyFileNotFound { path: PathBuf },

    #[error("key file is empty: {path}")]
    KeyFileEmpty { path: PathBuf },

    #[error(
        "unable to determine key store directory: {0}. Set API_KEY_DIR or place an APIs directory above the working directory"
    )]
    KeyDirUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
