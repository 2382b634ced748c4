//! Flat-file credential strategy.
//!
//! Responsibilities:
//! - Resolve the key-store directory once, from `API_KEY_DIR` or by
//!   searching upward from the working directory for an `APIs` directory.
//! - Read individual key files, trimmed, as secrets.
//!
//! Does NOT handle:
//! - Environment variable lookups (see env.rs).
//!
//! Invariants:
//! - Unlike the environment strategy, this one is strict: a missing file
//!   or empty-after-trim content is a hard failure.
//! - Error messages include the offending path, never file contents.

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use tracing::debug;

use crate::constants::{API_KEY_DIR_VAR, KEY_STORE_DIR_NAME};
use crate::env::env_var_or_none;
use crate::error::CredentialError;

/// A directory of flat key files, one per named secret.
#[derive(Debug, Clone)]
pub struct KeyStore {
    dir: PathBuf,
}

impl KeyStore {
    /// Create a key store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the key store directory from the environment.
    ///
    /// Resolution order:
    /// 1. The `API_KEY_DIR` environment variable, if set.
    /// 2. A directory named `APIs` under the current working directory or
    ///    any of its ancestors, nearest first.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::KeyDirUnavailable`] when neither rule
    /// resolves to a directory.
    pub fn from_env() -> Result<Self, CredentialError> {
        if let Some(dir) = env_var_or_none(API_KEY_DIR_VAR) {
            debug!(dir = %dir, "key store directory from {}", API_KEY_DIR_VAR);
            return Ok(Self::new(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| CredentialError::KeyDirUnavailable(e.to_string()))?;

        for ancestor in cwd.ancestors() {
            let candidate = ancestor.join(KEY_STORE_DIR_NAME);
            if candidate.is_dir() {
                debug!(dir = %candidate.display(), "key store directory found by upward search");
                return Ok(Self::new(candidate));
            }
        }

        Err(CredentialError::KeyDirUnavailable(format!(
            "no {} directory found above {}",
            KEY_STORE_DIR_NAME,
            cwd.display()
        )))
    }

    /// The resolved key store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load an API key from a flat file in the key store.
    ///
    /// The file's entire contents, stripped of leading and trailing
    /// whitespace, become the secret value.
    ///
    /// # Errors
    ///
    /// - [`CredentialError::KeyFileNotFound`] when the file does not exist.
    /// - [`CredentialError::KeyFileEmpty`] when the stripped content is
    ///   zero-length.
    /// - [`CredentialError::Io`] for any other read failure.
    pub fn load_api_key(&self, file_name: &str) -> Result<SecretString, CredentialError> {
        let path = self.dir.join(file_name);

        if !path.exists() {
            return Err(CredentialError::KeyFileNotFound { path });
        }

        let contents = fs::read_to_string(&path)?;
        let trimmed = contents.trim();

        if trimmed.is_empty() {
            return Err(CredentialError::KeyFileEmpty { path });
        }

        Ok(SecretString::new(trimmed.to_string().into()))
    }
}
