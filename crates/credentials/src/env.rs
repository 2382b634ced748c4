//! Environment-file credential strategy.
//!
//! Responsibilities:
//! - Merge `.env` files discovered in the working directory or its
//!   ancestors into the process environment.
//! - Read named secrets from the environment, treating absence as a
//!   valid, silent outcome.
//!
//! Does NOT handle:
//! - Flat-file key reads (see keystore.rs).
//!
//! Invariants:
//! - `load_env()` never fails: missing `.env` files are a no-op and
//!   malformed ones are logged and skipped.
//! - Already-set process variables are never overwritten by `.env`
//!   values (dotenvy merge semantics).
//! - Retrieved values are returned exactly as stored, untransformed.
//! - Log events never include raw `.env` line contents.

use secrecy::SecretString;
use tracing::{debug, warn};

use crate::constants::{DOTENV_DISABLED_VAR, OPENAI_API_KEY_VAR};

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Merge the nearest `.env` file into the process environment.
///
/// Searches the current directory and its ancestors for a `.env` file.
/// Variables already set in the process environment take precedence over
/// file values.
///
/// This never fails: a missing `.env` file is a no-op, and a malformed
/// one is logged at `warn` level and otherwise ignored. If the
/// `DOTENV_DISABLED` environment variable is set to "true" or "1", the
/// `.env` file will not be loaded (useful for testing).
pub fn load_env() {
    if dotenv_disabled() {
        debug!("dotenv loading disabled, skipping .env file");
        return;
    }

    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "merged .env file into environment"),
        Err(e) if is_not_found(&e) => {}
        // Position only, never line content: .env lines hold secrets.
        Err(dotenvy::Error::LineParse(_, idx)) => {
            warn!(error_index = idx, "malformed .env file, skipping");
        }
        Err(dotenvy::Error::Io(io_err)) => {
            warn!(kind = %io_err.kind(), "failed to read .env file, skipping");
        }
        Err(_) => warn!("failed to load .env file, skipping"),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Read an environment variable, returning None if unset or empty.
///
/// Unlike the key store, values are NOT trimmed: the variable's exact
/// contents are returned.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Return a named secret from the environment.
///
/// Calls [`load_env`] first, so a discoverable `.env` file is merged in
/// before the lookup. Absence is a valid outcome, not an error.
pub fn secret(name: &str) -> Option<SecretString> {
    load_env();
    env_var_or_none(name).map(|value| SecretString::new(value.into()))
}

/// Return the OpenAI API key from the environment, if set.
pub fn openai_api_key() -> Option<SecretString> {
    secret(OPENAI_API_KEY_VAR)
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use serial_test::serial;

    use super::*;
    use crate::test_util::global_test_lock;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_unset_and_empty() {
        let _lock = global_test_lock().lock().unwrap();

        let key = "_APIKEYS_TEST_LOOKUP_VAR";
        assert!(env_var_or_none(key).is_none(), "unset var should be None");

        temp_env::with_vars([(key, Some(""))], || {
            assert!(env_var_or_none(key).is_none(), "empty var should be None");
        });

        temp_env::with_vars([(key, Some("test-value"))], || {
            assert_eq!(env_var_or_none(key), Some("test-value".to_string()));
        });
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_does_not_trim() {
        let _lock = global_test_lock().lock().unwrap();

        let key = "_APIKEYS_TEST_PADDED_VAR";
        temp_env::with_vars([(key, Some(" padded "))], || {
            assert_eq!(
                env_var_or_none(key),
                Some(" padded ".to_string()),
                "values must be returned untransformed"
            );
        });
    }

    #[test]
    #[serial]
    fn test_secret_returns_exact_value() {
        let _lock = global_test_lock().lock().unwrap();

        let key = "_APIKEYS_TEST_SECRET_VAR";
        temp_env::with_vars(
            [(key, Some("sk-abc123")), (DOTENV_DISABLED_VAR, Some("1"))],
            || {
                let value = secret(key).expect("set var should yield a secret");
                assert_eq!(value.expose_secret(), "sk-abc123");
            },
        );
    }

    #[test]
    #[serial]
    fn test_secret_absent_is_none() {
        let _lock = global_test_lock().lock().unwrap();

        temp_env::with_vars([(DOTENV_DISABLED_VAR, Some("1"))], || {
            assert!(secret("_APIKEYS_TEST_MISSING_VAR").is_none());
        });
    }

    #[test]
    #[serial]
    fn test_openai_api_key_reads_fixed_variable() {
        let _lock = global_test_lock().lock().unwrap();

        temp_env::with_vars(
            [
                (OPENAI_API_KEY_VAR, Some("sk-test-key")),
                (DOTENV_DISABLED_VAR, Some("1")),
            ],
            || {
                let key = openai_api_key().expect("key should be present");
                assert_eq!(key.expose_secret(), "sk-test-key");
            },
        );
    }
}
