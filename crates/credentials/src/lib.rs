//! Credential loading for API clients.
//!
//! This crate provides two strategies for loading API credentials:
//! `.env`-file discovery merged into the process environment (silent on
//! absence), and strict flat-file reads from a key-store directory.

mod constants;
mod env;
mod error;
mod keystore;

pub use constants::{API_KEY_DIR_VAR, KEY_STORE_DIR_NAME, OPENAI_API_KEY_VAR};
pub use env::{env_var_or_none, load_env, openai_api_key, secret};
pub use error::CredentialError;
pub use keystore::KeyStore;
