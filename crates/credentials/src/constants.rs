//! Centralized constants for credential loading.
//!
//! This module contains the well-known variable and directory names used
//! across the crate to avoid magic string duplication.

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the key-store directory location.
pub const API_KEY_DIR_VAR: &str = "API_KEY_DIR";

/// Directory name searched for upward from the working directory when
/// `API_KEY_DIR` is unset.
pub const KEY_STORE_DIR_NAME: &str = "APIs";

/// Environment variable that disables `.env` file loading when set to
/// "true" or "1" (useful for testing).
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
