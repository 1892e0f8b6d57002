//! One-time capture of the two secret values from the process environment.

use std::env;

/// Environment variable holding the Supabase project URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the Supabase service key.
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Resolved values of the two secret variables at startup.
///
/// Captured once, never re-read. An unset or non-UTF-8 variable resolves to
/// the empty string; the walkthrough renders it as-is instead of diagnosing
/// it, so the operator sees exactly what the workflow would see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub supabase_url: String,
    pub supabase_key: String,
}

impl EnvSnapshot {
    /// Captures the live process environment.
    pub fn capture() -> Self {
        Self {
            supabase_url: env::var(URL_VAR).unwrap_or_default(),
            supabase_key: env::var(KEY_VAR).unwrap_or_default(),
        }
    }

    /// Builds a snapshot from explicit values.
    pub fn from_values(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            supabase_key: key.into(),
        }
    }
}
