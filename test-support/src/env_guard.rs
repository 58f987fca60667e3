//! Test helpers for managing environment variables.
//!
//! `EnvVarGuard` temporarily sets or removes an environment variable and
//! restores the previous value on drop. Configuration tests use it for the
//! `CMDMATRIX_*` overrides.

#[derive(Debug)]
pub struct EnvVarGuard {
    key: String,
    original: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable for the lifetime of the returned guard.
    pub fn set(key: &str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        set_env_var(key, value);
        Self {
            key: key.to_owned(),
            original,
        }
    }

    /// Remove an environment variable for the lifetime of the returned guard.
    pub fn remove(key: &str) -> Self {
        let original = std::env::var(key).ok();
        remove_env_var(key);
        Self {
            key: key.to_owned(),
            original,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(v) => set_env_var(&self.key, v),
            None => remove_env_var(&self.key),
        }
    }
}

/// SAFETY: Must only be called from serial test contexts.
fn set_env_var(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

/// SAFETY: Must only be called from serial test contexts.
fn remove_env_var(key: &str) {
    unsafe { std::env::remove_var(key) };
}
