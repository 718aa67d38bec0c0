//! Read-only accessors over the process environment.

/// Well-known environment lookups with the session fallbacks applied.
///
/// A variable that is unset or not valid Unicode falls back to `"/"`,
/// keeping every accessor infallible.
pub struct Environment;

impl Environment {
    /// Returns `$HOME`, or `"/"` when unset.
    pub fn home() -> String {
        Self::var_or("HOME", "/")
    }

    /// Returns `$PATH`, or `"/"` when unset.
    pub fn path() -> String {
        Self::var_or("PATH", "/")
    }

    /// Returns `$SHELL`, or `"/"` when unset.
    pub fn shell() -> String {
        Self::var_or("SHELL", "/")
    }

    fn var_or(name: &str, fallback: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| fallback.to_string())
    }
}
