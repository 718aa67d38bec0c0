//! Identity of the user owning this process.

use crate::environment::Environment;

/// User identity captured once at construction from `$USER` and `$HOME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    home_dir: String,
}

impl User {
    /// Captures the current identity. `$USER` falls back to `"unknown"`,
    /// `$HOME` to `"/"`.
    pub fn from_env() -> User {
        User {
            name: std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
            home_dir: Environment::home(),
        }
    }

    /// Returns the user name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the home directory captured at construction.
    pub fn home_dir(&self) -> &str {
        &self.home_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test mutating USER; parallel tests must not share that variable.
    #[test]
    fn captures_identity_once_with_fallback() {
        unsafe { std::env::set_var("USER", "tester") };
        let user = User::from_env();
        assert_eq!(user.name(), "tester");
        assert!(!user.home_dir().is_empty());

        // Later environment changes do not affect the captured identity.
        unsafe { std::env::set_var("USER", "someone-else") };
        assert_eq!(user.name(), "tester");

        unsafe { std::env::remove_var("USER") };
        assert_eq!(User::from_env().name(), "unknown");
    }
}
