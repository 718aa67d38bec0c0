//! Session bootstrap: capture identity, log the environment, arm raw mode.

use rsh_common::Result;
use rsh_env::{Environment, RawModeGuard, Terminal, User};
use rsh_registry::Registry;
use rsh_version::Version;

/// A bootstrapped session.
///
/// Owns the terminal raw-mode guard (restored when the shell is dropped)
/// and the session-wide handle registry.
pub struct Shell {
    user: User,
    registry: Registry,
    raw_mode: Option<RawModeGuard>,
}

impl Shell {
    /// Returns the identity captured at initialization.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Returns the session handle registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable counterpart of [`registry`](Shell::registry).
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Returns the version of this build.
    pub fn version(&self) -> Version {
        Version::current()
    }

    /// Tears the session down now, releasing every registered handle and
    /// restoring the terminal, reporting failures instead of deferring to
    /// the silent drop path.
    pub fn shutdown(mut self) -> Result<()> {
        self.registry.cleanup()?;
        match self.raw_mode.take() {
            Some(raw_mode) => raw_mode.restore(),
            None => Ok(()),
        }
    }
}

/// Initializes a shell session for the current user.
///
/// Logs the captured identity and environment, switches the terminal into
/// raw mode and returns the assembled [`Shell`]. No interpreter loop is
/// started and no process is spawned.
pub fn init_shell() -> Result<Shell> {
    let user = User::from_env();
    log::info!("initializing shell for {}", user.name());
    log::info!("home: {}", Environment::home());
    log::info!("shell: {}", Environment::shell());
    log::info!("path: {}", Environment::path());

    let raw_mode = Terminal::enable_raw()?;
    Ok(Shell {
        user,
        registry: Registry::new(),
        raw_mode: Some(raw_mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Raw mode needs a controlling terminal, which test runners don't
    // have; exercise the session around it.
    fn headless_shell() -> Shell {
        Shell {
            user: User::from_env(),
            registry: Registry::new(),
            raw_mode: None,
        }
    }

    #[test]
    fn shell_owns_a_working_registry() {
        let mut shell = headless_shell();
        shell.registry_mut().insert_back(Box::new(1i32), 1).unwrap();
        shell.registry_mut().insert_back(Box::new(2i64), 2).unwrap();
        assert_eq!(shell.registry().len(), 2);

        shell.registry_mut().cleanup().unwrap();
        assert!(shell.registry().is_empty());
    }

    #[test]
    fn shutdown_releases_everything() {
        let mut shell = headless_shell();
        shell.registry_mut().insert_back(Box::new(7u8), 7).unwrap();
        assert!(shell.version() >= Version::new(0, 1, 0));
        shell.shutdown().unwrap();
    }
}
