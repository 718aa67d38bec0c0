//! Terminal raw-mode toggle.
//!
//! Raw mode is armed through [`Terminal::enable_raw`], which returns a
//! guard that restores the saved terminal state when dropped. Keeping the
//! restore on the guard (instead of a process exit hook) means nested
//! scopes and early returns unwind the terminal correctly.

/// Controls the raw-mode state of the controlling terminal.
pub struct Terminal;

#[cfg(unix)]
mod imp {
    use rsh_common::{Result, error::Error};

    use super::Terminal;

    /// Restores the saved terminal attributes on drop.
    pub struct RawModeGuard {
        saved: Option<libc::termios>,
    }

    impl Terminal {
        /// Switches stdin's terminal into raw mode.
        ///
        /// Returns the guard holding the previous attributes; dropping it
        /// restores them. Fails with `Io` when stdin is not a terminal or
        /// the attribute calls are rejected.
        pub fn enable_raw() -> Result<RawModeGuard> {
            let mut saved = std::mem::MaybeUninit::<libc::termios>::uninit();
            // SAFETY: tcgetattr writes a full termios on success, which is
            // the only path on which we assume_init.
            let saved = unsafe {
                if libc::tcgetattr(libc::STDIN_FILENO, saved.as_mut_ptr()) != 0 {
                    return Err(Error::io("tcgetattr", std::io::Error::last_os_error()));
                }
                saved.assume_init()
            };

            let mut raw = saved;
            // SAFETY: raw is a valid termios obtained above.
            unsafe { libc::cfmakeraw(&mut raw) };
            // SAFETY: raw is a valid termios; TCSAFLUSH drains output first.
            if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &raw) } != 0 {
                return Err(Error::io("tcsetattr", std::io::Error::last_os_error()));
            }
            Ok(RawModeGuard { saved: Some(saved) })
        }
    }

    impl RawModeGuard {
        /// Restores the saved attributes now, reporting failure instead of
        /// deferring to the silent drop path.
        pub fn restore(mut self) -> Result<()> {
            match self.saved.take() {
                Some(saved) => restore_attrs(&saved),
                None => Ok(()),
            }
        }
    }

    impl Drop for RawModeGuard {
        fn drop(&mut self) {
            if let Some(saved) = self.saved.take()
                && let Err(err) = restore_attrs(&saved)
            {
                log::warn!("terminal restore: {err}");
            }
        }
    }

    fn restore_attrs(saved: &libc::termios) -> Result<()> {
        // SAFETY: saved is the termios captured by enable_raw.
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, saved) } != 0 {
            return Err(Error::io("tcsetattr", std::io::Error::last_os_error()));
        }
        Ok(())
    }
}

#[cfg(not(unix))]
mod imp {
    use rsh_common::Result;

    use super::Terminal;

    /// No-op stand-in on platforms without termios.
    pub struct RawModeGuard;

    impl Terminal {
        pub fn enable_raw() -> Result<RawModeGuard> {
            Ok(RawModeGuard)
        }
    }

    impl RawModeGuard {
        pub fn restore(self) -> Result<()> {
            Ok(())
        }
    }
}

pub use imp::RawModeGuard;
