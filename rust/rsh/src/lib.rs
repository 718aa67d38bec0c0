//! # rsh: reusable shell core
//!
//! rsh packages the ownership core of a shell — a heterogeneous
//! owning-handle registry with guaranteed bulk release — together with the
//! session plumbing around it: version identity, environment and user
//! accessors, and the terminal raw-mode toggle.
//!
//! This crate is the convenience entry point; it re-exports the focused
//! member crates and hosts the session bootstrap.
//!
//! ## Module Organization
//!
//! * [`common`] - error taxonomy and result plumbing
//! * [`registry`] - the owning-handle registry core
//! * [`version`] - semantic version identity
//! * [`env`] - environment, user and terminal accessors
//! * [`bootstrap`] - session initialization
//!
//! What rsh deliberately does NOT contain: a command interpreter, job
//! control, or process spawning.

pub use rsh_common as common;
pub use rsh_env as env;
pub use rsh_registry as registry;
pub use rsh_version as version;

pub mod bootstrap;

pub use bootstrap::{Shell, init_shell};
pub use rsh_common::Result;
pub use rsh_env::{Environment, RawModeGuard, Terminal, User};
pub use rsh_registry::{Element, OwnedHandle, Record, Registry, SlotAddress};
pub use rsh_version::{Stage, Version, VersionFormat};
