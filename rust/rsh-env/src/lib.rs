//! Process-environment accessors: environment variables, user identity and
//! the terminal raw-mode toggle.

pub mod environment;
pub mod terminal;
pub mod user;

pub use environment::Environment;
pub use terminal::{RawModeGuard, Terminal};
pub use user::User;
