//! Core definitions (error taxonomy and result plumbing), relied upon by all rsh-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use result::Result;
