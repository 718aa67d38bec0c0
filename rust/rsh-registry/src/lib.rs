//! Heterogeneous owning-handle registry.
//!
//! This crate provides the ownership core of rsh: a container that stores
//! handles to heap allocations of arbitrarily different element types behind
//! one uniform capability, and guarantees their bulk release.
//!
//! # Core Concepts
//!
//! ## Ownership capability
//!
//! The [`handle::OwnedHandle`] trait is the minimal contract any concrete
//! owned record satisfies: report the owned address, expose the value
//! snapshot captured at construction, and release the allocation at most
//! once. Handles are type-erased; concrete record types are recovered
//! through dynamic downcasting.
//!
//! ## Typed owning record
//!
//! [`record::Record`] pairs exclusive ownership of one heap allocation with
//! an independently captured value snapshot. The snapshot is a point-in-time
//! copy: mutating the live allocation after construction does not change
//! what `snapshot()` returns.
//!
//! ## Owning registry
//!
//! [`registry::Registry`] is an ordered, index-addressable collection of
//! boxed handles. Once a handle is inserted, the registry is its exclusive
//! owner; handles leave it either released (`erase`, `cleanup`) or by
//! explicit ownership transfer back to the caller (`pop_back`).

pub mod element;
pub mod handle;
pub mod record;
pub mod registry;

pub use element::Element;
pub use handle::{OwnedHandle, SlotAddress};
pub use record::Record;
pub use registry::Registry;
