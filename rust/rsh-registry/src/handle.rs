//! The ownership capability: the polymorphic surface the registry depends on.

use std::any::Any;
use std::fmt;

use rsh_common::Result;

/// Opaque address of a heap allocation owned by a record.
///
/// `SlotAddress` identifies an allocation without granting access to it. A
/// released record reports [`SlotAddress::INVALID`]. Addresses order and
/// hash like the underlying location, which is what registry comparisons
/// are defined over.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotAddress(usize);

impl SlotAddress {
    /// The sentinel reported by released or never-bound records.
    pub const INVALID: SlotAddress = SlotAddress(0);

    /// Returns the address of a live value.
    pub fn of<T>(value: &T) -> SlotAddress {
        SlotAddress(std::ptr::from_ref(value) as usize)
    }

    /// Returns `true` if this address designates a live allocation.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Returns the numeric form of the address.
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotAddress({:#x})", self.0)
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// The minimal contract any concrete owned record satisfies.
///
/// A handle owns exactly one heap allocation until it is released. The
/// element type behind the allocation is erased; callers that need it back
/// downcast through [`as_any`](OwnedHandle::as_any).
pub trait OwnedHandle: fmt::Debug + 'static {
    /// Returns the owned location, or [`SlotAddress::INVALID`] once the
    /// handle has been released. Never fails.
    fn address(&self) -> SlotAddress;

    /// Returns `true` once [`release`](OwnedHandle::release) has run.
    fn is_released(&self) -> bool;

    /// Returns the value snapshot captured at construction, type-erased.
    ///
    /// O(1); never consults the live allocation, so the result is
    /// unaffected by later mutation of the owned memory.
    fn snapshot_any(&self) -> &dyn Any;

    /// Frees the owned allocation and marks the handle released.
    ///
    /// Must succeed at most once per handle: a second call fails with
    /// `InvalidHandle` instead of touching freed memory.
    fn release(&mut self) -> Result<()>;

    /// Returns this handle as a type-erased `Any`, enabling downcasts to
    /// the concrete record type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of [`as_any`](OwnedHandle::as_any).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_of_live_value() {
        let value = 17u64;
        let addr = SlotAddress::of(&value);
        assert!(addr.is_valid());
        assert_eq!(addr.as_usize(), std::ptr::from_ref(&value) as usize);
    }

    #[test]
    fn invalid_sentinel() {
        assert!(!SlotAddress::INVALID.is_valid());
        assert_eq!(SlotAddress::INVALID.as_usize(), 0);
    }

    #[test]
    fn ordering_follows_location() {
        let pair = [1u32, 2u32];
        let first = SlotAddress::of(&pair[0]);
        let second = SlotAddress::of(&pair[1]);
        assert!(first < second);
        assert_eq!(format!("{first:?}"), format!("SlotAddress({:#x})", first.as_usize()));
    }
}
