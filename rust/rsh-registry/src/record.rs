//! Typed owning record: one heap allocation paired with a value snapshot.

use std::any::Any;

use rsh_common::{Result, error::Error};

use crate::element::Element;
use crate::handle::{OwnedHandle, SlotAddress};

/// A concrete [`OwnedHandle`] bound to one heap allocation of `T`.
///
/// The record owns the allocation exclusively and carries a `snapshot` of
/// `T` captured at construction. The two are deliberately NOT kept in sync:
/// the snapshot is a point-in-time copy, and mutation of the live
/// allocation through [`pointee_mut`](Record::pointee_mut) silently
/// diverges from it.
///
/// # Examples
///
/// ```
/// use rsh_registry::Record;
/// use rsh_registry::handle::OwnedHandle;
///
/// let mut record = Record::new(Box::new(42i32), 42);
/// assert_eq!(record.snapshot(), 42);
/// assert!(record.base().is_valid());
///
/// record.release().unwrap();
/// assert!(!record.base().is_valid());
/// assert!(record.release().is_err());
/// ```
#[derive(Debug)]
pub struct Record<T: Element> {
    slot: Option<Box<T>>,
    snapshot: T,
}

impl<T: Element> Record<T> {
    /// Binds a caller-supplied heap allocation and an independently supplied
    /// value.
    ///
    /// Ownership of `slot` transfers into the record. `value` is not
    /// required to equal `*slot`, and no later re-synchronization occurs.
    pub fn new(slot: Box<T>, value: T) -> Record<T> {
        Record {
            slot: Some(slot),
            snapshot: value,
        }
    }

    /// Returns the cached value snapshot.
    #[inline]
    pub fn snapshot(&self) -> T {
        self.snapshot
    }

    /// Returns the owned address, or [`SlotAddress::INVALID`] after release.
    #[inline]
    pub fn base(&self) -> SlotAddress {
        self.slot
            .as_deref()
            .map_or(SlotAddress::INVALID, SlotAddress::of)
    }

    /// Returns a view of the live allocation, or `None` after release.
    #[inline]
    pub fn pointee(&self) -> Option<&T> {
        self.slot.as_deref()
    }

    /// Returns a mutable view of the live allocation, or `None` after
    /// release. Mutation through this view does not update the snapshot.
    #[inline]
    pub fn pointee_mut(&mut self) -> Option<&mut T> {
        self.slot.as_deref_mut()
    }
}

impl<T: Element> OwnedHandle for Record<T> {
    fn address(&self) -> SlotAddress {
        self.base()
    }

    fn is_released(&self) -> bool {
        self.slot.is_none()
    }

    fn snapshot_any(&self) -> &dyn Any {
        &self.snapshot
    }

    fn release(&mut self) -> Result<()> {
        match self.slot.take() {
            Some(slot) => {
                drop(slot);
                Ok(())
            }
            None => Err(Error::invalid_handle("record already released")),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_binds_slot_and_value() {
        let record = Record::new(Box::new(7i64), 7);
        assert_eq!(record.snapshot(), 7);
        assert_eq!(record.pointee(), Some(&7));
        assert!(record.base().is_valid());
        assert!(!record.is_released());
    }

    #[test]
    fn snapshot_and_slot_may_disagree() {
        let record = Record::new(Box::new(1u8), 200);
        assert_eq!(record.snapshot(), 200);
        assert_eq!(record.pointee(), Some(&1));
    }

    #[test]
    fn snapshot_survives_pointee_mutation() {
        let mut record = Record::new(Box::new(3.5f64), 3.5);
        *record.pointee_mut().unwrap() = -1.0;
        assert_eq!(record.snapshot(), 3.5);
        assert_eq!(record.pointee(), Some(&-1.0));
    }

    #[test]
    fn address_is_stable_until_release() {
        let mut record = Record::new(Box::new(11u32), 11);
        let before = record.base();
        *record.pointee_mut().unwrap() = 12;
        assert_eq!(record.base(), before);
        assert_eq!(record.address(), before);

        record.release().unwrap();
        assert_eq!(record.base(), SlotAddress::INVALID);
        assert_eq!(record.address(), SlotAddress::INVALID);
        assert!(record.pointee().is_none());
    }

    #[test]
    fn double_release_is_rejected() {
        let mut record = Record::new(Box::new('x'), 'x');
        record.release().unwrap();

        let err = record.release().unwrap_err();
        assert!(matches!(
            err.kind(),
            rsh_common::error::ErrorKind::InvalidHandle { .. }
        ));
        // The snapshot stays readable even after release.
        assert_eq!(record.snapshot(), 'x');
    }

    #[test]
    fn erased_snapshot_downcasts_to_element_type() {
        let record = Record::new(Box::new(9i16), 9);
        let erased: &dyn OwnedHandle = &record;
        assert_eq!(erased.snapshot_any().downcast_ref::<i16>(), Some(&9));
        assert!(erased.snapshot_any().downcast_ref::<i32>().is_none());
        assert!(erased.as_any().downcast_ref::<Record<i16>>().is_some());
    }
}
