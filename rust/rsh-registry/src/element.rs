//! The element bound satisfied by every type a record may wrap.

use std::any::Any;
use std::fmt;

/// Types that can be wrapped by a [`Record`](crate::record::Record).
///
/// An element must be copyable (the record captures a value snapshot at
/// construction) and independently heap-allocatable. The registry is
/// agnostic to what elements are beyond these requirements: the fixed-width
/// integer and float families, `bool`, `char` and any other plain `Copy`
/// data all qualify through the blanket impl.
pub trait Element: Any + Copy + fmt::Debug + 'static {}

impl<T> Element for T where T: Any + Copy + fmt::Debug + 'static {}
