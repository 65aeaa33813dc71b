//! Recoverable failures.
//!
//! Out-of-bounds indices and accesses on empty containers are contract
//! violations and panic; only resource exhaustion surfaces as a value.

use thiserror::Error;

use crate::Element;

/// Failure to (re)allocate the backing buffer of a
/// [`DynamicArray`](crate::DynamicArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    /// Growing past `capacity` slots would overflow the byte size.
    #[error("capacity overflow: cannot grow beyond {capacity} slots")]
    CapacityOverflow { capacity: usize },

    /// The allocator refused the request.
    #[error("allocation of {size} bytes failed")]
    AllocFailed { size: usize },
}

/// An insertion that needed to grow the array and could not.
///
/// The array is left exactly as it was; the rejected value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to insert {value}: {source}")]
pub struct InsertError {
    pub value: Element,
    #[source]
    pub source: ReserveError,
}

impl InsertError {
    /// Returns the value that was not inserted.
    pub const fn into_value(self) -> Element {
        self.value
    }
}

/// A removal whose follow-up shrink failed.
///
/// The element *was* removed and the length decremented; only the capacity
/// stayed larger than the policy wanted. The removed value travels with the
/// error so it is never lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("removed {value} but failed to release excess capacity: {source}")]
pub struct ShrinkError {
    pub value: Element,
    #[source]
    pub source: ReserveError,
}

impl ShrinkError {
    /// Returns the removed value.
    pub const fn into_value(self) -> Element {
        self.value
    }
}
