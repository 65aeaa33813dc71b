//! Capacity tuning for [`DynamicArray`](crate::DynamicArray).
//!
//! The array doubles when an insertion finds it full and halves when, after a
//! removal, at most three tenths of its slots are occupied. Halving only ever
//! happens at 30% occupancy while a freshly grown array sits just above 50%,
//! so alternating pushes and pops around a boundary never make the buffer
//! bounce between two sizes.
//!
//! All arithmetic is integral and checked; no float rounding is involved.

use core::mem::size_of;

use crate::Element;

/// Multiplier applied to the capacity of a full array.
/// Its reciprocal is the shrink factor.
pub const GROWTH_FACTOR: usize = 2;

/// Numerator of the occupancy ratio at or below which the array shrinks.
pub const SHRINK_THRESHOLD_NUMERATOR: usize = 3;

/// Denominator of the occupancy ratio at or below which the array shrinks.
pub const SHRINK_THRESHOLD_DENOMINATOR: usize = 10;

/// An array is never shrunk to fewer slots than this.
pub const MIN_SHRINK_CAPACITY: usize = 4;

const _: () = assert!(GROWTH_FACTOR > 1);
const _: () = assert!(SHRINK_THRESHOLD_NUMERATOR * GROWTH_FACTOR < SHRINK_THRESHOLD_DENOMINATOR);
const _: () = assert!(MIN_SHRINK_CAPACITY >= 1);

/// Returns `true` if `capacity` is non-zero and `capacity` elements fit in a
/// byte count representable by `usize`.
///
/// ```
/// use vec_llist::policy::capacity_is_valid;
///
/// assert!(capacity_is_valid(1));
/// assert!(!capacity_is_valid(0));
/// assert!(!capacity_is_valid(usize::MAX));
/// ```
pub const fn capacity_is_valid(capacity: usize) -> bool {
    capacity > 0 && capacity <= usize::MAX / size_of::<Element>()
}

/// Capacity after one growth step, or `None` if it would overflow.
pub const fn grown_capacity(capacity: usize) -> Option<usize> {
    match capacity.checked_mul(GROWTH_FACTOR) {
        Some(grown) if capacity_is_valid(grown) => Some(grown),
        _ => None,
    }
}

/// `floor(capacity * 3 / 10)`, computed without intermediate overflow.
pub const fn shrink_threshold(capacity: usize) -> usize {
    let quotient = capacity / SHRINK_THRESHOLD_DENOMINATOR;
    let remainder = capacity % SHRINK_THRESHOLD_DENOMINATOR;
    quotient * SHRINK_THRESHOLD_NUMERATOR
        + remainder * SHRINK_THRESHOLD_NUMERATOR / SHRINK_THRESHOLD_DENOMINATOR
}

/// Capacity the array should shrink to when holding `len` elements in
/// `capacity` slots, or `None` if it should keep its buffer.
///
/// ```
/// use vec_llist::policy::shrunk_capacity;
///
/// assert_eq!(shrunk_capacity(29, 100), Some(50));
/// assert_eq!(shrunk_capacity(31, 100), None);
/// assert_eq!(shrunk_capacity(0, 7), None); // would go below 4 slots
/// ```
pub const fn shrunk_capacity(len: usize, capacity: usize) -> Option<usize> {
    let shrunk = capacity / GROWTH_FACTOR;
    if len <= shrink_threshold(capacity) && shrunk >= MIN_SHRINK_CAPACITY {
        Some(shrunk)
    } else {
        None
    }
}
