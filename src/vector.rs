use alloc::alloc::{self as heap, Layout};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::size_of;
use core::ops::Index;
use core::ptr::{self, NonNull};

use log::{debug, warn};

use crate::Element;
use crate::error::{InsertError, ReserveError, ShrinkError};
use crate::policy::{capacity_is_valid, grown_capacity, shrunk_capacity};

/// A heap-allocated, growable array of [`Element`]s.
///
/// `DynamicArray` is similar to [`Vec`](alloc::vec::Vec), except:
/// - The capacity is chosen by the caller and is **never zero**.
/// - Growth and shrinking follow a fixed policy (see [`policy`](crate::policy)):
///   the buffer doubles when full and halves once occupancy falls to 30%.
/// - Allocation failures are **reported**, not aborted on: growing returns an
///   [`InsertError`], shrinking returns a [`ShrinkError`].
///
/// ```
/// use vec_llist::DynamicArray;
///
/// let mut v = DynamicArray::with_capacity(2).unwrap();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// assert!(v.is_full());
///
/// v.push(3).unwrap();
/// assert_eq!(v.capacity(), 4);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub struct DynamicArray {
    ptr: NonNull<Element>,
    len: usize,
    capacity: usize,
}

fn layout_for(capacity: usize) -> Result<Layout, ReserveError> {
    Layout::array::<Element>(capacity).map_err(|_| ReserveError::AllocFailed {
        size: capacity.saturating_mul(size_of::<Element>()),
    })
}

impl DynamicArray {
    /// Creates an empty array backed by exactly `capacity` slots.
    ///
    /// Returns [`ReserveError::AllocFailed`] if the buffer cannot be
    /// allocated; nothing is leaked in that case.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` fails [`capacity_is_valid`]. Check it first when
    /// the capacity comes from untrusted input.
    ///
    /// ```
    /// use vec_llist::DynamicArray;
    ///
    /// let v = DynamicArray::with_capacity(8).unwrap();
    /// assert_eq!(v.capacity(), 8);
    /// assert_eq!(v.len(), 0);
    /// assert!(v.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ReserveError> {
        assert!(
            capacity_is_valid(capacity),
            "Failed to create array because capacity was 0 or would overflow its byte size"
        );

        let layout = layout_for(capacity)?;

        // SAFETY: `layout` has a non-zero size, `capacity` and the element
        // size are both non-zero.
        let raw = unsafe { heap::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<Element>()).ok_or(ReserveError::AllocFailed {
            size: layout.size(),
        })?;

        Ok(Self {
            ptr,
            len: 0,
            capacity,
        })
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the array holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is in use.
    ///
    /// A full array still accepts insertions; the next one grows the buffer.
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or `index >= len`.
    pub fn get(&self, index: usize) -> Element {
        assert!(
            !self.is_empty(),
            "Failed to get element from array because it was empty"
        );
        assert!(
            index < self.len,
            "Failed to get element from array because index was out of bounds"
        );

        // SAFETY: `index < len`, so the slot is initialized.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty or `index >= len`.
    pub fn set(&mut self, index: usize, value: Element) {
        assert!(
            !self.is_empty(),
            "Failed to set element in array because it was empty"
        );
        assert!(
            index < self.len,
            "Failed to set element in array because index was out of bounds"
        );

        // SAFETY: `index < len <= capacity`.
        unsafe { self.ptr.as_ptr().add(index).write(value) }
    }

    /// Inserts `value` at `index`, shifting every element at or after `index`
    /// one slot toward the tail.
    ///
    /// If the array is full it first grows by
    /// [`GROWTH_FACTOR`](crate::policy::GROWTH_FACTOR). When growing fails
    /// the array is left untouched and `value` is returned inside the error.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use vec_llist::DynamicArray;
    ///
    /// let mut v = DynamicArray::with_capacity(3).unwrap();
    /// v.push(1).unwrap();
    /// v.push(3).unwrap();
    /// v.insert(1, 2).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: Element) -> Result<(), InsertError> {
        assert!(
            index <= self.len,
            "Failed to insert value into array because index was out of bounds"
        );

        if self.is_full() {
            self.grow().map_err(|source| InsertError { value, source })?;
        }

        let ptr = self.ptr.as_ptr();

        unsafe {
            // Shift elements starting from the index to the right
            ptr::copy(ptr.add(index), ptr.add(index + 1), self.len - index);

            // Write the new element at the specified index
            ptr.add(index).write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one slot toward the head, then releases excess capacity if
    /// occupancy dropped to the shrink threshold.
    ///
    /// The removal itself always happens. If the follow-up shrink fails, the
    /// returned [`ShrinkError`] carries the removed value and the array stays
    /// valid at its old capacity.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// ```
    /// use vec_llist::DynamicArray;
    ///
    /// let mut v = DynamicArray::with_capacity(3).unwrap();
    /// v.push(10).unwrap();
    /// v.push(20).unwrap();
    /// v.push(30).unwrap();
    /// assert_eq!(v.remove(1), Ok(20));
    /// assert_eq!(v.as_slice(), &[10, 30]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<Element, ShrinkError> {
        assert!(
            !self.is_empty(),
            "Failed to remove value from array because it was empty"
        );
        assert!(
            index < self.len,
            "Failed to remove value from array because index was out of bounds"
        );

        let ptr = self.ptr.as_ptr();

        // SAFETY: `index < len`, so the slot is initialized.
        let value = unsafe { ptr.add(index).read() };

        unsafe {
            // Shift elements to fill the gap
            ptr::copy(ptr.add(index + 1), ptr.add(index), self.len - index - 1);
        }

        self.len -= 1;

        match shrunk_capacity(self.len, self.capacity) {
            Some(new_capacity) => self
                .shrink(new_capacity)
                .map(|()| value)
                .map_err(|source| ShrinkError { value, source }),
            None => Ok(value),
        }
    }

    /// Appends `value`. Same as `insert(len, value)`.
    pub fn push(&mut self, value: Element) -> Result<(), InsertError> {
        self.insert(self.len, value)
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn peek(&self) -> Element {
        assert!(
            !self.is_empty(),
            "Failed to peek value from array because it was empty"
        );
        self.get(self.len - 1)
    }

    /// Removes the last element. Same as `remove(len - 1)`.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    ///
    /// ```
    /// use vec_llist::DynamicArray;
    ///
    /// let mut v = DynamicArray::with_capacity(4).unwrap();
    /// v.push(1).unwrap();
    /// v.push(2).unwrap();
    /// assert_eq!(v.pop(), Ok(2));
    /// assert_eq!(v.as_slice(), &[1]);
    /// ```
    pub fn pop(&mut self) -> Result<Element, ShrinkError> {
        assert!(
            !self.is_empty(),
            "Failed to pop value from array because it was empty"
        );
        self.remove(self.len - 1)
    }

    /// Returns a shared slice over the live elements.
    pub fn as_slice(&self) -> &[Element] {
        // SAFETY: the first `len` slots are initialized and `ptr` is valid
        // for `capacity >= len` elements.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns a mutable slice over the live elements.
    ///
    /// Writing through the slice never changes the length or the capacity.
    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        // SAFETY: see `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn grow(&mut self) -> Result<(), ReserveError> {
        let old_capacity = self.capacity;
        let new_capacity = grown_capacity(old_capacity).ok_or(ReserveError::CapacityOverflow {
            capacity: old_capacity,
        })?;

        self.reallocate(new_capacity).inspect_err(|err| {
            warn!("failed to grow array from {old_capacity} to {new_capacity} slots: {err}")
        })?;

        debug!("grew array from {old_capacity} to {new_capacity} slots");
        Ok(())
    }

    fn shrink(&mut self, new_capacity: usize) -> Result<(), ReserveError> {
        let old_capacity = self.capacity;

        self.reallocate(new_capacity).inspect_err(|err| {
            warn!("failed to shrink array from {old_capacity} to {new_capacity} slots: {err}")
        })?;

        debug!(
            "shrank array from {old_capacity} to {new_capacity} slots ({} in use)",
            self.len
        );
        Ok(())
    }

    /// Moves the buffer to `new_capacity` slots. On failure the old buffer
    /// is left in place, untouched.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), ReserveError> {
        debug_assert!(capacity_is_valid(new_capacity));
        debug_assert!(self.len <= new_capacity);

        let old_layout = layout_for(self.capacity)?;
        let new_layout = layout_for(new_capacity)?;

        // SAFETY: `ptr` was allocated by the global allocator with
        // `old_layout`, and `new_layout` is a valid non-zero layout with the
        // same alignment.
        let raw = unsafe { heap::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()) };
        self.ptr = NonNull::new(raw.cast::<Element>()).ok_or(ReserveError::AllocFailed {
            size: new_layout.size(),
        })?;

        self.capacity = new_capacity;
        Ok(())
    }
}

impl Drop for DynamicArray {
    fn drop(&mut self) {
        let layout = layout_for(self.capacity);
        debug_assert!(layout.is_ok());

        if let Ok(layout) = layout {
            // SAFETY: `ptr` was allocated with this very layout.
            unsafe { heap::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl Clone for DynamicArray {
    /// Clones into a buffer of the same capacity.
    ///
    /// Aborts through [`handle_alloc_error`](alloc::alloc::handle_alloc_error)
    /// if the allocation fails, like every other `Clone` in `alloc`.
    fn clone(&self) -> Self {
        let mut clone = match Self::with_capacity(self.capacity) {
            Ok(clone) => clone,
            Err(_) => match layout_for(self.capacity) {
                Ok(layout) => heap::handle_alloc_error(layout),
                Err(err) => panic!("Failed to clone array: {err}"),
            },
        };

        // SAFETY: both buffers hold at least `len` slots and do not overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), clone.ptr.as_ptr(), self.len);
        }
        clone.len = self.len;
        clone
    }
}

impl Index<usize> for DynamicArray {
    type Output = Element;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(
            index < self.len,
            "Failed to index into array because index was out of bounds"
        );

        // SAFETY: `index < len`, so the slot is initialized.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }
}

impl PartialEq for DynamicArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialEq<[Element]> for DynamicArray {
    fn eq(&self, other: &[Element]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[Element]> for DynamicArray {
    fn eq(&self, other: &&[Element]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<[Element; N]> for DynamicArray {
    fn eq(&self, other: &[Element; N]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<&[Element; N]> for DynamicArray {
    fn eq(&self, other: &&[Element; N]) -> bool {
        self.as_slice() == *other
    }
}

impl Eq for DynamicArray {}

impl Hash for DynamicArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Renders every slot, live values first and one `_` per unused slot:
/// `[ 8, 6, _, _ ]`.
impl fmt::Display for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (slot, value) in self.as_slice().iter().enumerate() {
            let sep = if slot == 0 { " " } else { ", " };
            write!(f, "{sep}{value}")?;
        }
        for slot in self.len..self.capacity {
            let sep = if slot == 0 { " " } else { ", " };
            write!(f, "{sep}_")?;
        }
        f.write_str(" ]")
    }
}
