//! Shrink failures under a global allocator that can refuse to shrink.
//!
//! `remove` still removes when the follow-up shrink fails: the value comes
//! back inside the error and the buffer keeps its old capacity.
//!
//! This binary holds a single test so no other test reallocates while
//! shrinking is refused.

use std::alloc::{GlobalAlloc, Layout, System};
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use vec_llist::{DynamicArray, ReserveError, ShrinkError};

struct NoShrink {
    refuse: AtomicBool,
}

unsafe impl GlobalAlloc for NoShrink {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if new_size < layout.size() && self.refuse.load(Ordering::SeqCst) {
            return ptr::null_mut();
        }
        unsafe { System.realloc(ptr, layout, new_size) }
    }
}

#[global_allocator]
static ALLOCATOR: NoShrink = NoShrink {
    refuse: AtomicBool::new(false),
};

#[test]
fn test_failed_shrink_still_removes() {
    let mut vec = DynamicArray::with_capacity(100).unwrap();
    for value in 0..30 {
        vec.push(value).unwrap();
    }

    ALLOCATOR.refuse.store(true, Ordering::SeqCst);
    let removed = vec.pop();
    ALLOCATOR.refuse.store(false, Ordering::SeqCst);

    assert_eq!(
        removed,
        Err(ShrinkError {
            value: 29,
            source: ReserveError::AllocFailed { size: 200 },
        }),
        "Failed shrink must hand back the removed value"
    );
    assert_eq!(vec.len(), 29, "Failed shrink must still remove the element");
    assert_eq!(vec.capacity(), 100, "Failed shrink must keep the old capacity");
    assert!(
        (0..29).eq(vec.as_slice().iter().copied()),
        "Failed shrink must not touch the remaining elements"
    );

    assert_eq!(vec.pop(), Ok(28));
    assert_eq!(vec.capacity(), 50, "Shrink must succeed once the allocator allows it");
    assert!((0..28).eq(vec.as_slice().iter().copied()));
}
