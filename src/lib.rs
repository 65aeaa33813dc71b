#![no_std]

//! Two **heap-allocated** sequence containers over a fixed scalar [`Element`],
//! `no_std` compatible.
//!
//! - [`DynamicArray`]: a contiguous, growable buffer. It doubles when an
//!   insertion finds it full and halves once a removal leaves it at most 30%
//!   occupied (see [`policy`]). Allocation failures are reported to the
//!   caller instead of aborting.
//! - [`DoublyLinkedList`]: a chain of individually allocated nodes, each owned
//!   by its predecessor and pointing back at it, walked from whichever end is
//!   closer to the requested index.
//!
//! Both expose the same positional API: `insert`, `remove`, `get`, `set`,
//! `push`, `pop` and `peek`. Out-of-bounds indices and reads from an empty
//! container are contract violations and panic.
//!
//! ```rust
//! use vec_llist::{DoublyLinkedList, DynamicArray};
//!
//! let mut v = DynamicArray::with_capacity(10).unwrap();
//! for i in 0..5 {
//!     v.insert(0, i * 2).unwrap();
//! }
//! v.insert(3, 42).unwrap();
//! assert_eq!(v, [8, 6, 4, 42, 2, 0]);
//! assert_eq!(v.pop(), Ok(0));
//!
//! let list: DoublyLinkedList = v.as_slice().into();
//! assert_eq!(list.to_string(), "[ 8 <-> 6 <-> 4 <-> 42 <-> 2 ]");
//! assert_eq!(list.position(42), Some(3));
//! ```

extern crate alloc;

mod error;
mod list;
pub mod policy;
mod vector;

pub use error::{InsertError, ReserveError, ShrinkError};
pub use list::DoublyLinkedList;
pub use vector::DynamicArray;

/// The scalar type held by both containers.
pub type Element = i32;
