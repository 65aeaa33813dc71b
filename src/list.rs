use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

use log::trace;

use crate::Element;

/// Owning link: the node behind it is freed through this link and no other.
type Link = Option<NonNull<Node>>;

/// Lookup-only back-reference. Never used to free memory.
type BackRef = Option<NonNull<Node>>;

/// A heap node of the chain.
///
/// `Link` and `BackRef` are the same type, so the compiler does not tell the
/// owning direction from the borrowing one. Ownership is a convention kept by
/// this module: a node is freed only by `remove` and `clear`, through
/// `Box::from_raw`, once the `next` link (or `head`) that owned it no longer
/// refers to it. `previous` and `tail` are never passed to `Box::from_raw`.
struct Node {
    value: Element,
    next: Link,
    previous: BackRef,
}

impl Node {
    fn alloc(value: Element) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self {
            value,
            next: None,
            previous: None,
        })))
    }
}

/// Points `previous.next` at `next` and `next.previous` at `previous`.
/// Either side may be absent.
///
/// # Safety
/// Both pointers, when present, must refer to live nodes of the same list.
unsafe fn link(previous: BackRef, next: Link) {
    if let Some(mut previous) = previous {
        unsafe { previous.as_mut().next = next };
    }
    if let Some(mut next) = next {
        unsafe { next.as_mut().previous = previous };
    }
}

/// A doubly-linked list of [`Element`]s.
///
/// Every node is owned by its predecessor (the head by the list itself) and
/// keeps a non-owning reference back to it, so the chain can be walked from
/// either end. Positional lookups start from whichever end is closer.
///
/// ```
/// use vec_llist::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push(2);
/// list.push_front(0);
/// list.insert(1, 1);
///
/// assert_eq!(list.front(), Some(0));
/// assert_eq!(list.get(1), 1);
/// assert_eq!(list.back(), Some(2));
///
/// assert_eq!(list.remove(1), 1);
/// assert_eq!(list.pop(), 2);
/// assert_eq!(list.pop_front(), 0);
/// assert!(list.is_empty());
/// ```
pub struct DoublyLinkedList {
    head: Link,
    tail: BackRef,
    len: usize,
    _owns: PhantomData<Box<Node>>,
}

impl DoublyLinkedList {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Returns the number of elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<Element> {
        // SAFETY: `head`, when present, is a live node owned by `self`.
        self.head.map(|node| unsafe { node.as_ref().value })
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<Element> {
        // SAFETY: `tail`, when present, is a live node owned through the chain.
        self.tail.map(|node| unsafe { node.as_ref().value })
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```
    /// use vec_llist::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::from(&[1, 3][..]);
    /// list.insert(1, 2);
    /// list.insert(3, 4);
    /// list.insert(0, 0);
    /// assert_eq!(list, [0, 1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, value: Element) {
        assert!(
            index <= self.len,
            "Failed to insert value into linked list because index was out of bounds"
        );

        let node = Node::alloc(value);

        if self.head.is_none() {
            self.head = Some(node);
            self.tail = Some(node);
        } else if index == 0 {
            // SAFETY: `node` is fresh and `head` is live.
            unsafe { link(Some(node), self.head) };
            self.head = Some(node);
        } else if index == self.len {
            // SAFETY: `tail` is live and `node` is fresh.
            unsafe { link(self.tail, Some(node)) };
            self.tail = Some(node);
        } else {
            let Some(successor) = self.node_at(index) else {
                unreachable!("0 < index < len always resolves to a node");
            };

            // SAFETY: `successor` is live and, not being the head, has a live
            // predecessor; `node` is spliced in between the two.
            unsafe {
                link(successor.as_ref().previous, Some(node));
                link(Some(node), Some(successor));
            }
        }

        self.len += 1;
        trace!("linked {value} at index {index}, list now holds {}", self.len);
    }

    /// Unlinks and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Element {
        let Some(node) = self.node_at(index) else {
            panic!("Failed to remove value from linked list because index was out of bounds");
        };

        // SAFETY: `node` is live and is detached from its owner right below,
        // so reclaiming its box is the only release of this allocation.
        let Node {
            value,
            next,
            previous,
        } = *unsafe { Box::from_raw(node.as_ptr()) };

        // SAFETY: the neighbours, when present, are live nodes of this list.
        unsafe { link(previous, next) };

        if previous.is_none() {
            self.head = next;
        }
        if next.is_none() {
            self.tail = previous;
        }

        self.len -= 1;
        trace!("unlinked {value} from index {index}, list now holds {}", self.len);
        value
    }

    /// Appends `value` at the tail. Same as `insert(len, value)`.
    pub fn push(&mut self, value: Element) {
        self.insert(self.len, value);
    }

    /// Prepends `value` at the head. Same as `insert(0, value)`.
    pub fn push_front(&mut self, value: Element) {
        self.insert(0, value);
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn peek(&self) -> Element {
        match self.back() {
            Some(value) => value,
            None => panic!("Failed to peek value from linked list because it was empty"),
        }
    }

    /// Removes the last element. Same as `remove(len - 1)`.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop(&mut self) -> Element {
        assert!(
            !self.is_empty(),
            "Failed to pop value from linked list because it was empty"
        );
        self.remove(self.len - 1)
    }

    /// Removes the first element. Same as `remove(0)`.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn pop_front(&mut self) -> Element {
        assert!(
            !self.is_empty(),
            "Failed to pop value from linked list because it was empty"
        );
        self.remove(0)
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn get(&self, index: usize) -> Element {
        let Some(node) = self.node_at(index) else {
            panic!("Failed to get value from linked list because index was out of bounds");
        };

        // SAFETY: `node_at` only yields live nodes.
        unsafe { node.as_ref().value }
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: Element) {
        let Some(mut node) = self.node_at(index) else {
            panic!("Failed to set value in linked list because index was out of bounds");
        };

        // SAFETY: `node_at` only yields live nodes and `&mut self` rules out
        // any other access.
        unsafe { node.as_mut().value = value };
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();

        while let Some(node) = cursor {
            // SAFETY: `node` was reached through an owning link that has
            // already been dropped from the chain.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            cursor = node.next;
        }

        self.tail = None;
        self.len = 0;
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: Element) -> bool {
        self.values().any(|element| element == value)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// ```
    /// use vec_llist::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList = [7, 8, 7].into_iter().collect();
    /// assert_eq!(list.position(7), Some(0));
    /// assert_eq!(list.position(8), Some(1));
    /// assert_eq!(list.position(9), None);
    /// ```
    pub fn position(&self, value: Element) -> Option<usize> {
        self.values().position(|element| element == value)
    }

    /// Locates the node at `index`, walking from the head when it lies in
    /// the first half and from the tail otherwise.
    fn node_at(&self, index: usize) -> Option<NonNull<Node>> {
        if index >= self.len {
            return None;
        }

        // SAFETY: links and back-references reachable from `head` and `tail`
        // always point at live nodes of this list.
        unsafe {
            if index <= self.len / 2 {
                let mut node = self.head?;
                for _ in 0..index {
                    node = node.as_ref().next?;
                }
                Some(node)
            } else {
                let mut node = self.tail?;
                for _ in index + 1..self.len {
                    node = node.as_ref().previous?;
                }
                Some(node)
            }
        }
    }

    fn values(&self) -> Values<'_> {
        Values {
            next: self.head,
            remaining: self.len,
            _list: PhantomData,
        }
    }
}

/// Head-to-tail walk over the values, crate-private.
struct Values<'a> {
    next: Link,
    remaining: usize,
    _list: PhantomData<&'a DoublyLinkedList>,
}

impl Iterator for Values<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the borrowed list keeps every node alive for `'a`.
        let node = unsafe { self.next?.as_ref() };
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

impl Default for DoublyLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DoublyLinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for DoublyLinkedList {
    fn clone(&self) -> Self {
        self.values().collect()
    }
}

impl FromIterator<Element> for DoublyLinkedList {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<Element> for DoublyLinkedList {
    fn extend<I: IntoIterator<Item = Element>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value));
    }
}

impl From<&[Element]> for DoublyLinkedList {
    fn from(values: &[Element]) -> Self {
        values.iter().copied().collect()
    }
}

impl<const N: usize> From<[Element; N]> for DoublyLinkedList {
    fn from(values: [Element; N]) -> Self {
        values.into_iter().collect()
    }
}

impl PartialEq for DoublyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }

        self.len == other.len && self.values().eq(other.values())
    }
}

impl PartialEq<[Element]> for DoublyLinkedList {
    fn eq(&self, other: &[Element]) -> bool {
        self.len == other.len() && self.values().eq(other.iter().copied())
    }
}

impl PartialEq<&[Element]> for DoublyLinkedList {
    fn eq(&self, other: &&[Element]) -> bool {
        *self == **other
    }
}

impl<const N: usize> PartialEq<[Element; N]> for DoublyLinkedList {
    fn eq(&self, other: &[Element; N]) -> bool {
        *self == other[..]
    }
}

impl Eq for DoublyLinkedList {}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Renders the chain head to tail: `[ 1 <-> 2 <-> 3 ]`.
impl fmt::Display for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.values().enumerate() {
            let sep = if index == 0 { " " } else { " <-> " };
            write!(f, "{sep}{value}")?;
        }
        f.write_str(" ]")
    }
}
