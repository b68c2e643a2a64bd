//! calc-list - A singly-linked forward list.
//!
//! [`LinkedList`] owns its nodes through `Box` links, supports insertion and
//! removal at the front only, and is traversed front to back.

#![warn(missing_docs)]

pub mod linked_list;

pub use linked_list::{IntoIter, Iter, IterMut, LinkedList};
