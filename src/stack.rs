//! # Node Stack
//!
//! A minimal LIFO container used to drive tree traversal and teardown
//! without recursion. Keeping the working set in an explicit stack bounds
//! memory to O(height) entries and makes the crate's algorithms independent
//! of call-stack depth, which matters for near-linear-chain trees with tens
//! of thousands of nodes.
//!
//! ## Contract
//!
//! - `push` appends, `pop` removes and returns the last-pushed entry.
//! - Calling `pop` on an empty stack is a programming error and panics.
//!   Callers must check `is_empty` first.
//! - Not safe for concurrent use without external synchronization.
//!
//! The backing store is a `SmallVec`: stacks up to [`STACK_INLINE_DEPTH`]
//! entries live inline with no heap allocation, and deeper stacks spill to
//! the heap transparently.

use smallvec::SmallVec;

/// Entries held inline before the stack spills to the heap. Covers every
/// reasonably balanced tree; a 100k-node linear chain spills and still works.
pub const STACK_INLINE_DEPTH: usize = 32;

/// LIFO stack over node handles (borrowed references during traversal,
/// owned boxes during teardown).
#[derive(Debug)]
pub struct NodeStack<T> {
    entries: SmallVec<[T; STACK_INLINE_DEPTH]>,
}

impl<T> NodeStack<T> {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Removes and returns the most recently pushed entry.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Check [`NodeStack::is_empty`] first.
    pub fn pop(&mut self) -> T {
        match self.entries.pop() {
            Some(entry) => entry,
            None => panic!("pop on empty NodeStack"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for NodeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
