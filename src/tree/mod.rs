//! # Binary Search Tree
//!
//! An unbalanced, non-complete BST over [`Record`]s. Shape is
//! insertion-order-dependent: there is no rebalancing, so sequentially
//! increasing keys degenerate into a linear chain. Every algorithm here is
//! deliberately iterative so that chain-shaped trees with 100k+ nodes never
//! touch call-stack depth:
//!
//! - Insertion walks a single root-to-leaf path with loop variables only.
//! - Pre-order traversal uses an explicit [`NodeStack`] of borrowed nodes.
//! - Teardown (`Drop`) uses an explicit [`NodeStack`] of owned boxes, since
//!   the default recursive drop of a `Box` chain would overflow exactly the
//!   trees this crate is built to handle.
//!
//! ## Ownership
//!
//! A parent exclusively owns its children (`Option<Box<Node>>`); there are
//! no parent back-pointers, no sharing, no cycles. All algorithms are
//! top-down, so child-only links suffice. Nodes are created at insertion
//! and never mutated afterwards except to attach a child link.
//!
//! ## Invariants
//!
//! - For every node, all left-descendant keys are strictly less than the
//!   node's key and all right-descendant keys strictly greater.
//! - No two nodes share a key; a duplicate insert is a silent no-op.
//!
//! ## Thread Safety
//!
//! `Tree` is not thread-safe. Exactly one logical owner drives insertion,
//! traversal, and comparison at a time; there is no internal locking.

pub mod visit;

use std::cmp::Ordering;

use eyre::Result;

use crate::record::Record;
use crate::stack::NodeStack;
use visit::RecordVisitor;

#[derive(Debug)]
pub struct Node {
    record: Record,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }
}

/// An owning BST root. `Tree::default()` is the empty tree.
#[derive(Debug, Default)]
pub struct Tree {
    root: Option<Box<Node>>,
}

impl Tree {
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by folding [`Tree::insert`] over `records` in order.
    /// Duplicate keys after the first are dropped.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut tree = Self::new();
        for record in records {
            tree.insert(record);
        }
        tree
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Inserts `record`, returning `true` if it was added and `false` if a
    /// record with the same key already exists (the new record is dropped).
    ///
    /// Iterative single-path descent: insertion only ever walks one
    /// root-to-leaf path, so loop variables suffice and no auxiliary stack
    /// is needed.
    pub fn insert(&mut self, record: Record) -> bool {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(Node::new(record)));
                    return true;
                }
                Some(node) => match record.key.cmp(&node.record.key) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return false,
                },
            }
        }
    }

    /// Visits every record in pre-order (node, left subtree, right subtree)
    /// using an explicit stack.
    ///
    /// Pushing the right child before the left makes the left child pop
    /// first, which is what preserves pre-order with a LIFO stack. An empty
    /// tree is a no-op. The first visitor error aborts the traversal and
    /// propagates to the caller; records visited before the failure stay
    /// visited (no rollback).
    pub fn traverse(&self, visitor: &mut impl RecordVisitor) -> Result<()> {
        let root = match &self.root {
            Some(root) => root,
            None => return Ok(()),
        };

        let mut stack: NodeStack<&Node> = NodeStack::new();
        stack.push(root);

        while !stack.is_empty() {
            let node = stack.pop();
            visitor.visit(&node.record)?;

            if let Some(right) = &node.right {
                stack.push(right);
            }
            if let Some(left) = &node.left {
                stack.push(left);
            }
        }

        Ok(())
    }
}

impl Drop for Tree {
    /// Iterative teardown. Letting `Box<Node>` drop recursively would
    /// overflow the call stack on chain-shaped trees, so children are
    /// detached onto an explicit stack and each node dropped childless.
    fn drop(&mut self) {
        let mut stack: NodeStack<Box<Node>> = NodeStack::new();
        if let Some(root) = self.root.take() {
            stack.push(root);
        }

        while !stack.is_empty() {
            let mut node = stack.pop();
            if let Some(left) = node.left.take() {
                stack.push(left);
            }
            if let Some(right) = node.right.take() {
                stack.push(right);
            }
        }
    }
}
