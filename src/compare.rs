//! # Tree Comparison
//!
//! Structural and value equivalence of two BSTs, decided by comparing their
//! pre-order record sequences. This is a sequence-equality test rather than
//! a tree-isomorphism walk, and the reduction is exact here: for trees that
//! satisfy the BST invariant, the pre-order sequence uniquely determines the
//! shape, so equal sequences imply equal trees.

use eyre::Result;

use crate::tree::visit::Collector;
use crate::tree::Tree;

/// Reports whether `a` and `b` hold the same records in the same shape.
///
/// Empty vs empty is `true`; empty vs non-empty is `false` in either order.
/// Otherwise both trees are traversed independently in pre-order and the
/// two sequences must match in length and, at every index, in key and in
/// byte-wise value.
pub fn trees_equal(a: &Tree, b: &Tree) -> Result<bool> {
    if a.is_empty() || b.is_empty() {
        return Ok(a.is_empty() && b.is_empty());
    }

    let mut collect_a = Collector::new();
    a.traverse(&mut collect_a)?;
    let records_a = collect_a.into_records();

    let mut collect_b = Collector::new();
    b.traverse(&mut collect_b)?;
    let records_b = collect_b.into_records();

    if records_a.len() != records_b.len() {
        return Ok(false);
    }

    for (ra, rb) in records_a.iter().zip(records_b.iter()) {
        if ra.key != rb.key || ra.value != rb.value {
            return Ok(false);
        }
    }

    Ok(true)
}
