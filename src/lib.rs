//! # treesnap - BST Snapshot Encoding
//!
//! treesnap builds an unbalanced binary search tree over integer-keyed text
//! records, serializes it to a byte stream in pre-order, and reconstructs an
//! equivalent tree from that stream, verifying structural and value
//! equivalence. The design priorities:
//!
//! - **Stack safety**: insertion, traversal, and teardown are iterative,
//!   driven by an explicit LIFO stack, so a 100k-node linear-chain tree
//!   never risks call-stack overflow
//! - **Byte-order-explicit format**: every multi-byte field in the stream
//!   is big-endian, so the format is portable across hosts
//! - **Propagated errors**: the library never terminates the process; every
//!   failure surfaces once, synchronously, as an `eyre::Result`
//!
//! ## Quick Start
//!
//! ```ignore
//! use treesnap::{Record, Tree, snapshot};
//!
//! let tree = Tree::from_records([
//!     Record::new(10, "ten"),
//!     Record::new(7, "seven"),
//!     Record::new(17, "seventeen"),
//! ]);
//!
//! snapshot::save_tree(&tree, path)?;
//! let restored = snapshot::load_tree(path)?;
//! assert!(treesnap::trees_equal(&tree, &restored)?);
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! records ──insert──> Tree ──pre-order traversal──> frame log (bytes)
//!                      ▲                                  │
//!                      └──insert──  records  <──decode────┘
//! ```
//!
//! The on-disk format is a flat concatenation of self-delimiting record
//! frames in the source tree's pre-order. Replaying that sequence through
//! plain insertion rebuilds a tree of identical shape, because a BST's
//! pre-order sequence reproduces every insertion decision.
//!
//! ## Module Overview
//!
//! - [`record`]: the key/value `Record` type
//! - [`stack`]: explicit LIFO over node handles
//! - [`tree`]: BST with iterative insert, visitor-driven pre-order
//!   traversal, and iterative `Drop`
//! - [`encoding`]: self-delimiting big-endian record frame codec
//! - [`compare`]: pre-order sequence equality of two trees
//! - [`snapshot`]: file-level save/load/verify
//!
//! ## Non-Goals
//!
//! No balancing, no concurrent access, no duplicate-key multi-value
//! handling (duplicates are silently dropped), no compression, versioning,
//! or checksums in the stream, and no query surface beyond full
//! reconstruction.

pub mod compare;
pub mod encoding;
pub mod record;
pub mod snapshot;
pub mod stack;
pub mod tree;

pub use compare::trees_equal;
pub use encoding::frame::{FrameReader, FrameWriter};
pub use record::Record;
pub use tree::visit::{Collector, KeyPrinter, RecordVisitor};
pub use tree::Tree;
