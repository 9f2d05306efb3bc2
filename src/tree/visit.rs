//! # Traversal Visitors
//!
//! The traversal driver in [`crate::tree::Tree::traverse`] is written once
//! against the [`RecordVisitor`] capability and is agnostic to which variant
//! it is handed. Three variants exist:
//!
//! - [`Collector`] appends every record to a sequence, capturing the full
//!   pre-order sequence for comparison or rebuilding.
//! - [`KeyPrinter`] writes each key to an `io::Write` sink.
//! - [`crate::encoding::FrameWriter`] encodes each record to a byte sink
//!   (lives with the codec).

use std::io::Write;

use eyre::{Result, WrapErr};

use crate::record::Record;

/// Consume one record, possibly fail. A returned error aborts the traversal
/// that invoked it.
pub trait RecordVisitor {
    fn visit(&mut self, record: &Record) -> Result<()>;
}

/// Accumulates visited records in pre-order.
#[derive(Debug, Default)]
pub struct Collector {
    records: Vec<Record>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl RecordVisitor for Collector {
    fn visit(&mut self, record: &Record) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// Writes one line per visited key to the wrapped sink.
#[derive(Debug)]
pub struct KeyPrinter<W: Write> {
    out: W,
}

impl<W: Write> KeyPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordVisitor for KeyPrinter<W> {
    fn visit(&mut self, record: &Record) -> Result<()> {
        writeln!(self.out, "{}", record.key).wrap_err("failed to print node key")
    }
}
