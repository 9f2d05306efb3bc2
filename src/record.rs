//! # Record Type
//!
//! A `Record` is the atomic unit of data stored in the tree and in the
//! encoded stream: an `i64` key with an arbitrary-length text value.
//!
//! Keys are totally ordered and unique within a tree; inserting a record
//! whose key already exists is a silent no-op (see [`crate::tree::Tree`]).
//! Values carry no constraints beyond being valid UTF-8.

/// A key/value pair stored in the tree and in the encoded byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: i64,
    pub value: String,
}

impl Record {
    pub fn new(key: i64, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_with_same_key_and_value_are_equal() {
        assert_eq!(Record::new(7, "seven"), Record::new(7, "seven"));
    }

    #[test]
    fn records_differing_in_key_or_value_are_not_equal() {
        assert_ne!(Record::new(7, "seven"), Record::new(8, "seven"));
        assert_ne!(Record::new(7, "seven"), Record::new(7, "sept"));
    }
}
