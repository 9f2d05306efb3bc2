//! # Encoding Module
//!
//! Binary encoding of [`crate::record::Record`]s as self-delimiting frames:
//!
//! - **Frame codec**: fixed big-endian frame header plus raw value bytes,
//!   with streaming writer/reader adapters over `io::Write` / `io::Read`

pub mod frame;

pub use frame::{
    decode_record, encode_record, encoded_len, FrameReader, FrameWriter, FRAME_HEADER_SIZE,
};
