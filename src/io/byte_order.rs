//! Byte order handling for tagged-image containers
//!
//! A TIFF file declares its byte order in the first two bytes ("II" or
//! "MM"); every multi-byte value after that must be read with it.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Result;

use crate::io::seekable::SeekableReader;
use crate::tiff::constants::header;

/// Byte order of a TIFF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Maps the two marker bytes at the start of a file to a byte order
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match marker {
            header::LITTLE_ENDIAN_MARKER => Some(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MARKER => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    pub fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        match self {
            ByteOrder::LittleEndian => reader.read_u16::<LittleEndian>(),
            ByteOrder::BigEndian => reader.read_u16::<BigEndian>(),
        }
    }

    pub fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        match self {
            ByteOrder::LittleEndian => reader.read_u32::<LittleEndian>(),
            ByteOrder::BigEndian => reader.read_u32::<BigEndian>(),
        }
    }

    pub fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64> {
        match self {
            ByteOrder::LittleEndian => reader.read_u64::<LittleEndian>(),
            ByteOrder::BigEndian => reader.read_u64::<BigEndian>(),
        }
    }

    pub fn read_f32(&self, reader: &mut dyn SeekableReader) -> Result<f32> {
        match self {
            ByteOrder::LittleEndian => reader.read_f32::<LittleEndian>(),
            ByteOrder::BigEndian => reader.read_f32::<BigEndian>(),
        }
    }

    pub fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64> {
        match self {
            ByteOrder::LittleEndian => reader.read_f64::<LittleEndian>(),
            ByteOrder::BigEndian => reader.read_f64::<BigEndian>(),
        }
    }

    /// Reads an offset-sized unsigned value: 4 bytes for TIFF, 8 for BigTIFF
    pub fn read_offset(&self, reader: &mut dyn SeekableReader, is_big_tiff: bool) -> Result<u64> {
        if is_big_tiff {
            self.read_u64(reader)
        } else {
            self.read_u32(reader).map(u64::from)
        }
    }
}
