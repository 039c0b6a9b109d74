//! Seekable reader trait

use std::io::{Read, Seek};

/// Anything the container decoder can read from and jump around in
pub trait SeekableReader: Read + Seek {}

impl<T: Read + Seek> SeekableReader for T {}
