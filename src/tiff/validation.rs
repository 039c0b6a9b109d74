//! Bounds checks for offsets read from untrusted container bytes

use log::{debug, error};
use std::io::{Seek, SeekFrom};

use crate::error::{HeaderError, HeaderResult};
use crate::io::byte_order::ByteOrder;
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::header;

/// Rejects IFD offsets that point into the file header or past its end
pub fn validate_ifd_offset(offset: u64, file_size: u64, is_big_tiff: bool) -> HeaderResult<()> {
    let header_len = if is_big_tiff { header::BIG_TIFF_HEADER_LEN } else { header::TIFF_HEADER_LEN };
    if offset >= file_size || offset < header_len {
        return Err(HeaderError::DecodeFailure(format!(
            "invalid IFD offset {} (file size: {})",
            offset, file_size
        )));
    }

    Ok(())
}

/// Rejects value ranges that do not lie entirely inside the file
pub fn validate_value_range(offset: u64, len: u64, file_size: u64) -> HeaderResult<()> {
    match offset.checked_add(len) {
        Some(end) if end <= file_size => Ok(()),
        _ => Err(HeaderError::DecodeFailure(format!(
            "tag data at offset {} ({} bytes) lies outside the file ({} bytes)",
            offset, len, file_size
        ))),
    }
}

/// Size of the underlying source; the read position is left untouched
pub fn get_file_size(reader: &mut dyn SeekableReader) -> HeaderResult<u64> {
    let current_position = reader.stream_position()?;
    let size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;
    Ok(size)
}

/// Checks the two BigTIFF header words that follow the version number
pub fn validate_bigtiff_header(reader: &mut dyn SeekableReader, byte_order: ByteOrder) -> HeaderResult<()> {
    let offset_size = byte_order.read_u16(reader).map_err(truncated)?;
    let zeros = byte_order.read_u16(reader).map_err(truncated)?;

    debug!("BigTIFF offset size: {}, reserved: {}", offset_size, zeros);

    if offset_size != header::BIGTIFF_OFFSET_SIZE || zeros != 0 {
        error!("Invalid BigTIFF header: offset_size={}, zeros={}", offset_size, zeros);
        return Err(HeaderError::DecodeFailure("invalid BigTIFF header".to_string()));
    }

    Ok(())
}

/// Maps a short read inside the container to a decode failure
pub(crate) fn truncated(e: std::io::Error) -> HeaderError {
    HeaderError::DecodeFailure(format!("truncated TIFF data: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ifd_offset_inside_header() {
        assert!(validate_ifd_offset(8, 100, false).is_ok());
        assert!(validate_ifd_offset(4, 100, false).is_err());
        assert!(validate_ifd_offset(8, 100, true).is_err());
        assert!(validate_ifd_offset(16, 100, true).is_ok());
    }

    #[test]
    fn test_ifd_offset_past_end() {
        assert!(validate_ifd_offset(100, 100, false).is_err());
    }
}
