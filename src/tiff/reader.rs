//! TIFF/BigTIFF header reader
//!
//! Reads just enough of a tagged-image container to georeference it:
//! the file header, the first IFD, the image dimensions and the three
//! GeoTIFF model tags. Pixel data is never touched.

use log::{debug, info, warn};
use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::error::{HeaderError, HeaderResult};
use crate::georeference::TagDictionary;
use crate::io::byte_order::ByteOrder;
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::{field_types, header, tags};
use crate::tiff::ifd::{tag_name, IFDEntry, IFD};
use crate::tiff::types::DecodedImage;
use crate::tiff::validation::{self, truncated};

/// Upper bound on IFD entries, well above any real file
const MAX_IFD_ENTRIES: u64 = 4096;

/// Reader for TIFF and BigTIFF containers
#[derive(Debug, Default)]
pub struct TiffReader {
    /// Byte order, known once the header has been read
    byte_order: Option<ByteOrder>,
    /// Whether the container is a BigTIFF
    is_big_tiff: bool,
}

impl TiffReader {
    pub fn new() -> Self {
        TiffReader::default()
    }

    pub fn is_big_tiff(&self) -> bool {
        self.is_big_tiff
    }

    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    fn byte_order_or_err(&self) -> HeaderResult<ByteOrder> {
        self.byte_order
            .ok_or_else(|| HeaderError::DecodeFailure("byte order not yet determined".to_string()))
    }

    /// Decodes dimensions and georeferencing tags from container bytes
    ///
    /// # Arguments
    /// * `bytes` - Complete TIFF or BigTIFF file contents
    ///
    /// # Returns
    /// The decoded image, or `DecodeFailure` for malformed containers
    pub fn decode(&mut self, bytes: &[u8]) -> HeaderResult<DecodedImage> {
        let mut cursor = Cursor::new(bytes);
        let ifd = self.read(&mut cursor)?;

        let (columns, rows) = self.read_dimensions(&mut cursor, &ifd)?;
        let tags = self.read_tag_dictionary(&mut cursor, &ifd)?;

        info!("Decoded {} container: {}x{}", if self.is_big_tiff { "BigTIFF" } else { "TIFF" }, columns, rows);

        Ok(DecodedImage {
            columns,
            rows,
            tags,
            is_big_tiff: self.is_big_tiff,
        })
    }

    /// Reads the file header and returns the first IFD
    ///
    /// 1. Detect byte order (little/big endian)
    /// 2. Check for TIFF or BigTIFF format
    /// 3. Read the first IFD
    pub fn read(&mut self, reader: &mut dyn SeekableReader) -> HeaderResult<IFD> {
        debug!("TiffReader::read starting");
        reader.seek(SeekFrom::Start(0))?;

        let mut marker = [0u8; 2];
        reader.read_exact(&mut marker).map_err(truncated)?;
        let byte_order = ByteOrder::from_marker(marker).ok_or_else(|| {
            HeaderError::DecodeFailure(format!("invalid byte order marker: {:02x?}", marker))
        })?;
        debug!("Detected byte order: {}", byte_order.name());
        self.byte_order = Some(byte_order);

        let version = byte_order.read_u16(reader).map_err(truncated)?;
        self.is_big_tiff = match version {
            header::BIG_TIFF_VERSION => {
                validation::validate_bigtiff_header(reader, byte_order)?;
                true
            }
            header::TIFF_VERSION => false,
            _ => return Err(HeaderError::DecodeFailure(format!("unsupported TIFF version: {}", version))),
        };
        debug!("TIFF version {} ({})", version, if self.is_big_tiff { "BigTIFF" } else { "TIFF" });

        let first_ifd_offset = byte_order.read_offset(reader, self.is_big_tiff).map_err(truncated)?;
        let file_size = validation::get_file_size(reader)?;
        validation::validate_ifd_offset(first_ifd_offset, file_size, self.is_big_tiff)?;

        self.read_ifd(reader, first_ifd_offset)
    }

    /// Reads the IFD starting at `offset`
    ///
    /// # Arguments
    /// * `reader` - Source positioned anywhere; it is seeked to `offset`
    /// * `offset` - Byte offset of the IFD's entry count
    ///
    /// # Returns
    /// The IFD with all of its entries
    pub fn read_ifd(&self, reader: &mut dyn SeekableReader, offset: u64) -> HeaderResult<IFD> {
        let byte_order = self.byte_order_or_err()?;
        reader.seek(SeekFrom::Start(offset))?;

        let entry_count = if self.is_big_tiff {
            byte_order.read_u64(reader).map_err(truncated)?
        } else {
            byte_order.read_u16(reader).map(u64::from).map_err(truncated)?
        };
        debug!("IFD entry count: {}", entry_count);

        if entry_count > MAX_IFD_ENTRIES {
            return Err(HeaderError::DecodeFailure(format!("implausible IFD entry count: {}", entry_count)));
        }

        let mut ifd = IFD::new(offset);
        for _ in 0..entry_count {
            let entry = self.read_ifd_entry(reader, byte_order)?;
            debug!("IFD entry: tag={} ({}), type={}, count={}, offset={}",
                   entry.tag, tag_name(entry.tag), entry.field_type, entry.count, entry.value_offset);
            ifd.add_entry(entry);
        }

        Ok(ifd)
    }

    fn read_ifd_entry(&self, reader: &mut dyn SeekableReader, byte_order: ByteOrder) -> HeaderResult<IFDEntry> {
        let tag = byte_order.read_u16(reader).map_err(truncated)?;
        let field_type = byte_order.read_u16(reader).map_err(truncated)?;
        let count = byte_order.read_offset(reader, self.is_big_tiff).map_err(truncated)?;

        let field_len = if self.is_big_tiff { 8 } else { 4 };
        let mut raw_value = [0u8; 8];
        reader.read_exact(&mut raw_value[..field_len]).map_err(truncated)?;

        let value_offset = byte_order
            .read_offset(&mut Cursor::new(&raw_value[..field_len]), self.is_big_tiff)
            .map_err(truncated)?;

        Ok(IFDEntry::new(tag, field_type, count, value_offset, raw_value))
    }

    /// Reads the raw bytes of an entry's values
    ///
    /// Inline values come from the entry's own value field; offset values
    /// are bounds-checked against the source size before reading.
    fn read_value_bytes(&self, reader: &mut dyn SeekableReader, entry: &IFDEntry) -> HeaderResult<Vec<u8>> {
        let len = entry.byte_len().ok_or_else(|| {
            HeaderError::DecodeFailure(format!("unsupported field type {} for tag {}", entry.field_type, entry.tag))
        })?;

        if entry.is_value_inline(self.is_big_tiff) {
            return Ok(entry.raw_value[..len as usize].to_vec());
        }

        let file_size = validation::get_file_size(reader)?;
        validation::validate_value_range(entry.value_offset, len, file_size)?;
        reader.seek(SeekFrom::Start(entry.value_offset))?;

        let mut buffer = vec![0u8; len as usize];
        reader.read_exact(&mut buffer).map_err(truncated)?;
        Ok(buffer)
    }

    /// Reads a single unsigned integer tag (SHORT, LONG or LONG8)
    pub fn read_unsigned(&self, reader: &mut dyn SeekableReader, ifd: &IFD, tag: u16) -> HeaderResult<Option<u64>> {
        let byte_order = self.byte_order_or_err()?;
        let entry = match ifd.get_entry(tag) {
            Some(entry) => entry,
            None => return Ok(None),
        };
        if entry.count == 0 {
            return Ok(None);
        }

        let mut values = Cursor::new(self.read_value_bytes(reader, entry)?);
        let value = match entry.field_type {
            field_types::SHORT => byte_order.read_u16(&mut values).map(u64::from),
            field_types::LONG => byte_order.read_u32(&mut values).map(u64::from),
            field_types::LONG8 => byte_order.read_u64(&mut values),
            other => {
                return Err(HeaderError::DecodeFailure(format!(
                    "unsupported field type {} for tag {} ({})",
                    other, tag, tag_name(tag)
                )))
            }
        };

        value.map(Some).map_err(truncated)
    }

    /// Reads a floating point array tag (DOUBLE, or FLOAT widened to f64)
    ///
    /// # Arguments
    /// * `reader` - Container source
    /// * `ifd` - Directory holding the tag
    /// * `tag` - Tag number to read
    ///
    /// # Returns
    /// The tag's values, or None when the tag is absent
    pub fn read_doubles(&self, reader: &mut dyn SeekableReader, ifd: &IFD, tag: u16) -> HeaderResult<Option<Vec<f64>>> {
        let byte_order = self.byte_order_or_err()?;
        let entry = match ifd.get_entry(tag) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        if entry.field_type != field_types::DOUBLE && entry.field_type != field_types::FLOAT {
            return Err(HeaderError::DecodeFailure(format!(
                "unsupported field type {} for tag {} ({})",
                entry.field_type, tag, tag_name(tag)
            )));
        }

        let mut source = Cursor::new(self.read_value_bytes(reader, entry)?);
        let mut values = Vec::with_capacity(entry.count.min(64) as usize);
        for _ in 0..entry.count {
            let value = if entry.field_type == field_types::DOUBLE {
                byte_order.read_f64(&mut source)
            } else {
                byte_order.read_f32(&mut source).map(f64::from)
            };
            values.push(value.map_err(truncated)?);
        }

        Ok(Some(values))
    }

    /// Reads image width and height from the IFD
    pub fn read_dimensions(&self, reader: &mut dyn SeekableReader, ifd: &IFD) -> HeaderResult<(u64, u64)> {
        let width = self.read_unsigned(reader, ifd, tags::IMAGE_WIDTH)?;
        let height = self.read_unsigned(reader, ifd, tags::IMAGE_LENGTH)?;

        match (width, height) {
            (Some(width), Some(height)) => {
                debug!("Image dimensions: {}x{}", width, height);
                Ok((width, height))
            }
            _ => Err(HeaderError::DecodeFailure("image dimensions not found".to_string())),
        }
    }

    /// Collects the GeoTIFF model tags into a tag dictionary
    pub fn read_tag_dictionary(&self, reader: &mut dyn SeekableReader, ifd: &IFD) -> HeaderResult<TagDictionary> {
        let tie_point = self.read_doubles(reader, ifd, tags::MODEL_TIEPOINT_TAG)?;
        let pixel_scale = self.read_doubles(reader, ifd, tags::MODEL_PIXEL_SCALE_TAG)?;
        let transformation_matrix = self.read_doubles(reader, ifd, tags::MODEL_TRANSFORMATION_TAG)?;

        if tie_point.is_none() && pixel_scale.is_none() && transformation_matrix.is_none() {
            warn!("No GeoTIFF model tags in first IFD");
        }

        Ok(TagDictionary {
            tie_point,
            pixel_scale,
            transformation_matrix,
        })
    }
}

/// Decodes a tagged-image container held in memory
pub fn decode_tagged_image(bytes: &[u8]) -> HeaderResult<DecodedImage> {
    TiffReader::new().decode(bytes)
}
