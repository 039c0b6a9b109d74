//! Image File Directory (IFD) structures
//!
//! An IFD is the list of tag entries describing one image in a TIFF file.
//! Small values live inside the entry itself; larger ones are stored
//! elsewhere in the file and the entry holds their offset.

use log::trace;

use crate::tiff::constants::{field_types, tags};

/// An Image File Directory
#[derive(Debug, Clone)]
pub struct IFD {
    /// Entries in this IFD, in file order
    pub entries: Vec<IFDEntry>,
    /// Offset to this IFD in the file
    pub offset: u64,
}

/// One tag entry of an IFD
#[derive(Debug, Clone)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u64,
    /// Value/offset field decoded as an offset in the file's byte order
    pub value_offset: u64,
    /// Raw bytes of the value/offset field (4 used for TIFF, 8 for BigTIFF)
    pub raw_value: [u8; 8],
}

impl IFDEntry {
    pub fn new(tag: u16, field_type: u16, count: u64, value_offset: u64, raw_value: [u8; 8]) -> Self {
        Self {
            tag,
            field_type,
            count,
            value_offset,
            raw_value,
        }
    }

    /// Size in bytes of one value of this entry's field type
    pub fn field_type_size(&self) -> Option<u64> {
        match self.field_type {
            field_types::BYTE | field_types::ASCII | field_types::SBYTE | field_types::UNDEFINED => Some(1),
            field_types::SHORT | field_types::SSHORT => Some(2),
            field_types::LONG | field_types::SLONG | field_types::FLOAT => Some(4),
            field_types::RATIONAL | field_types::SRATIONAL | field_types::DOUBLE => Some(8),
            field_types::LONG8 | field_types::SLONG8 | field_types::IFD8 => Some(8),
            _ => None,
        }
    }

    /// Total size of the entry's values in bytes, if the field type is known
    pub fn byte_len(&self) -> Option<u64> {
        self.field_type_size()?.checked_mul(self.count)
    }

    /// Whether the values fit in the entry's value/offset field
    pub fn is_value_inline(&self, is_big_tiff: bool) -> bool {
        let inline_size = if is_big_tiff { 8 } else { 4 };
        let inline = matches!(self.byte_len(), Some(len) if len <= inline_size);

        trace!("Tag {} ({}) stored {}", self.tag, tag_name(self.tag),
               if inline { "inline" } else { "at offset" });

        inline
    }
}

impl IFD {
    pub fn new(offset: u64) -> Self {
        Self {
            entries: Vec::new(),
            offset,
        }
    }

    pub fn add_entry(&mut self, entry: IFDEntry) {
        self.entries.push(entry);
    }

    /// Gets an entry by tag; the first occurrence wins
    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    pub fn has_tag(&self, tag: u16) -> bool {
        self.get_entry(tag).is_some()
    }
}

/// Human readable name for the tags this crate cares about
pub fn tag_name(tag: u16) -> &'static str {
    match tag {
        tags::IMAGE_WIDTH => "ImageWidth",
        tags::IMAGE_LENGTH => "ImageLength",
        tags::MODEL_PIXEL_SCALE_TAG => "ModelPixelScale",
        tags::MODEL_TIEPOINT_TAG => "ModelTiepoint",
        tags::MODEL_TRANSFORMATION_TAG => "ModelTransformation",
        _ => "Unknown",
    }
}
