//! Tests for the byte order module

use std::io::Cursor;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use crate::io::byte_order::ByteOrder;

#[test]
fn test_marker_detection() {
    assert_eq!(ByteOrder::from_marker(*b"II"), Some(ByteOrder::LittleEndian));
    assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::BigEndian));
    assert_eq!(ByteOrder::from_marker([0x12, 0x34]), None);
}

#[test]
fn test_little_endian_reads() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_f64::<LittleEndian>(-9999.5).unwrap();
    let mut cursor = Cursor::new(buffer);

    let order = ByteOrder::LittleEndian;
    assert_eq!(order.read_u16(&mut cursor).unwrap(), 0x1234);
    assert_eq!(order.read_u32(&mut cursor).unwrap(), 0x12345678);
    assert_eq!(order.read_f64(&mut cursor).unwrap(), -9999.5);
}

#[test]
fn test_big_endian_offsets() {
    let mut buffer = Vec::new();
    buffer.write_u32::<BigEndian>(0x0102_0304).unwrap();
    buffer.write_u64::<BigEndian>(0x1234_5678_90AB_CDEF).unwrap();
    let mut cursor = Cursor::new(buffer);

    let order = ByteOrder::BigEndian;
    assert_eq!(order.read_offset(&mut cursor, false).unwrap(), 0x0102_0304);
    assert_eq!(order.read_offset(&mut cursor, true).unwrap(), 0x1234_5678_90AB_CDEF);
}
