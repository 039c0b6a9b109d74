//! Shared helpers for integration tests

use byteorder::{LittleEndian, WriteBytesExt};

pub const IMAGE_WIDTH: u16 = 256;
pub const IMAGE_LENGTH: u16 = 257;
pub const MODEL_PIXEL_SCALE: u16 = 33550;
pub const MODEL_TIEPOINT: u16 = 33922;
pub const MODEL_TRANSFORMATION: u16 = 34264;

/// Little-endian classic TIFF with one IFD holding dimensions and DOUBLE tags
pub fn geotiff_bytes(width: u32, height: u32, doubles: &[(u16, &[f64])]) -> Vec<u8> {
    let entry_count = 2 + doubles.len() as u32;
    let data_offset = 8 + 2 + 12 * entry_count + 4;

    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"II");
    buffer.write_u16::<LittleEndian>(42).unwrap();
    buffer.write_u32::<LittleEndian>(8).unwrap();
    buffer.write_u16::<LittleEndian>(entry_count as u16).unwrap();

    for (tag, value) in [(IMAGE_WIDTH, width), (IMAGE_LENGTH, height)] {
        buffer.write_u16::<LittleEndian>(tag).unwrap();
        buffer.write_u16::<LittleEndian>(4).unwrap(); // LONG
        buffer.write_u32::<LittleEndian>(1).unwrap();
        buffer.write_u32::<LittleEndian>(value).unwrap();
    }

    let mut data = Vec::new();
    for (tag, values) in doubles {
        buffer.write_u16::<LittleEndian>(*tag).unwrap();
        buffer.write_u16::<LittleEndian>(12).unwrap(); // DOUBLE
        buffer.write_u32::<LittleEndian>(values.len() as u32).unwrap();
        buffer.write_u32::<LittleEndian>(data_offset + data.len() as u32).unwrap();
        for value in values.iter() {
            data.write_f64::<LittleEndian>(*value).unwrap();
        }
    }

    buffer.write_u32::<LittleEndian>(0).unwrap();
    buffer.extend_from_slice(&data);
    buffer
}

/// Transformation matrix with only the terms the resolver reads set
pub fn matrix(x_scale: f64, x_translation: f64, y_scale: f64, y_translation: f64) -> [f64; 16] {
    let mut m = [0.0; 16];
    m[0] = x_scale;
    m[3] = x_translation;
    m[5] = y_scale;
    m[7] = y_translation;
    m[10] = 1.0;
    m[15] = 1.0;
    m
}
