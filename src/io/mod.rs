//! I/O helpers for reading tagged-image containers
//!
//! Readers here work on any seekable source; header extraction always
//! feeds them an in-memory `Cursor` over the uploaded bytes.

pub mod seekable;
pub mod byte_order;
