//! Core codec: table construction plus the encode/decode transforms

pub mod decoder;
pub mod encoder;
pub mod glyphs;
pub mod tables;
