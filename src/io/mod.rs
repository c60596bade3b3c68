//! I/O layer around the pure core: decoding source images and
//! `writers` for PNG/JPEG outputs.
pub mod reader;
pub use reader::decode_image;

pub mod writers;
