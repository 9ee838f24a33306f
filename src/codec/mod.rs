//! Image decoding and encoding at the edges of the pipeline.
//!
//! Decoding sniffs the input's magic bytes (PNG, JPEG, GIF) and hands the
//! data to the matching `image` codec. Encoding goes through the
//! [`ImageEncoder`] trait with one implementation per output format.

pub mod decode;
pub mod encoder;

pub use decode::{decode_image, read_image, sniff_format, SourceFormat};
pub use encoder::{
    EncodedImage, EncoderFactory, EncoderQuality, ImageEncoder, JpegEncoder, OutputFormat,
    PngEncoder,
};
