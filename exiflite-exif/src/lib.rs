//! Decoding of the primary image directory of Exif data
//!
//! Only a fixed set of tags is understood: orientation, date and time of the
//! last change, and camera make and model. Everything else in the directory is
//! skipped.

mod dictionary;
pub mod error;
mod header;
mod ifd;
mod tag;
mod type_;
mod value;

pub use dictionary::{TagDictionary, TagValue};
pub use error::{Error, Result};
pub use header::{TiffHeader, EXIF_PREFIX, TIFF_HEADER_POS};
pub use ifd::{read_directory, Entry, ENTRY_SIZE};
pub use tag::{Tag, TagName, TAGS};
pub use type_::Type;
pub use value::{decode_value, Decoded};

use exiflite_common::read::ByteReader;

/// Decode Exif data
///
/// `data` starts with the `Exif` identifier of an APP1 segment. All offsets
/// inside the TIFF structure are resolved against it, so it may extend beyond
/// the segment.
pub fn decode(data: &[u8]) -> Result<TagDictionary> {
    let reader = ByteReader::new(data);
    let header = TiffHeader::decode(&reader)?;

    read_directory(&reader, &header)
}
