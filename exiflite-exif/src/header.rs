use exiflite_common::byte_order::ByteOrder;
use exiflite_common::math::{SafeArith, ToUsize};
use exiflite_common::read::ByteReader;

use crate::error::{Error, Result};

pub const EXIF_PREFIX: &[u8; 4] = b"Exif";
/// Position of the TIFF header, after `Exif` and two padding bytes
pub const TIFF_HEADER_POS: usize = 6;

const MAGIC_NUMBER: u16 = 42;
/// Size of the TIFF header itself
const MIN_IFD_OFFSET: u32 = 8;

/// Where the TIFF structure starts and how to read it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    pub byte_order: ByteOrder,
    /// Base for all offsets stored in the TIFF structure
    pub tiff_start: usize,
    /// Absolute position of the primary IFD
    pub first_ifd: usize,
}

impl TiffHeader {
    pub fn decode(reader: &ByteReader) -> Result<Self> {
        let prefix = reader
            .bytes(0, EXIF_PREFIX.len())
            .map_err(|_| Error::MissingExifPrefix)?;
        if prefix != EXIF_PREFIX {
            return Err(Error::MissingExifPrefix);
        }

        let tiff_start = TIFF_HEADER_POS;

        // Both valid values are palindromes
        let byte_order_raw = reader.u16(tiff_start, ByteOrder::BigEndian)?;
        let byte_order = ByteOrder::try_from(byte_order_raw)
            .map_err(|err| Error::UnknownByteOrder(err.0))?;

        let magic = reader.u16(tiff_start.safe_add(2)?, byte_order)?;
        if magic != MAGIC_NUMBER {
            return Err(Error::MagicNumber(magic));
        }

        let ifd_offset = reader.u32(tiff_start.safe_add(4)?, byte_order)?;
        if ifd_offset < MIN_IFD_OFFSET {
            return Err(Error::IfdOffsetTooSmall(ifd_offset));
        }

        let first_ifd = tiff_start.safe_add(ifd_offset.usize()?)?;

        tracing::debug!("TIFF header with {byte_order:?}, primary IFD at byte {first_ifd}");

        Ok(Self {
            byte_order,
            tiff_start,
            first_ifd,
        })
    }

    /// Turns an offset stored in the TIFF structure into a position
    pub fn resolve(&self, offset: u32) -> Result<usize> {
        Ok(self.tiff_start.safe_add(offset.usize()?)?)
    }
}
