//! Walk the marker structure of JPEG streams
//!
//! Only the segment framing is interpreted. Segment contents are left to the
//! crates that understand them.

use exiflite_common::byte_order::ByteOrder;
use exiflite_common::math::{MathError, SafeArith};
use exiflite_common::read::ByteReader;

pub const MARKER_PREFIX: u8 = 0xFF;
pub const SOI: [u8; 2] = [MARKER_PREFIX, 0xD8];

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Stream does not start with SOI marker")]
    NotAJpeg,
    #[error("Expected marker prefix at byte {pos}, found {found:#04x}")]
    InvalidMarkerPrefix { pos: usize, found: u8 },
    #[error("No APP1 segment found")]
    NoApp1,
}

/// A marker and, where present, its declared length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    marker: Marker,
    pos: usize,
    length: u16,
}

impl Segment {
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Position of the `0xFF` prefix byte
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Declared length, including the two length bytes
    pub fn length(&self) -> u16 {
        self.length
    }

    /// Position of the first byte after the length field
    pub fn payload_pos(&self) -> Result<usize, MathError> {
        self.pos.safe_add(4)
    }

    /// Declared payload size, `None` if the length field is smaller than itself
    pub fn payload_len(&self) -> Option<u16> {
        self.length.checked_sub(2)
    }

    /// Payload as declared by the length field
    pub fn payload<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        let start = self.payload_pos().ok()?;
        let end = start.checked_add(self.payload_len()?.into())?;
        data.get(start..end)
    }
}

pub struct Jpeg<'a> {
    data: &'a [u8],
}

impl<'a> Jpeg<'a> {
    /// Checks for the SOI marker
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        if Self::is_filetype(data) {
            Ok(Self { data })
        } else {
            Err(Error::NotAJpeg)
        }
    }

    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(&SOI)
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Segments in order of appearance, up to the start of scan
    pub fn segments(&self) -> Segments<'a> {
        Segments {
            reader: ByteReader::new(self.data),
            pos: SOI.len(),
            finished: false,
        }
    }

    /// The first APP1 segment
    ///
    /// Whether it actually carries Exif is not checked. Later APP1 segments are
    /// never considered.
    pub fn first_app1(&self) -> Result<Segment, Error> {
        for segment in self.segments() {
            let segment = segment?;
            if segment.marker() == Marker::APP1 {
                tracing::debug!("Found APP1 segment at byte {}", segment.pos());
                return Ok(segment);
            }
        }

        Err(Error::NoApp1)
    }
}

/// Iterator over the marker segments of a JPEG
///
/// Ends at SOS or EOI, since entropy coded data follows the former, and at the
/// end of the data. A segment header cut off by the end of the data also ends
/// the iteration.
pub struct Segments<'a> {
    reader: ByteReader<'a>,
    pos: usize,
    finished: bool,
}

impl Segments<'_> {
    fn read_segment(&mut self) -> Option<Result<Segment, Error>> {
        let pos = self.pos;

        let prefix = self.reader.u8(pos).ok()?;
        if prefix != MARKER_PREFIX {
            return Some(Err(Error::InvalidMarkerPrefix { pos, found: prefix }));
        }

        let marker = Marker::from(self.reader.u8(pos.checked_add(1)?).ok()?);
        tracing::trace!("Marker {marker:?} at byte {pos}");

        if marker == Marker::EOI {
            return None;
        }

        let length = self
            .reader
            .u16(pos.checked_add(2)?, ByteOrder::BigEndian)
            .ok()?;

        let segment = Segment {
            marker,
            pos,
            length,
        };

        if marker == Marker::SOS {
            return Some(Ok(segment));
        }

        self.pos = pos.checked_add(2)?.checked_add(length.into())?;
        self.finished = false;

        Some(Ok(segment))
    }
}

impl Iterator for Segments<'_> {
    type Item = Result<Segment, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.pos >= self.reader.len() {
            return None;
        }

        // Any outcome other than an ordinary segment ends the walk
        self.finished = true;
        self.read_segment()
    }
}

exiflite_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum Marker {
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        SOF3 = 0xC3,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        /// Define quantization table
        DQT = 0xDB,
        /// Define restart interval
        DRI = 0xDD,
        /// JFIF
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP3 = 0xE3,
        APP4 = 0xE4,
        APP5 = 0xE5,
        APP6 = 0xE6,
        APP7 = 0xE7,
        APP8 = 0xE8,
        APP9 = 0xE9,
        APP10 = 0xEA,
        APP11 = 0xEB,
        APP12 = 0xEC,
        /// Ducky, IPTC
        APP13 = 0xED,
        /// Adobe
        APP14 = 0xEE,
        APP15 = 0xEF,
        /// Comment
        COM = 0xFE,
    }
);
