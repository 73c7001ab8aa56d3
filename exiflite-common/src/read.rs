use crate::byte_order::ByteOrder;
use crate::math::{MathError, SafeArith};

/// Random access reads from an immutable byte buffer
///
/// Offsets are absolute positions in the wrapped slice. Reads that do not fit
/// into the slice fail with [`ReadError::OutOfBounds`].
///
/// ```
/// # use exiflite_common::byte_order::ByteOrder;
/// # use exiflite_common::read::ByteReader;
/// let reader = ByteReader::new(&[0xFF, 0xD8, 0x12, 0x34]);
/// assert_eq!(reader.u8(1).unwrap(), 0xD8);
/// assert_eq!(reader.u16(2, ByteOrder::BigEndian).unwrap(), 0x1234);
/// assert_eq!(reader.u16(2, ByteOrder::LittleEndian).unwrap(), 0x3412);
/// assert!(reader.u32(2, ByteOrder::BigEndian).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get_ref(&self) -> &'a [u8] {
        self.data
    }

    /// Returns `len` bytes starting at `offset`
    pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], ReadError> {
        let end = offset.safe_add(len)?;
        self.data.get(offset..end).ok_or(ReadError::OutOfBounds {
            offset,
            len,
            available: self.data.len(),
        })
    }

    pub fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N], ReadError> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.bytes(offset, N)?);
        Ok(buf)
    }

    /// Single byte, byte order does not apply
    pub fn u8(&self, offset: usize) -> Result<u8, ReadError> {
        let [byte] = self.array::<1>(offset)?;
        Ok(byte)
    }

    pub fn u16(&self, offset: usize, byte_order: ByteOrder) -> Result<u16, ReadError> {
        Ok(byte_order.u16(self.array(offset)?))
    }

    pub fn u32(&self, offset: usize, byte_order: ByteOrder) -> Result<u32, ReadError> {
        Ok(byte_order.u32(self.array(offset)?))
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("Reading {len} bytes at offset {offset} exceeds buffer of {available} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}
