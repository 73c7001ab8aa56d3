use exiflite_common::math::{SafeArith, ToUsize};
use exiflite_common::read::ByteReader;

use crate::error::Result;
use crate::header::TiffHeader;
use crate::ifd::Entry;
use crate::type_::Type;
use crate::TagValue;

/// Outcome of decoding an entry's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Value(TagValue),
    /// Types other than ASCII and SHORT are not decoded
    Unsupported(Type),
}

pub fn decode_value(reader: &ByteReader, header: &TiffHeader, entry: &Entry) -> Result<Decoded> {
    let inline = entry.value_offset_position()?;

    let value = match entry.data_type {
        Type::Ascii => {
            let pos = if entry.count > 4 {
                header.resolve(entry.value_offset)?
            } else {
                inline
            };

            // Drop the NUL terminator
            let len = entry.count.saturating_sub(1).usize()?;
            let bytes = reader.bytes(pos, len)?;

            TagValue::Ascii(bytes.iter().copied().map(char::from).collect())
        }
        Type::Short if entry.count == 1 => TagValue::Short(reader.u16(inline, header.byte_order)?),
        Type::Short => {
            let pos = if entry.count > 2 {
                header.resolve(entry.value_offset)?
            } else {
                inline
            };

            let mut values = Vec::new();
            let mut value_pos = pos;
            for _ in 0..entry.count {
                values.push(reader.u16(value_pos, header.byte_order)?);
                value_pos = value_pos.safe_add(2)?;
            }

            TagValue::Shorts(values)
        }
        data_type => return Ok(Decoded::Unsupported(data_type)),
    };

    Ok(Decoded::Value(value))
}
