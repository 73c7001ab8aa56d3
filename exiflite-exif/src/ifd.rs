use exiflite_common::math::SafeArith;
use exiflite_common::read::ByteReader;

use crate::error::Result;
use crate::header::TiffHeader;
use crate::tag::{Tag, TagName};
use crate::type_::Type;
use crate::value::{decode_value, Decoded};
use crate::TagDictionary;

/// Size of an IFD entry in bytes
pub const ENTRY_SIZE: usize = 12;

/// An IFD entry
///
/// The last four bytes either hold the value itself or an offset to it,
/// depending on type and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub position: usize,
    pub tag: Tag,
    pub data_type: Type,
    pub count: u32,
    pub value_offset: u32,
}

impl Entry {
    pub fn read(reader: &ByteReader, header: &TiffHeader, position: usize) -> Result<Self> {
        let byte_order = header.byte_order;

        let tag = Tag(reader.u16(position, byte_order)?);
        let data_type = reader.u16(position.safe_add(2)?, byte_order)?.into();
        let count = reader.u32(position.safe_add(4)?, byte_order)?;
        let value_offset = reader.u32(position.safe_add(8)?, byte_order)?;

        Ok(Self {
            position,
            tag,
            data_type,
            count,
            value_offset,
        })
    }

    /// Position of the value field inside the entry
    pub fn value_offset_position(&self) -> Result<usize> {
        Ok(self.position.safe_add(8)?)
    }
}

/// Read the recognized tags of the IFD at `header.first_ifd`
///
/// Unrecognized tags and entries of unsupported type are skipped. An entry
/// whose value can't be read is skipped as well. If the entry table itself is
/// cut short, the tags found so far are returned.
pub fn read_directory(reader: &ByteReader, header: &TiffHeader) -> Result<TagDictionary> {
    let dir_start = header.first_ifd;
    let n_entries = reader.u16(dir_start, header.byte_order)?;
    let entries_start = dir_start.safe_add(2)?;

    tracing::debug!("Reading IFD with {n_entries} entries at byte {dir_start}");

    let mut tags = TagDictionary::default();

    for index in 0..usize::from(n_entries) {
        let position = entries_start.safe_add(index.safe_mul(ENTRY_SIZE)?)?;

        let tag = match reader.u16(position, header.byte_order) {
            Ok(tag) => Tag(tag),
            Err(err) => {
                tracing::info!("IFD ends after {index} of {n_entries} entries: {err}");
                break;
            }
        };

        let Some(name) = TagName::lookup(tag) else {
            tracing::trace!("Skipping unknown tag {:#06x}", tag.0);
            continue;
        };

        let entry = match Entry::read(reader, header, position) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::info!("Entry for '{name}' is incomplete: {err}");
                break;
            }
        };

        match decode_value(reader, header, &entry) {
            Ok(Decoded::Value(value)) => {
                tracing::trace!("{name}: {value:?}");
                tags.insert(name, value);
            }
            Ok(Decoded::Unsupported(data_type)) => {
                tracing::debug!("Skipping '{name}' with unsupported type {data_type:?}");
            }
            Err(err) => {
                tracing::info!("Failed to read value of '{name}': {err}");
            }
        }
    }

    Ok(tags)
}
