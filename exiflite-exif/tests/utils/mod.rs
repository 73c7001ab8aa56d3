#![allow(dead_code)]

pub use exiflite_common::byte_order::ByteOrder;
pub use exiflite_exif::*;

enum Value {
    Inline([u8; 4]),
    Data(Vec<u8>),
}

/// Assembles a TIFF structure with a single IFD
///
/// Values that don't fit into an entry are placed after the IFD.
pub struct TiffBuilder {
    byte_order: ByteOrder,
    entries: Vec<(u16, u16, u32, Value)>,
}

impl TiffBuilder {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, tag: u16, data_type: u16, count: u32, value: [u8; 4]) -> Self {
        self.entries
            .push((tag, data_type, count, Value::Inline(value)));
        self
    }

    pub fn entry_data(mut self, tag: u16, data_type: u16, count: u32, data: Vec<u8>) -> Self {
        self.entries.push((tag, data_type, count, Value::Data(data)));
        self
    }

    pub fn short(self, tag: u16, value: u16) -> Self {
        let mut inline = [0; 4];
        inline[..2].copy_from_slice(&self.byte_order.u16_bytes(value));
        self.entry(tag, Type::Short.u16(), 1, inline)
    }

    pub fn shorts(self, tag: u16, values: &[u16]) -> Self {
        let data = values
            .iter()
            .flat_map(|x| self.byte_order.u16_bytes(*x))
            .collect::<Vec<_>>();
        let count = values.len() as u32;

        if data.len() <= 4 {
            let mut inline = [0; 4];
            inline[..data.len()].copy_from_slice(&data);
            self.entry(tag, Type::Short.u16(), count, inline)
        } else {
            self.entry_data(tag, Type::Short.u16(), count, data)
        }
    }

    /// `value` has to include the NUL terminator
    pub fn ascii(self, tag: u16, value: &[u8]) -> Self {
        let count = value.len() as u32;

        if value.len() <= 4 {
            let mut inline = [0; 4];
            inline[..value.len()].copy_from_slice(value);
            self.entry(tag, Type::Ascii.u16(), count, inline)
        } else {
            self.entry_data(tag, Type::Ascii.u16(), count, value.to_vec())
        }
    }

    /// TIFF structure starting with the byte order
    pub fn tiff(&self) -> Vec<u8> {
        let order = self.byte_order;
        let mut data = Vec::new();

        data.extend_from_slice(&u16::from(order).to_be_bytes());
        data.extend_from_slice(&order.u16_bytes(42));
        data.extend_from_slice(&order.u32_bytes(8));
        data.extend_from_slice(&order.u16_bytes(self.entries.len() as u16));

        let mut data_pos = 8 + 2 + self.entries.len() * 12 + 4;
        let mut extra = Vec::new();

        for (tag, data_type, count, value) in &self.entries {
            data.extend_from_slice(&order.u16_bytes(*tag));
            data.extend_from_slice(&order.u16_bytes(*data_type));
            data.extend_from_slice(&order.u32_bytes(*count));
            match value {
                Value::Inline(inline) => data.extend_from_slice(inline),
                Value::Data(bytes) => {
                    data.extend_from_slice(&order.u32_bytes(data_pos as u32));
                    data_pos += bytes.len();
                    extra.extend_from_slice(bytes);
                }
            }
        }

        // Next IFD
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&extra);

        data
    }

    /// APP1 payload with `Exif` identifier
    pub fn exif(&self) -> Vec<u8> {
        let mut data = b"Exif\0\0".to_vec();
        data.extend_from_slice(&self.tiff());
        data
    }
}
