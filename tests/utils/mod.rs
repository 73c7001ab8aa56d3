#![allow(dead_code)]

pub const SOI: [u8; 2] = [0xFF, 0xD8];
pub const EOI: [u8; 2] = [0xFF, 0xD9];

pub fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, marker];
    data.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
    data.extend_from_slice(payload);
    data
}

/// JFIF style stream with the given segments between APP0 and the scan
pub fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut data = SOI.to_vec();
    data.extend_from_slice(&segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0"));
    for segment in segments {
        data.extend_from_slice(segment);
    }
    data.extend_from_slice(&segment(0xDB, &[0; 65]));
    data.extend_from_slice(&segment(0xDA, &[1, 1, 0, 0, 0x3F, 0]));
    // Entropy coded data
    data.extend_from_slice(&[0xD2, 0xCF, 0x20, 0xFF, 0x00, 0x12]);
    data.extend_from_slice(&EOI);
    data
}

pub fn app1(payload: &[u8]) -> Vec<u8> {
    segment(0xE1, payload)
}

/// Exif payload with one IFD
///
/// Entries are `(tag, type, count, value or offset)` given in native numbers.
/// `extra` is placed after the IFD, at TIFF offset `8 + 2 + 12 * n + 4`.
pub fn exif(big_endian: bool, entries: &[(u16, u16, u32, u32)], extra: &[u8]) -> Vec<u8> {
    let u16_bytes = |x: u16| {
        if big_endian {
            x.to_be_bytes()
        } else {
            x.to_le_bytes()
        }
    };
    let u32_bytes = |x: u32| {
        if big_endian {
            x.to_be_bytes()
        } else {
            x.to_le_bytes()
        }
    };

    let mut data = b"Exif\0\0".to_vec();
    data.extend_from_slice(if big_endian { b"MM" } else { b"II" });
    data.extend_from_slice(&u16_bytes(42));
    data.extend_from_slice(&u32_bytes(8));
    data.extend_from_slice(&u16_bytes(entries.len() as u16));
    for (tag, data_type, count, value) in entries {
        data.extend_from_slice(&u16_bytes(*tag));
        data.extend_from_slice(&u16_bytes(*data_type));
        data.extend_from_slice(&u32_bytes(*count));
        data.extend_from_slice(&u32_bytes(*value));
    }
    data.extend_from_slice(&[0; 4]);
    data.extend_from_slice(extra);
    data
}

pub fn extra_offset(n_entries: u32) -> u32 {
    8 + 2 + 12 * n_entries + 4
}
