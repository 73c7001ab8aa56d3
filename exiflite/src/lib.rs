//! Read orientation, capture time and camera make and model from JPEG files
//!
//! ```
//! let data = [0xFF, 0xD8, 0xFF, 0xD9];
//! let err = exiflite::read(&data, "empty.jpg").unwrap_err();
//! assert_eq!(err.to_string(), "Could not read exif data: empty.jpg");
//! ```

mod error;

pub use error::Error;
pub use exiflite_common::byte_order::ByteOrder;
pub use exiflite_common::orientation::Orientation;
pub use exiflite_exif::{Error as TiffError, TagDictionary, TagName, TagValue};
pub use exiflite_jpeg::{Marker, Segment};

use exiflite_jpeg::Jpeg;

static_assertions::assert_impl_all!(TagDictionary: Send, Sync);
static_assertions::assert_impl_all!(Error: Send, Sync);

/// Outcome of reading a JPEG with the reason for missing tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// The APP1 segment the tags were read from
    pub segment: Segment,
    pub tags: TagDictionary,
    /// Set if the APP1 segment did not contain readable Exif data
    pub tiff_error: Option<TiffError>,
}

/// Read the recognized Exif tags of a JPEG
///
/// Fails if the data is not a JPEG stream or has no APP1 segment. If the first
/// APP1 segment does not hold valid Exif data, an empty dictionary is returned.
/// `display_name` is only used in error messages.
pub fn read(data: &[u8], display_name: &str) -> Result<TagDictionary, Error> {
    inspect(data, display_name).map(|inspection| inspection.tags)
}

/// Like [`read`] but also reports why the Exif data yielded no tags
pub fn inspect(data: &[u8], display_name: &str) -> Result<Inspection, Error> {
    let jpeg = Jpeg::new(data).map_err(|err| Error::new(err, display_name))?;
    let segment = jpeg
        .first_app1()
        .map_err(|err| Error::new(err, display_name))?;

    // Offsets in the TIFF structure are not limited by the segment length
    let exif_data = segment
        .payload_pos()
        .ok()
        .and_then(|pos| data.get(pos..))
        .unwrap_or_default();

    match exiflite_exif::decode(exif_data) {
        Ok(tags) => Ok(Inspection {
            segment,
            tags,
            tiff_error: None,
        }),
        Err(err) => {
            tracing::info!("No Exif data in APP1 segment of '{display_name}': {err}");
            Ok(Inspection {
                segment,
                tags: TagDictionary::default(),
                tiff_error: Some(err),
            })
        }
    }
}
