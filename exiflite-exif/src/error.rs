use exiflite_common::math::MathError;
use exiflite_common::read::ReadError;

pub type Result<T> = std::result::Result<T, Error>;

/// Reasons for Exif data yielding no tags
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Data does not start with 'Exif'")]
    MissingExifPrefix,
    #[error("Unknown byte order {0:#06x}")]
    UnknownByteOrder(u16),
    #[error("Wrong TIFF magic number {0}")]
    MagicNumber(u16),
    #[error("First IFD offset {0} points into the TIFF header")]
    IfdOffsetTooSmall(u32),
    #[error("Truncated data: {0}")]
    Truncated(#[from] ReadError),
}

impl From<MathError> for Error {
    fn from(value: MathError) -> Self {
        Self::Truncated(value.into())
    }
}
