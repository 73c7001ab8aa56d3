/// Errors in the JPEG structure
///
/// Problems inside the Exif data are not reported as errors, see
/// [`crate::inspect`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("File is not a JPEG image: {name}")]
    NotAJpeg { name: String },
    #[error("Not a valid JPEG: {name}")]
    InvalidJpeg { name: String, pos: usize },
    #[error("Could not read exif data: {name}")]
    NoExifFound { name: String },
}

impl Error {
    pub(crate) fn new(err: exiflite_jpeg::Error, name: &str) -> Self {
        let name = name.to_string();
        match err {
            exiflite_jpeg::Error::NotAJpeg => Self::NotAJpeg { name },
            exiflite_jpeg::Error::InvalidMarkerPrefix { pos, .. } => Self::InvalidJpeg { name, pos },
            exiflite_jpeg::Error::NoApp1 => Self::NoExifFound { name },
        }
    }

    /// The display name the error was created with
    pub fn name(&self) -> &str {
        match self {
            Self::NotAJpeg { name } | Self::InvalidJpeg { name, .. } | Self::NoExifFound { name } => {
                name
            }
        }
    }
}
