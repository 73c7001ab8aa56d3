crate::utils::maybe_convertible_enum!(
    #[repr(u16)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Operations that have to be applied to display the image upright
    ///
    /// Values as stored in the Exif `Orientation` tag.
    pub enum Orientation {
        Id = 1,
        Mirrored = 2,
        Rotation180 = 3,
        MirroredRotation180 = 4,
        MirroredRotation90 = 5,
        Rotation270 = 6,
        MirroredRotation270 = 7,
        Rotation90 = 8,
    }
);

impl Orientation {
    /// Whether the image has to be mirrored horizontally
    pub fn mirror(self) -> bool {
        matches!(
            self,
            Self::Mirrored
                | Self::MirroredRotation90
                | Self::MirroredRotation180
                | Self::MirroredRotation270
        )
    }

    /// Clockwise rotation in degrees, applied after mirroring
    pub fn rotation(self) -> u16 {
        match self {
            Self::Id | Self::Mirrored => 0,
            Self::Rotation90 | Self::MirroredRotation90 => 90,
            Self::Rotation180 | Self::MirroredRotation180 => 180,
            Self::Rotation270 | Self::MirroredRotation270 => 270,
        }
    }
}
