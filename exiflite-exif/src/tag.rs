use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Tag(pub u16);

impl Tag {
    pub const MAKE: Self = Self(0x010F);
    pub const MODEL: Self = Self(0x0110);
    pub const ORIENTATION: Self = Self(0x0112);
    pub const DATE_TIME: Self = Self(0x0132);
}

/// Tags that are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagName {
    Orientation,
    DateTime,
    Make,
    Model,
}

pub static TAGS: &[(Tag, TagName)] = &[
    (Tag::ORIENTATION, TagName::Orientation),
    (Tag::DATE_TIME, TagName::DateTime),
    (Tag::MAKE, TagName::Make),
    (Tag::MODEL, TagName::Model),
];

impl TagName {
    pub fn lookup(tag: Tag) -> Option<Self> {
        TAGS.iter()
            .find(|(known, _)| *known == tag)
            .map(|(_, name)| *name)
    }

    pub fn tag(self) -> Tag {
        match self {
            Self::Orientation => Tag::ORIENTATION,
            Self::DateTime => Tag::DATE_TIME,
            Self::Make => Tag::MAKE,
            Self::Model => Tag::MODEL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orientation => "Orientation",
            Self::DateTime => "DateTime",
            Self::Make => "Make",
            Self::Model => "Model",
        }
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
