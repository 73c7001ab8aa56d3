use std::collections::BTreeMap;
use std::fmt;

use exiflite_common::orientation::Orientation;

use crate::tag::TagName;

/// Decoded value of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum TagValue {
    Ascii(String),
    Short(u16),
    Shorts(Vec<u16>),
}

impl TagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Ascii(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_short(&self) -> Option<u16> {
        match self {
            Self::Short(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_shorts(&self) -> Option<&[u16]> {
        match self {
            Self::Shorts(x) => Some(x),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii(s) => f.write_str(s),
            Self::Short(x) => write!(f, "{x}"),
            Self::Shorts(xs) => {
                let values = xs.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "[{}]", values.join(", "))
            }
        }
    }
}

/// Recognized tags and their values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct TagDictionary {
    tags: BTreeMap<TagName, TagValue>,
}

impl TagDictionary {
    pub fn get(&self, name: TagName) -> Option<&TagValue> {
        self.tags.get(&name)
    }

    /// Later values for the same tag replace earlier ones
    pub fn insert(&mut self, name: TagName, value: TagValue) -> Option<TagValue> {
        self.tags.insert(name, value)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagName, &TagValue)> {
        self.tags.iter().map(|(name, value)| (*name, value))
    }

    /// Image orientation
    ///
    /// `None` if the tag is missing, not a single short or out of range.
    pub fn orientation(&self) -> Option<Orientation> {
        self.get(TagName::Orientation)?
            .as_short()
            .and_then(|x| Orientation::try_from(x).ok())
    }

    /// Camera manufacturer
    pub fn make(&self) -> Option<&str> {
        self.get(TagName::Make)?.as_str()
    }

    /// Camera model
    pub fn model(&self) -> Option<&str> {
        self.get(TagName::Model)?.as_str()
    }

    /// Date and time of the last file change in Exif notation
    ///
    /// The format is `YYYY:MM:DD HH:MM:SS`.
    pub fn date_time(&self) -> Option<&str> {
        self.get(TagName::DateTime)?.as_str()
    }

    #[cfg(feature = "chrono")]
    pub fn date_time_parsed(&self) -> Option<chrono::NaiveDateTime> {
        let s = self.date_time()?;
        chrono::NaiveDateTime::parse_from_str(s.trim_end_matches('\0').trim(), "%Y:%m:%d %H:%M:%S")
            .ok()
    }
}

impl<'a> IntoIterator for &'a TagDictionary {
    type Item = (&'a TagName, &'a TagValue);
    type IntoIter = std::collections::btree_map::Iter<'a, TagName, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
