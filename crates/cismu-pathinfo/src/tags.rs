use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeSeq};

use crate::error::Error;

/// Vocabulario cerrado de etiquetas. El discriminante es la posición del bit en `Tags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    Live = 0,
    Remix = 1,
    Instrumental = 2,
    Demo = 3,
    Orchestral = 4,
    Interview = 5,
    Interlude = 6,
    Remaster = 7,
    Capella = 8,
    Radio = 9,
    BackingTrack = 10,
    Fragment = 11,
    Cover = 12,
    Rehearsal = 13,
    Bonus = 14,
    Draft = 15,
}

impl Tag {
    pub const ALL: &'static [Tag] = &[
        Tag::Live,
        Tag::Remix,
        Tag::Instrumental,
        Tag::Demo,
        Tag::Orchestral,
        Tag::Interview,
        Tag::Interlude,
        Tag::Remaster,
        Tag::Capella,
        Tag::Radio,
        Tag::BackingTrack,
        Tag::Fragment,
        Tag::Cover,
        Tag::Rehearsal,
        Tag::Bonus,
        Tag::Draft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Live => "Live",
            Tag::Remix => "Remix",
            Tag::Instrumental => "Instrumental",
            Tag::Demo => "Demo",
            Tag::Orchestral => "Orchestral",
            Tag::Interview => "Interview",
            Tag::Interlude => "Interlude",
            Tag::Remaster => "Remaster",
            Tag::Capella => "Capella",
            Tag::Radio => "Radio",
            Tag::BackingTrack => "BackingTrack",
            Tag::Fragment => "Fragment",
            Tag::Cover => "Cover",
            Tag::Rehearsal => "Rehearsal",
            Tag::Bonus => "Bonus",
            Tag::Draft => "Draft",
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Acepta el nombre estable en cualquier capitalización, ignorando `_`, `-` y espacios.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        Tag::ALL
            .iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(&normalized))
            .copied()
            .ok_or_else(|| Error::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

bitflags::bitflags! {
    /// Conjunto de etiquetas. Valor inmutable: toda operación devuelve un conjunto nuevo.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Tags: u16 {
        const LIVE          = 1 << 0;
        const REMIX         = 1 << 1;
        const INSTRUMENTAL  = 1 << 2;
        const DEMO          = 1 << 3;
        const ORCHESTRAL    = 1 << 4;
        const INTERVIEW     = 1 << 5;
        const INTERLUDE     = 1 << 6;
        const REMASTER      = 1 << 7;
        const CAPELLA       = 1 << 8;
        const RADIO         = 1 << 9;
        const BACKING_TRACK = 1 << 10;
        const FRAGMENT      = 1 << 11;
        const COVER         = 1 << 12;
        const REHEARSAL     = 1 << 13;
        const BONUS         = 1 << 14;
        const DRAFT         = 1 << 15;
    }
}

impl Default for Tags {
    fn default() -> Self {
        Tags::empty()
    }
}

impl From<Tag> for Tags {
    fn from(tag: Tag) -> Self {
        Tags::from_bits_retain(1 << tag.index())
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        iter.into_iter().fold(Tags::empty(), Tags::with)
    }
}

impl Tags {
    #[must_use]
    pub fn with(self, tag: Tag) -> Self {
        self.union(Tags::from(tag))
    }

    #[must_use]
    pub fn without(self, tag: Tag) -> Self {
        self.difference(Tags::from(tag))
    }

    pub fn has(self, tag: Tag) -> bool {
        self.contains(Tags::from(tag))
    }

    /// Resuelve `name` contra el vocabulario y añade la etiqueta.
    pub fn with_name(self, name: &str) -> Result<Self, Error> {
        Ok(self.with(name.parse::<Tag>()?))
    }

    pub fn tags(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.iter().copied().filter(move |tag| self.has(*tag))
    }

    /// Nombres de las etiquetas presentes, en orden ascendente de índice.
    pub fn names(self) -> Vec<&'static str> {
        self.tags().map(|tag| tag.as_str()).collect()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(", "))
    }
}

impl Serialize for Tags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(Tags::empty(), |tags, name| {
            tags.with_name(name).map_err(de::Error::custom)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_layout_follows_tag_index() {
        for tag in Tag::ALL {
            assert_eq!(Tags::from(*tag).bits(), 1u16 << tag.index());
        }
        assert_eq!(Tags::from(Tag::BackingTrack), Tags::BACKING_TRACK);
        assert_eq!(Tags::from(Tag::Draft), Tags::DRAFT);
        assert_eq!(Tag::ALL.len(), 16);
        assert!(Tags::all().bits() == u16::MAX);
    }

    #[test]
    fn every_name_round_trips() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), *tag);
            assert!(Tags::empty().with_name(tag.as_str()).unwrap().has(*tag));
        }
    }

    #[test]
    fn name_lookup_is_lenient_on_case_and_separators() {
        assert_eq!("backing_track".parse::<Tag>().unwrap(), Tag::BackingTrack);
        assert_eq!("Backing Track".parse::<Tag>().unwrap(), Tag::BackingTrack);
        assert_eq!("LIVE".parse::<Tag>().unwrap(), Tag::Live);
    }

    #[test]
    fn unknown_name_is_an_error() {
        match Tags::empty().with_name("Karaoke") {
            Err(Error::UnknownTag(name)) => assert_eq!(name, "Karaoke"),
            other => panic!("Esperaba UnknownTag, obtuve {other:?}"),
        }
    }

    #[test]
    fn with_and_without_do_not_touch_the_original() {
        let base = Tags::empty().with(Tag::Live);
        let more = base.with(Tag::Remix);
        let less = more.without(Tag::Live);

        assert!(base.has(Tag::Live) && !base.has(Tag::Remix));
        assert!(more.has(Tag::Live) && more.has(Tag::Remix));
        assert!(!less.has(Tag::Live) && less.has(Tag::Remix));
    }

    #[test]
    fn union_laws() {
        let a = Tags::empty().with(Tag::Live).with(Tag::Remix);
        let b = Tags::empty().with(Tag::Demo);
        let c = Tags::empty().with(Tag::Remix).with(Tag::Draft);

        assert_eq!(a.union(b), b.union(a));
        assert_eq!(a.union(b).union(c), a.union(b.union(c)));
        assert_eq!(Tags::empty().union(a), a);
        assert_eq!(Tags::default(), Tags::empty());
        assert!(Tags::default().is_empty());
    }

    #[test]
    fn intersects() {
        let live_remix = Tags::empty().with(Tag::Live).with(Tag::Remix);
        assert!(live_remix.intersects(Tags::empty().with(Tag::Remix)));
        assert!(!live_remix.intersects(Tags::empty().with(Tag::Demo)));
    }

    #[test]
    fn names_are_in_index_order() {
        let tags: Tags = [Tag::Draft, Tag::Live, Tag::Radio].into_iter().collect();
        assert_eq!(tags.names(), vec!["Live", "Radio", "Draft"]);
        assert_eq!(tags.to_string(), "Live, Radio, Draft");
        assert!(Tags::empty().names().is_empty());
    }

    #[test]
    fn serializes_as_name_list() {
        let tags = Tags::empty().with(Tag::Cover).with(Tag::Live);
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["Live","Cover"]"#);

        let back: Tags = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);

        assert!(serde_json::from_str::<Tags>(r#"["Live","Nope"]"#).is_err());
    }
}
