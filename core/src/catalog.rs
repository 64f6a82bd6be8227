use std::fmt;

/// How a summary card sits in the home grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    /// Two columns wide and two rows tall, summary shown.
    Feature,
    /// Two columns wide, summary shown.
    Wide,
    /// Single cell, title and organization only.
    Compact,
}

impl CardLayout {
    pub fn class(self) -> &'static str {
        match self {
            CardLayout::Feature => "card-feature",
            CardLayout::Wide => "card-wide",
            CardLayout::Compact => "card-compact",
        }
    }

    pub fn shows_summary(self) -> bool {
        !matches!(self, CardLayout::Compact)
    }
}

/// Short write-up shown when a card is flipped open on the home page.
#[derive(Clone, Copy, Debug)]
pub struct CaseStudyDetail {
    pub context: &'static str,
    pub challenges: &'static [&'static str],
    pub solution: &'static [&'static str],
    pub impact: &'static [&'static str],
}

/// Long-form write-up for the standalone `/case-studies/<slug>` page.
#[derive(Clone, Copy, Debug)]
pub struct CaseStudyPage {
    pub headline: &'static str,
    pub context: &'static str,
    pub challenges: &'static [&'static str],
    pub solution: &'static [&'static str],
    pub outcome: &'static [&'static str],
    pub reflection: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub summary: &'static str,
    pub layout: CardLayout,
    pub detail: CaseStudyDetail,
    pub page: CaseStudyPage,
}

include!(concat!(env!("OUT_DIR"), "/case_study_catalog.rs"));

/// Identifies one catalog entry. Only the catalog hands these out, so holding
/// an `EntryId` means the entry exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u8);

impl EntryId {
    pub fn parse(slug: &str) -> Result<Self, EntryIdError> {
        let trimmed = slug.trim();
        if trimmed.is_empty() {
            return Err(EntryIdError::Empty);
        }
        CASE_STUDY_CATALOG
            .iter()
            .position(|entry| entry.slug == trimmed)
            .map(|index| Self(index as u8))
            .ok_or_else(|| EntryIdError::Unknown {
                slug: trimmed.to_string(),
            })
    }

    /// All ids in catalog order.
    pub fn all() -> impl DoubleEndedIterator<Item = EntryId> + ExactSizeIterator {
        (0..CASE_STUDY_COUNT).map(|index| Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn slug(self) -> &'static str {
        self.entry().slug
    }

    pub fn entry(self) -> &'static CatalogEntry {
        &CASE_STUDY_CATALOG[self.index()]
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.slug().fmt(f)
    }
}

impl std::str::FromStr for EntryId {
    type Err = EntryIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryIdError {
    Empty,
    Unknown { slug: String },
}

impl fmt::Display for EntryIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIdError::Empty => write!(f, "case study id is empty"),
            EntryIdError::Unknown { slug } => write!(f, "no case study with id '{slug}'"),
        }
    }
}

impl std::error::Error for EntryIdError {}

pub fn case_study_by_slug(slug: &str) -> Option<&'static CatalogEntry> {
    EntryId::parse(slug).ok().map(EntryId::entry)
}
