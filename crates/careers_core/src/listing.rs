use std::fmt;

use crate::filter::FieldAccessor;

/// Session-unique identifier assigned to a listing at mount time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(pub u64);

impl ListingId {
    /// Reserved id of the synthetic "no results" card.
    pub const PLACEHOLDER: ListingId = ListingId(u64::MAX);

    pub fn is_placeholder(self) -> bool {
        self == Self::PLACEHOLDER
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_placeholder() {
            write!(f, "placeholder")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A listing as decoded from the host page, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingDraft {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub categories: Option<String>,
}

/// A career posting. `title` and `summary` may carry markup and are rendered raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub categories: Option<String>,
}

impl Listing {
    pub fn from_draft(id: ListingId, draft: ListingDraft) -> Self {
        Self {
            id,
            title: draft.title,
            summary: draft.summary,
            url: draft.url,
            categories: draft.categories,
        }
    }

    /// The card shown in place of results when nothing matches.
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            id: ListingId::PLACEHOLDER,
            title: message.into(),
            summary: String::new(),
            url: String::new(),
            categories: None,
        }
    }
}

/// Assigns ids in page order, starting at zero.
pub fn assign_ids(drafts: Vec<ListingDraft>) -> Vec<Listing> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(index, draft)| Listing::from_draft(ListingId(index as u64), draft))
        .collect()
}

/// Fields of a [`Listing`] that the grid can search or filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Summary,
    Url,
    Categories,
}

impl ListingField {
    pub fn accessor(self) -> FieldAccessor<Listing> {
        match self {
            ListingField::Title => title_of,
            ListingField::Summary => summary_of,
            ListingField::Url => url_of,
            ListingField::Categories => categories_of,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "title" => Some(ListingField::Title),
            "summary" => Some(ListingField::Summary),
            "url" => Some(ListingField::Url),
            "categories" => Some(ListingField::Categories),
            _ => None,
        }
    }
}

fn title_of(listing: &Listing) -> Option<&str> {
    Some(&listing.title)
}

fn summary_of(listing: &Listing) -> Option<&str> {
    Some(&listing.summary)
}

fn url_of(listing: &Listing) -> Option<&str> {
    Some(&listing.url)
}

fn categories_of(listing: &Listing) -> Option<&str> {
    listing.categories.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_page_order() {
        let listings = assign_ids(vec![
            ListingDraft {
                title: "a".into(),
                ..ListingDraft::default()
            },
            ListingDraft {
                title: "b".into(),
                ..ListingDraft::default()
            },
        ]);
        assert_eq!(listings[0].id, ListingId(0));
        assert_eq!(listings[1].id, ListingId(1));
        assert_eq!(listings[1].title, "b");
    }

    #[test]
    fn categories_accessor_reports_missing_tag() {
        let listing = Listing::placeholder("none");
        assert_eq!((ListingField::Categories.accessor())(&listing), None);
        assert_eq!((ListingField::Title.accessor())(&listing), Some("none"));
    }
}
