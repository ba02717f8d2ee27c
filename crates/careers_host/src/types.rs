use careers_core::ListingDraft;
use serde::Deserialize;
use thiserror::Error;

pub const ATTR_LISTINGS: &str = "data-listings";
pub const ATTR_CATEGORIES: &str = "data-categories";

/// A listing object as embedded in `data-listings`.
///
/// Text fields default to empty when absent; `categories` stays `None` so the
/// category filter can tell a missing tag from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RawListing {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub categories: Option<String>,
}

impl From<RawListing> for ListingDraft {
    fn from(raw: RawListing) -> Self {
        ListingDraft {
            title: raw.title,
            summary: raw.summary,
            url: raw.url,
            categories: raw.categories,
        }
    }
}

/// Everything the grid needs from the page, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostData {
    pub listings: Vec<ListingDraft>,
    pub categories: Vec<String>,
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("mount container #{0} not found in page")]
    ContainerNotFound(String),
    #[error("invalid container id {0:?}")]
    InvalidContainerId(String),
    #[error("mount container is missing the {0} attribute")]
    MissingAttribute(&'static str),
    #[error("malformed JSON in {attribute}: {source}")]
    MalformedJson {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
