use careers_logging::{careers_debug, careers_info};
use scraper::{ElementRef, Html, Selector};
use serde::de::DeserializeOwned;

use crate::{HostData, MountError, RawListing, ATTR_CATEGORIES, ATTR_LISTINGS};

pub const DEFAULT_CONTAINER_ID: &str = "career-listings";

/// Locates `#{container_id}` in `html` and decodes its two data attributes.
///
/// Any failure is fatal for mounting: the grid renders nothing without both
/// lists.
pub fn read_host_data(html: &str, container_id: &str) -> Result<HostData, MountError> {
    let document = Html::parse_document(html);
    let selector = container_selector(container_id)?;
    let container = document
        .select(&selector)
        .next()
        .ok_or_else(|| MountError::ContainerNotFound(container_id.to_string()))?;

    let raw_listings: Vec<RawListing> = decode_attribute(container, ATTR_LISTINGS)?;
    let categories: Vec<String> = decode_attribute(container, ATTR_CATEGORIES)?;

    careers_info!(
        "Read host data from #{}: {} listings, {} categories",
        container_id,
        raw_listings.len(),
        categories.len()
    );

    Ok(HostData {
        listings: raw_listings.into_iter().map(Into::into).collect(),
        categories,
    })
}

fn container_selector(container_id: &str) -> Result<Selector, MountError> {
    let valid = !container_id.is_empty()
        && container_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(MountError::InvalidContainerId(container_id.to_string()));
    }
    Selector::parse(&format!("#{container_id}"))
        .map_err(|_| MountError::InvalidContainerId(container_id.to_string()))
}

fn decode_attribute<T: DeserializeOwned>(
    element: ElementRef<'_>,
    attribute: &'static str,
) -> Result<T, MountError> {
    let raw = element
        .value()
        .attr(attribute)
        .ok_or(MountError::MissingAttribute(attribute))?;
    careers_debug!("Decoding {} ({} bytes)", attribute, raw.len());
    serde_json::from_str(raw).map_err(|source| MountError::MalformedJson { attribute, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_selector_injection_in_container_id() {
        let err = read_host_data("<div></div>", "a, b").unwrap_err();
        assert!(matches!(err, MountError::InvalidContainerId(_)));
    }
}
