use crate::listing::ListingField;
use crate::reveal::{DEFAULT_INITIAL_PAGE_SIZE, DEFAULT_PAGE_INCREMENT};

pub const DEFAULT_INFINITE_DISTANCE: f64 = 600.0;
pub const DEFAULT_ALL_TEXT: &str = "All Jobs";
pub const DEFAULT_EMPTY_MESSAGE: &str =
    "There are no current career listings that match your criteria.";

/// Grid and selector settings fixed at mount time.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub initial_page_size: usize,
    /// Number of card columns; also the number of cards revealed per step.
    pub columns: usize,
    /// Prefetch margin in pixels for the near-bottom check.
    pub infinite_distance: f64,
    pub query_field: Option<ListingField>,
    pub filter_field: Option<ListingField>,
    pub all_text: String,
    pub backdrop: bool,
    pub empty_message: String,
}

impl GridConfig {
    /// Inline card width for the configured column count.
    pub fn card_width(&self) -> String {
        if self.columns <= 1 {
            "100%".to_string()
        } else {
            format!("{}%", 100.0 / self.columns as f64 - 1.5)
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            initial_page_size: DEFAULT_INITIAL_PAGE_SIZE,
            columns: DEFAULT_PAGE_INCREMENT,
            infinite_distance: DEFAULT_INFINITE_DISTANCE,
            query_field: Some(ListingField::Title),
            filter_field: Some(ListingField::Categories),
            all_text: DEFAULT_ALL_TEXT.to_string(),
            backdrop: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_width_per_column_count() {
        let mut config = GridConfig::default();
        assert_eq!(config.card_width(), "100%");
        config.columns = 2;
        assert_eq!(config.card_width(), "48.5%");
        config.columns = 4;
        assert_eq!(config.card_width(), "23.5%");
    }
}
