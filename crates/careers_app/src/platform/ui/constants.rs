pub const CLASS_MAIN: &str = "careers-main";

pub const CLASS_FILTERS: &str = "gsf-filters";
pub const CLASS_FILTERS_BACKDROP: &str = "gsf-filters-backdrop";
pub const CLASS_DRAWER_OPEN: &str = "gsf-mobile-filters-open";
pub const CLASS_DRAWER: &str = "gsf-mobile-filters-drawer";
pub const CLASS_DRAWER_HEADING: &str = "gsf-mobile-filters-heading";
pub const CLASS_DRAWER_SELECTED: &str = "gsf-mobile-filters-selected";
pub const CLASS_FILTER_LIST_WRAP: &str = "gsf-filter-list-wrap";
pub const CLASS_FILTER_LIST: &str = "gsf-filter-list";
pub const CLASS_FILTER_ACTIVE: &str = "gsf-filter-active";

pub const CLASS_GRID: &str = "gsf-filtered-grid";
pub const CLASS_CARD: &str = "gsf-career-listing";
pub const CLASS_CARD_LAST: &str = "gsf-career-listing-last";
pub const CLASS_CARD_INNER: &str = "gsf-career-listing-inner";
pub const CLASS_CARD_TITLE: &str = "gsf-career-title";
pub const CLASS_CARD_DESCRIPTION: &str = "gsf-career-description";

pub const DRAWER_HEADING: &str = "Filter";
