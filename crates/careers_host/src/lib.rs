//! Careers host: reads the listing and category data the page embeds on its
//! mount container.
mod mount;
mod types;

pub use mount::{read_host_data, DEFAULT_CONTAINER_ID};
pub use types::{HostData, MountError, RawListing, ATTR_CATEGORIES, ATTR_LISTINGS};
