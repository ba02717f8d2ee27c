//! Careers app: composition root and headless host runtime for the grid.
pub mod platform;

pub use platform::app::CareersHost;
pub use platform::config::{default_config_path, load_config, AppConfig};
pub use platform::window::{HostWindow, SimulatedWindow, WindowLayout};
