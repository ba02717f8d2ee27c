use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context};
use careers_app::platform::logging;
use careers_app::{default_config_path, load_config, CareersHost, SimulatedWindow};
use careers_host::read_host_data;
use careers_logging::careers_error;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::destination_from_env(), logging::level_from_env());

    let mut args = std::env::args().skip(1);
    let Some(page_path) = args.next().map(PathBuf::from) else {
        bail!("usage: careers_app <page.html> [config.ron]");
    };
    let config_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| default_config_path(&page_path));

    let config = load_config(&config_path);
    let html = read_page(&page_path)?;
    let data = match read_host_data(&html, &config.container_id) {
        Ok(data) => data,
        Err(err) => {
            careers_error!("Cannot mount careers grid: {}", err);
            return Err(err.into());
        }
    };

    let window = Rc::new(SimulatedWindow::new(config.layout));
    let mut host = CareersHost::new(window, config.grid);
    host.mount(data);
    host.animation_frame();

    if let Some(markup) = host.take_markup() {
        print!("{markup}");
    }
    Ok(())
}

fn read_page(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read page {}", path.display()))
}
