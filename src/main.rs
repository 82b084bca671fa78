//! OS Architecture Chart
//!
//! Renders the architecture comparison chart into the current directory.

use os_arch_chart::{logger, RenderSettings};

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let files = os_arch_chart::run(&RenderSettings::default())?;
    tracing::info!(
        png = %files.png.display(),
        svg = %files.svg.display(),
        "Chart export complete"
    );

    Ok(())
}
