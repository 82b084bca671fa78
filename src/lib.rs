//! OS Architecture Chart - grouped bar chart of kernel architecture scores
//!
//! Loads the embedded scores, builds and styles a grouped bar figure and
//! exports it as `os_architecture_comparison.png` and `.svg`.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod logger;

pub use charts::{ChartPlotter, ExportedFiles, Figure, StaticChartRenderer};
pub use config::RenderSettings;
pub use data::{ArchitectureDataset, DataProcessor, SeriesTable};
pub use error::{ChartError, Result};

use tracing::{debug, info};

/// Load the embedded data and return the styled figure.
pub fn build_chart() -> Result<Figure> {
    let dataset = ArchitectureDataset::load_embedded()?;
    info!(records = dataset.len(), "Loaded architecture scores");

    let series = DataProcessor::extract_series(dataset.records());
    debug!(?series, "Extracted series");

    let mut fig = ChartPlotter::build_figure(&series);
    ChartPlotter::style_figure(&mut fig);
    info!(traces = fig.traces.len(), "Built figure");

    Ok(fig)
}

/// Full pipeline: load, build, style, export, then optionally show.
pub fn run(settings: &RenderSettings) -> Result<ExportedFiles> {
    let fig = build_chart()?;
    let files = StaticChartRenderer::export(&fig, settings)?;

    if settings.show {
        StaticChartRenderer::show(&files.svg);
    }

    Ok(files)
}
