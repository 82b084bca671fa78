//! Render settings
//! Output location and canvas size for the exported chart files.

use std::path::PathBuf;

/// Canvas size used by plotly's static export.
pub const DEFAULT_WIDTH: u32 = 700;
pub const DEFAULT_HEIGHT: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Directory receiving the PNG and SVG files.
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Open the rendered chart in the system viewer after export.
    pub show: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            show: true,
        }
    }
}

impl RenderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings writing into `dir` without opening a viewer.
    pub fn headless(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
            show: false,
            ..Self::default()
        }
    }
}
