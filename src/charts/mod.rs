//! Charts module - figure model, styling and static rendering

mod figure;
mod plotter;
mod renderer;

pub use figure::{
    Axis, AxisRange, BarMode, BarTrace, Figure, Layout, Legend, LegendOrientation, XAnchor,
    YAnchor,
};
pub use plotter::{ChartPlotter, CHART_TITLE, PALETTE, X_AXIS_TITLE, Y_AXIS_TITLE};
pub use renderer::{
    parse_hex_color, BarRect, ExportedFiles, RenderError, StaticChartRenderer, PNG_FILE_NAME,
    SVG_FILE_NAME,
};
