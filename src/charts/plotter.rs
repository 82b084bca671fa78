//! Chart Plotter Module
//! Turns series columns into a styled grouped bar figure.

use super::figure::{
    AxisRange, BarMode, BarTrace, Figure, Legend, LegendOrientation, XAnchor, YAnchor,
};
use crate::data::{ScoreDimension, SeriesTable};

pub const CHART_TITLE: &str = "OS Architecture Comparison";
pub const X_AXIS_TITLE: &str = "Architecture";
pub const Y_AXIS_TITLE: &str = "Score (1-5)";

/// Color palette for score dimensions, in `ScoreDimension::ALL` order.
pub const PALETTE: [&str; 4] = [
    "#1FB8CD", // Cyan
    "#DB4545", // Red
    "#2E8B57", // Green
    "#5D878F", // Slate
];

/// Builds and styles the architecture comparison figure.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for a score dimension.
    pub fn dimension_color(dimension: ScoreDimension) -> &'static str {
        match dimension {
            ScoreDimension::Performance => PALETTE[0],
            ScoreDimension::Security => PALETTE[1],
            ScoreDimension::DevelopmentComplexity => PALETTE[2],
            ScoreDimension::Scalability => PALETTE[3],
        }
    }

    /// One bar trace per score dimension, x = architecture names.
    pub fn build_figure(series: &SeriesTable) -> Figure {
        let mut fig = Figure::new();

        for dimension in ScoreDimension::ALL {
            let heights = series
                .values(dimension)
                .iter()
                .map(|&score| f64::from(score))
                .collect();

            fig.add_trace(BarTrace::new(
                dimension.label(),
                series.names.clone(),
                heights,
                Self::dimension_color(dimension),
            ));
        }

        fig
    }

    /// Titles, grouped bars, horizontal legend above the plot, fixed 0..5.5 y axis.
    pub fn style_figure(fig: &mut Figure) {
        let layout = &mut fig.layout;
        layout.title = Some(CHART_TITLE.to_string());
        layout.x_axis.title = Some(X_AXIS_TITLE.to_string());
        layout.y_axis.title = Some(Y_AXIS_TITLE.to_string());
        layout.bar_mode = BarMode::Group;
        layout.legend = Legend {
            orientation: LegendOrientation::Horizontal,
            x: 0.5,
            y: 1.05,
            x_anchor: XAnchor::Center,
            y_anchor: YAnchor::Bottom,
        };

        // Headroom above a score of 5
        layout.y_axis.range = Some(AxisRange::new(0.0, 5.5, 1.0));

        fig.update_traces(|trace| trace.clip_on_axis = false);
    }
}
