//! Figure Model
//! Backend-independent description of a bar chart: traces plus layout.

/// How traces sharing a category are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarMode {
    /// Side by side within the category.
    #[default]
    Group,
    /// On top of each other.
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendOrientation {
    Horizontal,
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

/// Legend placement in paper coordinates (0..1 spans the plot area).
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub orientation: LegendOrientation,
    pub x: f64,
    pub y: f64,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            orientation: LegendOrientation::Vertical,
            x: 1.0,
            y: 1.0,
            x_anchor: XAnchor::Right,
            y_anchor: YAnchor::Top,
        }
    }
}

/// Fixed numeric axis range with a constant tick interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub dtick: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, dtick: f64) -> Self {
        Self { min, max, dtick }
    }

    /// Range from zero that fits `max_value` with 10% headroom, ticking every 1.
    pub fn auto(max_value: f64) -> Self {
        let max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };
        Self::new(0.0, max, 1.0)
    }

    /// Tick positions `min + k * dtick` inside the range.
    pub fn ticks(&self) -> Vec<f64> {
        if self.dtick <= 0.0 || self.max < self.min {
            return Vec::new();
        }
        let count = ((self.max - self.min) / self.dtick + 1e-9).floor() as usize + 1;
        (0..count)
            .map(|k| self.min + k as f64 * self.dtick)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub title: Option<String>,
    /// `None` lets the renderer derive the range from the data.
    pub range: Option<AxisRange>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub title: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub bar_mode: BarMode,
    pub legend: Legend,
}

/// One named bar series over categorical x values.
#[derive(Debug, Clone, PartialEq)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    /// `#RRGGBB`
    pub marker_color: String,
    /// Clamp bars to the axis range when true.
    pub clip_on_axis: bool,
}

impl BarTrace {
    pub fn new(name: impl Into<String>, x: Vec<String>, y: Vec<f64>, marker_color: &str) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            marker_color: marker_color.to_string(),
            clip_on_axis: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub traces: Vec<BarTrace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trace(&mut self, trace: BarTrace) {
        self.traces.push(trace);
    }

    /// Apply `f` to every trace.
    pub fn update_traces(&mut self, mut f: impl FnMut(&mut BarTrace)) {
        self.traces.iter_mut().for_each(|trace| f(trace));
    }

    /// Categories in first-seen order across all traces.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for trace in &self.traces {
            for x in &trace.x {
                if !categories.contains(x) {
                    categories.push(x.clone());
                }
            }
        }
        categories
    }

    /// Largest value any category reaches, summed per category in stack mode.
    pub fn max_extent(&self) -> f64 {
        match self.layout.bar_mode {
            BarMode::Group => self
                .traces
                .iter()
                .flat_map(|t| t.y.iter().copied())
                .fold(0.0, f64::max),
            BarMode::Stack => self
                .categories()
                .iter()
                .map(|category| {
                    self.traces
                        .iter()
                        .filter_map(|t| {
                            t.x.iter().position(|x| x == category).and_then(|i| t.y.get(i))
                        })
                        .filter(|v| **v > 0.0)
                        .sum::<f64>()
                })
                .fold(0.0, f64::max),
        }
    }

    /// The fixed y range, or one derived from the data.
    pub fn y_range(&self) -> AxisRange {
        self.layout
            .y_axis
            .range
            .unwrap_or_else(|| AxisRange::auto(self.max_extent()))
    }
}
