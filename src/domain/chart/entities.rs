use super::value_objects::AxisRange;
use serde::Serialize;

/// One x-axis category: a reading converted into the display unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub temperature: f64,
    pub humidity: f64,
}

/// Labeled axis tick, value already in the axis unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Everything the dashboard needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardProjection {
    pub points: Vec<ChartPoint>,
    pub temperature_axis: AxisRange,
    pub temperature_ticks: Vec<Tick>,
    pub humidity_axis: AxisRange,
    pub humidity_ticks: Vec<Tick>,
    pub temperature_series_name: String,
    pub humidity_series_name: String,
    pub latest_temperature: String,
    pub latest_humidity: String,
}

impl DashboardProjection {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Hover card contents for a single point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub time: String,
    pub temperature: String,
    pub humidity: String,
}

impl TooltipContent {
    pub fn lines(&self) -> [&str; 3] {
        [&self.time, &self.temperature, &self.humidity]
    }
}
