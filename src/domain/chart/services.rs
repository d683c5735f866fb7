use super::entities::{ChartPoint, DashboardProjection, Tick, TooltipContent};
use super::value_objects::AxisRange;
use crate::domain::environment::{Reading, TemperatureUnit};

/// Physical temperature range shown on the left axis, in Celsius.
pub const DEFAULT_TEMPERATURE_AXIS_C: AxisRange = AxisRange { min: 15.0, max: 30.0 };
pub const TEMPERATURE_TICK_COUNT: usize = 6;
pub const HUMIDITY_TICK_COUNT: usize = 5;
const HUMIDITY_STEP: f64 = 20.0;
const EMPTY_PLACEHOLDER: &str = "-";

/// Builds render-ready projections from stored Celsius readings.
///
/// Conversion happens here on every call; stored readings are never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartProjector {
    temperature_axis_celsius: AxisRange,
}

impl Default for ChartProjector {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_AXIS_C)
    }
}

impl ChartProjector {
    pub fn new(temperature_axis_celsius: AxisRange) -> Self {
        Self { temperature_axis_celsius }
    }

    /// Fixed axis converted to `unit`; independent of the data.
    pub fn temperature_axis(&self, unit: TemperatureUnit) -> AxisRange {
        self.temperature_axis_celsius.map(|c| unit.from_celsius(c))
    }

    pub fn project<'a, I>(&self, readings: I, unit: TemperatureUnit) -> DashboardProjection
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        let mut latest: Option<&Reading> = None;
        let points: Vec<ChartPoint> = readings
            .into_iter()
            .inspect(|r| latest = Some(*r))
            .map(|r| ChartPoint {
                label: r.timestamp.clone(),
                temperature: r.temperature.in_unit(unit),
                humidity: r.humidity.percent(),
            })
            .collect();

        let temperature_axis = self.temperature_axis(unit);
        let humidity_axis = humidity_axis(points.iter().map(|p| p.humidity));

        DashboardProjection {
            temperature_ticks: ticks(&temperature_axis, TEMPERATURE_TICK_COUNT),
            humidity_ticks: ticks(&humidity_axis, HUMIDITY_TICK_COUNT),
            temperature_axis,
            humidity_axis,
            temperature_series_name: format!("Temperature ({})", unit.symbol()),
            humidity_series_name: "Humidity (%)".to_string(),
            latest_temperature: latest
                .map(|r| r.temperature.format(unit))
                .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string()),
            latest_humidity: latest
                .map(|r| r.humidity.format())
                .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string()),
            points,
        }
    }
}

/// Projection with the default 15–30 °C temperature axis.
pub fn project<'a, I>(readings: I, unit: TemperatureUnit) -> DashboardProjection
where
    I: IntoIterator<Item = &'a Reading>,
{
    ChartProjector::default().project(readings, unit)
}

/// `[0, max]` with `max` rounded up to the next multiple of 20, capped at 100.
pub fn humidity_axis(values: impl IntoIterator<Item = f64>) -> AxisRange {
    let max = values.into_iter().filter(|v| v.is_finite()).fold(None, |acc: Option<f64>, v| {
        Some(acc.map_or(v, |m| m.max(v)))
    });
    match max {
        Some(max) if max > 0.0 => {
            let top = ((max / HUMIDITY_STEP).ceil() * HUMIDITY_STEP).clamp(HUMIDITY_STEP, 100.0);
            AxisRange::new(0.0, top)
        }
        _ => AxisRange::new(0.0, 100.0),
    }
}

fn ticks(axis: &AxisRange, count: usize) -> Vec<Tick> {
    axis.ticks(count)
        .into_iter()
        .map(|value| Tick { value, label: format!("{:.0}", value) })
        .collect()
}

/// Hover card for `point`, whose temperature is already in `unit`.
pub fn tooltip(point: &ChartPoint, unit: TemperatureUnit) -> TooltipContent {
    TooltipContent {
        time: format!("Time: {}", point.label),
        temperature: format!("Temperature: {:.1}{}", point.temperature, unit.symbol()),
        humidity: format!("Humidity: {:.1}%", point.humidity),
    }
}
