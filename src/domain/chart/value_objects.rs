use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Value Object - closed numeric range of an axis
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { min: f(self.min), max: f(self.max) }
    }

    /// Position of `value` inside the range, 0.0 at `min` and 1.0 at `max`.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.span() == 0.0 {
            return 0.5;
        }
        (value - self.min) / self.span()
    }

    /// `count` evenly spaced values from `min` to `max` inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count).map(|i| self.min + step * i as f64).collect()
            }
        }
    }
}

/// Value Object - margins around the plot area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        // Room for tick labels on both y-axes, x labels and the legend.
        Self { top: 16.0, right: 56.0, bottom: 64.0, left: 56.0 }
    }
}

/// Value Object - pixel geometry of the line chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, padding: Padding::default() }
    }

    pub fn plot_left(&self) -> f64 {
        self.padding.left
    }

    pub fn plot_right(&self) -> f64 {
        (self.width - self.padding.right).max(self.padding.left)
    }

    pub fn plot_top(&self) -> f64 {
        self.padding.top
    }

    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.padding.bottom).max(self.padding.top)
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    fn step(&self, count: usize) -> f64 {
        if count <= 1 { 0.0 } else { self.plot_width() / (count - 1) as f64 }
    }

    /// Categorical x position: first point on the left edge, last on the right.
    pub fn x_for_index(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.plot_left() + self.plot_width() / 2.0;
        }
        self.plot_left() + self.step(count) * index as f64
    }

    /// Vertical position, with `axis.min` on the bottom edge. Not clamped.
    pub fn y_for_value(&self, value: f64, axis: &AxisRange) -> f64 {
        self.plot_bottom() - axis.normalize(value) * self.plot_height()
    }

    /// Nearest point index under `x`, or `None` outside the plot area.
    pub fn index_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || x < self.plot_left() || x > self.plot_right() {
            return None;
        }
        if count == 1 {
            return Some(0);
        }
        let idx = ((x - self.plot_left()) / self.step(count)).round() as usize;
        Some(idx.min(count - 1))
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.plot_left()..=self.plot_right()).contains(&x)
            && (self.plot_top()..=self.plot_bottom()).contains(&y)
    }
}
