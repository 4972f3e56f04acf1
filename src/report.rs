//! The sample report: one addition and one distance, rendered as two lines.

use crate::arith::add;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values the report is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleInputs {
    pub a: i64,
    pub b: i64,
    pub from: Point,
    pub to: Point,
}

impl Default for SampleInputs {
    fn default() -> Self {
        Self {
            a: 1,
            b: 2,
            from: Point::new(0.0, 0.0),
            to: Point::new(3.0, 4.0),
        }
    }
}

/// How the distance value is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceStyle {
    /// Shortest string that round-trips, always with a fractional part (`5.0`).
    #[default]
    Shortest,
    /// Fixed number of decimal places (`Fixed(6)` gives `5.000000`).
    Fixed(usize),
}

impl DistanceStyle {
    pub fn from_precision(precision: Option<usize>) -> Self {
        precision.map_or(Self::Shortest, Self::Fixed)
    }

    pub fn format(&self, value: f64) -> String {
        match *self {
            Self::Shortest => format!("{value:?}"),
            Self::Fixed(places) => format!("{value:.places$}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleReport {
    pub sum: i64,
    pub distance: f64,
}

impl SampleReport {
    pub fn compute(inputs: &SampleInputs) -> Self {
        let sum = add(inputs.a, inputs.b);
        tracing::debug!(a = inputs.a, b = inputs.b, sum, "computed sum");

        let distance = inputs.from.distance(&inputs.to);
        tracing::debug!(from = %inputs.from, to = %inputs.to, distance, "computed distance");

        Self { sum, distance }
    }

    /// Render both lines, without a trailing newline.
    pub fn render(&self, style: DistanceStyle) -> String {
        format!(
            "Sum: {}\nDistance: {}",
            self.sum,
            style.format(self.distance)
        )
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DistanceStyle::Shortest))
    }
}
