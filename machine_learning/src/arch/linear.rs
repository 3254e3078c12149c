use serde::{Deserialize, Serialize};

use super::Model;

/// A single feature linear function, `f(x) = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
}

impl LinearRegression {
    /// Creates a new `LinearRegression` from its parameters.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Model for LinearRegression {
    fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
