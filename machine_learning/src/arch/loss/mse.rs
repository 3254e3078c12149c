use ndarray::ArrayView1;

use super::LossFn;

/// Mean squared error loss function.
#[derive(Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }
}

impl LossFn for Mse {
    fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|x| x.powi(2))
            .mean()
            .unwrap_or_default()
    }
}
