use log::debug;

use crate::{
    arch::LinearRegression,
    dataset::Dataset,
    error::{MlErr, Result},
};

/// Ordinary least squares for a single feature and a single target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastSquares;

impl LeastSquares {
    /// Returns a new `LeastSquares`.
    pub fn new() -> Self {
        Self
    }

    /// Fits the line that minimizes the squared residuals over `dataset`.
    ///
    /// A feature without variance yields a flat line through the mean of the target.
    ///
    /// # Arguments
    /// * `dataset` - A dataset with exactly one feature and one target per row.
    ///
    /// # Returns
    /// The fitted model, or an error if the dataset is empty or has more than one column per
    /// side.
    pub fn fit(&self, dataset: &Dataset) -> Result<LinearRegression> {
        if dataset.x_size() != 1 {
            return Err(MlErr::SizeMismatch {
                a: "features",
                b: "model inputs",
                got: dataset.x_size(),
                expected: 1,
            });
        }

        if dataset.y_size() != 1 {
            return Err(MlErr::SizeMismatch {
                a: "targets",
                b: "model outputs",
                got: dataset.y_size(),
                expected: 1,
            });
        }

        let x = dataset.feature();
        let y = dataset.target();
        let x_mean = x.mean().ok_or(MlErr::EmptyDataset)?;
        let y_mean = y.mean().ok_or(MlErr::EmptyDataset)?;

        let dx = x.mapv(|x| x - x_mean);
        let dy = y.mapv(|y| y - y_mean);
        let sxx = dx.dot(&dx);
        let sxy = dx.dot(&dy);

        let slope = if sxx == 0. { 0. } else { sxy / sxx };
        let intercept = y_mean - slope * x_mean;
        debug!(rows = dataset.len(), slope = slope, intercept = intercept; "least squares fit");

        Ok(LinearRegression::new(slope, intercept))
    }
}
