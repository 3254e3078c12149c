use log::info;

use crate::{
    arch::{LinearRegression, Model, loss::LossFn},
    dataset::Dataset,
    error::{MlErr, Result},
    stats,
};

use super::LeastSquares;

/// The outcome of fitting a model over a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Fit {
    pub model: LinearRegression,
    pub loss: f64,
    pub r2: f64,
}

/// Fits a linear model over a dataset and scores it on that same data.
pub struct Trainer<L: LossFn> {
    dataset: Dataset,
    solver: LeastSquares,
    loss: L,
}

impl<L: LossFn> Trainer<L> {
    pub fn new(dataset: Dataset, loss: L) -> Self {
        Self {
            dataset,
            solver: LeastSquares::new(),
            loss,
        }
    }

    pub fn train(&self) -> Result<Fit> {
        let model = self.solver.fit(&self.dataset)?;

        let y = self.dataset.target();
        let y_pred = model.predict_batch(self.dataset.feature());
        let loss = self.loss.loss(y_pred.view(), y);
        let r2 = stats::r2_score(y_pred.view(), y).ok_or(MlErr::EmptyDataset)?;
        info!(rows = self.dataset.len(), loss = loss, r2 = r2; "model fitted");

        Ok(Fit { model, loss, r2 })
    }
}
