use ndarray::{Array1, ArrayView1};

pub trait Model {
    /// Evaluates the model on a single feature value.
    fn predict(&self, x: f64) -> f64;

    /// Evaluates the model on every value of `x`.
    ///
    /// # Arguments
    /// * `x` - A column of feature values.
    ///
    /// # Returns
    /// The predictions, in the same order as `x`.
    fn predict_batch(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|x| self.predict(x))
    }
}
