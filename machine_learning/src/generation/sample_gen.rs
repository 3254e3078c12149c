/// A `SampleGen` produces labeled rows for a dataset.
pub trait SampleGen {
    /// Should sample at most `n` rows, flattened as `[x.., y..]` one after the other.
    ///
    /// # Arguments
    /// * `n` - The upper limit of rows to generate.
    ///
    /// # Returns
    /// An option whether the generator is exhausted.
    fn sample(&mut self, n: usize) -> Option<Vec<f64>>;
}
