use ndarray::{Array2, ArrayView1, Axis};

use crate::{
    error::{MlErr, Result},
    generation::SampleGen,
};

/// Amount of rows requested from a generator at a time.
const CHUNK_ROWS: usize = 256;

/// An in-memory labeled dataset stored row by row, features first and targets last.
#[derive(Debug, Clone)]
pub struct Dataset {
    x_size: usize,
    y_size: usize,
    data: Array2<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `data` - The flattened rows of the dataset.
    /// * `x_size` - The amount of features per row.
    /// * `y_size` - The amount of targets per row.
    ///
    /// # Returns
    /// An error if the sizes are zero or `data` doesn't hold a whole amount of rows.
    pub fn new(data: Vec<f64>, x_size: usize, y_size: usize) -> Result<Self> {
        if x_size == 0 || y_size == 0 {
            return Err(MlErr::SizeMismatch {
                a: "x_size",
                b: "y_size",
                got: x_size.min(y_size),
                expected: 1,
            });
        }

        let row_size = x_size + y_size;
        let rows = data.len() / row_size;
        let got = data.len();

        let data = Array2::from_shape_vec((rows, row_size), data).map_err(|_| {
            MlErr::SizeMismatch {
                a: "data",
                b: "row size",
                got,
                expected: rows * row_size,
            }
        })?;

        Ok(Self {
            x_size,
            y_size,
            data,
        })
    }

    /// Drains a sample generator into a new `Dataset`.
    ///
    /// # Arguments
    /// * `sample_gen` - The generator of rows.
    /// * `x_size` - The amount of features per row.
    /// * `y_size` - The amount of targets per row.
    pub fn generate<G: SampleGen>(sample_gen: &mut G, x_size: usize, y_size: usize) -> Result<Self> {
        let mut data = Vec::new();
        while let Some(rows) = sample_gen.sample(CHUNK_ROWS) {
            data.extend(rows);
        }

        Self::new(data, x_size, y_size)
    }

    /// Returns the amount of rows.
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    /// Returns the first feature column.
    pub fn feature(&self) -> ArrayView1<'_, f64> {
        self.data.index_axis(Axis(1), 0)
    }

    /// Returns the first target column.
    pub fn target(&self) -> ArrayView1<'_, f64> {
        self.data.index_axis(Axis(1), self.x_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<Vec<f64>>);

    impl SampleGen for Fixed {
        fn sample(&mut self, _n: usize) -> Option<Vec<f64>> {
            self.0.take()
        }
    }

    #[test]
    fn columns() {
        let dataset = Dataset::new(vec![1., 2., 3., 4., 5., 6.], 1, 1).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.feature().to_vec(), vec![1., 3., 5.]);
        assert_eq!(dataset.target().to_vec(), vec![2., 4., 6.]);
        assert_eq!((dataset.x_size(), dataset.y_size()), (1, 1));
    }

    #[test]
    fn partial_row() {
        let err = Dataset::new(vec![1., 2., 3.], 1, 1).unwrap_err();
        assert!(matches!(err, MlErr::SizeMismatch { got: 3, .. }));
    }

    #[test]
    fn zero_sizes() {
        assert!(Dataset::new(vec![], 0, 1).is_err());
        assert!(Dataset::new(vec![], 1, 0).is_err());
    }

    #[test]
    fn empty() {
        let dataset = Dataset::new(vec![], 1, 1).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn generated() {
        let mut sample_gen = Fixed(Some(vec![1., 2., 3., 4.]));
        let dataset = Dataset::generate(&mut sample_gen, 1, 1).unwrap();
        assert_eq!(dataset.len(), 2);
    }
}
