mod least_squares;
mod trainer;

pub use least_squares::LeastSquares;
pub use trainer::{Fit, Trainer};
