pub mod arch;
pub mod artifact;
pub mod dataset;
pub mod error;
pub mod generation;
pub mod stats;
pub mod training;

pub use arch::{LinearRegression, Model};
pub use dataset::Dataset;
pub use error::{MlErr, Result};
