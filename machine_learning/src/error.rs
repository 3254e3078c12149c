use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    Distribution(String),
    CorruptModel {
        field: &'static str,
        value: f64,
    },
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
            ),
            MlErr::EmptyDataset => write!(f, "Can't fit a model on an empty dataset"),
            MlErr::Distribution(msg) => write!(f, "Invalid sampling distribution: {msg}"),
            MlErr::CorruptModel { field, value } => {
                write!(f, "The model artifact holds a non finite {field}: {value}")
            }
            MlErr::Io(e) => write!(f, "io error: {e}"),
            MlErr::Json(e) => write!(f, "malformed model artifact: {e}"),
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Io(e) => Some(e),
            MlErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MlErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for MlErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<NormalError> for MlErr {
    fn from(value: NormalError) -> Self {
        Self::Distribution(value.to_string())
    }
}

impl From<UniformError> for MlErr {
    fn from(value: UniformError) -> Self {
        Self::Distribution(value.to_string())
    }
}
