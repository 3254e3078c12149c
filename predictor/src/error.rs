use std::{error::Error, fmt, io};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use machine_learning::MlErr;
use serde::Serialize;

/// Reasons for refusing a prediction request that did parse.
#[derive(Debug, PartialEq)]
pub enum PredictErr {
    EmptyMarks { student_id: i64 },
    NotFinite { student_id: i64 },
}

impl fmt::Display for PredictErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictErr::EmptyMarks { .. } => write!(f, "previousMarks must not be empty"),
            PredictErr::NotFinite { .. } => {
                write!(f, "the average or the prediction is not a finite number")
            }
        }
    }
}

impl Error for PredictErr {}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for PredictErr {
    fn into_response(self) -> Response {
        let status = match self {
            PredictErr::EmptyMarks { .. } | PredictErr::NotFinite { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Failures that keep the service from starting.
#[derive(Debug)]
pub enum ServiceErr {
    InvalidConfig(String),
    Model(MlErr),
    Io(io::Error),
}

impl fmt::Display for ServiceErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            ServiceErr::Model(e) => write!(f, "unable to load model: {e}"),
            ServiceErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for ServiceErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ServiceErr::Model(e) => Some(e),
            ServiceErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlErr> for ServiceErr {
    fn from(value: MlErr) -> Self {
        Self::Model(value)
    }
}

impl From<io::Error> for ServiceErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Boundary conversion for binaries / I/O APIs.
impl From<ServiceErr> for io::Error {
    fn from(value: ServiceErr) -> Self {
        match value {
            ServiceErr::Io(e) => e,
            ServiceErr::Model(MlErr::Io(e)) => e,
            other @ ServiceErr::InvalidConfig(_) => io::Error::new(io::ErrorKind::InvalidInput, other),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
