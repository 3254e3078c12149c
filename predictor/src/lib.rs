mod coerce;
pub mod config;
pub mod error;
pub mod routes;
pub mod service;

pub use config::ServiceConfig;
pub use error::{PredictErr, ServiceErr};
pub use routes::{PredictRequest, PredictResponse};
pub use service::{AppState, router, serve};
