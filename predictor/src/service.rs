use std::{future::Future, io, path::Path, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use machine_learning::LinearRegression;
use tokio::net::TcpListener;

use crate::{error::ServiceErr, routes};

/// State shared across handlers, the model is never mutated after loading.
#[derive(Clone)]
pub struct AppState {
    model: Arc<LinearRegression>,
}

impl AppState {
    pub fn new(model: LinearRegression) -> Self {
        Self {
            model: Arc::new(model),
        }
    }

    /// Loads the model artifact at `path`.
    ///
    /// # Errors
    /// Returns `ServiceErr::Model` if the artifact is missing or corrupt.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServiceErr> {
        let model = LinearRegression::load(path)?;
        info!(
            slope = model.slope(),
            intercept = model.intercept();
            "serving linear model"
        );
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &LinearRegression {
        &self.model
    }
}

/// Builds the service's router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .route("/health", get(routes::health))
        .with_state(state)
}

/// Serves requests on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("listening at {}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
