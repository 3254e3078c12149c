use std::io;

use log::{error, info};
use tokio::{net::TcpListener, signal};

use predictor::{AppState, ServiceConfig};

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let config = ServiceConfig::from_env()?;
    let state = AppState::load(&config.model_path).map_err(|e| {
        error!("can't serve without a model: {e}");
        io::Error::from(e)
    })?;

    let listener = TcpListener::bind(config.addr()).await?;
    predictor::serve(listener, state, async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for SIGINT: {e}");
            std::future::pending::<()>().await;
        }
        info!("received SIGINT, shutting down");
    })
    .await
}
