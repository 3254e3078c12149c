use anyhow::Context;
use log::info;

use trainer::TrainingConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TrainingConfig::from_env()?;
    let report = trainer::train(&config)
        .with_context(|| format!("failed to train {}", config.model_path.display()))?;

    info!(
        "mse={:.4} r2={:.4} slope={:.4} intercept={:.4}",
        report.mse,
        report.r2,
        report.model.slope(),
        report.model.intercept()
    );
    println!("Model trained and saved as {}", report.path.display());
    Ok(())
}
