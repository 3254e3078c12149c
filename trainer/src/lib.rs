pub mod config;
pub mod error;

use std::path::PathBuf;

use log::info;
use machine_learning::{
    Dataset, LinearRegression,
    arch::loss::Mse,
    generation::MarksGen,
    training::Trainer,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub use config::TrainingConfig;
pub use error::TrainerErr;

/// Summary of a finished training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub model: LinearRegression,
    pub samples: usize,
    pub mse: f64,
    pub r2: f64,
    pub path: PathBuf,
}

/// Generates a synthetic marks dataset, fits a linear model on it and writes the model to
/// `config.model_path`.
///
/// # Errors
/// Returns a `TrainerErr` if the data can't be generated or the model can't be saved.
pub fn train(config: &TrainingConfig) -> Result<TrainingReport, TrainerErr> {
    let samples = config.samples.get();
    info!("generating {samples} samples");

    let dataset = match config.seed {
        Some(seed) => generate(StdRng::seed_from_u64(seed), samples)?,
        None => generate(rand::rng(), samples)?,
    };

    let fit = Trainer::new(dataset, Mse::new()).train()?;
    info!(
        slope = fit.model.slope(),
        intercept = fit.model.intercept();
        "fitted {samples} samples"
    );

    fit.model.save(&config.model_path)?;

    Ok(TrainingReport {
        model: fit.model,
        samples,
        mse: fit.loss,
        r2: fit.r2,
        path: config.model_path.clone(),
    })
}

fn generate<R: Rng>(rng: R, samples: usize) -> machine_learning::Result<Dataset> {
    let mut marks_gen = MarksGen::new(rng, samples)?;
    Dataset::generate(&mut marks_gen, 1, 1)
}
