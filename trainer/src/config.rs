use std::{env, fmt, num::NonZeroUsize, path::PathBuf, str::FromStr};

use machine_learning::artifact::DEFAULT_MODEL_PATH;

use crate::error::TrainerErr;

/// Amount of rows generated when `SAMPLES` isn't set.
pub const DEFAULT_SAMPLES: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Settings of a single training run.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Amount of synthetic rows to fit on.
    pub samples: NonZeroUsize,
    /// Seed for the data generator, a fresh one is used on every run if missing.
    pub seed: Option<u64>,
    /// Where the fitted model is written to.
    pub model_path: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: None,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl TrainingConfig {
    /// Reads the configuration from the `SAMPLES`, `SEED` and `MODEL_PATH` environment
    /// variables, falling back to the defaults for the missing ones.
    ///
    /// # Errors
    /// Returns `TrainerErr::InvalidConfig` if a variable can't be parsed.
    pub fn from_env() -> Result<Self, TrainerErr> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`TrainingConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TrainerErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(samples) = parse::<usize, _>(&lookup, "SAMPLES")? {
            config.samples = NonZeroUsize::new(samples)
                .ok_or_else(|| TrainerErr::InvalidConfig("SAMPLES must be positive".into()))?;
        }

        config.seed = parse(&lookup, "SEED")?;

        if let Some(path) = lookup("MODEL_PATH") {
            config.model_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse<T, F>(lookup: &F, key: &str) -> Result<Option<T>, TrainerErr>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| TrainerErr::InvalidConfig(format!("{key}={raw}: {e}")))
        })
        .transpose()
}
