use std::num::NonZeroUsize;

use machine_learning::{LinearRegression, MlErr};
use trainer::{TrainerErr, TrainingConfig};

fn config(dir: &tempfile::TempDir, seed: Option<u64>) -> TrainingConfig {
    TrainingConfig {
        samples: NonZeroUsize::new(1000).unwrap(),
        seed,
        model_path: dir.path().join("model.json"),
    }
}

#[test]
fn writes_a_loadable_model() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, Some(3));

    let report = trainer::train(&config).unwrap();
    assert_eq!(report.samples, 1000);
    assert_eq!(report.path, config.model_path);

    let loaded = LinearRegression::load(&config.model_path).unwrap();
    assert_eq!(loaded, report.model);
}

#[test]
fn learns_the_identity() {
    let dir = tempfile::tempdir().unwrap();
    let report = trainer::train(&config(&dir, Some(2024))).unwrap();

    assert!((report.model.slope() - 1.).abs() < 0.1, "{:?}", report.model);
    assert!(report.model.intercept().abs() < 7., "{:?}", report.model);
    assert!(report.r2 > 0.7);
}

#[test]
fn unseeded_runs_still_fit() {
    let dir = tempfile::tempdir().unwrap();
    let report = trainer::train(&config(&dir, None)).unwrap();
    assert!((report.model.slope() - 1.).abs() < 0.2, "{:?}", report.model);
}

#[test]
fn same_seed_same_model() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    let first = trainer::train(&config(&a, Some(9))).unwrap();
    let second = trainer::train(&config(&b, Some(9))).unwrap();
    assert_eq!(first.model, second.model);
}

#[test]
fn overwrites_previous_model() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(&dir, Some(5));
    LinearRegression::new(100., 100.)
        .save(&config.model_path)
        .unwrap();

    let report = trainer::train(&config).unwrap();
    let loaded = LinearRegression::load(&config.model_path).unwrap();
    assert_eq!(loaded, report.model);
    assert_ne!(loaded, LinearRegression::new(100., 100.));
}

#[test]
fn unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrainingConfig {
        model_path: dir.path().join("missing").join("model.json"),
        ..config(&dir, Some(1))
    };

    let err = trainer::train(&config).unwrap_err();
    assert!(matches!(err, TrainerErr::Ml(MlErr::Io(_))));
}
