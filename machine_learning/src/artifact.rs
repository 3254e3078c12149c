use std::{fs, path::Path};

use log::info;

use crate::{
    arch::LinearRegression,
    error::{MlErr, Result},
};

/// Default location of the model artifact.
pub const DEFAULT_MODEL_PATH: &str = "model.json";

impl LinearRegression {
    /// Writes the model's parameters as JSON, replacing any previous file at `path`.
    ///
    /// # Returns
    /// An error if a parameter isn't finite or the file can't be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.check_finite()?;

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("model saved to {}", path.display());
        Ok(())
    }

    /// Reads a model previously written by [`LinearRegression::save`].
    ///
    /// # Returns
    /// An error if the file is missing, isn't a model or holds non finite parameters.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;

        let model: Self = serde_json::from_str(&json)?;
        model.check_finite()?;
        info!("model loaded from {}", path.display());
        Ok(model)
    }

    fn check_finite(&self) -> Result<()> {
        for (field, value) in [("slope", self.slope()), ("intercept", self.intercept())] {
            if !value.is_finite() {
                return Err(MlErr::CorruptModel { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn round_trip() {
        let file = NamedTempFile::new().unwrap();
        let model = LinearRegression::new(0.9876543210123, 1.2345678901234e-3);

        model.save(file.path()).unwrap();
        let loaded = LinearRegression::load(file.path()).unwrap();

        assert_eq!(loaded, model);
    }

    #[test]
    fn overwrites() {
        let file = NamedTempFile::new().unwrap();

        LinearRegression::new(1., 2.).save(file.path()).unwrap();
        LinearRegression::new(3., 4.).save(file.path()).unwrap();

        let loaded = LinearRegression::load(file.path()).unwrap();
        assert_eq!(loaded, LinearRegression::new(3., 4.));
    }

    #[test]
    fn file_layout() {
        let file = NamedTempFile::new().unwrap();
        LinearRegression::new(1.5, -2.).save(file.path()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "slope": 1.5, "intercept": -2.0 }));
    }

    #[test]
    fn missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinearRegression::load(dir.path().join("model.json")).unwrap_err();
        assert!(matches!(err, MlErr::Io(_)));
    }

    #[test]
    fn malformed() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{\"slope\": 1.0}").unwrap();

        let err = LinearRegression::load(file.path()).unwrap_err();
        assert!(matches!(err, MlErr::Json(_)));
    }

    #[test]
    fn not_finite() {
        let file = NamedTempFile::new().unwrap();
        let err = LinearRegression::new(f64::NAN, 0.)
            .save(file.path())
            .unwrap_err();
        assert!(matches!(err, MlErr::CorruptModel { field: "slope", .. }));
    }
}
