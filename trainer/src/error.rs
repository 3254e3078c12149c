use std::fmt;

use machine_learning::MlErr;

/// All errors that can occur while training.
#[derive(Debug)]
pub enum TrainerErr {
    /// Invalid configuration, caught before generating any data.
    InvalidConfig(String),
    /// Generating, fitting or saving the model failed.
    Ml(MlErr),
}

impl fmt::Display for TrainerErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Ml(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for TrainerErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlErr> for TrainerErr {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}
