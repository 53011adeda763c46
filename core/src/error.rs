use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preset '{name}' not found")]
    PresetNotFound { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type CrmResult<T> = Result<T, CrmError>;
