use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("threshold `{name}` must be within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
    #[error("suggest threshold {suggest} is above auto threshold {auto}")]
    ThresholdOrder { auto: f64, suggest: f64 },
    #[error("unknown entity class: {0}")]
    UnknownEntityClass(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
