use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Invalid conversion factor for {unit}: {factor}")]
    InvalidFactor { unit: String, factor: f64 },
    #[error("Duplicate unit: {0}")]
    DuplicateUnit(String),
    #[error("Unit name must not be empty")]
    EmptyUnitName,
    #[error("Conversion table must contain at least one unit")]
    EmptyTable,
}

pub type DomainResult<T> = Result<T, DomainError>;
