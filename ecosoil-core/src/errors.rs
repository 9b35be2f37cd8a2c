use thiserror::Error;

/// Error type for invalid calculator inputs.
#[derive(Error, Debug)]
pub enum EcoSoilError {
    /// An input value failed validation before any computation ran.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    /// Farm size of zero acres: the soil-mass denominator for the SOC
    /// projection is undefined.
    #[error("degenerate farm: zero acres has no soil mass to project SOC against")]
    DegenerateFarm,
}

/// Convenience type for `Result<T, EcoSoilError>`.
pub type EcoSoilResult<T> = Result<T, EcoSoilError>;
