use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Parsing error: {0}")]
    Parsing(#[from] ParsingError),
}

/// Errors raised when a formula is evaluated outside its natural domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Gravity evaluated at a non positive radial distance,
    /// i.e., altitude <= -equatorial radius.
    #[error("non positive radial distance ({radius_m} m)")]
    DegenerateRadius { radius_m: f64 },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParsingError {
    #[error("unknown celestial body \"{0}\"")]
    UnknownBody(String),
}
