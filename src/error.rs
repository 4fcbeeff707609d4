#[cfg(test)]
#[path = "tests/error_test.rs"]
mod tests;
//
use sal_sync::services::entity::error::str_err::StrErr;
///
/// Failure of the draft survey calculation chain.
///
/// Every variant keeps the name of the failed stage,
/// so the caller can report which step of the chain went wrong
/// instead of a generic calculation failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    ///
    /// A correction denominator became zero after rounding.
    DegenerateGeometry { stage: String, details: String },
    ///
    /// Less than two reference rows supplied, or both rows at the same draft.
    InsufficientBracket { stage: String, details: String },
    ///
    /// Vessel class is not one of the supported weighting schemes.
    UnknownVesselClass { stage: String, class: String },
}
//
//
impl Error {
    ///
    /// Name of the failed stage.
    pub fn stage(&self) -> &str {
        match self {
            Error::DegenerateGeometry { stage, .. } => stage,
            Error::InsufficientBracket { stage, .. } => stage,
            Error::UnknownVesselClass { stage, .. } => stage,
        }
    }
}
//
//
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DegenerateGeometry { stage, details } => {
                write!(f, "{} | Degenerate geometry: {}", stage, details)
            }
            Error::InsufficientBracket { stage, details } => {
                write!(f, "{} | Insufficient bracket data: {}", stage, details)
            }
            Error::UnknownVesselClass { stage, class } => {
                write!(f, "{} | Unknown vessel class: '{}'", stage, class)
            }
        }
    }
}
//
//
impl std::error::Error for Error {}
//
//
impl From<Error> for StrErr {
    fn from(err: Error) -> Self {
        StrErr(err.to_string())
    }
}
