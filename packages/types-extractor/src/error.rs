// Extraction Errors
//
// Fatal per-declaration failures. Anything recoverable (absent files,
// external types, anonymous declarations) is handled in place and never
// surfaces here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// A set accessor must take exactly one parameter; anything else cannot
    /// be mapped to an entity without guessing.
    #[error("set accessor '{name}' must declare exactly one parameter")]
    InvalidSetAccessor { name: String },
}
