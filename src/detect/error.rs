// Validation failures for the detection contract.
//
// Degenerate computations (empty vocabulary, zero-norm vectors, empty token
// unions) are not errors; they resolve to zeros inside the pipeline. The
// only failure mode is rejected input.

use thiserror::Error;

/// Input validation failure. The HTTP layer maps these to 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    /// One or both inputs are missing or blank
    #[error("Both text1 and text2 are required")]
    MissingInput,

    /// An input is shorter than the configured minimum
    #[error("Texts must be at least {min} characters long")]
    TextTooShort { min: usize },
}
