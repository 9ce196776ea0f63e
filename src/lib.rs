// Carbon: multi-level text similarity and plagiarism detection.
//
// This is the library root. The detection core (text, vectorize, similarity,
// detect) is pure and synchronous; the CLI and the optional web API are thin
// shells over detect::detect.

pub mod config;
pub mod detect;
pub mod output;
pub mod similarity;
pub mod text;
pub mod vectorize;

#[cfg(feature = "web")]
pub mod web;
