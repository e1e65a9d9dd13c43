//! Embedded gesture recognition model data.
//!
//! This crate is the declaration boundary between the generated model blob
//! and the inference application that consumes it: an immutable byte buffer
//! and its declared length, embedded at build time. The bytes are opaque
//! here; loading and interpreting the serialized graph belongs to the
//! inference engine.

mod blob;
#[cfg(feature = "embedded_model")]
mod model_data;

pub use blob::*;
#[cfg(feature = "embedded_model")]
pub use model_data::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelDataError {
    #[error("model data is empty")]
    EmptyModel,

    #[error("declared length {declared} does not match actual byte count {actual}")]
    LengthMismatch { declared: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ModelDataError>;
