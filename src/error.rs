//! Generation-time error taxonomy.
//!
//! Every variant here is a schema or build defect: generation aborts before
//! any artifact is written. Call-site defects (bad callback, conversion
//! failure) and native dispatch failures are runtime behavior of the emitted
//! C++ and never surface as Rust errors.

use crate::schema::{ArgGroup, CallForm};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// args_out is empty or its first group is not Status.
    #[error("call '{call}' must return Status as its first output group")]
    MissingStatus { call: String },

    /// args_out matches none of the four legal return shapes.
    #[error("call '{call}' has unsupported output shape '{shape}'")]
    UnsupportedReturnShape { call: String, shape: String },

    /// A (form, group) pair appears in some call's args_in but has no
    /// entry in the annotation table.
    #[error("no parameter description for ({form:?}, {group:?})")]
    MissingAnnotation { form: CallForm, group: ArgGroup },

    #[error("invalid schema JSON: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}
