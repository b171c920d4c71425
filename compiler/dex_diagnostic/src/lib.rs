//! Diagnostics for dex.
//!
//! Every failure the interpreter can report carries a stable [`ErrorCode`]
//! and converts into a [`Diagnostic`]: a message, labelled spans and notes.
//! The [`emitter`] module renders diagnostics against the source text.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
