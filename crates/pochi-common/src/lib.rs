//! Shared vocabulary for the Pochi boilerplate builder.
//!
//! This crate holds the types every other crate in the workspace speaks:
//! the closed [`AstNodeKind`] enumeration that keys the output manifest,
//! and the [`BuildError`] fatal-error model for the whole pipeline.

pub mod ast_kind;
pub mod error;

pub use ast_kind::AstNodeKind;
pub use error::BuildError;
