//! The compile-time meta-parameter model of the Pochi boilerplate builder.
//!
//! A *meta-var* is a compile-time parameter of an interpreter function
//! template: a primitive type choice, a boolean flag, or an enum selector.
//! For each AST node kind the framework declares an ordered meta-var spec;
//! every legal assignment of values to that spec is *materialized* into one
//! separately-compiled function body, and this crate models that enumeration.
//!
//! ## Architecture
//!
//! - [`primitive`]: the fixed ordered primitive-type domain and its helpers
//! - [`spec`]: meta-var kinds, specs, and materialized instances
//! - [`enums`]: the registry of externally-declared enum domains
//! - [`materialize`]: depth-first Cartesian enumeration with selector filtering
//! - [`stringify`]: the reflective type-name parser used for enum meta-vars
//! - [`registry`]: the process-wide ordered collection of boilerplate packs
//!
//! Enumeration order is a public contract: the interpreter indexes into the
//! emitted manifest positionally, so the canonical order defined here is part
//! of the binary interface.

pub mod enums;
pub mod materialize;
pub mod primitive;
pub mod registry;
pub mod spec;
pub mod stringify;

pub use enums::EnumRegistry;
pub use materialize::materialize;
pub use primitive::PrimitiveType;
pub use registry::{BoilerplatePack, Registry};
pub use spec::{MetaVarInstance, MetaVarKind, MetaVarParam, MetaVarSpec};
