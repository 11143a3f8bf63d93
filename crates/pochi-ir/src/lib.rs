//! LLVM bitcode loading and symbol classification.
//!
//! The builder's input is a single bitcode module containing the enumeration
//! entry point and one function body per expected template instantiation.
//! This crate parses that module (via the Inkwell safe bindings) and
//! inventories its function symbols: which are *definitions* (carry an IR
//! body) and which are mere *declarations* (externally visible references
//! with no body here).

pub mod loader;
pub mod symbols;

pub use loader::load_bitcode;
pub use symbols::{classify_module, SymbolTable};
