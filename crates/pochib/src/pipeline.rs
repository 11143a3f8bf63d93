//! The build pipeline: validate args -> load IR -> classify symbols ->
//! JIT -> run the enumeration entry point -> match addresses -> render.

use std::path::{Path, PathBuf};

use inkwell::context::Context;

use pochi_common::BuildError;
use pochi_ir::{classify_module, load_bitcode};
use pochi_jit::{
    collect_boilerplate, create_execution_engine, register_host_symbols, resolve_instances,
    AddressIndex, SymbolResolver,
};

use crate::manifest;

/// Entry from the command line: exactly two paths, bitcode then object.
///
/// A wrong argument count is [`BuildError::BadArgs`], raised here before
/// any IR is touched, just like the `;` path check.
pub fn run_from_args(paths: &[PathBuf]) -> Result<String, BuildError> {
    let [bitcode_path, object_path] = paths else {
        return Err(BuildError::BadArgs(format!(
            "expected <bitcode-path> <object-path>, got {} argument(s)",
            paths.len()
        )));
    };
    run(bitcode_path, object_path)
}

/// Run the full pipeline and return the rendered manifest.
///
/// Nothing is printed here; the caller owns stdout so that no partial
/// manifest can escape on failure.
pub fn run(bitcode_path: &Path, object_path: &Path) -> Result<String, BuildError> {
    validate_path(bitcode_path)?;
    validate_path(object_path)?;

    let context = Context::create();
    let module = load_bitcode(bitcode_path, &context)?;
    let symbols = classify_module(&module)?;

    // The host hooks must be visible before the engine compiles the module,
    // and the fake addresses for unresolvable externals likewise.
    register_host_symbols();
    let ee = create_execution_engine(&module)?;
    let resolver = SymbolResolver::install(&symbols);

    let mut registry = collect_boilerplate(&ee)?;

    let index = AddressIndex::build(symbols.declarations_in_order(), |name| {
        resolver.lookup(&ee, &symbols, name)
    })?;
    resolve_instances(&mut registry, &index, &symbols)?;

    Ok(manifest::render(&registry))
}

/// Paths are forwarded into build tooling downstream; `;` is reserved there.
fn validate_path(path: &Path) -> Result<(), BuildError> {
    if path.to_string_lossy().contains(';') {
        return Err(BuildError::BadArgs(format!(
            "path '{}' contains ';'",
            path.display()
        )));
    }
    Ok(())
}
