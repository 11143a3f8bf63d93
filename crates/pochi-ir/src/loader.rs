use std::path::Path;

use inkwell::context::Context;
use inkwell::module::Module;
use pochi_common::BuildError;

/// Parse a bitcode file into an in-memory IR module.
///
/// The module borrows the given context; the context must outlive both the
/// module and any execution engine later built from it.
///
/// # Errors
///
/// Returns [`BuildError::IrParseFailed`] with the LLVM diagnostic if the
/// file is unreadable or malformed.
pub fn load_bitcode<'ctx>(path: &Path, context: &'ctx Context) -> Result<Module<'ctx>, BuildError> {
    Module::parse_bitcode_from_path(path, context).map_err(|e| BuildError::IrParseFailed {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
