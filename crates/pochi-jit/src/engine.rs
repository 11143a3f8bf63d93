//! Execution-engine construction and entry-point invocation.
//!
//! The module is moved into LLVM's JIT and executed in-process; symbol
//! resolution for its undefined externals goes through LLVM's explicit
//! symbol table, which we populate with the host hooks (and, later, fake
//! addresses) before the first lookup forces compilation.

use std::ffi::{c_char, c_void, CString};
use std::sync::Once;

use inkwell::execution_engine::ExecutionEngine;
use inkwell::module::Module;
use inkwell::targets::{InitializationConfig, Target};
use inkwell::OptimizationLevel;
use pochi_common::BuildError;
use pochi_metavar::registry::{self, Registry};

use crate::{hook, ENTRY_POINT_SYMBOL, REGISTER_BOILERPLATE_SYMBOL, REPORT_INFO_SYMBOL};

// LLVM's explicit-symbol API for JIT resolution. Inkwell does not expose
// these, so we call into llvm-sys through the re-exported C bindings.
extern "C" {
    fn LLVMAddSymbol(name: *const c_char, value: *mut c_void);
    fn LLVMSearchForAddressOfSymbol(name: *const c_char) -> *mut c_void;
}

/// Publish an address under a symbol name for JIT resolution.
pub(crate) fn add_symbol(name: &str, addr: u64) {
    let c_name = CString::new(name).unwrap();
    unsafe {
        LLVMAddSymbol(c_name.as_ptr(), addr as usize as *mut c_void);
    }
}

/// Resolve a name against the host process: the explicit symbol table
/// first, then the dynamic libraries currently loaded.
pub(crate) fn search_in_process(name: &str) -> Option<u64> {
    let c_name = CString::new(name).unwrap();
    let addr = unsafe { LLVMSearchForAddressOfSymbol(c_name.as_ptr()) };
    if addr.is_null() {
        None
    } else {
        Some(addr as usize as u64)
    }
}

static HOST_SYMBOLS: Once = Once::new();

/// Publish the host hooks the JIT'd enumeration code links against: the
/// boilerplate registration hook and the opaque reporting sink.
///
/// Must run before the execution engine compiles the module. Subsequent
/// calls are no-ops.
pub fn register_host_symbols() {
    HOST_SYMBOLS.call_once(|| {
        add_symbol(
            REGISTER_BOILERPLATE_SYMBOL,
            hook::__pochivm_register_fast_interp_boilerplate__ as usize as u64,
        );
        add_symbol(
            REPORT_INFO_SYMBOL,
            hook::__pochivm_report_info__ as usize as u64,
        );
    });
}

/// Build a JIT execution engine over the module.
///
/// The engine owns the compiled code; the module and its context must stay
/// alive for the engine's lifetime. No optimization is applied -- the bodies
/// are only ever address-compared, never benchmarked.
///
/// # Errors
///
/// Returns [`BuildError::JitBuildFailed`] if native-target initialization or
/// engine construction fails.
pub fn create_execution_engine<'ctx>(
    module: &Module<'ctx>,
) -> Result<ExecutionEngine<'ctx>, BuildError> {
    Target::initialize_native(&InitializationConfig::default())
        .map_err(BuildError::JitBuildFailed)?;
    module
        .create_jit_execution_engine(OptimizationLevel::None)
        .map_err(|e| BuildError::JitBuildFailed(e.to_string()))
}

/// Look up the enumeration entry point and invoke it exactly once, with the
/// registry collection bracketed around the call. The entry point's side
/// effect is to register every boilerplate pack through the hook.
///
/// # Errors
///
/// Returns [`BuildError::EntrypointMissing`] if the entry symbol is absent.
pub fn collect_boilerplate(ee: &ExecutionEngine) -> Result<Registry, BuildError> {
    let entry = unsafe { ee.get_function::<unsafe extern "C" fn()>(ENTRY_POINT_SYMBOL) }
        .map_err(|_| BuildError::EntrypointMissing(ENTRY_POINT_SYMBOL.to_string()))?;
    registry::begin_collection();
    unsafe { entry.call() };
    Ok(registry::finish_collection())
}
