use inkwell::execution_engine::ExecutionEngine;
use pochi_common::BuildError;
use pochi_ir::SymbolTable;

use crate::engine;
use crate::fake::FakeAddressAllocator;

/// The layered symbol resolution for the module's declared symbols.
///
/// Layering order is fixed: a symbol defined in the module resolves to its
/// JIT'd body; a pure declaration resolves against the host process; any
/// remaining external receives a fake address. [`SymbolResolver::install`]
/// publishes the fake addresses into LLVM's explicit symbol table *before*
/// compilation, so relocation and the later [`lookup`](Self::lookup) calls
/// observe identical numbers.
#[derive(Debug)]
pub struct SymbolResolver {
    fakes: FakeAddressAllocator,
}

impl SymbolResolver {
    /// Assign addresses for every pure declaration in the table: host
    /// process first, fake address otherwise. Host hooks must already be
    /// registered, and the execution engine must not have compiled the
    /// module yet.
    pub fn install(symbols: &SymbolTable) -> SymbolResolver {
        let mut fakes = FakeAddressAllocator::new();
        for name in symbols.pure_declarations() {
            if engine::search_in_process(name).is_none() {
                let addr = fakes.allocate(name);
                engine::add_symbol(name, addr);
            }
        }
        SymbolResolver { fakes }
    }

    /// The final address of a declared symbol, after JIT materialization.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::JitBuildFailed`] if a symbol that ought to have
    /// an address has none; that indicates an engine-level inconsistency,
    /// not a bad registration.
    pub fn lookup(
        &self,
        ee: &ExecutionEngine,
        symbols: &SymbolTable,
        name: &str,
    ) -> Result<u64, BuildError> {
        if symbols.is_definition(name) {
            ee.get_function_address(name)
                .map(|addr| addr as u64)
                .map_err(|e| {
                    BuildError::JitBuildFailed(format!("lookup of `{name}` failed: {e}"))
                })
        } else {
            engine::search_in_process(name)
                .or_else(|| self.fakes.address_of(name))
                .ok_or_else(|| {
                    BuildError::JitBuildFailed(format!(
                        "no address for declared symbol `{name}`"
                    ))
                })
        }
    }

    /// How many externals received fake addresses.
    pub fn fake_count(&self) -> usize {
        self.fakes.len()
    }
}
