//! Matching registered instance addresses back to IR symbol names.

use pochi_common::BuildError;
use pochi_ir::SymbolTable;
use pochi_metavar::Registry;
use rustc_hash::{FxHashMap, FxHashSet};

/// A reverse index from runtime address to declared symbol name.
///
/// An address claimed by more than one declaration is *ambiguous* -- the
/// toolchain folded two byte-identical bodies into one symbol, and the
/// builder refuses to guess which name won rather than resolve first-wins.
#[derive(Debug, Default)]
pub struct AddressIndex {
    by_addr: FxHashMap<u64, String>,
    ambiguous: FxHashSet<u64>,
}

impl AddressIndex {
    /// Resolve every declared symbol to its final address and index the
    /// results. `resolve` is consulted once per declaration, in the table's
    /// recorded order.
    pub fn build<'a, I, F>(declarations: I, mut resolve: F) -> Result<AddressIndex, BuildError>
    where
        I: IntoIterator<Item = &'a String>,
        F: FnMut(&str) -> Result<u64, BuildError>,
    {
        let mut index = AddressIndex::default();
        for name in declarations {
            let addr = resolve(name)?;
            if index.by_addr.contains_key(&addr) {
                index.ambiguous.insert(addr);
            }
            index.by_addr.insert(addr, name.clone());
        }
        Ok(index)
    }

    pub fn symbol_at(&self, addr: u64) -> Option<&str> {
        self.by_addr.get(&addr).map(|s| s.as_str())
    }

    pub fn is_ambiguous(&self, addr: u64) -> bool {
        self.ambiguous.contains(&addr)
    }

    pub fn len(&self) -> usize {
        self.by_addr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_addr.is_empty()
    }
}

/// Reverse-map every registered instance's address to its defining symbol,
/// filling in `symbol_name` across the whole registry.
///
/// # Errors
///
/// - [`BuildError::AmbiguousAddress`] if an instance's address is claimed by
///   two or more declarations,
/// - [`BuildError::AddressNotFound`] if the address is not in the index,
/// - [`BuildError::NotADefinition`] if the resolved symbol has no body in
///   this module -- the instantiation was never emitted into the input IR.
pub fn resolve_instances(
    registry: &mut Registry,
    index: &AddressIndex,
    symbols: &SymbolTable,
) -> Result<(), BuildError> {
    for (node_kind, pack) in registry.packs_mut() {
        for instance in &mut pack.instances {
            if index.is_ambiguous(instance.fn_addr) {
                return Err(BuildError::AmbiguousAddress {
                    node_kind: *node_kind,
                    addr: instance.fn_addr,
                });
            }
            let symbol = index.symbol_at(instance.fn_addr).ok_or_else(|| {
                BuildError::AddressNotFound {
                    node_kind: *node_kind,
                    addr: instance.fn_addr,
                }
            })?;
            if !symbols.is_definition(symbol) {
                return Err(BuildError::NotADefinition {
                    node_kind: *node_kind,
                    symbol: symbol.to_string(),
                });
            }
            instance.symbol_name = Some(symbol.to_string());
        }
    }
    Ok(())
}
