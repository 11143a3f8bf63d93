use inkwell::module::{Linkage, Module};
use pochi_common::BuildError;
use rustc_hash::FxHashSet;

/// The function-symbol inventory of an IR module.
///
/// `definitions` holds symbols with an IR body; `declarations` holds every
/// symbol with qualifying linkage, so each definition is also a declaration
/// and a pure declaration is an external reference with no body here.
/// `declaration_order` records first-seen module order for deterministic
/// iteration.
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub definitions: FxHashSet<String>,
    pub declarations: FxHashSet<String>,
    declaration_order: Vec<String>,
}

impl SymbolTable {
    /// Record a qualifying symbol, with or without a body.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateSymbol`] if the name was already
    /// recorded.
    pub fn record(&mut self, name: &str, has_body: bool) -> Result<(), BuildError> {
        if !self.declarations.insert(name.to_string()) {
            return Err(BuildError::DuplicateSymbol(name.to_string()));
        }
        if has_body {
            self.definitions.insert(name.to_string());
        }
        self.declaration_order.push(name.to_string());
        Ok(())
    }

    pub fn is_definition(&self, name: &str) -> bool {
        self.definitions.contains(name)
    }

    pub fn is_declaration(&self, name: &str) -> bool {
        self.declarations.contains(name)
    }

    /// Every declared symbol, in module order.
    pub fn declarations_in_order(&self) -> &[String] {
        &self.declaration_order
    }

    /// Pure declarations: declared but with no body in this module.
    pub fn pure_declarations(&self) -> impl Iterator<Item = &String> {
        self.declaration_order
            .iter()
            .filter(|name| !self.definitions.contains(name.as_str()))
    }
}

/// Linkages under which a symbol participates in address matching. Anything
/// else (internal, private, …) is invisible to the interpreter and ignored.
fn qualifying_linkage(linkage: Linkage) -> bool {
    matches!(
        linkage,
        Linkage::External
            | Linkage::WeakODR
            | Linkage::LinkOnceODR
            | Linkage::ExternalWeak
            | Linkage::AvailableExternally
    )
}

/// Walk all function symbols in the module and classify each qualifying one
/// as a definition or a pure declaration.
///
/// # Errors
///
/// Returns [`BuildError::DuplicateSymbol`] if a qualifying symbol is seen
/// twice; the module is internally inconsistent in that case.
pub fn classify_module(module: &Module) -> Result<SymbolTable, BuildError> {
    let mut table = SymbolTable::default();
    for function in module.get_functions() {
        if !qualifying_linkage(function.get_linkage()) {
            continue;
        }
        let name = function.get_name().to_string_lossy().into_owned();
        // A function with no basic blocks is a declaration only.
        table.record(&name, function.count_basic_blocks() > 0)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkwell::context::Context;

    /// Build a module with one defined function, one pure declaration, and
    /// one internal function that must be ignored.
    fn sample_module(context: &Context) -> Module<'_> {
        let module = context.create_module("classify");
        let fn_type = context.void_type().fn_type(&[], false);
        let builder = context.create_builder();

        let defined = module.add_function("defined_op", fn_type, Some(Linkage::External));
        builder.position_at_end(context.append_basic_block(defined, "entry"));
        builder.build_return(None).unwrap();

        module.add_function("declared_op", fn_type, Some(Linkage::External));

        let internal = module.add_function("helper", fn_type, Some(Linkage::Internal));
        builder.position_at_end(context.append_basic_block(internal, "entry"));
        builder.build_return(None).unwrap();

        module
    }

    #[test]
    fn definitions_and_declarations_are_split() {
        let context = Context::create();
        let module = sample_module(&context);
        let table = classify_module(&module).unwrap();

        assert!(table.is_definition("defined_op"));
        assert!(table.is_declaration("defined_op"));
        assert!(!table.is_definition("declared_op"));
        assert!(table.is_declaration("declared_op"));
    }

    #[test]
    fn non_qualifying_linkage_is_ignored() {
        let context = Context::create();
        let module = sample_module(&context);
        let table = classify_module(&module).unwrap();

        assert!(!table.is_declaration("helper"));
        assert!(!table.is_definition("helper"));
    }

    #[test]
    fn declaration_order_is_module_order() {
        let context = Context::create();
        let module = sample_module(&context);
        let table = classify_module(&module).unwrap();

        assert_eq!(table.declarations_in_order(), ["defined_op", "declared_op"]);
        let pure: Vec<&String> = table.pure_declarations().collect();
        assert_eq!(pure, [&"declared_op".to_string()]);
    }

    #[test]
    fn link_once_odr_bodies_are_definitions() {
        let context = Context::create();
        let module = context.create_module("odr");
        let fn_type = context.void_type().fn_type(&[], false);
        let builder = context.create_builder();

        let folded = module.add_function("inline_op", fn_type, Some(Linkage::LinkOnceODR));
        builder.position_at_end(context.append_basic_block(folded, "entry"));
        builder.build_return(None).unwrap();

        let table = classify_module(&module).unwrap();
        assert!(table.is_definition("inline_op"));
    }
}
