use pochi_common::BuildError;
use rustc_hash::FxHashMap;

/// The registry of externally-declared enum domains.
///
/// An enum meta-var ranges over the ordered enumerator list of a named enum
/// that the host framework declares; the builder only needs the names and
/// the order. [`EnumRegistry::with_builtins`] pre-registers the operand-shape
/// enums the interpreter templates are specialized over.
#[derive(Debug, Default)]
pub struct EnumRegistry {
    domains: FxHashMap<String, Vec<String>>,
}

impl EnumRegistry {
    pub fn new() -> EnumRegistry {
        EnumRegistry::default()
    }

    /// A registry with the interpreter's built-in operand-shape enums.
    pub fn with_builtins() -> EnumRegistry {
        let mut registry = EnumRegistry::new();
        // Distinct names into a fresh registry; registration cannot collide.
        registry
            .register(
                "FISimpleOperandShapeCategory",
                &["VARIABLE", "LITERAL_NONZERO", "ZERO"],
            )
            .expect("builtin enum names are distinct");
        registry
            .register(
                "FIOperandShapeCategory",
                &[
                    "COMPLEX",
                    "VARIABLE",
                    "VARPTR_VAR",
                    "VARPTR_LIT_NONZERO",
                    "VARPTR_DEREF",
                    "LITERAL_NONZERO",
                    "ZERO",
                ],
            )
            .expect("builtin enum names are distinct");
        registry
    }

    /// Register an enum domain. Enumerator order is the canonical
    /// enumeration order for meta-vars of this enum.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already registered; enum domains are
    /// declared once and never redefined.
    pub fn register(&mut self, name: &str, enumerators: &[&str]) -> Result<(), BuildError> {
        if self.domains.contains_key(name) {
            return Err(BuildError::MalformedRegistration(format!(
                "enum `{name}` registered twice"
            )));
        }
        self.domains.insert(
            name.to_string(),
            enumerators.iter().map(|e| e.to_string()).collect(),
        );
        Ok(())
    }

    /// The ordered enumerator list, or `None` if the name is unknown.
    pub fn enumerators(&self, name: &str) -> Option<&[String]> {
        self.domains.get(name).map(|e| e.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.domains.contains_key(name)
    }
}
