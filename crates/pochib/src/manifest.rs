//! Rendering the resolved registry as the textual manifest.

use pochi_metavar::Registry;

/// Render one pack per AST node kind, in registration order: the kind name
/// as a header line, then one four-space-indented symbol per instance in
/// enumeration order. There is no separator between packs.
pub fn render(registry: &Registry) -> String {
    let mut out = String::new();
    for (kind, pack) in registry.packs() {
        out.push_str(kind.name());
        out.push_str(":\n");
        for instance in &pack.instances {
            out.push_str("    ");
            // The pipeline resolves every instance before rendering; an
            // unresolved instance renders as an empty name.
            if let Some(symbol) = &instance.symbol_name {
                out.push_str(symbol);
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pochi_common::AstNodeKind;
    use pochi_metavar::registry::BoilerplatePack;
    use pochi_metavar::{
        materialize, EnumRegistry, MetaVarInstance, MetaVarParam, MetaVarSpec, PrimitiveType,
    };

    fn resolved_instance(values: Vec<u64>, addr: u64, symbol: &str) -> MetaVarInstance {
        let mut instance = MetaVarInstance::new(values, addr);
        instance.symbol_name = Some(symbol.to_string());
        instance
    }

    #[test]
    fn empty_registry_renders_nothing() {
        assert_eq!(render(&Registry::new()), "");
    }

    #[test]
    fn single_bool_pack() {
        let mut registry = Registry::new();
        let spec = MetaVarSpec::new(vec![MetaVarParam::boolean("b")]);
        registry
            .append(
                AstNodeKind::LogicalNot,
                BoilerplatePack::new(
                    spec,
                    vec![
                        resolved_instance(vec![0], 0x1000, "neg_false"),
                        resolved_instance(vec![1], 0x2000, "neg_true"),
                    ],
                ),
            )
            .unwrap();

        insta::assert_snapshot!(render(&registry), @r"
        LogicalNot:
            neg_false
            neg_true
        ");
    }

    #[test]
    fn packs_render_in_registration_order_with_no_separator() {
        let mut registry = Registry::new();
        let spec = MetaVarSpec::new(vec![MetaVarParam::boolean("b")]);
        registry
            .append(
                AstNodeKind::Throw,
                BoilerplatePack::new(
                    spec.clone(),
                    vec![resolved_instance(vec![0], 0x10, "throw_impl")],
                ),
            )
            .unwrap();
        registry
            .append(
                AstNodeKind::Arithmetic,
                BoilerplatePack::new(
                    spec,
                    vec![resolved_instance(vec![0], 0x20, "arith_impl")],
                ),
            )
            .unwrap();

        assert_eq!(
            render(&registry),
            "Throw:\n    throw_impl\nArithmetic:\n    arith_impl\n"
        );
    }

    #[test]
    fn integer_only_primitive_by_bool_pack_renders_eighteen_lines() {
        let spec = MetaVarSpec::new(vec![
            MetaVarParam::primitive("operand_type"),
            MetaVarParam::boolean("spill_output"),
        ]);
        let enums = EnumRegistry::with_builtins();
        let mut instances = materialize(&spec, &enums, |values| {
            let ty = PrimitiveType::from_ordinal(values[0]).unwrap();
            ty.is_integral().then_some(0x4000 + values[0] * 2 + values[1])
        })
        .unwrap();
        for instance in &mut instances {
            let ty = PrimitiveType::from_ordinal(instance.values[0]).unwrap();
            let flag = instance.values[1] == 1;
            instance.symbol_name = Some(format!("arith_{}_{}", ty.name(), flag));
        }

        let mut registry = Registry::new();
        registry
            .append(
                AstNodeKind::Arithmetic,
                BoilerplatePack::new(spec, instances),
            )
            .unwrap();

        let rendered = render(&registry);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 1 + 18);
        assert_eq!(lines[0], "Arithmetic:");
        // Canonical order: the boolean cycles fastest within each type.
        assert_eq!(lines[1], "    arith_bool_false");
        assert_eq!(lines[2], "    arith_bool_true");
        assert_eq!(lines[3], "    arith_i8_false");
        assert_eq!(lines[18], "    arith_u64_true");
        // The float tail of the domain was filtered out entirely.
        assert!(!rendered.contains("f32"));
        assert!(!rendered.contains("f64"));
    }
}
