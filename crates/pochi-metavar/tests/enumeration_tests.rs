//! Integration tests for the materializer's public enumeration contract.

use pochi_metavar::{
    materialize, EnumRegistry, MetaVarParam, MetaVarSpec, PrimitiveType, Registry,
};
use pochi_metavar::registry::BoilerplatePack;
use pochi_common::AstNodeKind;

/// Encode a tuple into a distinct address so order is observable.
fn addr_for(values: &[u64]) -> u64 {
    values.iter().fold(1u64, |acc, v| acc * 100 + v + 1)
}

#[test]
fn primitive_by_bool_enumerates_in_row_major_canonical_order() {
    let spec = MetaVarSpec::new(vec![
        MetaVarParam::primitive("operand_type"),
        MetaVarParam::boolean("spill_output"),
    ]);
    let enums = EnumRegistry::with_builtins();
    let instances = materialize(&spec, &enums, |values| Some(addr_for(values))).unwrap();

    assert_eq!(instances.len(), 22);

    // The boolean cycles fastest; the primitive domain advances in its
    // canonical order.
    assert_eq!(instances[0].values, [PrimitiveType::Bool.ordinal(), 0]);
    assert_eq!(instances[1].values, [PrimitiveType::Bool.ordinal(), 1]);
    assert_eq!(instances[2].values, [PrimitiveType::I8.ordinal(), 0]);
    assert_eq!(instances[21].values, [PrimitiveType::F64.ordinal(), 1]);
}

#[test]
fn integer_only_selector_keeps_eighteen_instances() {
    let spec = MetaVarSpec::new(vec![
        MetaVarParam::primitive("operand_type"),
        MetaVarParam::boolean("spill_output"),
    ]);
    let enums = EnumRegistry::with_builtins();
    let instances = materialize(&spec, &enums, |values| {
        let ty = PrimitiveType::from_ordinal(values[0]).unwrap();
        ty.is_integral().then(|| addr_for(values))
    })
    .unwrap();

    assert_eq!(instances.len(), 18);

    // Surviving tuples are exactly the accepted subset of the full product,
    // still in canonical order.
    let full = materialize(&spec, &enums, |values| Some(addr_for(values))).unwrap();
    let expected: Vec<_> = full
        .into_iter()
        .filter(|inst| {
            PrimitiveType::from_ordinal(inst.values[0])
                .unwrap()
                .is_integral()
        })
        .collect();
    assert_eq!(instances, expected);
}

#[test]
fn registry_preserves_enumeration_order_within_a_pack() {
    let spec = MetaVarSpec::new(vec![MetaVarParam::enumerated(
        "shape",
        "FISimpleOperandShapeCategory",
    )]);
    let enums = EnumRegistry::with_builtins();
    let instances = materialize(&spec, &enums, |values| Some(addr_for(values))).unwrap();
    assert_eq!(instances.len(), 3);

    let mut registry = Registry::new();
    registry
        .append(
            AstNodeKind::Variable,
            BoilerplatePack::new(spec, instances.clone()),
        )
        .unwrap();

    let (kind, pack) = &registry.packs()[0];
    assert_eq!(*kind, AstNodeKind::Variable);
    assert_eq!(pack.instances, instances);
}
