use pochi_common::BuildError;

use crate::enums::EnumRegistry;
use crate::primitive::PrimitiveType;
use crate::spec::{MetaVarInstance, MetaVarKind, MetaVarSpec};

/// Materialize a meta-var spec: enumerate the Cartesian product of the
/// parameter domains in canonical order, offer each value tuple to the
/// selector, and collect an instance for every tuple the selector accepts.
///
/// The selector returns the address of the compiled body for an allowed
/// combination, or `None` to discard it. Enumeration is depth-first over the
/// parameters in declaration order; within a position the domain is iterated
/// in canonical order (the fixed primitive-type list order, `false` before
/// `true`, enum declaration order). The resulting instance order is a public
/// contract -- downstream consumers index into it positionally.
///
/// A selector returning the same address for two different tuples is not an
/// error here; address deduplication is the matcher's concern.
///
/// # Errors
///
/// Returns an error if an `Enum` parameter names an enum absent from the
/// registry.
pub fn materialize<F>(
    spec: &MetaVarSpec,
    enums: &EnumRegistry,
    mut selector: F,
) -> Result<Vec<MetaVarInstance>, BuildError>
where
    F: FnMut(&[u64]) -> Option<u64>,
{
    let mut domain_sizes = Vec::with_capacity(spec.len());
    for param in &spec.params {
        let size = match &param.kind {
            MetaVarKind::PrimitiveType => PrimitiveType::ALL.len() as u64,
            MetaVarKind::Bool => 2,
            MetaVarKind::Enum(name) => {
                let enumerators = enums.enumerators(name).ok_or_else(|| {
                    BuildError::MalformedRegistration(format!(
                        "meta-var `{}` references unregistered enum `{name}`",
                        param.name
                    ))
                })?;
                enumerators.len() as u64
            }
        };
        domain_sizes.push(size);
    }

    let mut instances = Vec::new();
    let mut values = Vec::with_capacity(spec.len());
    enumerate(&domain_sizes, &mut values, &mut selector, &mut instances);
    Ok(instances)
}

/// Depth-first walk of the remaining domains; at each leaf the full value
/// tuple is offered to the selector.
fn enumerate<F>(
    domain_sizes: &[u64],
    values: &mut Vec<u64>,
    selector: &mut F,
    instances: &mut Vec<MetaVarInstance>,
) where
    F: FnMut(&[u64]) -> Option<u64>,
{
    let position = values.len();
    if position == domain_sizes.len() {
        if let Some(fn_addr) = selector(values) {
            instances.push(MetaVarInstance::new(values.clone(), fn_addr));
        }
        return;
    }
    for value in 0..domain_sizes[position] {
        values.push(value);
        enumerate(domain_sizes, values, selector, instances);
        values.pop();
    }
}
