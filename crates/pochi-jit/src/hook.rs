//! The extern "C" registration surface called by JIT'd enumeration code.
//!
//! The entry point cannot carry a context pointer across the C boundary, so
//! the hook forwards into the process-wide registry. Every structural
//! failure here is fatal: the hook renders the diagnostic and aborts, since
//! there is no way to propagate a `Result` back through JIT'd code.

use std::ffi::{c_char, c_void, CStr};

use pochi_common::{AstNodeKind, BuildError};
use pochi_metavar::registry::{self, BoilerplatePack};
use pochi_metavar::spec::{MetaVarInstance, MetaVarKind, MetaVarParam, MetaVarSpec};
use pochi_metavar::{stringify, PrimitiveType};

/// One meta-var as it crosses the hook: the kind tag, the parameter name,
/// and (for enum meta-vars) the compiler-reflected type name string.
#[repr(C)]
pub struct RawMetaVar {
    pub kind: u32,
    pub name: *const c_char,
    pub enum_type_name: *const c_char,
}

/// One materialized instance: a counted value array and the 64-bit address
/// token of the compiled body.
#[repr(C)]
pub struct RawInstance {
    pub value_count: u64,
    pub values: *const u64,
    pub fn_addr: u64,
}

/// The materialized-list structure the entry point passes to the hook.
#[repr(C)]
pub struct RawMaterializedList {
    pub metavar_count: u64,
    pub metavars: *const RawMetaVar,
    pub instance_count: u64,
    pub instances: *const RawInstance,
}

/// The registration hook. Appends one boilerplate pack to the active
/// collection; any structural error aborts the process.
///
/// # Safety
///
/// `list` must point to a valid [`RawMaterializedList`] whose arrays and
/// strings live for the duration of the call. Only JIT'd enumeration code
/// (or a test standing in for it) may call this.
#[no_mangle]
pub unsafe extern "C" fn __pochivm_register_fast_interp_boilerplate__(
    node_kind: u32,
    list: *const RawMaterializedList,
) {
    let result = decode_registration(node_kind, list)
        .and_then(|(kind, pack)| registry::append(kind, pack));
    if let Err(err) = result {
        fatal(&err);
    }
}

/// Opaque reporting sink referenced by enumeration code. The payload is not
/// interpreted.
///
/// # Safety
///
/// Callable with any pointer; the payload is never dereferenced.
#[no_mangle]
pub unsafe extern "C" fn __pochivm_report_info__(_payload: *mut c_void) {}

fn fatal(err: &BuildError) -> ! {
    eprintln!("error: {err}");
    std::process::abort()
}

/// Decode a raw registration into an owned `(kind, pack)` pair, validating
/// every structural invariant on the way.
///
/// # Safety
///
/// `list` must satisfy the contract documented on the hook itself.
pub unsafe fn decode_registration(
    node_kind: u32,
    list: *const RawMaterializedList,
) -> Result<(AstNodeKind, BoilerplatePack), BuildError> {
    let kind = AstNodeKind::from_raw(node_kind).ok_or_else(|| {
        BuildError::MalformedRegistration(format!("unknown AST node kind tag {node_kind}"))
    })?;
    let list = list.as_ref().ok_or_else(|| {
        BuildError::MalformedRegistration("null materialized-list pointer".into())
    })?;

    let raw_vars = raw_slice(list.metavars, list.metavar_count, "meta-var")?;
    let raw_instances = raw_slice(list.instances, list.instance_count, "instance")?;

    let mut params = Vec::with_capacity(raw_vars.len());
    for raw in raw_vars {
        params.push(decode_metavar(raw)?);
    }
    let spec = MetaVarSpec::new(params);

    let mut instances = Vec::with_capacity(raw_instances.len());
    for raw in raw_instances {
        instances.push(decode_instance(raw, &spec)?);
    }

    Ok((kind, BoilerplatePack::new(spec, instances)))
}

unsafe fn raw_slice<'a, T>(
    ptr: *const T,
    count: u64,
    what: &str,
) -> Result<&'a [T], BuildError> {
    if count == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(BuildError::MalformedRegistration(format!(
            "null {what} array with count {count}"
        )));
    }
    Ok(std::slice::from_raw_parts(ptr, count as usize))
}

unsafe fn decode_metavar(raw: &RawMetaVar) -> Result<MetaVarParam, BuildError> {
    if raw.name.is_null() {
        return Err(BuildError::MalformedRegistration(
            "null meta-var name".into(),
        ));
    }
    let name = CStr::from_ptr(raw.name).to_string_lossy().into_owned();

    let (kind, type_name) = match raw.kind {
        MetaVarKind::PRIMITIVE_TYPE_TAG => (MetaVarKind::PrimitiveType, "TypeId".to_string()),
        MetaVarKind::BOOL_TAG => (MetaVarKind::Bool, "bool".to_string()),
        MetaVarKind::ENUM_TAG => {
            if raw.enum_type_name.is_null() {
                return Err(BuildError::MalformedRegistration(format!(
                    "enum meta-var `{name}` has no type name"
                )));
            }
            let reflected = CStr::from_ptr(raw.enum_type_name).to_string_lossy();
            let clean = stringify::parse_type_name(&reflected);
            (MetaVarKind::Enum(clean.clone()), clean)
        }
        tag => return Err(BuildError::UnknownMetaVarKind(tag)),
    };

    Ok(MetaVarParam {
        kind,
        name,
        type_name,
    })
}

unsafe fn decode_instance(
    raw: &RawInstance,
    spec: &MetaVarSpec,
) -> Result<MetaVarInstance, BuildError> {
    if raw.value_count as usize != spec.len() {
        return Err(BuildError::MalformedRegistration(format!(
            "instance carries {} values for a {}-parameter spec",
            raw.value_count,
            spec.len()
        )));
    }
    if raw.fn_addr == 0 {
        return Err(BuildError::MalformedRegistration(
            "instance has a null function address".into(),
        ));
    }
    let values = raw_slice(raw.values, raw.value_count, "value")?.to_vec();

    for (value, param) in values.iter().zip(&spec.params) {
        match &param.kind {
            MetaVarKind::PrimitiveType => {
                if PrimitiveType::from_ordinal(*value).is_none() {
                    return Err(BuildError::MalformedRegistration(format!(
                        "value {value} of `{}` is not a primitive-type ordinal",
                        param.name
                    )));
                }
            }
            MetaVarKind::Bool => {
                if *value > 1 {
                    return Err(BuildError::MalformedRegistration(format!(
                        "value {value} of `{}` is not a boolean",
                        param.name
                    )));
                }
            }
            // Enum domains are declared by the host framework; their
            // ordinals are opaque here.
            MetaVarKind::Enum(_) => {}
        }
    }

    Ok(MetaVarInstance::new(values, raw.fn_addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    struct RawListFixture {
        _names: Vec<CString>,
        _values: Vec<Vec<u64>>,
        metavars: Vec<RawMetaVar>,
        instances: Vec<RawInstance>,
    }

    impl RawListFixture {
        fn list(&self) -> RawMaterializedList {
            RawMaterializedList {
                metavar_count: self.metavars.len() as u64,
                metavars: self.metavars.as_ptr(),
                instance_count: self.instances.len() as u64,
                instances: self.instances.as_ptr(),
            }
        }
    }

    /// A spec of one bool meta-var `b` with both instances materialized.
    fn single_bool_fixture() -> RawListFixture {
        let names = vec![CString::new("b").unwrap()];
        let metavars = vec![RawMetaVar {
            kind: MetaVarKind::BOOL_TAG,
            name: names[0].as_ptr(),
            enum_type_name: std::ptr::null(),
        }];
        let values = vec![vec![0u64], vec![1u64]];
        let instances = vec![
            RawInstance {
                value_count: 1,
                values: values[0].as_ptr(),
                fn_addr: 0x1000,
            },
            RawInstance {
                value_count: 1,
                values: values[1].as_ptr(),
                fn_addr: 0x2000,
            },
        ];
        RawListFixture {
            _names: names,
            _values: values,
            metavars,
            instances,
        }
    }

    #[test]
    fn decodes_single_bool_pack() {
        let fixture = single_bool_fixture();
        let list = fixture.list();
        let (kind, pack) =
            unsafe { decode_registration(AstNodeKind::LogicalNot.raw(), &list) }.unwrap();
        assert_eq!(kind, AstNodeKind::LogicalNot);
        assert_eq!(pack.spec.len(), 1);
        assert_eq!(pack.spec.params[0].type_name, "bool");
        assert_eq!(pack.instances.len(), 2);
        assert_eq!(pack.instances[0].values, [0]);
        assert_eq!(pack.instances[0].fn_addr, 0x1000);
        assert_eq!(pack.instances[1].values, [1]);
        assert!(pack.instances.iter().all(|i| i.symbol_name.is_none()));
    }

    #[test]
    fn enum_type_names_are_cleaned_up() {
        let name = CString::new("shape").unwrap();
        let reflected =
            CString::new("const char *pochi::stringify_type() [T = pochi::fi::OperandShape]")
                .unwrap();
        let metavars = vec![RawMetaVar {
            kind: MetaVarKind::ENUM_TAG,
            name: name.as_ptr(),
            enum_type_name: reflected.as_ptr(),
        }];
        let list = RawMaterializedList {
            metavar_count: 1,
            metavars: metavars.as_ptr(),
            instance_count: 0,
            instances: std::ptr::null(),
        };
        let (_, pack) =
            unsafe { decode_registration(AstNodeKind::Variable.raw(), &list) }.unwrap();
        assert_eq!(pack.spec.params[0].type_name, "OperandShape");
        assert_eq!(
            pack.spec.params[0].kind,
            MetaVarKind::Enum("OperandShape".into())
        );
    }

    #[test]
    fn unknown_kind_tag_is_rejected() {
        let name = CString::new("x").unwrap();
        let metavars = vec![RawMetaVar {
            kind: 7,
            name: name.as_ptr(),
            enum_type_name: std::ptr::null(),
        }];
        let list = RawMaterializedList {
            metavar_count: 1,
            metavars: metavars.as_ptr(),
            instance_count: 0,
            instances: std::ptr::null(),
        };
        let err = unsafe { decode_registration(AstNodeKind::Variable.raw(), &list) }.unwrap_err();
        assert_eq!(err, BuildError::UnknownMetaVarKind(7));
    }

    #[test]
    fn unknown_node_kind_tag_is_rejected() {
        let fixture = single_bool_fixture();
        let list = fixture.list();
        let err = unsafe { decode_registration(9999, &list) }.unwrap_err();
        assert!(matches!(err, BuildError::MalformedRegistration(_)));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let mut fixture = single_bool_fixture();
        fixture.instances[0].value_count = 2;
        let list = fixture.list();
        let err = unsafe { decode_registration(AstNodeKind::LogicalNot.raw(), &list) }
            .unwrap_err();
        assert!(matches!(err, BuildError::MalformedRegistration(_)));
    }

    #[test]
    fn out_of_domain_bool_value_is_rejected() {
        let mut fixture = single_bool_fixture();
        fixture._values[0][0] = 2;
        let list = fixture.list();
        let err = unsafe { decode_registration(AstNodeKind::LogicalNot.raw(), &list) }
            .unwrap_err();
        assert!(matches!(err, BuildError::MalformedRegistration(_)));
    }

    #[test]
    fn null_function_address_is_rejected() {
        let mut fixture = single_bool_fixture();
        fixture.instances[0].fn_addr = 0;
        let list = fixture.list();
        let err = unsafe { decode_registration(AstNodeKind::LogicalNot.raw(), &list) }
            .unwrap_err();
        assert!(matches!(err, BuildError::MalformedRegistration(_)));
    }
}
