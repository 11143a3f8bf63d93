//! In-process JIT execution and address-to-symbol matching.
//!
//! The builder JITs the input IR module, lets its enumeration entry point
//! register every materialized instance through the C hook exported here,
//! then resolves each registered function address back to the IR symbol that
//! defines it.
//!
//! ## Architecture
//!
//! - [`engine`]: execution-engine construction, host-symbol publication,
//!   entry-point invocation
//! - [`fake`]: unique synthetic addresses for unresolvable externals
//! - [`resolver`]: the layered symbol resolution (JIT'd definitions, host
//!   process, fake addresses)
//! - [`hook`]: the extern "C" registration surface called by JIT'd code
//! - [`matcher`]: the address index and instance resolution
//!
//! Symbol resolution is layered in a fixed order: functions defined in the
//! module resolve to their JIT'd bodies; remaining externals resolve against
//! the host process (which carries the registration hook and platform
//! routines); anything still undefined receives a unique fake address. The
//! JIT'd code never calls a fake address -- the builder only compares the
//! numbers.

pub mod engine;
pub mod fake;
pub mod hook;
pub mod matcher;
pub mod resolver;

pub use engine::{collect_boilerplate, create_execution_engine, register_host_symbols};
pub use fake::FakeAddressAllocator;
pub use matcher::{resolve_instances, AddressIndex};
pub use resolver::SymbolResolver;

/// The enumeration entry point the builder invokes in the JIT'd module.
pub const ENTRY_POINT_SYMBOL: &str = "__pochivm_build_fast_interp_library__";

/// The registration hook the entry point calls back into, exported by this
/// binary.
pub const REGISTER_BOILERPLATE_SYMBOL: &str = "__pochivm_register_fast_interp_boilerplate__";

/// The opaque reporting sink referenced by enumeration code.
pub const REPORT_INFO_SYMBOL: &str = "__pochivm_report_info__";
