//! The process-wide ordered collection of boilerplate packs.
//!
//! The registration hook is a C entry point invoked from JIT'd code and
//! cannot carry a context pointer, so the collection lives in a process-wide
//! singleton. Its lifecycle brackets exactly one enumeration entry-point
//! call: [`begin_collection`] installs a fresh registry, the hook appends
//! through [`append`], and [`finish_collection`] removes and returns it.

use parking_lot::Mutex;
use pochi_common::{AstNodeKind, BuildError};
use rustc_hash::FxHashSet;

use crate::spec::{MetaVarInstance, MetaVarSpec};

/// The complete set of materialized instances for one AST node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplatePack {
    pub spec: MetaVarSpec,
    pub instances: Vec<MetaVarInstance>,
}

impl BoilerplatePack {
    pub fn new(spec: MetaVarSpec, instances: Vec<MetaVarInstance>) -> BoilerplatePack {
        BoilerplatePack { spec, instances }
    }
}

/// An ordered, append-only sequence of `(kind, pack)` entries.
///
/// Registration order is preserved verbatim into the manifest. A node kind
/// may appear at most once.
#[derive(Debug, Default)]
pub struct Registry {
    packs: Vec<(AstNodeKind, BoilerplatePack)>,
    seen: FxHashSet<AstNodeKind>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Append a pack. Duplicate node kinds are fatal.
    pub fn append(&mut self, kind: AstNodeKind, pack: BoilerplatePack) -> Result<(), BuildError> {
        if !self.seen.insert(kind) {
            return Err(BuildError::DuplicateNodeKind(kind));
        }
        self.packs.push((kind, pack));
        Ok(())
    }

    pub fn packs(&self) -> &[(AstNodeKind, BoilerplatePack)] {
        &self.packs
    }

    pub fn packs_mut(&mut self) -> &mut [(AstNodeKind, BoilerplatePack)] {
        &mut self.packs
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

static ACTIVE: Mutex<Option<Registry>> = Mutex::new(None);

/// Install a fresh registry for one entry-point invocation.
///
/// # Panics
///
/// Panics if a collection is already in progress.
pub fn begin_collection() {
    let mut active = ACTIVE.lock();
    if active.is_some() {
        panic!("boilerplate collection already in progress");
    }
    *active = Some(Registry::new());
}

/// Remove and return the collected registry.
///
/// # Panics
///
/// Panics if no collection is in progress.
pub fn finish_collection() -> Registry {
    ACTIVE
        .lock()
        .take()
        .expect("no boilerplate collection in progress")
}

/// Append a pack to the active registry. Called (indirectly) by the
/// registration hook while the entry point executes.
pub fn append(kind: AstNodeKind, pack: BoilerplatePack) -> Result<(), BuildError> {
    match ACTIVE.lock().as_mut() {
        Some(registry) => registry.append(kind, pack),
        None => Err(BuildError::MalformedRegistration(
            "registration hook called outside an active collection".into(),
        )),
    }
}
