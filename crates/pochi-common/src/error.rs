use std::fmt;
use std::path::PathBuf;

use crate::ast_kind::AstNodeKind;

/// A fatal pipeline error.
///
/// Every error in the builder is fatal: the binary renders the message to
/// stderr and exits non-zero without emitting a partial manifest. Errors are
/// collected into one enum so the registration hook (which cannot return a
/// `Result` across the C boundary) can render the same diagnostics before
/// aborting.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Malformed command line: wrong argument count or a `;` in a path.
    BadArgs(String),
    /// The bitcode file was unreadable or malformed.
    IrParseFailed { path: PathBuf, detail: String },
    /// A symbol with qualifying linkage appeared twice in the IR module.
    DuplicateSymbol(String),
    /// JIT construction or module addition failed.
    JitBuildFailed(String),
    /// The enumeration entry point is not present in the JIT'd module.
    EntrypointMissing(String),
    /// A registered meta-var carried an unrecognized kind tag.
    UnknownMetaVarKind(u32),
    /// An instance's address maps to two or more declared symbols.
    AmbiguousAddress { node_kind: AstNodeKind, addr: u64 },
    /// An instance's address is not in the symbol index at all.
    AddressNotFound { node_kind: AstNodeKind, addr: u64 },
    /// The resolved symbol exists only as a declaration (no body in this IR).
    NotADefinition { node_kind: AstNodeKind, symbol: String },
    /// The same AST node kind was registered twice.
    DuplicateNodeKind(AstNodeKind),
    /// The registration hook received structurally invalid input.
    MalformedRegistration(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadArgs(msg) => write!(f, "bad arguments: {msg}"),
            Self::IrParseFailed { path, detail } => {
                write!(
                    f,
                    "failed to parse IR file '{}': {detail}",
                    path.display()
                )
            }
            Self::DuplicateSymbol(name) => {
                write!(f, "symbol `{name}` appears twice with qualifying linkage")
            }
            Self::JitBuildFailed(detail) => write!(f, "failed to build JIT: {detail}"),
            Self::EntrypointMissing(symbol) => {
                write!(f, "entry point `{symbol}` not found in module")
            }
            Self::UnknownMetaVarKind(tag) => {
                write!(f, "unrecognized meta-var kind tag {tag}")
            }
            Self::AmbiguousAddress { node_kind, addr } => {
                write!(
                    f,
                    "boilerplate for {node_kind} resolved to ambiguous address {addr:#x} \
                     (multiple symbols share it; identical-code folding must be disabled \
                     when compiling the input IR)"
                )
            }
            Self::AddressNotFound { node_kind, addr } => {
                write!(
                    f,
                    "boilerplate for {node_kind} registered address {addr:#x}, \
                     which matches no declared symbol"
                )
            }
            Self::NotADefinition { node_kind, symbol } => {
                write!(
                    f,
                    "boilerplate for {node_kind} resolved to `{symbol}`, \
                     which is only declared in this module (no body emitted)"
                )
            }
            Self::DuplicateNodeKind(node_kind) => {
                write!(f, "boilerplate for {node_kind} registered twice")
            }
            Self::MalformedRegistration(msg) => {
                write!(f, "malformed boilerplate registration: {msg}")
            }
        }
    }
}

impl std::error::Error for BuildError {}
