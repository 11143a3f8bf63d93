use std::fmt;

/// A category of AST operation in the host expression DSL.
///
/// This is a closed enumeration: the interpreter has exactly one boilerplate
/// pack per kind, and the textual name is the manifest key. The `u32`
/// discriminants are the wire tags the JIT'd enumeration entry point passes
/// across the registration hook; they are stable and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum AstNodeKind {
    Arithmetic = 0,
    Comparison = 1,
    StaticCast = 2,
    ReinterpretCast = 3,
    Dereference = 4,
    Literal = 5,
    Assign = 6,
    Nullptr = 7,
    TrashPtr = 8,
    Variable = 9,
    DeclareVariable = 10,
    DereferenceVariable = 11,
    Block = 12,
    Scope = 13,
    If = 14,
    WhileLoop = 15,
    ForLoop = 16,
    BreakOrContinue = 17,
    Call = 18,
    Return = 19,
    LogicalAndOr = 20,
    LogicalNot = 21,
    Throw = 22,
}

impl AstNodeKind {
    /// All kinds in declaration (tag) order.
    pub const ALL: [AstNodeKind; 23] = [
        AstNodeKind::Arithmetic,
        AstNodeKind::Comparison,
        AstNodeKind::StaticCast,
        AstNodeKind::ReinterpretCast,
        AstNodeKind::Dereference,
        AstNodeKind::Literal,
        AstNodeKind::Assign,
        AstNodeKind::Nullptr,
        AstNodeKind::TrashPtr,
        AstNodeKind::Variable,
        AstNodeKind::DeclareVariable,
        AstNodeKind::DereferenceVariable,
        AstNodeKind::Block,
        AstNodeKind::Scope,
        AstNodeKind::If,
        AstNodeKind::WhileLoop,
        AstNodeKind::ForLoop,
        AstNodeKind::BreakOrContinue,
        AstNodeKind::Call,
        AstNodeKind::Return,
        AstNodeKind::LogicalAndOr,
        AstNodeKind::LogicalNot,
        AstNodeKind::Throw,
    ];

    /// The stable textual name used as the manifest key.
    pub fn name(self) -> &'static str {
        match self {
            AstNodeKind::Arithmetic => "Arithmetic",
            AstNodeKind::Comparison => "Comparison",
            AstNodeKind::StaticCast => "StaticCast",
            AstNodeKind::ReinterpretCast => "ReinterpretCast",
            AstNodeKind::Dereference => "Dereference",
            AstNodeKind::Literal => "Literal",
            AstNodeKind::Assign => "Assign",
            AstNodeKind::Nullptr => "Nullptr",
            AstNodeKind::TrashPtr => "TrashPtr",
            AstNodeKind::Variable => "Variable",
            AstNodeKind::DeclareVariable => "DeclareVariable",
            AstNodeKind::DereferenceVariable => "DereferenceVariable",
            AstNodeKind::Block => "Block",
            AstNodeKind::Scope => "Scope",
            AstNodeKind::If => "If",
            AstNodeKind::WhileLoop => "WhileLoop",
            AstNodeKind::ForLoop => "ForLoop",
            AstNodeKind::BreakOrContinue => "BreakOrContinue",
            AstNodeKind::Call => "Call",
            AstNodeKind::Return => "Return",
            AstNodeKind::LogicalAndOr => "LogicalAndOr",
            AstNodeKind::LogicalNot => "LogicalNot",
            AstNodeKind::Throw => "Throw",
        }
    }

    /// The wire tag passed across the registration hook.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Decode a wire tag. Returns `None` for tags outside the closed set.
    pub fn from_raw(raw: u32) -> Option<AstNodeKind> {
        AstNodeKind::ALL.get(raw as usize).copied()
    }
}

impl fmt::Display for AstNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
