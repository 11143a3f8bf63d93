use std::fmt;

/// A primitive numeric type in the interpreter's type system.
///
/// The domain of a `PrimitiveType` meta-var is this list, in exactly this
/// order. The ordinal doubles as the value bit-pattern stored in a
/// materialized instance, so reordering variants changes the binary
/// interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl PrimitiveType {
    /// The full domain in canonical enumeration order.
    pub const ALL: [PrimitiveType; 11] = [
        PrimitiveType::Bool,
        PrimitiveType::I8,
        PrimitiveType::I16,
        PrimitiveType::I32,
        PrimitiveType::I64,
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::F32,
        PrimitiveType::F64,
    ];

    /// Position in the canonical domain; the instance value bit-pattern.
    pub fn ordinal(self) -> u64 {
        self as u64
    }

    /// Inverse of [`ordinal`](Self::ordinal).
    pub fn from_ordinal(ordinal: u64) -> Option<PrimitiveType> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| PrimitiveType::ALL.get(i))
            .copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Bool => "bool",
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
        }
    }

    /// True for `bool` and the eight fixed-width integer types.
    pub fn is_integral(self) -> bool {
        !self.is_floating_point()
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, PrimitiveType::F32 | PrimitiveType::F64)
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            PrimitiveType::I8 | PrimitiveType::I16 | PrimitiveType::I32 | PrimitiveType::I64
        )
    }

    /// True for the types usable as an array-indexing operand.
    pub fn is_valid_index_type(self) -> bool {
        matches!(
            self,
            PrimitiveType::I32 | PrimitiveType::I64 | PrimitiveType::U32 | PrimitiveType::U64
        )
    }

    /// Bit width, for the widening relation. `bool` counts as one bit.
    fn bits(self) -> u32 {
        match self {
            PrimitiveType::Bool => 1,
            PrimitiveType::I8 | PrimitiveType::U8 => 8,
            PrimitiveType::I16 | PrimitiveType::U16 => 16,
            PrimitiveType::I32 | PrimitiveType::U32 | PrimitiveType::F32 => 32,
            PrimitiveType::I64 | PrimitiveType::U64 | PrimitiveType::F64 => 64,
        }
    }

    /// The closed widening-conversion relation: the only implicit
    /// conversions the framework allows. `bool` widens to every integer
    /// type; an integer type widens to strictly wider types of the same
    /// signedness. Floating-point types never widen implicitly.
    pub fn widens_to(self, target: PrimitiveType) -> bool {
        if self == target || !self.is_integral() || !target.is_integral() {
            return false;
        }
        if self == PrimitiveType::Bool {
            return true;
        }
        if target == PrimitiveType::Bool {
            return false;
        }
        self.is_signed() == target.is_signed() && self.bits() < target.bits()
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
