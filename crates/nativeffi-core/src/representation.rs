//! Unboxed value representations of the compiler's value model.
//!
//! Native types and representations overlap only partially: representations
//! have no 8 or 16 bit integers and no void, native types have no tagged or
//! untagged values.

use std::fmt;

/// How a value is held in the compiler's intermediate representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    NoRepresentation,
    Tagged,
    Untagged,
    UnboxedDouble,
    UnboxedFloat,
    UnboxedInt32,
    UnboxedUint32,
    UnboxedInt64,
    UnboxedUint64,
    UnboxedFloat32x4,
    PairOfTagged,
}

impl Representation {
    pub const fn name(self) -> &'static str {
        match self {
            Representation::NoRepresentation => "none",
            Representation::Tagged => "tagged",
            Representation::Untagged => "untagged",
            Representation::UnboxedDouble => "double",
            Representation::UnboxedFloat => "float",
            Representation::UnboxedInt32 => "int32",
            Representation::UnboxedUint32 => "uint32",
            Representation::UnboxedInt64 => "int64",
            Representation::UnboxedUint64 => "uint64",
            Representation::UnboxedFloat32x4 => "float32x4",
            Representation::PairOfTagged => "tagged-pair",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
