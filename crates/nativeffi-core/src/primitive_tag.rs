//! Primitive native type kinds.

use std::fmt;

use crate::StorageClassId;

/// The representable native primitive kinds.
///
/// `HalfDouble` is never produced by lowering. It only appears as a half of a
/// split `Double`, when a double is carried in two 32-bit locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveTag {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float,
    Double,
    HalfDouble,
    Void,
}

impl PrimitiveTag {
    /// Every tag, in declaration order.
    pub const ALL: [PrimitiveTag; 12] = [
        PrimitiveTag::Int8,
        PrimitiveTag::Uint8,
        PrimitiveTag::Int16,
        PrimitiveTag::Uint16,
        PrimitiveTag::Int32,
        PrimitiveTag::Uint32,
        PrimitiveTag::Int64,
        PrimitiveTag::Uint64,
        PrimitiveTag::Float,
        PrimitiveTag::Double,
        PrimitiveTag::HalfDouble,
        PrimitiveTag::Void,
    ];

    /// Size of a value of this kind in bytes. `Void` is 0.
    pub const fn size_in_bytes(self) -> usize {
        match self {
            PrimitiveTag::Int8 | PrimitiveTag::Uint8 => 1,
            PrimitiveTag::Int16 | PrimitiveTag::Uint16 => 2,
            PrimitiveTag::Int32
            | PrimitiveTag::Uint32
            | PrimitiveTag::Float
            | PrimitiveTag::HalfDouble => 4,
            PrimitiveTag::Int64 | PrimitiveTag::Uint64 | PrimitiveTag::Double => 8,
            PrimitiveTag::Void => 0,
        }
    }

    pub const fn is_int(self) -> bool {
        matches!(
            self,
            PrimitiveTag::Int8
                | PrimitiveTag::Uint8
                | PrimitiveTag::Int16
                | PrimitiveTag::Uint16
                | PrimitiveTag::Int32
                | PrimitiveTag::Uint32
                | PrimitiveTag::Int64
                | PrimitiveTag::Uint64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(
            self,
            PrimitiveTag::Float | PrimitiveTag::Double | PrimitiveTag::HalfDouble
        )
    }

    pub const fn is_void(self) -> bool {
        matches!(self, PrimitiveTag::Void)
    }

    /// Whether this is a signed integer kind. Floats and void are not signed.
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            PrimitiveTag::Int8 | PrimitiveTag::Int16 | PrimitiveTag::Int32 | PrimitiveTag::Int64
        )
    }

    /// The integer tag of the given byte size and signedness.
    ///
    /// Returns `None` for sizes without an integer kind.
    pub const fn int_of_size(size_in_bytes: usize, signed: bool) -> Option<PrimitiveTag> {
        match (size_in_bytes, signed) {
            (1, true) => Some(PrimitiveTag::Int8),
            (1, false) => Some(PrimitiveTag::Uint8),
            (2, true) => Some(PrimitiveTag::Int16),
            (2, false) => Some(PrimitiveTag::Uint16),
            (4, true) => Some(PrimitiveTag::Int32),
            (4, false) => Some(PrimitiveTag::Uint32),
            (8, true) => Some(PrimitiveTag::Int64),
            (8, false) => Some(PrimitiveTag::Uint64),
            _ => None,
        }
    }

    /// The typed-storage class holding elements of this kind.
    pub const fn storage_class(self) -> Option<StorageClassId> {
        match self {
            PrimitiveTag::Int8 => Some(StorageClassId::Int8Array),
            PrimitiveTag::Uint8 => Some(StorageClassId::Uint8Array),
            PrimitiveTag::Int16 => Some(StorageClassId::Int16Array),
            PrimitiveTag::Uint16 => Some(StorageClassId::Uint16Array),
            PrimitiveTag::Int32 => Some(StorageClassId::Int32Array),
            PrimitiveTag::Uint32 => Some(StorageClassId::Uint32Array),
            PrimitiveTag::Int64 => Some(StorageClassId::Int64Array),
            PrimitiveTag::Uint64 => Some(StorageClassId::Uint64Array),
            PrimitiveTag::Float => Some(StorageClassId::Float32Array),
            PrimitiveTag::Double => Some(StorageClassId::Float64Array),
            PrimitiveTag::HalfDouble | PrimitiveTag::Void => None,
        }
    }

    /// Canonical mnemonic of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveTag::Int8 => "int8",
            PrimitiveTag::Uint8 => "uint8",
            PrimitiveTag::Int16 => "int16",
            PrimitiveTag::Uint16 => "uint16",
            PrimitiveTag::Int32 => "int32",
            PrimitiveTag::Uint32 => "uint32",
            PrimitiveTag::Int64 => "int64",
            PrimitiveTag::Uint64 => "uint64",
            PrimitiveTag::Float => "float",
            PrimitiveTag::Double => "double",
            PrimitiveTag::HalfDouble => "half-double",
            PrimitiveTag::Void => "void",
        }
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
