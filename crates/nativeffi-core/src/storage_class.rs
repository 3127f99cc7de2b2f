//! Raw typed-storage class identifiers.
//!
//! Each typed-storage variant (one per lowerable primitive kind) carries a
//! small stable integer id. The id space is closed: a raw id outside it never
//! comes from a well-formed compiler and is treated as an internal bug by the
//! lowering factory.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::PrimitiveTag;

/// Identifier of a typed-storage class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum StorageClassId {
    Int8Array = 0,
    Uint8Array = 1,
    Int16Array = 2,
    Uint16Array = 3,
    Int32Array = 4,
    Uint32Array = 5,
    Int64Array = 6,
    Uint64Array = 7,
    Float32Array = 8,
    Float64Array = 9,
}

impl StorageClassId {
    /// Every enumerated id.
    pub const ALL: [StorageClassId; 10] = [
        StorageClassId::Int8Array,
        StorageClassId::Uint8Array,
        StorageClassId::Int16Array,
        StorageClassId::Uint16Array,
        StorageClassId::Int32Array,
        StorageClassId::Uint32Array,
        StorageClassId::Int64Array,
        StorageClassId::Uint64Array,
        StorageClassId::Float32Array,
        StorageClassId::Float64Array,
    ];

    /// Element kind stored by this class.
    pub const fn element_tag(self) -> PrimitiveTag {
        match self {
            StorageClassId::Int8Array => PrimitiveTag::Int8,
            StorageClassId::Uint8Array => PrimitiveTag::Uint8,
            StorageClassId::Int16Array => PrimitiveTag::Int16,
            StorageClassId::Uint16Array => PrimitiveTag::Uint16,
            StorageClassId::Int32Array => PrimitiveTag::Int32,
            StorageClassId::Uint32Array => PrimitiveTag::Uint32,
            StorageClassId::Int64Array => PrimitiveTag::Int64,
            StorageClassId::Uint64Array => PrimitiveTag::Uint64,
            StorageClassId::Float32Array => PrimitiveTag::Float,
            StorageClassId::Float64Array => PrimitiveTag::Double,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StorageClassId::Int8Array => "Int8Array",
            StorageClassId::Uint8Array => "Uint8Array",
            StorageClassId::Int16Array => "Int16Array",
            StorageClassId::Uint16Array => "Uint16Array",
            StorageClassId::Int32Array => "Int32Array",
            StorageClassId::Uint32Array => "Uint32Array",
            StorageClassId::Int64Array => "Int64Array",
            StorageClassId::Uint64Array => "Uint64Array",
            StorageClassId::Float32Array => "Float32Array",
            StorageClassId::Float64Array => "Float64Array",
        }
    }
}

impl fmt::Display for StorageClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
