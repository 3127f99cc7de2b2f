//! Host-language static type descriptors.
//!
//! The host type system is not modelled here. Lowering only needs to know which
//! host class a type belongs to and what to call it in a diagnostic, so host
//! types reach this crate through [`HostTypeDescriptor`]. [`HostType`] is a
//! plain descriptor for callers that identify host types by name.
//!
//! Only the classes in [`FfiHostClass`] are representable as native
//! primitives. Pointer-like classes collapse to an integer of the target's
//! word size.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::{PrimitiveTag, TargetAbi, TypeHash};

/// A host static type as seen by the lowering factories.
pub trait HostTypeDescriptor {
    /// Hash of the host class, ignoring type arguments.
    ///
    /// `Pointer<Int8>` and `Pointer<Void>` share the class hash of `Pointer`.
    fn class_hash(&self) -> TypeHash;

    /// Name used in diagnostics.
    fn display_name(&self) -> String;

    /// Whether this type is an instantiation with type arguments.
    fn has_type_args(&self) -> bool {
        false
    }
}

/// A host type identified by class name, with optional type arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostType<'s> {
    name: &'s str,
    type_args: &'s [HostType<'s>],
}

impl<'s> HostType<'s> {
    pub const fn named(name: &'s str) -> Self {
        Self {
            name,
            type_args: &[],
        }
    }

    pub const fn generic(name: &'s str, type_args: &'s [HostType<'s>]) -> Self {
        Self { name, type_args }
    }

    pub const fn name(&self) -> &'s str {
        self.name
    }

    pub const fn type_args(&self) -> &'s [HostType<'s>] {
        self.type_args
    }

    /// Hash of the full instantiation, type arguments included.
    pub fn type_hash(&self) -> TypeHash {
        let args: Vec<TypeHash> = self.type_args.iter().map(HostType::type_hash).collect();
        TypeHash::from_generic_instance(TypeHash::from_name(self.name), &args)
    }
}

impl HostTypeDescriptor for HostType<'_> {
    fn class_hash(&self) -> TypeHash {
        TypeHash::from_name(self.name)
    }

    fn display_name(&self) -> String {
        self.to_string()
    }

    fn has_type_args(&self) -> bool {
        !self.type_args.is_empty()
    }
}

impl fmt::Display for HostType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        if let Some((first, rest)) = self.type_args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Host classes with a native primitive counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfiHostClass {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    IntPtr,
    Pointer,
    Float,
    Double,
    Void,
}

lazy_static! {
    static ref FFI_HOST_CLASSES: FxHashMap<TypeHash, FfiHostClass> = FfiHostClass::ALL
        .iter()
        .map(|class| (TypeHash::from_name(class.name()), *class))
        .collect();
}

impl FfiHostClass {
    pub const ALL: [FfiHostClass; 13] = [
        FfiHostClass::Int8,
        FfiHostClass::Int16,
        FfiHostClass::Int32,
        FfiHostClass::Int64,
        FfiHostClass::Uint8,
        FfiHostClass::Uint16,
        FfiHostClass::Uint32,
        FfiHostClass::Uint64,
        FfiHostClass::IntPtr,
        FfiHostClass::Pointer,
        FfiHostClass::Float,
        FfiHostClass::Double,
        FfiHostClass::Void,
    ];

    /// Host class name.
    pub const fn name(self) -> &'static str {
        match self {
            FfiHostClass::Int8 => "Int8",
            FfiHostClass::Int16 => "Int16",
            FfiHostClass::Int32 => "Int32",
            FfiHostClass::Int64 => "Int64",
            FfiHostClass::Uint8 => "Uint8",
            FfiHostClass::Uint16 => "Uint16",
            FfiHostClass::Uint32 => "Uint32",
            FfiHostClass::Uint64 => "Uint64",
            FfiHostClass::IntPtr => "IntPtr",
            FfiHostClass::Pointer => "Pointer",
            FfiHostClass::Float => "Float",
            FfiHostClass::Double => "Double",
            FfiHostClass::Void => "Void",
        }
    }

    /// Look up the FFI class of a host class hash.
    pub fn from_class_hash(hash: TypeHash) -> Option<Self> {
        FFI_HOST_CLASSES.get(&hash).copied()
    }

    pub const fn is_pointer_like(self) -> bool {
        matches!(self, FfiHostClass::IntPtr | FfiHostClass::Pointer)
    }

    /// Only `Pointer` takes a type argument. Any other class instantiated
    /// with type arguments is not an FFI type.
    pub const fn is_generic(self) -> bool {
        matches!(self, FfiHostClass::Pointer)
    }

    /// Primitive kind this class lowers to on `abi`.
    pub const fn primitive_tag(self, abi: &TargetAbi) -> PrimitiveTag {
        match self {
            FfiHostClass::Int8 => PrimitiveTag::Int8,
            FfiHostClass::Int16 => PrimitiveTag::Int16,
            FfiHostClass::Int32 => PrimitiveTag::Int32,
            FfiHostClass::Int64 => PrimitiveTag::Int64,
            FfiHostClass::Uint8 => PrimitiveTag::Uint8,
            FfiHostClass::Uint16 => PrimitiveTag::Uint16,
            FfiHostClass::Uint32 => PrimitiveTag::Uint32,
            FfiHostClass::Uint64 => PrimitiveTag::Uint64,
            FfiHostClass::IntPtr | FfiHostClass::Pointer => abi.pointer_tag(),
            FfiHostClass::Float => PrimitiveTag::Float,
            FfiHostClass::Double => PrimitiveTag::Double,
            FfiHostClass::Void => PrimitiveTag::Void,
        }
    }
}

impl fmt::Display for FfiHostClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
