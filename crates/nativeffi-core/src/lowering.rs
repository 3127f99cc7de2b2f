//! Lowering factories.
//!
//! Native types are only ever built here, from one of three inputs:
//!
//! - a host static type ([`NativeType::from_host_type`]), which can fail with
//!   [`LoweringError`] when the host type has no native counterpart;
//! - a raw typed-storage class id ([`NativeType::from_storage_class_id`]);
//! - an unboxed value representation
//!   ([`NativeType::from_unboxed_representation`]).
//!
//! The last two are total over their inputs that can legitimately reach this
//! layer and panic on anything else.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use nativeffi_core::{HostType, NativeFunctionType, TargetAbi, TargetArch, TargetOs};
//!
//! let arena = Bump::new();
//! let abi = TargetAbi::for_target(TargetArch::X64, TargetOs::Linux);
//! let sig = NativeFunctionType::from_host_signature(
//!     &arena,
//!     &abi,
//!     &[HostType::named("Int32")],
//!     &HostType::named("Void"),
//! )
//! .unwrap();
//! assert_eq!(sig.to_string(), "(int32) => void");
//! ```

use bumpalo::Bump;
use tracing::{debug, trace};

use crate::{
    FfiHostClass, HostTypeDescriptor, LoweringError, LoweringResult, NativeFunctionType,
    NativeType, PrimitiveTag, Representation, StorageClassId, TargetAbi,
};

fn host_type_tag<H>(abi: &TargetAbi, ty: &H) -> Result<PrimitiveTag, String>
where
    H: HostTypeDescriptor + ?Sized,
{
    match FfiHostClass::from_class_hash(ty.class_hash()) {
        Some(class) if class.is_generic() || !ty.has_type_args() => Ok(class.primitive_tag(abi)),
        _ => {
            let type_name = ty.display_name();
            debug!(%type_name, %abi, "host type has no native counterpart");
            Err(type_name)
        }
    }
}

impl NativeType {
    /// Lower a host static type.
    ///
    /// Fixed-width integers, floats, doubles and void map to the matching
    /// primitive. `Pointer` (any instantiation) and `IntPtr` map to the
    /// target's pointer-sized integer. Any other class instantiated with type
    /// arguments is unsupported. Nothing is allocated on failure.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn from_host_type<'a, H>(
        arena: &'a Bump,
        abi: &TargetAbi,
        ty: &H,
    ) -> LoweringResult<&'a NativeType>
    where
        H: HostTypeDescriptor + ?Sized,
    {
        let tag = host_type_tag(abi, ty)
            .map_err(|type_name| LoweringError::UnsupportedFfiType { type_name })?;
        trace!(%tag, %abi, "lowered host type");
        Ok(NativeType::alloc_primitive(arena, tag))
    }

    /// Lower the element type of a typed-storage class.
    pub fn from_storage_class(arena: &Bump, id: StorageClassId) -> &NativeType {
        let tag = id.element_tag();
        trace!(storage_class = %id, %tag, "lowered storage class");
        NativeType::alloc_primitive(arena, tag)
    }

    /// Lower a raw typed-storage class id.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not an enumerated [`StorageClassId`].
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn from_storage_class_id(arena: &Bump, raw: u16) -> &NativeType {
        let id = StorageClassId::try_from(raw)
            .unwrap_or_else(|_| panic!("storage class id {raw} has no native type"));
        NativeType::from_storage_class(arena, id)
    }

    /// Lower an unboxed representation to the primitive with the same bit
    /// pattern meaning.
    ///
    /// # Panics
    ///
    /// Panics for representations without a native counterpart (tagged,
    /// untagged, SIMD and pair representations).
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn from_unboxed_representation(arena: &Bump, rep: Representation) -> &NativeType {
        let tag = match rep {
            Representation::UnboxedDouble => PrimitiveTag::Double,
            Representation::UnboxedFloat => PrimitiveTag::Float,
            Representation::UnboxedInt32 => PrimitiveTag::Int32,
            Representation::UnboxedUint32 => PrimitiveTag::Uint32,
            Representation::UnboxedInt64 => PrimitiveTag::Int64,
            Representation::UnboxedUint64 => PrimitiveTag::Uint64,
            Representation::NoRepresentation
            | Representation::Tagged
            | Representation::Untagged
            | Representation::UnboxedFloat32x4
            | Representation::PairOfTagged => {
                panic!("representation {rep} has no native type")
            }
        };
        trace!(representation = %rep, %tag, "lowered representation");
        NativeType::alloc_primitive(arena, tag)
    }
}

impl<'a> NativeFunctionType<'a> {
    /// Lower a host function signature, arguments left to right.
    ///
    /// Fails on the first argument or return type without a native
    /// counterpart. No native type is allocated unless every type lowers.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn from_host_signature<H>(
        arena: &'a Bump,
        abi: &TargetAbi,
        argument_types: &[H],
        return_type: &H,
    ) -> LoweringResult<Self>
    where
        H: HostTypeDescriptor,
    {
        let mut tags = Vec::with_capacity(argument_types.len());
        for (index, arg) in argument_types.iter().enumerate() {
            let tag = host_type_tag(abi, arg)
                .map_err(|type_name| LoweringError::UnsupportedArgument { index, type_name })?;
            tags.push(tag);
        }
        let return_tag = host_type_tag(abi, return_type)
            .map_err(|type_name| LoweringError::UnsupportedReturn { type_name })?;

        let mut args = bumpalo::collections::Vec::with_capacity_in(tags.len(), arena);
        for tag in tags {
            args.push(NativeType::alloc_primitive(arena, tag));
        }
        let signature = NativeFunctionType::new(
            args.into_bump_slice(),
            NativeType::alloc_primitive(arena, return_tag),
        );
        debug!(%signature, %abi, "lowered host signature");
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HostType, TargetArch, TargetOs};

    fn x64() -> TargetAbi {
        TargetAbi::for_target(TargetArch::X64, TargetOs::Linux)
    }

    fn ia32() -> TargetAbi {
        TargetAbi::for_target(TargetArch::Ia32, TargetOs::Linux)
    }

    #[test]
    fn lowers_fixed_width_host_types() {
        let arena = Bump::new();
        let cases = [
            ("Int8", PrimitiveTag::Int8),
            ("Uint16", PrimitiveTag::Uint16),
            ("Int32", PrimitiveTag::Int32),
            ("Uint64", PrimitiveTag::Uint64),
            ("Float", PrimitiveTag::Float),
            ("Double", PrimitiveTag::Double),
            ("Void", PrimitiveTag::Void),
        ];
        for (name, tag) in cases {
            let ty = NativeType::from_host_type(&arena, &x64(), &HostType::named(name)).unwrap();
            assert_eq!(ty.as_primitive().tag(), tag, "{name}");
        }
    }

    #[test]
    fn pointers_collapse_to_word_sized_integers() {
        let arena = Bump::new();
        let args = [HostType::named("Int8")];
        let pointer = HostType::generic("Pointer", &args);
        let on_x64 = NativeType::from_host_type(&arena, &x64(), &pointer).unwrap();
        let on_ia32 = NativeType::from_host_type(&arena, &ia32(), &pointer).unwrap();
        assert_eq!(on_x64.as_primitive().tag(), PrimitiveTag::Int64);
        assert_eq!(on_ia32.as_primitive().tag(), PrimitiveTag::Uint32);

        let intptr = NativeType::from_host_type(&arena, &ia32(), &HostType::named("IntPtr")).unwrap();
        assert_eq!(intptr.size_in_bytes(), 4);
    }

    #[test]
    fn unsupported_host_type_allocates_nothing() {
        let arena = Bump::new();
        let before = arena.allocated_bytes();
        let err = NativeType::from_host_type(&arena, &x64(), &HostType::named("Handle")).unwrap_err();
        assert_eq!(
            err,
            LoweringError::UnsupportedFfiType {
                type_name: "Handle".into()
            }
        );
        assert_eq!(arena.allocated_bytes(), before);
    }

    #[test]
    fn fixed_width_classes_reject_type_arguments() {
        let arena = Bump::new();
        let args = [HostType::named("Int8")];
        for name in ["Int32", "Double", "Void", "IntPtr"] {
            let ty = HostType::generic(name, &args);
            let err = NativeType::from_host_type(&arena, &x64(), &ty).unwrap_err();
            assert_eq!(
                err,
                LoweringError::UnsupportedFfiType {
                    type_name: format!("{name}<Int8>")
                }
            );
        }
        let pointer = HostType::generic("Pointer", &args);
        assert!(NativeType::from_host_type(&arena, &x64(), &pointer).is_ok());
    }

    #[test]
    fn storage_class_ids_lower_injectively() {
        let arena = Bump::new();
        let mut seen = rustc_hash::FxHashSet::default();
        for id in StorageClassId::ALL {
            let raw: u16 = id.into();
            let tag = NativeType::from_storage_class_id(&arena, raw).as_primitive().tag();
            assert_eq!(
                NativeType::from_storage_class_id(&arena, raw).as_primitive().tag(),
                tag
            );
            assert!(seen.insert(tag), "{id} collides");
        }
    }

    #[test]
    #[should_panic(expected = "storage class id 77 has no native type")]
    fn unknown_storage_class_id_panics() {
        let arena = Bump::new();
        NativeType::from_storage_class_id(&arena, 77);
    }

    #[test]
    fn representation_round_trip() {
        let arena = Bump::new();
        for tag in PrimitiveTag::ALL {
            let ty = NativeType::alloc_primitive(&arena, tag);
            if ty.is_expressible_as_representation() {
                let rep = ty.as_representation();
                let back = NativeType::from_unboxed_representation(&arena, rep);
                assert!(back.equals(ty), "{tag} -> {rep} -> {back}");
            }
        }
    }

    #[test]
    #[should_panic(expected = "representation tagged has no native type")]
    fn tagged_representation_panics() {
        let arena = Bump::new();
        NativeType::from_unboxed_representation(&arena, Representation::Tagged);
    }

    #[test]
    fn lowers_signature() {
        let arena = Bump::new();
        let args = [HostType::named("Int8"), HostType::named("Double")];
        let sig =
            NativeFunctionType::from_host_signature(&arena, &x64(), &args, &HostType::named("Int64"))
                .unwrap();
        assert_eq!(sig.to_string(), "(int8, double) => int64");
    }

    #[test]
    fn signature_reports_failing_argument() {
        let arena = Bump::new();
        let before = arena.allocated_bytes();
        let args = [
            HostType::named("Int32"),
            HostType::named("Float"),
            HostType::named("Struct"),
        ];
        let err =
            NativeFunctionType::from_host_signature(&arena, &x64(), &args, &HostType::named("Void"))
                .unwrap_err();
        assert_eq!(
            err,
            LoweringError::UnsupportedArgument {
                index: 2,
                type_name: "Struct".into()
            }
        );
        assert_eq!(arena.allocated_bytes(), before);
    }

    #[test]
    fn signature_reports_failing_return() {
        let arena = Bump::new();
        let err = NativeFunctionType::from_host_signature(
            &arena,
            &x64(),
            &[HostType::named("Int32")],
            &HostType::named("String"),
        )
        .unwrap_err();
        assert_eq!(err.type_name(), "String");
        assert!(matches!(err, LoweringError::UnsupportedReturn { .. }));
    }
}
