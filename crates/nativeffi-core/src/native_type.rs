//! Native types: the types calling conventions talk about.
//!
//! Native types are the integers, floats and (eventually) composites that
//! appear at a native ABI boundary. C types that calling conventions do not
//! discuss are lowered first: pointers become integers of the target's word
//! size.
//!
//! Native types overlap only partially with unboxed [`Representation`]s. They
//! add 8 and 16 bit integers and `void`, and they have nothing for tagged or
//! untagged values.
//!
//! Native types built by the lowering factories live in a [`Bump`] arena owned
//! by one compilation job and are handed out as `&'a NativeType`. They are never
//! mutated after construction, so references may be shared freely within the
//! job. Queries on an existing type ([`NativeType::split`],
//! [`NativeType::widen_to_4_bytes`]) never allocate: they hand out shared
//! per-kind instances instead.
//!
//! # Contract violations
//!
//! [`NativeType::split`], [`NativeType::as_representation`] and
//! [`NativeType::as_primitive`] panic when called outside their domain. Such a
//! call is a compiler bug and must not be turned into a recoverable error.

use std::fmt;

use bumpalo::Bump;

use crate::{PrimitiveTag, Representation, TargetAbi};

/// A native type.
///
/// This is a closed set. Composite types are reserved but not yet designed:
/// [`NativeCompoundType`] has no values, so every `match` over a `NativeType`
/// already handles the composite case and adding composites later is a
/// compiler-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    Primitive(NativePrimitiveType),
    Compound(NativeCompoundType),
}

/// Reserved for struct and union native types. Uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeCompoundType {}

/// A primitive native type.
///
/// These are the object types of C and the fundamental types of C++.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativePrimitiveType {
    tag: PrimitiveTag,
}

impl NativePrimitiveType {
    pub(crate) const fn new(tag: PrimitiveTag) -> Self {
        Self { tag }
    }

    pub const fn tag(&self) -> PrimitiveTag {
        self.tag
    }

    pub const fn size_in_bytes(&self) -> usize {
        self.tag.size_in_bytes()
    }

    /// Whether this primitive has an unboxed representation counterpart.
    pub const fn is_expressible_as_representation(&self) -> bool {
        self.representation().is_some()
    }

    const fn representation(&self) -> Option<Representation> {
        match self.tag {
            PrimitiveTag::Int32 => Some(Representation::UnboxedInt32),
            PrimitiveTag::Uint32 => Some(Representation::UnboxedUint32),
            PrimitiveTag::Int64 => Some(Representation::UnboxedInt64),
            PrimitiveTag::Uint64 => Some(Representation::UnboxedUint64),
            PrimitiveTag::Float => Some(Representation::UnboxedFloat),
            PrimitiveTag::Double => Some(Representation::UnboxedDouble),
            PrimitiveTag::Int8
            | PrimitiveTag::Uint8
            | PrimitiveTag::Int16
            | PrimitiveTag::Uint16
            | PrimitiveTag::HalfDouble
            | PrimitiveTag::Void => None,
        }
    }

    /// Kind of the `index`-th half when this 8-byte primitive is split in two.
    ///
    /// A double splits into two half-doubles. Which bits each half holds is an
    /// endianness question for the marshaller. A 64-bit integer splits into an
    /// unsigned low word and a high word that keeps the original signedness.
    ///
    /// # Panics
    ///
    /// Panics if this is not an 8-byte primitive or `index` is not 0 or 1.
    pub fn split_tag(&self, index: usize) -> PrimitiveTag {
        assert!(index <= 1, "split index {index} out of range for {self}");
        match (self.tag, index) {
            (PrimitiveTag::Double, _) => PrimitiveTag::HalfDouble,
            (PrimitiveTag::Int64 | PrimitiveTag::Uint64, 0) => PrimitiveTag::Uint32,
            (PrimitiveTag::Int64, _) => PrimitiveTag::Int32,
            (PrimitiveTag::Uint64, _) => PrimitiveTag::Uint32,
            (tag, _) => panic!("cannot split {tag}: only 8-byte primitives split"),
        }
    }

    /// Kind after widening: 8 and 16 bit integers become 32-bit integers of
    /// the same signedness, everything else is unchanged.
    pub const fn widened_tag(&self) -> PrimitiveTag {
        if self.tag.is_int() && self.tag.size_in_bytes() < 4 {
            if self.tag.is_signed() {
                PrimitiveTag::Int32
            } else {
                PrimitiveTag::Uint32
            }
        } else {
            self.tag
        }
    }
}

impl fmt::Display for NativePrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tag, f)
    }
}

/// One immutable instance per primitive kind, in [`PrimitiveTag`] declaration
/// order.
static SHARED_PRIMITIVES: [NativeType; PrimitiveTag::ALL.len()] = {
    let mut table = [NativeType::primitive(PrimitiveTag::Void); PrimitiveTag::ALL.len()];
    let mut i = 0;
    while i < table.len() {
        table[i] = NativeType::primitive(PrimitiveTag::ALL[i]);
        i += 1;
    }
    table
};

impl NativeType {
    pub(crate) const fn primitive(tag: PrimitiveTag) -> Self {
        NativeType::Primitive(NativePrimitiveType::new(tag))
    }

    /// The shared instance for `tag`. Lives for the whole program, so it
    /// outlives every job arena.
    pub(crate) fn shared(tag: PrimitiveTag) -> &'static NativeType {
        &SHARED_PRIMITIVES[tag as usize]
    }

    pub(crate) fn alloc_primitive(arena: &Bump, tag: PrimitiveTag) -> &NativeType {
        arena.alloc(NativeType::primitive(tag))
    }

    pub const fn is_primitive(&self) -> bool {
        matches!(self, NativeType::Primitive(_))
    }

    /// # Panics
    ///
    /// Panics if this is not a primitive.
    pub fn as_primitive(&self) -> &NativePrimitiveType {
        match self {
            NativeType::Primitive(primitive) => primitive,
            NativeType::Compound(compound) => match *compound {},
        }
    }

    pub const fn is_int(&self) -> bool {
        match self {
            NativeType::Primitive(primitive) => primitive.tag.is_int(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    pub const fn is_float(&self) -> bool {
        match self {
            NativeType::Primitive(primitive) => primitive.tag.is_float(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    pub const fn is_void(&self) -> bool {
        match self {
            NativeType::Primitive(primitive) => primitive.tag.is_void(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    pub const fn is_signed(&self) -> bool {
        match self {
            NativeType::Primitive(primitive) => primitive.tag.is_signed(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Size in bytes, without padding needed when repeated.
    pub const fn size_in_bytes(&self) -> usize {
        match self {
            NativeType::Primitive(primitive) => primitive.size_in_bytes(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Natural alignment as a stack argument.
    ///
    /// Targets that cap or raise stack alignment are handled by
    /// [`NativeType::alignment_in_bytes_stack_on`].
    pub const fn alignment_in_bytes_stack(&self) -> usize {
        self.alignment_in_bytes_field()
    }

    /// Natural alignment as a member of a composite. `void` is 0.
    pub const fn alignment_in_bytes_field(&self) -> usize {
        match self {
            NativeType::Primitive(primitive) => primitive.size_in_bytes(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Alignment as a stack argument under `abi`.
    pub const fn alignment_in_bytes_stack_on(&self, abi: &TargetAbi) -> usize {
        match self {
            NativeType::Primitive(primitive) => abi.stack_alignment_of(primitive.size_in_bytes()),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Alignment as a member of a composite under `abi`.
    pub const fn alignment_in_bytes_field_on(&self, abi: &TargetAbi) -> usize {
        match self {
            NativeType::Primitive(primitive) => abi.field_alignment_of(primitive.size_in_bytes()),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Whether this exact type has an unboxed representation.
    ///
    /// 8 and 16 bit integers never do; see
    /// [`NativeType::as_representation_over_approx`].
    pub const fn is_expressible_as_representation(&self) -> bool {
        match self {
            NativeType::Primitive(primitive) => primitive.is_expressible_as_representation(),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// # Panics
    ///
    /// Panics if [`NativeType::is_expressible_as_representation`] is false.
    pub fn as_representation(&self) -> Representation {
        match self {
            NativeType::Primitive(primitive) => primitive
                .representation()
                .unwrap_or_else(|| panic!("{primitive} has no unboxed representation")),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Unboxed representation of the widened type, so narrow integers resolve
    /// to their 32-bit register form.
    ///
    /// # Panics
    ///
    /// Panics for half-double and void.
    pub fn as_representation_over_approx(&self) -> Representation {
        match self {
            NativeType::Primitive(primitive) => {
                let widened = NativePrimitiveType::new(primitive.widened_tag());
                widened
                    .representation()
                    .unwrap_or_else(|| panic!("{widened} has no unboxed representation"))
            }
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// Structural equality: same variant, same parameters.
    pub fn equals(&self, other: &NativeType) -> bool {
        match (self, other) {
            (NativeType::Primitive(a), NativeType::Primitive(b)) => a.tag == b.tag,
            (NativeType::Compound(compound), _) | (_, NativeType::Compound(compound)) => {
                match *compound {}
            }
        }
    }

    /// The `index`-th half of a type that needs two 4-byte locations.
    ///
    /// # Panics
    ///
    /// Panics unless this is an 8-byte primitive and `index` is 0 or 1.
    pub fn split(&self, index: usize) -> &'static NativeType {
        match self {
            NativeType::Primitive(primitive) => NativeType::shared(primitive.split_tag(index)),
            NativeType::Compound(compound) => match *compound {},
        }
    }

    /// If this is an 8 or 16 bit integer, a 32-bit container of the same
    /// signedness. Otherwise `self`.
    pub fn widen_to_4_bytes(&self) -> &NativeType {
        match self {
            NativeType::Primitive(primitive) => {
                let widened = primitive.widened_tag();
                if widened == primitive.tag {
                    self
                } else {
                    NativeType::shared(widened)
                }
            }
            NativeType::Compound(compound) => match *compound {},
        }
    }
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeType::Primitive(primitive) => fmt::Display::fmt(primitive, f),
            NativeType::Compound(compound) => match *compound {},
        }
    }
}
