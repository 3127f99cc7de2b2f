//! Native function signatures.

use std::fmt;

use crate::NativeType;

/// Argument types, in call-site order, plus the return type of a native call.
///
/// Borrows its types from the arena of the compilation job; it owns nothing.
#[derive(Debug, Clone, Copy)]
pub struct NativeFunctionType<'a> {
    argument_types: &'a [&'a NativeType],
    return_type: &'a NativeType,
}

impl<'a> NativeFunctionType<'a> {
    pub fn new(argument_types: &'a [&'a NativeType], return_type: &'a NativeType) -> Self {
        Self {
            argument_types,
            return_type,
        }
    }

    pub fn argument_types(&self) -> &'a [&'a NativeType] {
        self.argument_types
    }

    pub fn return_type(&self) -> &'a NativeType {
        self.return_type
    }

    /// Structural equality of argument sequence and return type.
    pub fn equals(&self, other: &NativeFunctionType<'_>) -> bool {
        self.argument_types.len() == other.argument_types.len()
            && self
                .argument_types
                .iter()
                .zip(other.argument_types)
                .all(|(a, b)| a.equals(b))
            && self.return_type.equals(other.return_type)
    }
}

impl PartialEq for NativeFunctionType<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for NativeFunctionType<'_> {}

impl fmt::Display for NativeFunctionType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, arg) in self.argument_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        write!(f, ") => {}", self.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveTag;
    use bumpalo::Bump;

    #[test]
    fn renders_single_argument() {
        let arena = Bump::new();
        let int32 = NativeType::alloc_primitive(&arena, PrimitiveTag::Int32);
        let void = NativeType::alloc_primitive(&arena, PrimitiveTag::Void);
        let args = arena.alloc_slice_copy(&[int32]);
        let sig = NativeFunctionType::new(args, void);
        assert_eq!(sig.to_string(), "(int32) => void");
    }

    #[test]
    fn renders_arguments_in_order() {
        let arena = Bump::new();
        let args = arena.alloc_slice_copy(&[
            NativeType::alloc_primitive(&arena, PrimitiveTag::Int8),
            NativeType::alloc_primitive(&arena, PrimitiveTag::Double),
            NativeType::alloc_primitive(&arena, PrimitiveTag::Uint64),
        ]);
        let ret = NativeType::alloc_primitive(&arena, PrimitiveTag::Float);
        let sig = NativeFunctionType::new(args, ret);
        assert_eq!(sig.to_string(), "(int8, double, uint64) => float");
        assert_eq!(sig.argument_types().len(), 3);
        assert!(sig.return_type().is_float());
    }

    #[test]
    fn renders_empty_argument_list() {
        let arena = Bump::new();
        let ret = NativeType::alloc_primitive(&arena, PrimitiveTag::Int64);
        let sig = NativeFunctionType::new(&[], ret);
        assert_eq!(sig.to_string(), "() => int64");
    }

    fn signature<'a>(
        arena: &'a Bump,
        tags: &[PrimitiveTag],
        ret: PrimitiveTag,
    ) -> NativeFunctionType<'a> {
        let args: Vec<&NativeType> = tags
            .iter()
            .map(|t| NativeType::alloc_primitive(arena, *t))
            .collect();
        NativeFunctionType::new(
            arena.alloc_slice_copy(&args),
            NativeType::alloc_primitive(arena, ret),
        )
    }

    #[test]
    fn equality_is_structural() {
        let arena = Bump::new();
        let a = signature(&arena, &[PrimitiveTag::Int32, PrimitiveTag::Float], PrimitiveTag::Void);
        let b = signature(&arena, &[PrimitiveTag::Int32, PrimitiveTag::Float], PrimitiveTag::Void);
        let c = signature(&arena, &[PrimitiveTag::Float, PrimitiveTag::Int32], PrimitiveTag::Void);
        let d = signature(&arena, &[PrimitiveTag::Int32], PrimitiveTag::Void);
        let e = signature(&arena, &[PrimitiveTag::Int32, PrimitiveTag::Float], PrimitiveTag::Int8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(a, e);
    }
}
