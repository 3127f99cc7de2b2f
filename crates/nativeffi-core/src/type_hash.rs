//! Deterministic hash-based identity for host type descriptors.
//!
//! The lowering factories never inspect host type names directly. A host type
//! descriptor reports a [`TypeHash`] for its class and the factories look that
//! hash up in a fixed table. Hashes are computed deterministically from names,
//! so the table can be built without any registration step.
//!
//! # Examples
//!
//! ```
//! use nativeffi_core::TypeHash;
//!
//! let int8 = TypeHash::from_name("Int8");
//! assert_eq!(int8, TypeHash::from_name("Int8"));
//! assert_ne!(int8, TypeHash::from_name("Uint8"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
pub mod hash_constants {
    /// Separator constant between type arguments.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Position markers for type arguments, so `Map<A, B>` and `Map<B, A>` differ.
    pub const ARG_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];
}

/// A deterministic 64-bit hash identifying a host type or host class.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Create a type hash from a host type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a hash for a generic instantiation such as `Pointer<Int8>`.
    ///
    /// Argument order matters. The result never equals the hash of the bare
    /// class unless `args` is empty.
    #[inline]
    pub fn from_generic_instance(class: TypeHash, args: &[TypeHash]) -> Self {
        let mut hash = class.0;
        for (i, arg) in args.iter().enumerate() {
            let marker = hash_constants::ARG_MARKERS
                .get(i)
                .copied()
                .unwrap_or_else(|| hash_constants::ARG_MARKERS[0].wrapping_add(i as u64));
            hash = hash
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(marker ^ arg.0);
        }
        TypeHash(hash)
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_hash_determinism() {
        assert_eq!(TypeHash::from_name("Int32"), TypeHash::from_name("Int32"));
        assert_eq!(TypeHash::from_name("Pointer"), TypeHash::from_name("Pointer"));
    }

    #[test]
    fn type_hash_uniqueness() {
        let int32 = TypeHash::from_name("Int32");
        let uint32 = TypeHash::from_name("Uint32");
        let float = TypeHash::from_name("Float");
        assert_ne!(int32, uint32);
        assert_ne!(int32, float);
        assert_ne!(uint32, float);
    }

    #[test]
    fn generic_instance_argument_order_matters() {
        let map = TypeHash::from_name("Map");
        let a = TypeHash::from_name("Int8");
        let b = TypeHash::from_name("Double");
        assert_ne!(
            TypeHash::from_generic_instance(map, &[a, b]),
            TypeHash::from_generic_instance(map, &[b, a])
        );
    }

    #[test]
    fn generic_instance_without_args_is_class() {
        let pointer = TypeHash::from_name("Pointer");
        assert_eq!(TypeHash::from_generic_instance(pointer, &[]), pointer);
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", TypeHash(0xff)), "0x00000000000000ff");
        assert_eq!(format!("{:?}", TypeHash(0xff)), "TypeHash(0x00000000000000ff)");
    }
}
