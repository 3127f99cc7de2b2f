//! Native type model for lowering FFI calls.
//!
//! This crate describes values at a native ABI boundary, independent of the
//! host language's managed types. A call-marshalling code generator consults it
//! for every placement decision: how big a value is, how it is aligned on the
//! stack or inside a composite, how an 8-byte value splits into two 4-byte
//! halves on a narrow target, and how narrow integers widen into a register.
//!
//! ## Modules
//!
//! - [`primitive_tag`]: the closed set of primitive kinds and their tables
//! - [`native_type`]: [`NativeType`] and its queries
//! - [`function_type`]: [`NativeFunctionType`], a lowered native signature
//! - [`lowering`]: factories from host types, storage-class ids and representations
//! - [`target`]: per-target stack and field alignment rules
//! - [`host_type`]: the host static type seam
//!
//! Native types are allocated in a [`bumpalo::Bump`] owned by one compilation
//! job and released together with it.

pub mod error;
pub mod function_type;
pub mod host_type;
pub mod lowering;
pub mod native_type;
pub mod primitive_tag;
pub mod representation;
pub mod storage_class;
pub mod target;
pub mod type_hash;

pub use error::{LoweringError, LoweringResult};
pub use function_type::NativeFunctionType;
pub use host_type::{FfiHostClass, HostType, HostTypeDescriptor};
pub use native_type::{NativeCompoundType, NativePrimitiveType, NativeType};
pub use primitive_tag::PrimitiveTag;
pub use representation::Representation;
pub use storage_class::StorageClassId;
pub use target::{FieldAlignment, StackAlignment, TargetAbi, TargetArch, TargetOs};
pub use type_hash::TypeHash;
