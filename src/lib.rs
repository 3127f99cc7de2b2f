//! Native types for FFI call lowering.
//!
//! Re-exports the native type model from `nativeffi-core` and adds
//! [`LoweringSession`], which pairs a compilation job's arena with its target.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use nativeffi::prelude::*;
//!
//! let arena = Bump::new();
//! let session = LoweringSession::new(
//!     &arena,
//!     TargetAbi::for_target(TargetArch::Arm, TargetOs::Linux),
//! );
//!
//! let int64 = session.lower_host_type(&HostType::named("Int64")).unwrap();
//! let [lo, hi] = session.split(int64);
//! assert_eq!(lo.to_string(), "uint32");
//! assert_eq!(hi.to_string(), "int32");
//! ```

mod session;

pub use nativeffi_core::*;
pub use session::LoweringSession;

pub mod prelude {
    pub use crate::session::LoweringSession;
    pub use nativeffi_core::{
        FfiHostClass, HostType, HostTypeDescriptor, LoweringError, LoweringResult,
        NativeFunctionType, NativePrimitiveType, NativeType, PrimitiveTag, Representation,
        StorageClassId, TargetAbi, TargetArch, TargetOs, TypeHash,
    };
}
