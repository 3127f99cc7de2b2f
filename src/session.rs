//! LoweringSession - one compilation job's view of the native type model.

use bumpalo::Bump;
use nativeffi_core::{
    HostTypeDescriptor, LoweringResult, NativeFunctionType, NativeType, Representation,
    StorageClassId, TargetAbi,
};
use tracing::debug;

/// Lowering context for one compilation job.
///
/// Pairs the job's arena with the target it compiles for. Every native type
/// handed out lives as long as the arena; dropping the arena at the end of the
/// job releases all of them at once.
///
/// Jobs running on different threads each own their own session and arena.
#[derive(Debug, Clone, Copy)]
pub struct LoweringSession<'a> {
    arena: &'a Bump,
    abi: TargetAbi,
}

impl<'a> LoweringSession<'a> {
    pub fn new(arena: &'a Bump, abi: TargetAbi) -> Self {
        debug!(target_abi = %abi, "starting lowering session");
        Self { arena, abi }
    }

    /// Session for the target this crate was compiled for.
    pub fn for_host(arena: &'a Bump) -> Self {
        Self::new(arena, TargetAbi::host())
    }

    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    pub fn abi(&self) -> &TargetAbi {
        &self.abi
    }

    pub fn lower_host_type<H>(&self, ty: &H) -> LoweringResult<&'a NativeType>
    where
        H: HostTypeDescriptor + ?Sized,
    {
        NativeType::from_host_type(self.arena, &self.abi, ty)
    }

    pub fn lower_signature<H>(
        &self,
        argument_types: &[H],
        return_type: &H,
    ) -> LoweringResult<NativeFunctionType<'a>>
    where
        H: HostTypeDescriptor,
    {
        NativeFunctionType::from_host_signature(self.arena, &self.abi, argument_types, return_type)
    }

    pub fn lower_storage_class(&self, id: StorageClassId) -> &'a NativeType {
        NativeType::from_storage_class(self.arena, id)
    }

    /// # Panics
    ///
    /// Panics if `raw` is not an enumerated storage-class id.
    pub fn lower_storage_class_id(&self, raw: u16) -> &'a NativeType {
        NativeType::from_storage_class_id(self.arena, raw)
    }

    /// # Panics
    ///
    /// Panics if `rep` has no native counterpart.
    pub fn lower_representation(&self, rep: Representation) -> &'a NativeType {
        NativeType::from_unboxed_representation(self.arena, rep)
    }

    /// Both halves of an 8-byte type, low/first half first.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is not an 8-byte primitive.
    pub fn split(&self, ty: &NativeType) -> [&'a NativeType; 2] {
        [ty.split(0), ty.split(1)]
    }

    pub fn widen(&self, ty: &'a NativeType) -> &'a NativeType {
        ty.widen_to_4_bytes()
    }

    /// Stack alignment of `ty` on this session's target.
    pub fn stack_alignment(&self, ty: &NativeType) -> usize {
        ty.alignment_in_bytes_stack_on(&self.abi)
    }

    /// Field alignment of `ty` on this session's target.
    pub fn field_alignment(&self, ty: &NativeType) -> usize {
        ty.alignment_in_bytes_field_on(&self.abi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nativeffi_core::{HostType, PrimitiveTag, TargetArch, TargetOs};

    #[test]
    fn lowers_through_session() {
        let arena = Bump::new();
        let session = LoweringSession::new(
            &arena,
            TargetAbi::for_target(TargetArch::Arm, TargetOs::Android),
        );
        let pointer = session.lower_host_type(&HostType::named("Pointer")).unwrap();
        assert_eq!(pointer.as_primitive().tag(), PrimitiveTag::Uint32);
        assert_eq!(session.stack_alignment(pointer), 4);
    }

    #[test]
    fn split_returns_both_halves() {
        let arena = Bump::new();
        let session = LoweringSession::for_host(&arena);
        let int64 = session.lower_storage_class(StorageClassId::Int64Array);
        let [lo, hi] = session.split(int64);
        assert_eq!(lo.as_primitive().tag(), PrimitiveTag::Uint32);
        assert_eq!(hi.as_primitive().tag(), PrimitiveTag::Int32);
    }

    #[test]
    fn widen_through_session() {
        let arena = Bump::new();
        let session = LoweringSession::for_host(&arena);
        let uint8 = session.lower_storage_class_id(1);
        assert_eq!(session.widen(uint8).as_primitive().tag(), PrimitiveTag::Uint32);
    }

    #[test]
    fn split_and_widen_leave_the_arena_alone() {
        let arena = Bump::new();
        let session = LoweringSession::for_host(&arena);
        let double = session.lower_storage_class(StorageClassId::Float64Array);
        let int16 = session.lower_storage_class(StorageClassId::Int16Array);
        let before = arena.allocated_bytes();
        for _ in 0..1_000 {
            session.split(double);
            session.widen(int16);
        }
        assert_eq!(arena.allocated_bytes(), before);
    }

    #[test]
    fn abi_is_kept() {
        let arena = Bump::new();
        let abi = TargetAbi::for_target(TargetArch::Ia32, TargetOs::Linux);
        let session = LoweringSession::new(&arena, abi);
        assert_eq!(session.abi(), &abi);
        let double = session.lower_representation(Representation::UnboxedDouble);
        assert_eq!(session.field_alignment(double), 4);
    }
}
