//! Per-target ABI configuration.
//!
//! Native types know their natural size and alignment. How a target places
//! them on the stack or inside a composite is a property of the target's
//! calling convention, captured here as a [`TargetAbi`] value the marshaller
//! passes into the target-aware queries.

use std::fmt;

use crate::PrimitiveTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetArch {
    Ia32,
    X64,
    Arm,
    Arm64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOs {
    Linux,
    Android,
    MacOs,
    Ios,
    Windows,
    Fuchsia,
}

impl TargetOs {
    pub const fn is_apple(self) -> bool {
        matches!(self, TargetOs::MacOs | TargetOs::Ios)
    }
}

/// Alignment rule for arguments passed on the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackAlignment {
    /// Every stack argument occupies word-aligned slots.
    AlignedToWordSize,
    /// Word-aligned, except 8-byte values which are 8-aligned.
    AlignedToWordSizeBut8AlignedTo8,
    /// Stack arguments are only aligned to their own size.
    AlignedToValueSize,
}

/// Alignment rule for values inside a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldAlignment {
    AlignedToValueSize,
    /// Value-size aligned, except 8-byte values which are 4-aligned.
    AlignedToValueSizeBut8AlignedTo4,
}

/// Calling-convention facts about one target that affect native type placement.
///
/// Only built from presets, so word size and alignment policies always agree
/// with the architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetAbi {
    arch: TargetArch,
    os: TargetOs,
    word_size: usize,
    stack_alignment: StackAlignment,
    field_alignment: FieldAlignment,
}

impl TargetAbi {
    /// Preset for an architecture and operating system.
    pub const fn for_target(arch: TargetArch, os: TargetOs) -> Self {
        let (word_size, stack_alignment, field_alignment) = match arch {
            TargetArch::Ia32 => (
                4,
                StackAlignment::AlignedToWordSize,
                match os {
                    TargetOs::Linux | TargetOs::Android => {
                        FieldAlignment::AlignedToValueSizeBut8AlignedTo4
                    }
                    _ => FieldAlignment::AlignedToValueSize,
                },
            ),
            TargetArch::X64 => (
                8,
                StackAlignment::AlignedToWordSize,
                FieldAlignment::AlignedToValueSize,
            ),
            TargetArch::Arm => (
                4,
                StackAlignment::AlignedToWordSizeBut8AlignedTo8,
                FieldAlignment::AlignedToValueSize,
            ),
            TargetArch::Arm64 => (
                8,
                if os.is_apple() {
                    StackAlignment::AlignedToValueSize
                } else {
                    StackAlignment::AlignedToWordSize
                },
                FieldAlignment::AlignedToValueSize,
            ),
        };
        Self {
            arch,
            os,
            word_size,
            stack_alignment,
            field_alignment,
        }
    }

    /// Preset for the target this crate was compiled for.
    ///
    /// Unknown architectures fall back to x64 and unknown systems to Linux.
    pub fn host() -> Self {
        let arch = if cfg!(target_arch = "x86") {
            TargetArch::Ia32
        } else if cfg!(target_arch = "arm") {
            TargetArch::Arm
        } else if cfg!(target_arch = "aarch64") {
            TargetArch::Arm64
        } else {
            TargetArch::X64
        };
        let os = if cfg!(target_os = "android") {
            TargetOs::Android
        } else if cfg!(target_os = "macos") {
            TargetOs::MacOs
        } else if cfg!(target_os = "ios") {
            TargetOs::Ios
        } else if cfg!(target_os = "windows") {
            TargetOs::Windows
        } else if cfg!(target_os = "fuchsia") {
            TargetOs::Fuchsia
        } else {
            TargetOs::Linux
        };
        Self::for_target(arch, os)
    }

    #[inline]
    pub const fn arch(&self) -> TargetArch {
        self.arch
    }

    #[inline]
    pub const fn os(&self) -> TargetOs {
        self.os
    }

    /// Register width in bytes: 4 or 8.
    #[inline]
    pub const fn word_size(&self) -> usize {
        self.word_size
    }

    #[inline]
    pub const fn stack_alignment(&self) -> StackAlignment {
        self.stack_alignment
    }

    #[inline]
    pub const fn field_alignment(&self) -> FieldAlignment {
        self.field_alignment
    }

    /// Integer kind that pointer-like host types collapse to.
    pub const fn pointer_tag(&self) -> PrimitiveTag {
        if self.word_size == 4 {
            PrimitiveTag::Uint32
        } else {
            PrimitiveTag::Int64
        }
    }

    /// Stack alignment of a value of `size_in_bytes` bytes under this target.
    pub const fn stack_alignment_of(&self, size_in_bytes: usize) -> usize {
        if size_in_bytes == 0 {
            return 0;
        }
        match self.stack_alignment {
            StackAlignment::AlignedToWordSize => self.word_size,
            StackAlignment::AlignedToWordSizeBut8AlignedTo8 => {
                if size_in_bytes == 8 {
                    8
                } else {
                    self.word_size
                }
            }
            StackAlignment::AlignedToValueSize => size_in_bytes,
        }
    }

    /// Field alignment of a value of `size_in_bytes` bytes under this target.
    pub const fn field_alignment_of(&self, size_in_bytes: usize) -> usize {
        match self.field_alignment {
            FieldAlignment::AlignedToValueSize => size_in_bytes,
            FieldAlignment::AlignedToValueSizeBut8AlignedTo4 => {
                if size_in_bytes == 8 {
                    4
                } else {
                    size_in_bytes
                }
            }
        }
    }
}

impl Default for TargetAbi {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for TargetAbi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.arch, self.os)
    }
}
