//! Recoverable lowering errors.
//!
//! Only one thing can go wrong in a way the caller is expected to handle: a
//! host type with no native counterpart reached an FFI signature. The caller
//! decides how to report it to the user.
//!
//! Everything else (splitting a 4-byte type, an unknown storage-class id, a
//! representation without a native counterpart) is a compiler bug and panics
//! at the call site instead of producing a `LoweringError`.

use thiserror::Error;

/// A host type could not be lowered to a native type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoweringError {
    /// A single host type has no native counterpart.
    #[error("unsupported FFI type '{type_name}'")]
    UnsupportedFfiType { type_name: String },

    /// An argument of a host signature has no native counterpart.
    #[error("unsupported FFI type '{type_name}' for argument {index}")]
    UnsupportedArgument { index: usize, type_name: String },

    /// The return type of a host signature has no native counterpart.
    #[error("unsupported FFI return type '{type_name}'")]
    UnsupportedReturn { type_name: String },
}

impl LoweringError {
    /// Name of the rejected host type.
    pub fn type_name(&self) -> &str {
        match self {
            LoweringError::UnsupportedFfiType { type_name }
            | LoweringError::UnsupportedArgument { type_name, .. }
            | LoweringError::UnsupportedReturn { type_name } => type_name,
        }
    }
}

/// Result type for lowering factories.
pub type LoweringResult<T> = Result<T, LoweringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let single = LoweringError::UnsupportedFfiType {
            type_name: "Handle".into(),
        };
        assert_eq!(single.to_string(), "unsupported FFI type 'Handle'");

        let arg = LoweringError::UnsupportedArgument {
            index: 2,
            type_name: "Struct".into(),
        };
        assert_eq!(arg.to_string(), "unsupported FFI type 'Struct' for argument 2");

        let ret = LoweringError::UnsupportedReturn {
            type_name: "String".into(),
        };
        assert_eq!(ret.to_string(), "unsupported FFI return type 'String'");
    }

    #[test]
    fn type_name_accessor() {
        let err = LoweringError::UnsupportedArgument {
            index: 0,
            type_name: "Handle".into(),
        };
        assert_eq!(err.type_name(), "Handle");
    }
}
