use morph_core::{Kind, Shape};

use crate::ReflectError;

/// Errors that can occur while composing one value into another.
///
/// Every variant carries the shapes of the destination and source values at
/// the point where composition failed. The messages name both kinds and both
/// types, e.g.:
///
/// ```text
/// destination kind `string` and source kind `ptr` with type destination `String` and type source `Option<i32>` didn't match
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComposeError {
    /// Leaf assignment between values that aren't the same kind of leaf, or
    /// a value of one kind composed into a value of another kind.
    KindMismatch {
        /// The destination shape
        dst: &'static Shape,
        /// The source shape
        src: &'static Shape,
    },

    /// `set_slice` called where either side isn't a list
    NotASlice {
        /// The destination shape
        dst: &'static Shape,
        /// The source shape
        src: &'static Shape,
    },

    /// `set_struct` called where either side isn't a struct
    NotAStruct {
        /// The destination shape
        dst: &'static Shape,
        /// The source shape
        src: &'static Shape,
    },

    /// `set_pointer` called where either side isn't a pointer
    NotAPointer {
        /// The destination shape
        dst: &'static Shape,
        /// The source shape
        src: &'static Shape,
    },

    /// A value didn't live up to its shape, e.g. a struct that declares a
    /// field but doesn't hand it out. Only hand-written `Reflect` impls can
    /// get there.
    Reflect {
        /// The destination shape
        dst: &'static Shape,
        /// The source shape
        src: &'static Shape,
        /// What went wrong
        error: ReflectError,
    },
}

impl ComposeError {
    /// Shape of the destination value that failed to compose
    pub fn dst(&self) -> &'static Shape {
        match self {
            ComposeError::KindMismatch { dst, .. }
            | ComposeError::NotASlice { dst, .. }
            | ComposeError::NotAStruct { dst, .. }
            | ComposeError::NotAPointer { dst, .. }
            | ComposeError::Reflect { dst, .. } => *dst,
        }
    }

    /// Shape of the source value that failed to compose
    pub fn src(&self) -> &'static Shape {
        match self {
            ComposeError::KindMismatch { src, .. }
            | ComposeError::NotASlice { src, .. }
            | ComposeError::NotAStruct { src, .. }
            | ComposeError::NotAPointer { src, .. }
            | ComposeError::Reflect { src, .. } => *src,
        }
    }

    /// The kind both sides were required to have, if the error came from a
    /// kind-specific setter
    ///
    /// Its name is what the message reports as the source kind, whatever
    /// the source actually was.
    pub fn expected_kind(&self) -> Option<Kind> {
        match self {
            ComposeError::KindMismatch { .. } | ComposeError::Reflect { .. } => None,
            ComposeError::NotASlice { .. } => Some(Kind::Slice),
            ComposeError::NotAStruct { .. } => Some(Kind::Struct),
            ComposeError::NotAPointer { .. } => Some(Kind::Pointer),
        }
    }
}

impl core::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (dst, src) = (self.dst(), self.src());
        let (src_kind, outcome): (&dyn core::fmt::Display, _) = match self {
            ComposeError::KindMismatch { .. } => (&src.ty, "didn't match"),
            ComposeError::NotASlice { .. } => (&"slice", "must both be `slice`"),
            ComposeError::NotAStruct { .. } => (&"struct", "must both be `struct`"),
            ComposeError::NotAPointer { .. } => (&"ptr", "must both be `ptr`"),
            ComposeError::Reflect { error, .. } => {
                return write!(
                    f,
                    "composing type source `{src}` into type destination `{dst}` failed: {error}"
                );
            }
        };
        write!(
            f,
            "destination kind `{}` and source kind `{src_kind}` with type destination `{dst}` and type source `{src}` {outcome}",
            dst.ty
        )
    }
}

impl core::error::Error for ComposeError {}
