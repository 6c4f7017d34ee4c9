use morph_core::Shape;
use owo_colors::OwoColorize;

/// Errors that can occur when reflecting on values.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum ReflectError {
    /// Tried to get the wrong shape out of a value, e.g. we were holding
    /// a `String`, but `.get()` was called with a `u64`.
    WrongShape {
        /// The expected shape of the value.
        expected: &'static Shape,
        /// The actual shape of the value.
        actual: &'static Shape,
    },

    /// Attempted to perform an operation that expected a struct or something
    WasNotA {
        /// The name of the expected kind.
        expected: &'static str,

        /// The type we got instead
        actual: &'static Shape,
    },

    /// The shape of a value promised a view its implementation didn't provide,
    /// e.g. a struct shape on a value that reflects as a list.
    InvariantViolation {
        /// The invariant that was violated.
        invariant: &'static str,
    },

    /// An error occurred when attempting to access or modify a field.
    FieldError {
        /// The shape of the value containing the field.
        shape: &'static Shape,
        /// The specific error that occurred with the field.
        field_error: FieldError,
    },
}

impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReflectError::WrongShape { expected, actual } => {
                write!(
                    f,
                    "Wrong shape: expected {}, but got {}",
                    expected.green(),
                    actual.red()
                )
            }
            ReflectError::WasNotA { expected, actual } => {
                write!(
                    f,
                    "Wrong shape: expected {}, but got {}",
                    expected.green(),
                    actual.red()
                )
            }
            ReflectError::InvariantViolation { invariant } => {
                write!(f, "Invariant violation: {}", invariant.red())
            }
            ReflectError::FieldError { shape, field_error } => {
                write!(f, "Field error for shape {}: {}", shape.red(), field_error)
            }
        }
    }
}

impl core::error::Error for ReflectError {}

/// Errors when looking up a field or item by name or position
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum FieldError {
    /// The shape declares a field at this index, but the value didn't hand
    /// it out.
    NotProvided {
        /// the index of the field
        index: usize,
    },

    /// A field or item was requested past the end of a struct or list.
    IndexOutOfBounds {
        /// the requested index
        index: usize,
        /// how many fields or items there are
        len: usize,
    },
}

impl core::error::Error for FieldError {}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldError::NotProvided { index } => {
                write!(f, "Field {index} is declared but not provided")
            }
            FieldError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {index} out of bounds (length is {len})")
            }
        }
    }
}
