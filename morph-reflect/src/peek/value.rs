use core::any::Any;

use morph_core::{Kind, Morph, Reflect, Shape, Type, ValueRef};

use crate::ReflectError;

use super::{PeekList, PeekPointer, PeekStruct};

/// Lets you read from a value, whatever its concrete type
#[derive(Clone, Copy)]
pub struct Peek<'mem> {
    /// Underlying value
    pub(crate) value: &'mem dyn Reflect,

    /// Shape of the value
    pub(crate) shape: &'static Shape,
}

impl<'mem> Peek<'mem> {
    /// Creates a new `Peek` for a value of type `T`.
    pub fn new<T: Morph>(t: &'mem T) -> Self {
        Self {
            value: t,
            shape: T::SHAPE,
        }
    }

    /// Creates a new `Peek` for a type-erased value.
    pub fn from_dyn(value: &'mem dyn Reflect) -> Self {
        Self {
            value,
            shape: value.shape(),
        }
    }

    /// Returns the shape of the value
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Returns the structural kind of the value
    #[inline(always)]
    pub fn kind(&self) -> Kind {
        self.shape.kind()
    }

    /// Returns the underlying value
    #[inline(always)]
    pub fn as_reflect(&self) -> &'mem dyn Reflect {
        self.value
    }

    /// Returns true if the value is the zero value of its type
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns a leaf value as `&dyn Any`, for downcasting. Structured values
    /// (structs, lists, pointers) return `None`.
    pub fn as_leaf(&self) -> Option<&'mem dyn Any> {
        match self.value.reflect() {
            ValueRef::Scalar(any) => Some(any),
            _ => None,
        }
    }

    /// Gets a reference to a leaf value as a concrete type
    pub fn get<T: Morph>(&self) -> Result<&'mem T, ReflectError> {
        self.as_leaf()
            .and_then(|any| any.downcast_ref::<T>())
            .ok_or(ReflectError::WrongShape {
                expected: T::SHAPE,
                actual: self.shape,
            })
    }

    /// Tries to identify this value as a struct
    pub fn into_struct(self) -> Result<PeekStruct<'mem>, ReflectError> {
        let Type::Struct(ty) = self.shape.ty else {
            return Err(ReflectError::WasNotA {
                expected: "struct",
                actual: self.shape,
            });
        };
        match self.value.reflect() {
            ValueRef::Struct(value) => Ok(PeekStruct {
                value,
                ty,
                shape: self.shape,
            }),
            _ => Err(ReflectError::InvariantViolation {
                invariant: "struct shapes reflect as structs",
            }),
        }
    }

    /// Tries to identify this value as a list
    pub fn into_list(self) -> Result<PeekList<'mem>, ReflectError> {
        let Type::List(ty) = self.shape.ty else {
            return Err(ReflectError::WasNotA {
                expected: "list",
                actual: self.shape,
            });
        };
        match self.value.reflect() {
            ValueRef::List(value) => Ok(PeekList {
                value,
                ty,
                shape: self.shape,
            }),
            _ => Err(ReflectError::InvariantViolation {
                invariant: "list shapes reflect as lists",
            }),
        }
    }

    /// Tries to identify this value as a pointer
    pub fn into_pointer(self) -> Result<PeekPointer<'mem>, ReflectError> {
        let Type::Pointer(ty) = self.shape.ty else {
            return Err(ReflectError::WasNotA {
                expected: "pointer",
                actual: self.shape,
            });
        };
        match self.value.reflect() {
            ValueRef::Pointer(value) => Ok(PeekPointer {
                value,
                ty,
                shape: self.shape,
            }),
            _ => Err(ReflectError::InvariantViolation {
                invariant: "pointer shapes reflect as pointers",
            }),
        }
    }
}

impl core::fmt::Debug for Peek<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Peek")
            .field("shape", &format_args!("{}", self.shape))
            .field("kind", &self.kind())
            .finish()
    }
}
