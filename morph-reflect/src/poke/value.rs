use morph_core::{Kind, Morph, Reflect, Shape, Type, ValueMut};

use crate::{Peek, ReflectError};

use super::{PokeList, PokePointer, PokeStruct};

/// Lets you write to a value, whatever its concrete type
pub struct Poke<'mem> {
    /// Underlying value
    pub(crate) value: &'mem mut dyn Reflect,

    /// Shape of the value
    pub(crate) shape: &'static Shape,
}

impl<'mem> Poke<'mem> {
    /// Creates a new `Poke` for a value of type `T`.
    pub fn new<T: Morph>(t: &'mem mut T) -> Self {
        Self {
            value: t,
            shape: T::SHAPE,
        }
    }

    /// Creates a new `Poke` for a type-erased value.
    pub fn from_dyn(value: &'mem mut dyn Reflect) -> Self {
        let shape = value.shape();
        Self { value, shape }
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

    /// Reborrows this handle for a shorter lifetime
    pub fn reborrow(&mut self) -> Poke<'_> {
        Poke {
            value: &mut *self.value,
            shape: self.shape,
        }
    }

    /// Read-only view of the current value
    pub fn as_peek(&self) -> Peek<'_> {
        Peek {
            value: &*self.value,
            shape: self.shape,
        }
    }

    /// Overwrites a leaf value with a copy of `src`.
    ///
    /// Both sides must be the very same type: leaves are never converted.
    pub fn assign(self, src: Peek<'_>) -> Result<(), ReflectError> {
        let shape = self.shape;
        match self.value.reflect_mut() {
            ValueMut::Scalar(scalar) => {
                let assigned = match src.as_leaf() {
                    Some(any) => scalar.assign(any),
                    None => false,
                };
                if assigned {
                    Ok(())
                } else {
                    Err(ReflectError::WrongShape {
                        expected: shape,
                        actual: src.shape(),
                    })
                }
            }
            _ => Err(ReflectError::WasNotA {
                expected: "leaf",
                actual: shape,
            }),
        }
    }

    /// Tries to identify this value as a struct
    pub fn into_struct(self) -> Result<PokeStruct<'mem>, ReflectError> {
        let shape = self.shape;
        let Type::Struct(ty) = shape.ty else {
            return Err(ReflectError::WasNotA {
                expected: "struct",
                actual: shape,
            });
        };
        match self.value.reflect_mut() {
            ValueMut::Struct(value) => Ok(PokeStruct { value, ty, shape }),
            _ => Err(ReflectError::InvariantViolation {
                invariant: "struct shapes reflect as structs",
            }),
        }
    }

    /// Tries to identify this value as a list
    pub fn into_list(self) -> Result<PokeList<'mem>, ReflectError> {
        let shape = self.shape;
        let Type::List(ty) = shape.ty else {
            return Err(ReflectError::WasNotA {
                expected: "list",
                actual: shape,
            });
        };
        match self.value.reflect_mut() {
            ValueMut::List(value) => Ok(PokeList { value, ty, shape }),
            _ => Err(ReflectError::InvariantViolation {
                invariant: "list shapes reflect as lists",
            }),
        }
    }

    /// Tries to identify this value as a pointer
    pub fn into_pointer(self) -> Result<PokePointer<'mem>, ReflectError> {
        let shape = self.shape;
        let Type::Pointer(ty) = shape.ty else {
            return Err(ReflectError::WasNotA {
                expected: "pointer",
                actual: shape,
            });
        };
        match self.value.reflect_mut() {
            ValueMut::Pointer(value) => Ok(PokePointer { value, ty, shape }),
            _ => Err(ReflectError::InvariantViolation {
                invariant: "pointer shapes reflect as pointers",
            }),
        }
    }
}

impl core::fmt::Debug for Poke<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Poke")
            .field("shape", &format_args!("{}", self.shape))
            .field("kind", &self.kind())
            .finish()
    }
}
