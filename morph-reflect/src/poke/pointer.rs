use morph_core::{Pointer, PointerType, Shape};

use crate::Poke;

/// Lets you write through a pointer (`Option<T>`, `Box<T>`)
pub struct PokePointer<'mem> {
    pub(crate) value: &'mem mut dyn Pointer,
    pub(crate) ty: PointerType,
    pub(crate) shape: &'static Shape,
}

impl core::fmt::Debug for PokePointer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PokePointer")
            .field("is_null", &self.is_null())
            .finish_non_exhaustive()
    }
}

impl<'mem> PokePointer<'mem> {
    /// Returns true if the pointer doesn't point at anything
    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.pointee().is_none()
    }

    /// Returns a handle to the pointee, or `None` for a null pointer
    pub fn pointee_mut(&mut self) -> Option<Poke<'_>> {
        let shape = self.ty.pointee();
        let value = self.value.pointee_mut()?;
        Some(Poke { value, shape })
    }

    /// Returns a handle to the pointee, first pointing at a fresh zero value
    /// if the pointer is null
    pub fn into_pointee_or_zero(self) -> Poke<'mem> {
        let shape = self.ty.pointee();
        Poke {
            value: self.value.pointee_or_zero(),
            shape,
        }
    }

    /// Shape of the pointed-to value
    #[inline]
    pub fn pointee_shape(&self) -> &'static Shape {
        self.ty.pointee()
    }

    /// Shape of the pointer itself
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }
}
