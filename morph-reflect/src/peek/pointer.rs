use morph_core::{Pointer, PointerType, Shape};

use crate::Peek;

/// Lets you read through a pointer (`Option<T>`, `Box<T>`)
#[derive(Clone, Copy)]
pub struct PeekPointer<'mem> {
    pub(crate) value: &'mem dyn Pointer,
    pub(crate) ty: PointerType,
    pub(crate) shape: &'static Shape,
}

impl core::fmt::Debug for PeekPointer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekPointer")
            .field("is_null", &self.is_null())
            .finish_non_exhaustive()
    }
}

impl<'mem> PeekPointer<'mem> {
    /// Returns true if the pointer doesn't point at anything
    #[inline]
    pub fn is_null(&self) -> bool {
        self.value.pointee().is_none()
    }

    /// Returns the pointed-to value, or `None` for a null pointer
    pub fn pointee(&self) -> Option<Peek<'mem>> {
        let value = self.value.pointee()?;
        Some(Peek {
            value,
            shape: self.ty.pointee(),
        })
    }

    /// Shape of the pointed-to value
    #[inline]
    pub fn pointee_shape(&self) -> &'static Shape {
        self.ty.pointee()
    }

    /// Whether this kind of pointer can be null at all
    #[inline]
    pub fn nullable(&self) -> bool {
        self.ty.nullable
    }

    /// Shape of the pointer itself
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }
}
