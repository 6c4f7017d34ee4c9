use morph_core::{List, ListType, Shape};

use crate::Poke;

/// Lets you resize a list and write to its items
pub struct PokeList<'mem> {
    pub(crate) value: &'mem mut dyn List,
    pub(crate) ty: ListType,
    pub(crate) shape: &'static Shape,
}

impl core::fmt::Debug for PokeList<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PokeList")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl PokeList<'_> {
    /// Get the number of items in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the list with `len` zero-valued items, dropping the previous ones
    pub fn reset(&mut self, len: usize) {
        self.value.reset(len);
    }

    /// Returns a handle to the item at `index`
    pub fn get_mut(&mut self, index: usize) -> Option<Poke<'_>> {
        let shape = self.ty.item();
        let value = self.value.get_mut(index)?;
        Some(Poke { value, shape })
    }

    /// Shape of the list's items
    #[inline]
    pub fn item_shape(&self) -> &'static Shape {
        self.ty.item()
    }

    /// Shape of the list itself
    #[inline]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }
}
