use morph_core::{List, ListType, Shape};

use crate::Peek;

/// Iterator over a [`PeekList`]
pub struct PeekListIter<'mem> {
    list: PeekList<'mem>,
    index: usize,
}

impl<'mem> Iterator for PeekListIter<'mem> {
    type Item = Peek<'mem>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeekListIter<'_> {}

impl<'mem> IntoIterator for &PeekList<'mem> {
    type Item = Peek<'mem>;
    type IntoIter = PeekListIter<'mem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lets you read from a list (implements read-only list operations)
#[derive(Clone, Copy)]
pub struct PeekList<'mem> {
    pub(crate) value: &'mem dyn List,
    pub(crate) ty: ListType,
    pub(crate) shape: &'static Shape,
}

impl core::fmt::Debug for PeekList<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekList")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'mem> PeekList<'mem> {
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

    /// Get an item from the list at the specified index
    pub fn get(&self, index: usize) -> Option<Peek<'mem>> {
        let value = self.value.get(index)?;
        Some(Peek {
            value,
            shape: self.ty.item(),
        })
    }

    /// Returns an iterator over the items of the list
    pub fn iter(self) -> PeekListIter<'mem> {
        PeekListIter {
            list: self,
            index: 0,
        }
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
