use morph_core::{Shape, Struct, StructType};

use crate::{FieldError, Poke};

/// Lets you write to the fields of a struct
pub struct PokeStruct<'mem> {
    pub(crate) value: &'mem mut dyn Struct,
    pub(crate) ty: StructType,
    pub(crate) shape: &'static Shape,
}

impl core::fmt::Debug for PokeStruct<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PokeStruct").finish_non_exhaustive()
    }
}

impl PokeStruct<'_> {
    /// Returns the struct definition
    #[inline(always)]
    pub fn ty(&self) -> &StructType {
        &self.ty
    }

    /// Returns the shape of the struct
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Returns the number of fields in this struct
    #[inline(always)]
    pub fn field_count(&self) -> usize {
        self.ty.fields.len()
    }

    /// Returns a handle to the field at the given index
    pub fn field_mut(&mut self, index: usize) -> Result<Poke<'_>, FieldError> {
        let out_of_bounds = FieldError::IndexOutOfBounds {
            index,
            len: self.field_count(),
        };
        let field = self.ty.fields.get(index).ok_or(out_of_bounds)?;
        let value = self
            .value
            .field_mut(index)
            .ok_or(FieldError::NotProvided { index })?;
        Ok(Poke {
            value,
            shape: field.shape(),
        })
    }

    /// Returns a handle to the field with the given name, if the struct has one
    pub fn field_by_name_mut(&mut self, name: &str) -> Result<Option<Poke<'_>>, FieldError> {
        match self.ty.field_index(name) {
            Some(index) => self.field_mut(index).map(Some),
            None => Ok(None),
        }
    }
}
