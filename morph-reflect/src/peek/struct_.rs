use morph_core::{Field, Shape, Struct, StructType};

use crate::{FieldError, Peek};

/// Lets you read from a struct
#[derive(Clone, Copy)]
pub struct PeekStruct<'mem> {
    /// the underlying value
    pub(crate) value: &'mem dyn Struct,

    /// the definition of the struct!
    pub(crate) ty: StructType,

    pub(crate) shape: &'static Shape,
}

impl core::fmt::Debug for PeekStruct<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekStruct").finish_non_exhaustive()
    }
}

impl<'mem> PeekStruct<'mem> {
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

    /// Returns the value of the field at the given index
    pub fn field(&self, index: usize) -> Result<Peek<'mem>, FieldError> {
        let out_of_bounds = FieldError::IndexOutOfBounds {
            index,
            len: self.field_count(),
        };
        let field = self.ty.fields.get(index).ok_or(out_of_bounds)?;
        let value = self
            .value
            .field(index)
            .ok_or(FieldError::NotProvided { index })?;
        Ok(Peek {
            value,
            shape: field.shape(),
        })
    }

    /// Gets the value of the field with the given name.
    ///
    /// A missing field is reported as `Ok(None)`: absence is an expected
    /// outcome when projecting one type onto another, not a failure.
    pub fn field_by_name(&self, name: &str) -> Result<Option<Peek<'mem>>, FieldError> {
        match self.ty.field_index(name) {
            Some(index) => self.field(index).map(Some),
            None => Ok(None),
        }
    }

    /// Iterates over all fields in this struct, providing both definition and value
    pub fn fields(&self) -> impl Iterator<Item = (&'static Field, Peek<'mem>)> + '_ {
        self.ty.fields.iter().enumerate().filter_map(|(index, field)| {
            let value = self.field(index).ok()?;
            Some((field, value))
        })
    }
}
