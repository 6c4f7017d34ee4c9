//! structs and definitions used to describe morph types

use core::any::TypeId;

mod ty;
pub use ty::*;

/// Writes the full name of a type, generic parameters included.
pub type TypeNameFn = fn(f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;

/// Schema for reflection of a type
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct Shape {
    /// Unique type identifier, provided by the compiler.
    pub id: fn() -> TypeId,

    /// Identifier for a type: the type's name without generic parameters. To
    /// get the type's full name with generic parameters, format the shape
    /// with `Display`.
    pub type_identifier: &'static str,

    /// Prints the full type name, generic parameters included. When absent,
    /// the type identifier is the full name.
    pub type_name: Option<TypeNameFn>,

    /// Structural category and details: primitive, struct, list, pointer.
    pub ty: Type,
}

impl Shape {
    /// Returns a builder for the shape of `T`.
    pub const fn builder<T: ?Sized + 'static>() -> ShapeBuilder {
        ShapeBuilder::new(TypeId::of::<T>)
    }

    /// Check if this shape is of the given type
    pub fn is_type<Other: crate::Morph>(&self) -> bool {
        self == Other::SHAPE
    }

    /// Structural kind of this shape
    #[inline]
    pub const fn kind(&self) -> Kind {
        self.ty.kind()
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        (self.id)() == (other.id)()
    }
}

impl Eq for Shape {}

impl core::hash::Hash for Shape {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        (self.id)().hash(state);
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.type_name {
            Some(type_name) => type_name(f),
            None => f.write_str(self.type_identifier),
        }
    }
}

impl core::fmt::Debug for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shape")
            .field("name", &format_args!("{self}"))
            .field("ty", &self.ty)
            .finish()
    }
}

/// Builder for [`Shape`]
pub struct ShapeBuilder {
    id: fn() -> TypeId,
    type_identifier: Option<&'static str>,
    type_name: Option<TypeNameFn>,
    ty: Option<Type>,
}

impl ShapeBuilder {
    const fn new(id: fn() -> TypeId) -> Self {
        Self {
            id,
            type_identifier: None,
            type_name: None,
            ty: None,
        }
    }

    /// Sets the type identifier, the type's name without generic parameters
    pub const fn type_identifier(mut self, type_identifier: &'static str) -> Self {
        self.type_identifier = Some(type_identifier);
        self
    }

    /// Sets the function printing the full type name
    pub const fn type_name(mut self, type_name: TypeNameFn) -> Self {
        self.type_name = Some(type_name);
        self
    }

    /// Sets the structural type
    pub const fn ty(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Builds the [`Shape`]
    ///
    /// # Panics
    ///
    /// Panics (at compile time, since shapes are built in consts) if the type
    /// identifier or the type was never set.
    pub const fn build(self) -> Shape {
        let Some(type_identifier) = self.type_identifier else {
            panic!("Shape::build: missing type identifier")
        };
        let Some(ty) = self.ty else {
            panic!("Shape::build: missing type")
        };
        Shape {
            id: self.id,
            type_identifier,
            type_name: self.type_name,
            ty,
        }
    }
}
