//! Structural views over live values.
//!
//! A [`Reflect`] value hands out one of these views depending on its kind:
//! leaves are seen as [`Scalar`]s, records as [`Struct`]s, sequences as
//! [`List`]s and references as [`Pointer`]s.

use core::any::Any;

use crate::Reflect;

/// Read-only view of a value
#[derive(Clone, Copy)]
pub enum ValueRef<'mem> {
    /// A leaf, readable as its concrete type
    Scalar(&'mem dyn Any),
    /// A struct, readable field by field
    Struct(&'mem dyn Struct),
    /// A list, readable item by item
    List(&'mem dyn List),
    /// A pointer, readable through its pointee
    Pointer(&'mem dyn Pointer),
}

/// Mutable view of a value
pub enum ValueMut<'mem> {
    /// A leaf, assignable as a whole
    Scalar(&'mem mut dyn Scalar),
    /// A struct, writable field by field
    Struct(&'mem mut dyn Struct),
    /// A list, resizable and writable item by item
    List(&'mem mut dyn List),
    /// A pointer, writable through its pointee
    Pointer(&'mem mut dyn Pointer),
}

impl core::fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueRef::Scalar(_) => f.write_str("ValueRef::Scalar"),
            ValueRef::Struct(_) => f.write_str("ValueRef::Struct"),
            ValueRef::List(_) => f.write_str("ValueRef::List"),
            ValueRef::Pointer(_) => f.write_str("ValueRef::Pointer"),
        }
    }
}

impl core::fmt::Debug for ValueMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValueMut::Scalar(_) => f.write_str("ValueMut::Scalar"),
            ValueMut::Struct(_) => f.write_str("ValueMut::Struct"),
            ValueMut::List(_) => f.write_str("ValueMut::List"),
            ValueMut::Pointer(_) => f.write_str("ValueMut::Pointer"),
        }
    }
}

/// A leaf value that can be overwritten by another value of the same type.
pub trait Scalar {
    /// Overwrites `self` with a copy of `src`.
    ///
    /// Returns `false`, leaving `self` untouched, if `src` is not of the same
    /// concrete type.
    fn assign(&mut self, src: &dyn Any) -> bool;
}

impl<T: Clone + 'static> Scalar for T {
    fn assign(&mut self, src: &dyn Any) -> bool {
        match src.downcast_ref::<T>() {
            Some(src) => {
                self.clone_from(src);
                true
            }
            None => false,
        }
    }
}

/// Field access for struct-like values.
///
/// Indices follow the `fields` of the struct's [`crate::StructType`].
pub trait Struct {
    /// Returns the field at `index`
    fn field(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index`, mutably
    fn field_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;
}

/// Item access for list values.
pub trait List {
    /// Number of items in the list
    fn len(&self) -> usize;

    /// Returns true if the list has no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the item at `index`
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the item at `index`, mutably
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Replaces the whole list with `len` zero-valued items. Previous items
    /// are dropped, not reused.
    fn reset(&mut self, len: usize);
}

/// Pointee access for pointer values.
pub trait Pointer {
    /// Returns the pointed-to value, or `None` if the pointer is null
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the pointed-to value mutably, or `None` if the pointer is null
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the pointed-to value mutably, first pointing at a fresh zero
    /// value if the pointer is null.
    fn pointee_or_zero(&mut self) -> &mut dyn Reflect;
}
