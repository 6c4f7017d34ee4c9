#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

mod macros;

// Definition for `core::` types
mod impls_core;

// Definition for `alloc::` types
#[cfg(feature = "alloc")]
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core)
#[cfg(feature = "std")]
mod impls_std;

// Structural views over live values
mod value;
pub use value::*;

// Type definitions
mod types;
pub use types::*;

/// Object-safe access to a value through its [`Shape`] and structural views.
///
/// This is what gets passed around as `&dyn Reflect` / `&mut dyn Reflect` once
/// the concrete type has been erased. It is implemented alongside [`Morph`],
/// usually by `#[derive(Morph)]`.
pub trait Reflect: core::any::Any {
    /// The shape of the concrete type behind this value
    fn shape(&self) -> &'static Shape;

    /// Read-only structural view of this value
    fn reflect(&self) -> ValueRef<'_>;

    /// Mutable structural view of this value
    fn reflect_mut(&mut self) -> ValueMut<'_>;

    /// Returns true if this value is empty: the zero value of its type.
    ///
    /// Structs are zero when all their visible fields are, so skipped fields
    /// don't count.
    fn is_zero(&self) -> bool;
}

/// Static knowledge about a type: its [`Shape`], and how to build its zero value.
///
/// The zero value is what a pointer target is initialized to before it gets
/// composed into, and what every slot of a freshly resized list starts as.
pub trait Morph: Reflect + Sized {
    /// The shape of this type
    const SHAPE: &'static Shape;

    /// Returns the zero value of this type: `0`, `false`, empty strings and
    /// lists, `None`, and structs whose fields are all zero.
    fn zero() -> Self;
}
