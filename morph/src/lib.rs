#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use morph_core::*;

/// Derive the [`Morph`] trait for structs, tuple structs and unit structs.
///
/// Every field type must implement [`Morph`] itself. Fields are matched by
/// name during composition; tuple struct fields are named `0`, `1`, ...
///
/// ```rust
/// # use morph::Morph;
/// #[derive(Morph)]
/// struct FooBar {
///     foo: u32,
///     bar: String,
/// }
/// ```
///
/// Generic and lifetime-parameterised types aren't supported.
///
/// # Container Attributes
///
/// ```rust
/// # use morph::Morph;
/// #[derive(Morph, Clone, Default, PartialEq)]
/// #[morph(opaque)]
/// enum Level {
///     #[default]
///     Low,
///     High,
/// }
/// ```
///
/// * `opaque` Treat the type as a leaf: it is assigned as a whole, never
///   looked into, and its zero value is `Default::default()`. Requires
///   `Clone + Default + PartialEq`. This is the only way to derive `Morph`
///   on an enum.
///
/// # Field Attributes
///
/// ```rust
/// # use morph::Morph;
/// #[derive(Morph)]
/// struct Session {
///     user: String,
///     #[morph(skip)]
///     token_cache: Vec<u8>,
/// # }
/// ```
///
/// * `skip` Hide the field from composition: it is never read from nor
///   written to, and is zeroed with `Default::default()`.
pub use morph_macros::*;

pub use morph_reflect::*;
