//! Parses type declarations and emits `Reflect`, `Struct` and `Morph` impls
//! for `#[derive(Morph)]`.

mod parse;
pub use parse::*;

mod derive;
pub use derive::*;
