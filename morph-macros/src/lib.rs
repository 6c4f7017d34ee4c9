#![doc = include_str!("../README.md")]

#[proc_macro_derive(Morph, attributes(morph))]
pub fn morph_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    morph_macros_emit::morph_derive(input.into()).into()
}
