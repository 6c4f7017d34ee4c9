use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};

use crate::{FieldDecl, TypeBody, TypeDecl, parse_type_decl};

/// Expands `#[derive(Morph)]` on `input`.
///
/// Parse failures are turned into a `compile_error!` pointing at the
/// offending tokens, never into a panic.
pub fn morph_derive(input: TokenStream) -> TokenStream {
    match parse_type_decl(input) {
        Ok(decl) if decl.opaque => emit_opaque(&decl),
        Ok(decl) => emit_struct(&decl),
        Err(err) => err.to_compile_error(),
    }
}

/// Opaque types are leaves: assigned as a whole, zeroed with `Default`, and
/// compared against it to tell if they're zero.
fn emit_opaque(decl: &TypeDecl) -> TokenStream {
    let name = &decl.name;
    let name_str = name.to_string();

    quote! {
        #[automatically_derived]
        impl ::morph::Reflect for #name {
            fn shape(&self) -> &'static ::morph::Shape {
                <Self as ::morph::Morph>::SHAPE
            }

            fn reflect(&self) -> ::morph::ValueRef<'_> {
                ::morph::ValueRef::Scalar(self)
            }

            fn reflect_mut(&mut self) -> ::morph::ValueMut<'_> {
                ::morph::ValueMut::Scalar(self)
            }

            fn is_zero(&self) -> bool {
                *self == <Self as ::core::default::Default>::default()
            }
        }

        #[automatically_derived]
        impl ::morph::Morph for #name {
            const SHAPE: &'static ::morph::Shape = &const {
                ::morph::Shape::builder::<Self>()
                    .type_identifier(#name_str)
                    .ty(::morph::Type::Opaque)
                    .build()
            };

            fn zero() -> Self {
                ::core::default::Default::default()
            }
        }
    }
}

/// How a field is reached from `self`: `self.name` or `self.0`
struct Access<'a> {
    field: &'a FieldDecl,
    member: TokenStream,
}

fn emit_struct(decl: &TypeDecl) -> TokenStream {
    let name = &decl.name;
    let name_str = name.to_string();

    let fields: &[FieldDecl] = match &decl.body {
        TypeBody::Named(fields) | TypeBody::Tuple(fields) => fields,
        TypeBody::Unit | TypeBody::Enum => &[],
    };

    let accesses: Vec<Access<'_>> = fields
        .iter()
        .enumerate()
        .map(|(index, field)| Access {
            field,
            member: match &field.ident {
                Some(ident) => ident.to_token_stream(),
                None => Literal::usize_unsuffixed(index).to_token_stream(),
            },
        })
        .collect();

    // only visible fields get an index
    let visible: Vec<&Access<'_>> = accesses.iter().filter(|a| !a.field.skip).collect();

    let field_arms = visible.iter().enumerate().map(|(index, access)| {
        let member = &access.member;
        quote! { #index => ::core::option::Option::Some(&self.#member as &dyn ::morph::Reflect), }
    });
    let zero_checks = visible.iter().map(|access| {
        let member = &access.member;
        quote! { && ::morph::Reflect::is_zero(&self.#member) }
    });
    let field_mut_arms = visible.iter().enumerate().map(|(index, access)| {
        let member = &access.member;
        quote! { #index => ::core::option::Option::Some(&mut self.#member as &mut dyn ::morph::Reflect), }
    });

    let field_shapes = visible.iter().map(|access| {
        let field_name = &access.field.name;
        let ty = &access.field.ty;
        quote! {
            ::morph::Field {
                name: #field_name,
                shape: || <#ty as ::morph::Morph>::SHAPE,
            },
        }
    });
    let fields_decl = if visible.is_empty() {
        quote! { &[] }
    } else {
        quote! { &const { [ #(#field_shapes)* ] } }
    };

    let zero_values = accesses.iter().map(|access| {
        let ty = &access.field.ty;
        if access.field.skip {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { <#ty as ::morph::Morph>::zero() }
        }
    });
    let zero = match &decl.body {
        TypeBody::Named(_) => {
            let members = accesses.iter().map(|a| &a.member);
            quote! { Self { #(#members: #zero_values,)* } }
        }
        TypeBody::Tuple(_) => quote! { Self( #(#zero_values,)* ) },
        TypeBody::Unit | TypeBody::Enum => quote! { Self },
    };

    quote! {
        #[automatically_derived]
        impl ::morph::Reflect for #name {
            fn shape(&self) -> &'static ::morph::Shape {
                <Self as ::morph::Morph>::SHAPE
            }

            fn reflect(&self) -> ::morph::ValueRef<'_> {
                ::morph::ValueRef::Struct(self)
            }

            fn reflect_mut(&mut self) -> ::morph::ValueMut<'_> {
                ::morph::ValueMut::Struct(self)
            }

            fn is_zero(&self) -> bool {
                true #(#zero_checks)*
            }
        }

        #[automatically_derived]
        impl ::morph::Struct for #name {
            #[allow(clippy::match_single_binding)]
            fn field(&self, index: usize) -> ::core::option::Option<&dyn ::morph::Reflect> {
                match index {
                    #(#field_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #[allow(clippy::match_single_binding)]
            fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn ::morph::Reflect> {
                match index {
                    #(#field_mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl ::morph::Morph for #name {
            const SHAPE: &'static ::morph::Shape = &const {
                ::morph::Shape::builder::<Self>()
                    .type_identifier(#name_str)
                    .ty(::morph::Type::Struct(::morph::StructType {
                        fields: #fields_decl,
                    }))
                    .build()
            };

            fn zero() -> Self {
                #zero
            }
        }
    }
}
