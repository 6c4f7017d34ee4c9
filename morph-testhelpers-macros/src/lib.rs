//! The `#[test]` attribute of `morph-testhelpers`.

use unsynn::*;

keyword! {
    KFn = "fn";
    KAsync = "async";
}

unsynn! {
    struct Attributes {
        items: Any<Cons<Except<KFn>, Cons<Except<KAsync>, TokenTree>>>,
    }

    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        attributes: Attributes, _fn: KFn, name: Ident,
        signature: Signature, body: BraceGroup
    }
}

impl quote::ToTokens for Attributes {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// Marks a test that returns `eyre::Result<()>` and runs `morph_testhelpers::setup()` first.
#[proc_macro_attribute]
pub fn test(
    _attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let Ok(test_fn) = tokens.parse::<TestFn>() else {
        return quote::quote! {
            ::core::compile_error!("#[morph_testhelpers::test] expects a plain (non-async) function");
        }
        .into();
    };

    let TestFn {
        attributes,
        _fn,
        name,
        signature,
        body,
    } = test_fn;
    let body = body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #attributes fn #name #signature -> ::morph_testhelpers::eyre::Result<()> {
            ::morph_testhelpers::setup();

            #body

            Ok(())
        }
    }
    .into()
}
