use core::result::Result;

use proc_macro2::{Delimiter, Ident, Span, TokenStream, TokenTree};
use unsynn::*;

keyword! {
    KStruct = "struct";
    KEnum = "enum";
}

unsynn! {
    struct UntilStruct {
        items: Any<Cons<Except<KStruct>, TokenTree>>,
    }

    struct UntilEnum {
        items: Any<Cons<Except<KEnum>, TokenTree>>,
    }

    struct Remainder {
        items: Any<TokenTree>,
    }

    struct StructDecl {
        preamble: UntilStruct, _struct: KStruct, name: Ident,
        rest: Remainder
    }

    struct EnumDecl {
        preamble: UntilEnum, _enum: KEnum, name: Ident,
        rest: Remainder
    }
}

impl quote::ToTokens for UntilStruct {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for UntilEnum {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Remainder {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

/// A parse failure, reported as a `compile_error!` at `span`.
#[derive(Debug)]
pub struct DeriveError {
    /// What went wrong
    pub message: String,
    /// Where it went wrong
    pub span: Span,
}

impl DeriveError {
    fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Turns this error into a `compile_error!` invocation
    pub fn to_compile_error(&self) -> TokenStream {
        let message = &self.message;
        quote::quote_spanned! { self.span =>
            ::core::compile_error!(#message);
        }
    }
}

/// A type `#[derive(Morph)]` was applied to
#[derive(Debug)]
pub struct TypeDecl {
    /// Name of the type
    pub name: Ident,
    /// Whether `#[morph(opaque)]` was given
    pub opaque: bool,
    /// Layout of the type
    pub body: TypeBody,
}

/// Field layout of a derived type
#[derive(Debug)]
pub enum TypeBody {
    /// `struct S { a: A, b: B }`
    Named(Vec<FieldDecl>),
    /// `struct S(A, B);`
    Tuple(Vec<FieldDecl>),
    /// `struct S;`
    Unit,
    /// An enum: only derivable as an opaque leaf
    Enum,
}

/// A single field of a struct
#[derive(Debug)]
pub struct FieldDecl {
    /// Identifier, for named fields
    pub ident: Option<Ident>,
    /// Name used for matching: the identifier without `r#`, or the tuple index
    pub name: String,
    /// Type of the field
    pub ty: TokenStream,
    /// Whether `#[morph(skip)]` was given
    pub skip: bool,
}

/// Parses a struct or enum declaration
pub fn parse_type_decl(input: TokenStream) -> Result<TypeDecl, DeriveError> {
    if let Ok(decl) = input.clone().to_token_iter().parse::<StructDecl>() {
        let preamble = quote::ToTokens::to_token_stream(&decl.preamble);
        let rest = quote::ToTokens::to_token_stream(&decl.rest);
        let attrs = morph_attributes(preamble)?;
        let body = parse_struct_body(&decl.name, rest)?;
        return Ok(TypeDecl {
            name: decl.name,
            opaque: container_opaque(attrs)?,
            body,
        });
    }

    if let Ok(decl) = input.to_token_iter().parse::<EnumDecl>() {
        let preamble = quote::ToTokens::to_token_stream(&decl.preamble);
        let rest = quote::ToTokens::to_token_stream(&decl.rest);
        let attrs = morph_attributes(preamble)?;
        if let Some(TokenTree::Punct(punct)) = rest.into_iter().next() {
            if punct.as_char() == '<' {
                return Err(DeriveError::new(
                    "#[derive(Morph)] does not support generic types",
                    punct.span(),
                ));
            }
        }
        let opaque = container_opaque(attrs)?;
        if !opaque {
            return Err(DeriveError::new(
                "enums can only derive Morph as opaque leaves: add #[morph(opaque)]",
                decl.name.span(),
            ));
        }
        return Ok(TypeDecl {
            name: decl.name,
            opaque,
            body: TypeBody::Enum,
        });
    }

    Err(DeriveError::new(
        "#[derive(Morph)] only supports structs and enums",
        Span::call_site(),
    ))
}

fn container_opaque(attrs: Vec<Ident>) -> Result<bool, DeriveError> {
    let mut opaque = false;
    for attr in attrs {
        if attr == "opaque" {
            opaque = true;
        } else {
            return Err(DeriveError::new(
                format!("unknown container attribute `{attr}`, expected `opaque`"),
                attr.span(),
            ));
        }
    }
    Ok(opaque)
}

fn parse_struct_body(name: &Ident, rest: TokenStream) -> Result<TypeBody, DeriveError> {
    let mut tokens = rest.into_iter();
    match tokens.next() {
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => {
            Ok(TypeBody::Named(parse_fields(group.stream(), true)?))
        }
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis => {
            Ok(TypeBody::Tuple(parse_fields(group.stream(), false)?))
        }
        Some(TokenTree::Punct(punct)) if punct.as_char() == ';' => Ok(TypeBody::Unit),
        Some(TokenTree::Punct(punct)) if punct.as_char() == '<' => Err(DeriveError::new(
            "#[derive(Morph)] does not support generic types",
            punct.span(),
        )),
        Some(other) => Err(DeriveError::new(
            format!("unexpected `{other}` after `struct {name}`"),
            other.span(),
        )),
        None => Err(DeriveError::new(
            format!("missing body for `struct {name}`"),
            name.span(),
        )),
    }
}

/// Parses the content of a `{ ... }` (named) or `( ... )` (tuple) field list
fn parse_fields(stream: TokenStream, named: bool) -> Result<Vec<FieldDecl>, DeriveError> {
    let mut fields = Vec::new();
    for (index, chunk) in split_top_level_commas(stream).into_iter().enumerate() {
        let mut tokens = chunk.into_iter().peekable();

        // attributes
        let mut attrs = Vec::new();
        while matches!(tokens.peek(), Some(TokenTree::Punct(p)) if p.as_char() == '#') {
            tokens.next();
            match tokens.next() {
                Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Bracket => {
                    attrs.extend(morph_attribute(group.stream())?);
                }
                other => {
                    return Err(DeriveError::new(
                        "expected `[` after `#`",
                        other.map_or_else(Span::call_site, |tt| tt.span()),
                    ));
                }
            }
        }

        // visibility
        if matches!(tokens.peek(), Some(TokenTree::Ident(i)) if i == "pub") {
            tokens.next();
            if let Some(TokenTree::Group(group)) = tokens.peek() {
                if group.delimiter() == Delimiter::Parenthesis && is_visibility_scope(group.stream())
                {
                    tokens.next();
                }
            }
        }

        let ident = if named {
            let ident = match tokens.next() {
                Some(TokenTree::Ident(ident)) => ident,
                other => {
                    return Err(DeriveError::new(
                        "expected a field name",
                        other.map_or_else(Span::call_site, |tt| tt.span()),
                    ));
                }
            };
            match tokens.next() {
                Some(TokenTree::Punct(p)) if p.as_char() == ':' => {}
                other => {
                    return Err(DeriveError::new(
                        format!("expected `:` after field `{ident}`"),
                        other.map_or_else(|| ident.span(), |tt| tt.span()),
                    ));
                }
            }
            Some(ident)
        } else {
            None
        };

        let ty: TokenStream = tokens.collect();
        if ty.is_empty() {
            return Err(DeriveError::new(
                "expected a field type",
                ident.as_ref().map_or_else(Span::call_site, Ident::span),
            ));
        }

        let mut skip = false;
        for attr in attrs {
            if attr == "skip" {
                skip = true;
            } else {
                return Err(DeriveError::new(
                    format!("unknown field attribute `{attr}`, expected `skip`"),
                    attr.span(),
                ));
            }
        }

        let name = match &ident {
            Some(ident) => {
                let name = ident.to_string();
                name.strip_prefix("r#").map(str::to_owned).unwrap_or(name)
            }
            None => index.to_string(),
        };

        fields.push(FieldDecl {
            ident,
            name,
            ty,
            skip,
        });
    }
    Ok(fields)
}

/// `pub(crate)`, `pub(super)`, `pub(self)`, `pub(in path)`
fn is_visibility_scope(stream: TokenStream) -> bool {
    matches!(
        stream.into_iter().next(),
        Some(TokenTree::Ident(i)) if i == "crate" || i == "super" || i == "self" || i == "in"
    )
}

/// Splits a field list on commas that aren't nested inside `<...>`.
///
/// Parentheses, brackets and braces are already grouped by the tokenizer,
/// angle brackets are not.
fn split_top_level_commas(stream: TokenStream) -> Vec<TokenStream> {
    let mut chunks = Vec::new();
    let mut current = TokenStream::new();
    let mut depth = 0usize;
    let mut after_dash = false;

    for tt in stream {
        let mut is_dash = false;
        if let TokenTree::Punct(punct) = &tt {
            match punct.as_char() {
                ',' if depth == 0 => {
                    chunks.push(core::mem::take(&mut current));
                    after_dash = false;
                    continue;
                }
                '<' => depth += 1,
                // `->` in function pointer types closes nothing
                '>' if !after_dash => depth = depth.saturating_sub(1),
                '-' => is_dash = true,
                _ => {}
            }
        }
        after_dash = is_dash;
        current.extend(core::iter::once(tt));
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Collects the arguments of every `#[morph(...)]` in a list of outer attributes
fn morph_attributes(preamble: TokenStream) -> Result<Vec<Ident>, DeriveError> {
    let mut attrs = Vec::new();
    let mut tokens = preamble.into_iter().peekable();
    while let Some(tt) = tokens.next() {
        if let TokenTree::Punct(punct) = &tt {
            if punct.as_char() == '#' {
                if let Some(TokenTree::Group(group)) = tokens.peek() {
                    if group.delimiter() == Delimiter::Bracket {
                        attrs.extend(morph_attribute(group.stream())?);
                        tokens.next();
                    }
                }
            }
        }
    }
    Ok(attrs)
}

/// Reads the arguments of the content of one `#[...]`, if it is a `morph(...)` attribute
fn morph_attribute(content: TokenStream) -> Result<Vec<Ident>, DeriveError> {
    let mut tokens = content.into_iter();
    match tokens.next() {
        Some(TokenTree::Ident(ident)) if ident == "morph" => {}
        _ => return Ok(Vec::new()),
    }
    let args = match tokens.next() {
        Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis => {
            group.stream()
        }
        other => {
            return Err(DeriveError::new(
                "expected `#[morph(...)]`",
                other.map_or_else(Span::call_site, |tt| tt.span()),
            ));
        }
    };

    let mut idents = Vec::new();
    for tt in args {
        match tt {
            TokenTree::Ident(ident) => idents.push(ident),
            TokenTree::Punct(punct) if punct.as_char() == ',' => {}
            other => {
                return Err(DeriveError::new(
                    format!("unexpected `{other}` in #[morph(...)]"),
                    other.span(),
                ));
            }
        }
    }
    Ok(idents)
}
