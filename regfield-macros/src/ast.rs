use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{
    braced, parenthesized, token, Attribute, Ident, LitInt, Path, Result, Token, Visibility,
};

mod kw {
    syn::custom_keyword!(register);
    syn::custom_keyword!(via);
}

pub struct Input {
    _paren_token: token::Paren,
    pub crate_path: Path,
    _comma_token: Token![,],
    pub registers: Vec<Register>,
}

impl Parse for Input {
    fn parse(input: ParseStream) -> Result<Self> {
        let content;
        Ok(Input {
            _paren_token: parenthesized!(content in input),
            crate_path: content.parse()?,
            _comma_token: content.parse()?,
            registers: {
                let mut registers = Vec::new();
                while !content.is_empty() {
                    registers.push(content.parse()?);
                }
                registers
            },
        })
    }
}

pub struct Register {
    pub attrs: Vec<Attribute>,
    pub visibility: Visibility,
    _register_token: kw::register,
    pub name: Ident,
    _colon_token: Token![:],
    pub raw_type: Ident,
    pub strategy: Option<Strategy>,
    _brace_token: token::Brace,
    pub fields: Punctuated<FieldDecl, Token![,]>,
}

impl Parse for Register {
    fn parse(input: ParseStream) -> Result<Self> {
        let body;
        Ok(Self {
            attrs: input.call(Attribute::parse_outer)?,
            visibility: input.parse()?,
            _register_token: input.parse()?,
            name: input.parse()?,
            _colon_token: input.parse()?,
            raw_type: input.parse()?,
            strategy: if input.peek(kw::via) {
                Some(input.parse()?)
            } else {
                None
            },
            _brace_token: braced!(body in input),
            fields: body.parse_terminated(FieldDecl::parse, Token![,])?,
        })
    }
}

pub struct Strategy {
    _via_token: kw::via,
    pub path: Path,
}

impl Parse for Strategy {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            _via_token: input.parse()?,
            path: input.parse()?,
        })
    }
}

pub struct FieldDecl {
    pub attrs: Vec<Attribute>,
    pub visibility: Visibility,
    pub name: Ident,
    _colon_token: Token![:],
    pub start: LitInt,
    _dot_dot_token: Token![..],
    pub end: LitInt,
}

impl Parse for FieldDecl {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self {
            attrs: input.call(Attribute::parse_outer)?,
            visibility: input.parse()?,
            name: input.parse()?,
            _colon_token: input.parse()?,
            start: input.parse()?,
            _dot_dot_token: input.parse()?,
            end: input.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    #[test]
    fn register_empty() {
        let input = quote! { register Foo: u32 {} };
        let Register {
            attrs,
            visibility,
            name,
            raw_type,
            strategy,
            fields,
            ..
        } = syn::parse2(input).unwrap();
        assert!(attrs.is_empty());
        assert_eq!(quote! { #visibility }.to_string(), "");
        assert_eq!(name.to_string(), "Foo");
        assert_eq!(raw_type.to_string(), "u32");
        assert!(strategy.is_none());
        assert_eq!(fields.len(), 0);
    }

    #[test]
    fn register_everything() {
        let input = quote! {
            /// this has a doc comment
            pub(crate) register Bar: u16 via dsp::WordAddressed {
                field: 0..4,
            }
        };
        let Register {
            attrs,
            visibility,
            name,
            raw_type,
            strategy,
            fields,
            ..
        } = syn::parse2(input).unwrap();
        assert_eq!(attrs.len(), 1);
        let attr = &attrs[0];
        assert_eq!(
            quote! { #attr }.to_string(),
            "# [doc = r\" this has a doc comment\"]",
        );
        assert_eq!(quote! { #visibility }.to_string(), "pub (crate)");
        assert_eq!(name.to_string(), "Bar");
        assert_eq!(raw_type.to_string(), "u16");
        let path = &strategy.unwrap().path;
        assert_eq!(quote! { #path }.to_string(), "dsp :: WordAddressed");
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn field_default() {
        let input = quote! { mode: 3..7 };
        let FieldDecl {
            attrs,
            visibility: Visibility::Inherited,
            name,
            start,
            end,
            ..
        } = syn::parse2(input).unwrap()
        else {
            panic!()
        };
        assert!(attrs.is_empty());
        assert_eq!(name.to_string(), "mode");
        assert_eq!(start.base10_digits(), "3");
        assert_eq!(end.base10_digits(), "7");
    }

    #[test]
    fn field_everything() {
        let input = quote! {
            /// a documented field
            pub empty: 16..16
        };
        let FieldDecl {
            attrs,
            visibility,
            name,
            start,
            end,
            ..
        } = syn::parse2(input).unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(quote! { #visibility }.to_string(), "pub");
        assert_eq!(name.to_string(), "empty");
        assert_eq!(start.base10_digits(), "16");
        assert_eq!(end.base10_digits(), "16");
    }

    #[test]
    fn input_carries_the_crate_path() {
        let tokens = quote! {(
            ::regfield,

            register A: u8 { x: 0..1 }
            register B: u8 {}
        )};
        let input: Input = syn::parse2(tokens).unwrap();
        let crate_path = &input.crate_path;
        assert_eq!(quote! { #crate_path }.to_string(), ":: regfield");
        assert_eq!(input.registers.len(), 2);
    }
}
