use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{parse_quote, Error, Ident, Path, Result};

use crate::ast::{self, Input};
use crate::check::{check_fields, CheckedField};

struct Config {
    crate_path: Path,
}

pub fn registers_impl(input: Input) -> TokenStream {
    let cfg = Config {
        crate_path: input.crate_path,
    };
    let results: Vec<_> = input
        .registers
        .into_iter()
        .map(|register| generate_register(&cfg, register))
        .collect();
    quote! { #(#results)* }
}

fn generate_register(cfg: &Config, input: ast::Register) -> TokenStream {
    let cloned_name = input.name.clone();
    match generate_register_impl(cfg, input) {
        Ok(result) => result,
        Err(e) => {
            let compile_error = e.into_compile_error();
            quote! {
                #compile_error
                enum #cloned_name {}
            }
        }
    }
}

fn register_width(raw_type: &Ident) -> Result<u32> {
    match raw_type.to_string().as_str() {
        "u8" => Ok(8),
        "u16" => Ok(16),
        "u32" => Ok(32),
        "u64" => Ok(64),
        "u128" => Ok(128),
        other => Err(Error::new(
            raw_type.span(),
            format!("unsupported register type `{other}`; expected u8, u16, u32, u64, or u128"),
        )),
    }
}

fn generate_register_impl(cfg: &Config, input: ast::Register) -> Result<TokenStream> {
    let crate_path = &cfg.crate_path;

    let name = input.name;
    let raw_type = input.raw_type;
    let width = register_width(&raw_type)?;
    let strategy: Path = match input.strategy {
        Some(strategy) => strategy.path,
        None => parse_quote! { #crate_path::ShiftMask },
    };

    let fields = check_fields(width, input.fields)?;

    let field_type = quote! { #crate_path::Field<#raw_type, #strategy> };

    // Every field appears in the table, reserved ones included.
    let table_entries: Vec<TokenStream> = fields
        .iter()
        .map(|field| {
            let field_name = field.decl.name.to_string();
            let offset = Literal::u32_unsuffixed(field.offset);
            let length = Literal::u32_unsuffixed(field.length);
            quote! { <#field_type>::new(#field_name, #offset, #length) }
        })
        .collect();

    let mut field_items = Vec::new();
    for field in &fields {
        if let Some(tokens) = generate_field_items(cfg, &raw_type, &field_type, field) {
            field_items.push(tokens);
        }
    }

    let width_doc = format!("Width in bits of the `{name}` register word.");
    let fields_doc = "All fields of this register, in declaration order.";
    let width_lit = Literal::u32_unsuffixed(width);

    let attrs = input.attrs;
    let visibility = input.visibility;
    Ok(quote! {
        #(#attrs)*
        #visibility enum #name {}

        #[allow(dead_code)]
        impl #name {
            #[doc = #width_doc]
            #visibility const WIDTH: u32 = #width_lit;

            #[doc = #fields_doc]
            #visibility const FIELDS: &'static [#field_type] = &[#(#table_entries),*];

            #(#field_items)*
        }
    })
}

fn generate_field_items(
    _cfg: &Config,
    raw_type: &Ident,
    field_type: &TokenStream,
    field: &CheckedField,
) -> Option<TokenStream> {
    // Underscore-prefixed fields are reserved: they appear in FIELDS but
    // generate no constants or accessors of their own.
    let name = field.decl.name.to_string();
    if name.starts_with('_') {
        return None;
    }

    let visibility = &field.decl.visibility;
    let attrs = &field.decl.attrs;
    let name_span = field.decl.name.span();
    let upper = name.to_uppercase();

    let const_name = format_ident!("{}", upper, span = name_span);
    let offset_name = format_ident!("{}_OFFSET", upper, span = name_span);
    let length_name = format_ident!("{}_LENGTH", upper, span = name_span);
    let mask_name = format_ident!("{}_MASK", upper, span = name_span);
    let get_name = format_ident!("{}", name, span = name_span);
    let with_name = format_ident!("with_{}", name, span = name_span);

    let offset = Literal::u32_unsuffixed(field.offset);
    let length = Literal::u32_unsuffixed(field.length);
    let mask = {
        let mut literal = Literal::u128_unsuffixed(if field.length == 0 {
            0
        } else {
            (1u128 << field.length) - 1
        });
        literal.set_span(field.decl.end.span());
        literal
    };

    // The field's own doc comments take over the descriptor constant.
    let has_docs = attrs.iter().any(|attr| attr.path().is_ident("doc"));
    let descriptor_doc = if has_docs {
        None
    } else {
        let doc = format!("Descriptor for the `{name}` field.");
        Some(quote! { #[doc = #doc] })
    };

    let offset_doc = format!("Bit offset of the `{name}` field.");
    let length_doc = format!("Bit length of the `{name}` field.");
    let mask_doc = format!("Unshifted mask covering the `{name}` field.");
    let get_doc = format!("Extracts the `{name}` field from `raw`.");
    let with_doc = format!("Returns `raw` with the `{name}` field set to the low bits of `value`.");

    Some(quote! {
        #(#attrs)*
        #descriptor_doc
        #visibility const #const_name: #field_type =
            <#field_type>::new(#name, #offset, #length);

        #[doc = #offset_doc]
        #visibility const #offset_name: u32 = #offset;

        #[doc = #length_doc]
        #visibility const #length_name: u32 = #length;

        #[doc = #mask_doc]
        #visibility const #mask_name: #raw_type = #mask;

        #[doc = #get_doc]
        #[inline(always)]
        #[must_use]
        #visibility fn #get_name(raw: #raw_type) -> #raw_type {
            Self::#const_name.get(raw)
        }

        #[doc = #with_doc]
        #[inline(always)]
        #[must_use]
        #visibility fn #with_name(raw: #raw_type, value: #raw_type) -> #raw_type {
            Self::#const_name.set(raw, value)
        }
    })
}
