use syn::punctuated::Punctuated;
use syn::{Error, Result, Token};

use crate::ast::FieldDecl;

pub struct CheckedField {
    pub decl: FieldDecl,
    pub offset: u32,
    pub length: u32,
}

/// Resolves each field's bit range against the register width and rejects
/// invalid declarations. Returns the fields in declaration order.
pub fn check_fields(
    width: u32,
    fields: Punctuated<FieldDecl, Token![,]>,
) -> Result<Vec<CheckedField>> {
    let mut checked: Vec<CheckedField> = Vec::new();
    for decl in fields {
        let start: u32 = decl.start.base10_parse()?;
        let end: u32 = decl.end.base10_parse()?;
        if end < start {
            return Err(Error::new(
                decl.end.span(),
                format!("bit range `{start}..{end}` is reversed"),
            ));
        }
        let length = end - start;
        if length >= width {
            return Err(Error::new(
                decl.end.span(),
                format!(
                    "field is {length} bit(s) wide; fields must be narrower than the \
                        {width}-bit register"
                ),
            ));
        }
        if end > width {
            return Err(Error::new(
                decl.end.span(),
                format!("field ends at bit {end} but the register is {width} bits wide"),
            ));
        }

        let name = decl.name.to_string();
        let upper = name.to_uppercase();
        for prev in &checked {
            let prev_name = prev.decl.name.to_string();
            if prev_name == name {
                return Err(Error::new(
                    decl.name.span(),
                    format!("duplicate field name `{name}`"),
                ));
            }
            if prev_name.to_uppercase() == upper {
                return Err(Error::new(
                    decl.name.span(),
                    format!(
                        "field name `{name}` collides with `{prev_name}`; generated \
                            constant names are upper-cased"
                    ),
                ));
            }
        }

        checked.push(CheckedField {
            decl,
            offset: start,
            length,
        });
    }
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::parse::Parser;

    use super::*;

    fn parse_fields(tokens: proc_macro2::TokenStream) -> Punctuated<FieldDecl, Token![,]> {
        Punctuated::parse_terminated.parse2(tokens).unwrap()
    }

    #[test]
    fn resolves_offsets_and_lengths() {
        let fields = parse_fields(quote! { lo: 0..4, hi: 4..8, rest: 8..16 });
        let checked = check_fields(16, fields).unwrap();
        assert_eq!(checked.len(), 3);
        assert_eq!((checked[1].offset, checked[1].length), (4, 4));
        assert_eq!(checked[2].decl.name.to_string(), "rest");
    }

    #[test]
    fn zero_length_at_the_word_boundary_is_allowed() {
        let fields = parse_fields(quote! { empty: 8..8 });
        let checked = check_fields(8, fields).unwrap();
        assert_eq!((checked[0].offset, checked[0].length), (8, 0));
    }

    fn check_error(width: u32, tokens: proc_macro2::TokenStream) -> String {
        let Err(err) = check_fields(width, parse_fields(tokens)) else {
            panic!("declaration unexpectedly passed");
        };
        err.to_string()
    }

    #[test]
    fn rejects_reversed_ranges() {
        assert!(check_error(16, quote! { x: 4..2 }).contains("reversed"));
    }

    #[test]
    fn rejects_full_width_fields() {
        assert!(check_error(8, quote! { x: 0..8 }).contains("narrower"));
    }

    #[test]
    fn rejects_fields_past_the_end() {
        assert!(check_error(8, quote! { x: 6..10 }).contains("8 bits wide"));
    }

    #[test]
    fn rejects_duplicate_names() {
        assert!(check_error(8, quote! { x: 0..1, x: 1..2 }).contains("duplicate field name `x`"));
    }

    #[test]
    fn rejects_upper_case_collisions() {
        assert!(check_error(8, quote! { mode: 0..1, MODE: 1..2 }).contains("collides with `mode`"));
    }
}
