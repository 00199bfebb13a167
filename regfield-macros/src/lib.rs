use syn::parse_macro_input;

use crate::gen::registers_impl;

mod ast;
mod check;
mod gen;

#[proc_macro]
pub fn registers(tokens: proc_macro::TokenStream) -> proc_macro::TokenStream {
    registers_impl(parse_macro_input!(tokens)).into()
}
