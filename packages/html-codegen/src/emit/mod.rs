//! Rendering the element table to Rust source.
//!
//! Both artifacts are built as token streams, checked by parsing them into a [`syn::File`]
//! and pretty printed with `prettyplease`. The builder and the smoke tests are independent
//! passes over the same table.

use proc_macro2::TokenStream;
use quote::quote;

pub mod builder;
mod names;
pub mod smoke;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by html-codegen. DO NOT EDIT.";

/// Settings shared by both emitters.
#[derive(Clone, Debug)]
pub struct EmitOptions {
    /// Module the runtime items are imported from, relative to the builder module.
    pub runtime_path: syn::Path,
}

impl EmitOptions {
    pub fn new(runtime_path: syn::Path) -> Self {
        Self { runtime_path }
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            runtime_path: syn::parse_quote!(super),
        }
    }
}

/// Parses `tokens` as a whole file and prints it with the generated header in front.
pub(crate) fn unparse(tokens: TokenStream) -> Result<String, syn::Error> {
    let file = syn::parse2::<syn::File>(tokens)?;
    Ok(format!("{HEADER}\n\n{}", prettyplease::unparse(&file)))
}

/// One `#[doc]` attribute per line. Empty docs produce nothing.
pub(crate) fn doc_attrs(doc: &str) -> TokenStream {
    let lines = doc
        .trim()
        .lines()
        .map(|line| format!(" {}", line.trim()))
        .filter(|line| !line.trim().is_empty());

    quote! { #(#[doc = #lines])* }
}

/// Joins a name and its description the way the catalogs expect to be read: `Href specifies ...`.
pub(crate) fn describe(name: &str, doc: &str) -> String {
    let doc = doc.trim();
    if doc.is_empty() {
        name.to_string()
    } else {
        format!("{name} {doc}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_docs_become_one_attribute_per_line() {
        let attrs = doc_attrs("first line\n   second line\n");
        let item: syn::ItemFn = syn::parse2(quote! { #attrs fn f() {} }).unwrap();

        assert_eq!(item.attrs.len(), 2);
        assert!(doc_attrs("  ").is_empty());
    }

    #[test]
    fn rendered_files_carry_the_header() {
        let out = unparse(quote! { pub fn f() {} }).unwrap();
        assert!(out.starts_with(HEADER));
        assert!(out.contains("pub fn f() {}"));
    }

    #[test]
    fn describe_skips_missing_docs() {
        assert_eq!(describe("OnBegin", ""), "OnBegin");
        assert_eq!(describe("Href", "specifies the URL."), "Href specifies the URL.");
    }
}
