//! The test artifact: one smoke test per element calling every accessor once.

use proc_macro2::TokenStream;
use quote::quote;

use super::{names, unparse};
use crate::attributes::ValueKind;
use crate::elements::{ElementDescriptor, ElementTable, StructuralKind, TagSource};

pub fn render(table: &ElementTable) -> Result<String, syn::Error> {
    let tests = table.elements().iter().map(scenario);

    unparse(quote! {
        use super::*;

        #(#tests)*
    })
}

fn scenario(el: &ElementDescriptor) -> TokenStream {
    let ctor = names::constructor(el.name);
    let construct = match el.tag {
        TagSource::Fixed(_) => quote! { super::#ctor() },
        TagSource::Caller => quote! { super::#ctor("div") },
    };

    let mut calls = Vec::new();
    for attr in &el.attributes {
        let method = names::attribute_method(attr);
        for args in arguments(attr.kind) {
            calls.push(quote! { let elem = elem.#method(#args); });
        }
    }

    if !el.events.is_empty() {
        calls.push(quote! {
            let h = |_: Context, _: Event| {};
            let elem = elem.on("click", h);
        });
        for event in &el.events {
            let method = names::event_method(event);
            calls.push(quote! { let elem = elem.#method(h); });
        }
    }

    let finish = match el.kind {
        StructuralKind::Container => quote! { let _ = elem.text("hello"); },
        StructuralKind::RestrictedContainer => {
            quote! { let _ = elem.private_body([text("hello")]); }
        }
        StructuralKind::Childless => quote! { let _ = elem; },
    };

    quote! {
        #[test]
        fn #ctor() {
            let elem = #construct;
            #(#calls)*
            #finish
        }
    }
}

/// The argument lists an accessor is called with. Booleans are exercised both ways.
fn arguments(kind: ValueKind) -> Vec<TokenStream> {
    match kind {
        ValueKind::DataValue | ValueKind::AriaValue | ValueKind::AttrValue => {
            vec![quote! { "foo", "bar" }]
        }
        ValueKind::Style => vec![quote! { "color", "deepskyblue" }],
        ValueKind::StyleMap => {
            vec![quote! { std::collections::HashMap::from([("color", "pink")]) }]
        }
        ValueKind::Bool | ValueKind::BoolForce | ValueKind::OnOff => {
            vec![quote! { true }, quote! { false }]
        }
        ValueKind::String => vec![quote! { "foo" }],
        ValueKind::Url => vec![quote! { "http://foo.com" }],
        ValueKind::StringClass => vec![quote! { ["foo", "bar"] }],
        ValueKind::Xmlns => vec![quote! { "http://www.w3.org/2000/svg" }],
        ValueKind::Float => vec![quote! { 42.0 }],
        ValueKind::Int | ValueKind::Any | ValueKind::Other(_) => vec![quote! { 42_i64 }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttributeDescriptor;
    use crate::events::EventDescriptor;
    use pretty_assertions::assert_eq;

    fn body(el: ElementDescriptor) -> Vec<String> {
        let out = render(&ElementTable::new(vec![el])).unwrap();
        let file = syn::parse_file(&out).unwrap();
        let syn::Item::Fn(test) = &file.items[1] else {
            panic!("expected a test function");
        };
        test.block
            .stmts
            .iter()
            .map(|stmt| quote!(#stmt).to_string().replace(' ', ""))
            .collect()
    }

    #[test]
    fn booleans_are_called_twice() {
        let el = ElementDescriptor::childless("Input", "is an input.")
            .attributes(vec![AttributeDescriptor::new("checked", "Checked", ValueKind::Bool)]);

        assert_eq!(
            body(el),
            [
                "letelem=super::input();",
                "letelem=elem.checked(true);",
                "letelem=elem.checked(false);",
                "let_=elem;",
            ]
        );
    }

    #[test]
    fn events_share_one_handler() {
        let el = ElementDescriptor::container("Div", "is a division.").events(vec![
            EventDescriptor::new("onclick", "OnClick"),
            EventDescriptor::new("onscroll", "OnScroll"),
        ]);

        assert_eq!(
            body(el),
            [
                "letelem=super::div();",
                "leth=|_:Context,_:Event|{};",
                "letelem=elem.on(\"click\",h);",
                "letelem=elem.onclick(h);",
                "letelem=elem.onscroll(h);",
                "let_=elem.text(\"hello\");",
            ]
        );
    }

    #[test]
    fn restricted_and_custom_elements() {
        let stmts = body(ElementDescriptor::restricted("Html", "is the root."));
        assert_eq!(stmts.last().unwrap(), "let_=elem.private_body([text(\"hello\")]);");

        let custom = ElementDescriptor::childless("ElemSelfClosing", "is custom.").caller_tag();
        let stmts = body(custom);
        assert_eq!(stmts[0], "letelem=super::elemselfclosing(\"div\");");
    }

    #[test]
    fn literals_per_value_kind() {
        let sample = |kind| {
            arguments(kind)
                .into_iter()
                .map(|args| args.to_string().replace(' ', ""))
                .collect::<Vec<_>>()
        };

        assert_eq!(sample(ValueKind::DataValue), ["\"foo\",\"bar\""]);
        assert_eq!(sample(ValueKind::Style), ["\"color\",\"deepskyblue\""]);
        assert_eq!(sample(ValueKind::Int), ["42_i64"]);
        assert_eq!(sample(ValueKind::Other("complex128")), ["42_i64"]);
        assert_eq!(sample(ValueKind::Url), ["\"http://foo.com\""]);
        assert_eq!(sample(ValueKind::OnOff), ["true", "false"]);
    }
}
