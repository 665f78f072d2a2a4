//! The builder artifact: one capability trait, constructor and newtype per element.

use proc_macro2::TokenStream;
use quote::quote;

use super::{describe, doc_attrs, names, unparse, EmitOptions};
use crate::attributes::{AttributeDescriptor, ValueKind};
use crate::elements::{ElementDescriptor, ElementTable, StructuralKind, TagSource, TextSlot};
use crate::events::EventDescriptor;

pub fn render(table: &ElementTable, options: &EmitOptions) -> Result<String, syn::Error> {
    let runtime = &options.runtime_path;
    let elements = table.elements().iter().map(element);

    unparse(quote! {
        #![allow(non_camel_case_types, unused_imports, clippy::all)]

        use #runtime::{text, AttrValue, Context, Event, EventHandler, HtmlElement, Node};

        #(#elements)*
    })
}

/// A trait method: its declaration and the body used by the implementing struct.
struct Accessor {
    decl: TokenStream,
    imp: TokenStream,
}

fn element(el: &ElementDescriptor) -> TokenStream {
    let ty = names::element_type(el.name);
    let tr = names::element_trait(el.name);
    let ctor = names::constructor(el.name);
    let self_closing = el.is_self_closing();

    let trait_doc = doc_attrs(&format!("The interface that describes a `{}` element.", el.name));
    let ctor_doc = doc_attrs(&format!("Returns an HTML element that {}", el.doc.trim()));

    let constructor = match &el.tag {
        TagSource::Fixed(tag) => quote! {
            #ctor_doc
            pub fn #ctor() -> #ty {
                #ty(HtmlElement::new(#tag, #self_closing))
            }
        },
        TagSource::Caller => quote! {
            #ctor_doc
            pub fn #ctor(tag: impl Into<String>) -> #ty {
                #ty(HtmlElement::new(tag, #self_closing))
            }
        },
    };

    let accessors: Vec<Accessor> = structural(el)
        .into_iter()
        .chain(el.attributes.iter().map(attribute))
        .chain(events(&el.events))
        .collect();
    let decls = accessors.iter().map(|a| &a.decl);
    let imps = accessors.iter().map(|a| &a.imp);

    let private_body = match el.kind {
        StructuralKind::RestrictedContainer => quote! {
            impl #ty {
                pub(crate) fn private_body(
                    mut self,
                    elems: impl IntoIterator<Item = Node>,
                ) -> Self {
                    self.0.set_children(elems.into_iter().collect());
                    self
                }
            }
        },
        _ => TokenStream::new(),
    };

    quote! {
        #trait_doc
        pub trait #tr: Into<Node> {
            #(#decls)*
        }

        #constructor

        pub struct #ty(HtmlElement);

        impl From<#ty> for Node {
            fn from(el: #ty) -> Node {
                Node::from(el.0)
            }
        }

        impl #tr for #ty {
            #(#imps)*
        }

        #private_body
    }
}

fn structural(el: &ElementDescriptor) -> Vec<Accessor> {
    if el.kind != StructuralKind::Container {
        return Vec::new();
    }

    let text_imp = match el.text {
        TextSlot::Children => quote! {
            fn text(self, v: impl std::fmt::Display) -> Self {
                self.body([text(v)])
            }
        },
        TextSlot::ValueAttribute => quote! {
            fn text(mut self, v: impl std::fmt::Display) -> Self {
                self.0.set_attr("value", AttrValue::String(v.to_string()));
                self
            }
        },
    };

    vec![
        Accessor {
            decl: quote! {
                /// Body sets the content of the element.
                fn body(self, elems: impl IntoIterator<Item = Node>) -> Self;
            },
            imp: quote! {
                fn body(mut self, elems: impl IntoIterator<Item = Node>) -> Self {
                    self.0.set_children(elems.into_iter().collect());
                    self
                }
            },
        },
        Accessor {
            decl: quote! {
                /// Text sets the content of the element with a text node containing the
                /// stringified given value.
                fn text(self, v: impl std::fmt::Display) -> Self;
            },
            imp: text_imp,
        },
    ]
}

fn attribute(attr: &AttributeDescriptor) -> Accessor {
    let method = names::attribute_method(attr);
    let name = attr.serialized_name();
    let doc = doc_attrs(&describe(attr.display_name, attr.doc));

    let (params, body) = match attr.kind {
        ValueKind::String | ValueKind::Url => (
            quote! { v: impl Into<String> },
            quote! { self.0.set_attr(#name, AttrValue::String(v.into())); },
        ),
        ValueKind::Int => (
            quote! { v: i64 },
            quote! { self.0.set_attr(#name, AttrValue::Int(v)); },
        ),
        ValueKind::Float => (
            quote! { v: f64 },
            quote! { self.0.set_attr(#name, AttrValue::Float(v)); },
        ),
        ValueKind::Bool => (
            quote! { v: bool },
            quote! { self.0.set_attr(#name, AttrValue::Bool(v)); },
        ),
        ValueKind::BoolForce => (
            quote! { v: bool },
            quote! {
                let s = if v { "true" } else { "false" };
                self.0.set_attr(#name, AttrValue::String(s.to_string()));
            },
        ),
        ValueKind::OnOff => (
            quote! { v: bool },
            quote! {
                let s = if v { "on" } else { "off" };
                self.0.set_attr(#name, AttrValue::String(s.to_string()));
            },
        ),
        ValueKind::StringClass => (
            quote! { v: impl IntoIterator<Item = impl AsRef<str>> },
            quote! {
                let v: Vec<String> = v.into_iter().map(|s| s.as_ref().to_string()).collect();
                self.0.set_attr(#name, AttrValue::String(v.join(" ")));
            },
        ),
        ValueKind::Style => (
            quote! { k: &str, v: &str },
            quote! { self.0.set_attr("style", AttrValue::String(format!("{k}:{v}"))); },
        ),
        ValueKind::StyleMap => (
            quote! { s: impl IntoIterator<Item = (impl AsRef<str>, impl AsRef<str>)> },
            quote! {
                for (k, v) in s {
                    self = self.style(k.as_ref(), v.as_ref());
                }
            },
        ),
        ValueKind::AttrValue => (
            quote! { n: impl Into<String>, v: impl Into<AttrValue> },
            quote! { self.0.set_attr(n, v.into()); },
        ),
        ValueKind::DataValue => (
            quote! { k: &str, v: impl std::fmt::Display },
            quote! { self.0.set_attr(format!("data-{k}"), AttrValue::String(v.to_string())); },
        ),
        ValueKind::AriaValue => (
            quote! { k: &str, v: impl std::fmt::Display },
            quote! { self.0.set_attr(format!("aria-{k}"), AttrValue::String(v.to_string())); },
        ),
        ValueKind::Xmlns => (
            quote! { v: impl Into<String> },
            quote! { self.0.set_xmlns(v); },
        ),
        ValueKind::Any | ValueKind::Other(_) => (
            quote! { v: impl Into<AttrValue> },
            quote! { self.0.set_attr(#name, v.into()); },
        ),
    };

    Accessor {
        decl: quote! {
            #doc
            fn #method(self, #params) -> Self;
        },
        imp: quote! {
            fn #method(mut self, #params) -> Self {
                #body
                self
            }
        },
    }
}

/// The generic `on` accessor, present on every element, followed by one accessor per event.
fn events(events: &[EventDescriptor]) -> Vec<Accessor> {
    let mut accessors = vec![Accessor {
        decl: quote! {
            /// On registers the given event handler to the specified event.
            fn on(self, event: &str, h: impl Into<EventHandler>) -> Self;
        },
        imp: quote! {
            fn on(mut self, event: &str, h: impl Into<EventHandler>) -> Self {
                self.0.set_event_handler(event, h.into());
                self
            }
        },
    }];

    for event in events {
        let method = names::event_method(event);
        let name = event.event_name();
        let doc = doc_attrs(&describe(event.display_name, event.doc));

        accessors.push(Accessor {
            decl: quote! {
                #doc
                fn #method(self, h: impl Into<EventHandler>) -> Self;
            },
            imp: quote! {
                fn #method(mut self, h: impl Into<EventHandler>) -> Self {
                    self.0.set_event_handler(#name, h.into());
                    self
                }
            },
        });
    }

    accessors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::compose::Composer;
    use std::collections::HashMap;

    fn single(el: ElementDescriptor) -> syn::File {
        let out = render(&ElementTable::new(vec![el]), &EmitOptions::default()).unwrap();
        syn::parse_file(&out).unwrap()
    }

    fn trait_methods(file: &syn::File) -> Vec<(String, String)> {
        file.items
            .iter()
            .find_map(|item| match item {
                syn::Item::Trait(t) => Some(t),
                _ => None,
            })
            .unwrap()
            .items
            .iter()
            .filter_map(|item| match item {
                syn::TraitItem::Fn(f) => {
                    let inputs = &f.sig.inputs;
                    Some((f.sig.ident.to_string(), squash(quote!(#inputs))))
                }
                _ => None,
            })
            .collect()
    }

    fn squash(tokens: TokenStream) -> String {
        tokens.to_string().replace(' ', "")
    }

    #[test]
    fn accessor_shapes_follow_value_kinds() {
        let el = ElementDescriptor::childless("Thing", "is a thing.").attributes(vec![
            AttributeDescriptor::new("n", "N", ValueKind::Int),
            AttributeDescriptor::new("f", "F", ValueKind::Float),
            AttributeDescriptor::new("c", "Class", ValueKind::StringClass),
            AttributeDescriptor::new("s", "Style", ValueKind::Style),
            AttributeDescriptor::new("u", "Unknown", ValueKind::Other("complex128")),
        ]);
        let methods = trait_methods(&single(el));

        let expected = [
            ("n", quote!(self, v: i64)),
            ("f", quote!(self, v: f64)),
            ("class", quote!(self, v: impl IntoIterator<Item = impl AsRef<str>>)),
            ("style", quote!(self, k: &str, v: &str)),
            ("unknown", quote!(self, v: impl Into<AttrValue>)),
            ("on", quote!(self, event: &str, h: impl Into<EventHandler>)),
        ];
        let expected: Vec<_> = expected
            .iter()
            .map(|(name, inputs)| (name.to_string(), squash(inputs.clone())))
            .collect();
        assert_eq!(methods, expected);
    }

    #[test]
    fn containers_get_body_before_attributes() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);
        let el = ElementDescriptor::container("Div", "defines a section in a document.")
            .attributes(c.html_attributes(&["id"]).unwrap())
            .events(c.html_events(&["onclick"]).unwrap());

        let names: Vec<_> = trait_methods(&single(el))
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["body", "text", "id", "on", "onclick"]);
    }

    #[test]
    fn restricted_containers_keep_children_internal() {
        let file = single(ElementDescriptor::restricted("Body", "represents the content."));
        let names: Vec<_> = trait_methods(&file)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["on"]);

        let inherent = file.items.iter().find_map(|item| match item {
            syn::Item::Impl(imp) if imp.trait_.is_none() => Some(imp),
            _ => None,
        });
        let inherent = inherent.expect("inherent impl");
        let syn::ImplItem::Fn(f) = &inherent.items[0] else {
            panic!("expected a method");
        };
        assert_eq!(f.sig.ident, "private_body");
        assert!(matches!(f.vis, syn::Visibility::Restricted(_)));
    }

    #[test]
    fn caller_tagged_elements_take_the_tag() {
        let el = ElementDescriptor::container("Elem", "is custom.").caller_tag();
        let out = render(&ElementTable::new(vec![el]), &EmitOptions::default()).unwrap();
        assert!(out.contains("pub fn elem(tag: impl Into<String>) -> Elem"));
        assert!(out.contains("HtmlElement::new(tag, false)"));
    }

    /// Method name to the body of its implementation, with whitespace removed.
    fn impl_bodies(file: &syn::File) -> HashMap<String, String> {
        let imp = file
            .items
            .iter()
            .find_map(|item| match item {
                syn::Item::Impl(imp) => match &imp.trait_ {
                    Some((_, path, _)) if !path.segments.last().is_some_and(|s| s.ident == "From") => Some(imp),
                    _ => None,
                },
                _ => None,
            })
            .unwrap();

        imp.items
            .iter()
            .filter_map(|item| match item {
                syn::ImplItem::Fn(f) => {
                    let block = &f.block;
                    Some((f.sig.ident.to_string(), squash(quote!(#block))))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn accessors_store_values_under_their_markup_names() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);
        let keys = [
            "accept-charset",
            "aria-*",
            "autocomplete",
            "class",
            "data-*",
            "spellcheck",
            "style",
            "styles",
            "xmlns",
        ];
        let el = ElementDescriptor::childless("Thing", "is a thing.")
            .attributes(c.html_attributes(&keys).unwrap());
        let bodies = impl_bodies(&single(el));

        let expect = |method: &str, parts: &[&str]| {
            let body = &bodies[method];
            for part in parts {
                assert!(body.contains(part), "{method}: {part} not in {body}");
            }
        };

        expect(
            "accept_charset",
            &[r#"set_attr("accept-charset",AttrValue::String(v.into()))"#],
        );
        expect(
            "spellcheck",
            &[
                r#"ifv{"true"}else{"false"}"#,
                r#"set_attr("spellcheck",AttrValue::String(s.to_string()))"#,
            ],
        );
        expect(
            "autocomplete",
            &[
                r#"ifv{"on"}else{"off"}"#,
                r#"set_attr("autocomplete",AttrValue::String(s.to_string()))"#,
            ],
        );
        expect("class", &[r#"set_attr("class",AttrValue::String(v.join("#]);
        expect(
            "dataset",
            &[r#"set_attr(format!("data-{k}"),AttrValue::String(v.to_string()))"#],
        );
        expect(
            "aria",
            &[r#"set_attr(format!("aria-{k}"),AttrValue::String(v.to_string()))"#],
        );
        expect("style", &[r#"set_attr("style",AttrValue::String(format!("{k}:{v}")))"#]);
        expect("styles", &["for(k,v)ins", "self=self.style(k.as_ref(),v.as_ref());"]);
        expect("xmlns", &["self.0.set_xmlns(v);"]);
        assert!(!bodies["xmlns"].contains("set_attr"));
    }

    #[test]
    fn event_accessors_bind_the_trimmed_name() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);
        let mut events = c.html_events(&["onclick"]).unwrap();
        events.extend(c.svg_events(&[" onerror"]).unwrap());

        let el = ElementDescriptor::childless("Thing", "is a thing.").events(events);
        let bodies = impl_bodies(&single(el));

        assert!(bodies["on"].contains("self.0.set_event_handler(event,h.into());"));
        assert!(bodies["onclick"].contains(r#"self.0.set_event_handler("click",h.into());"#));
        assert!(bodies["oonerror"]
            .contains(r#"self.0.set_event_handler("oonerror",h.into());"#));
    }

    #[test]
    fn text_slot_selects_what_text_writes() {
        let textarea = ElementDescriptor::container("Textarea", "is a text area.").text_in_value();
        let bodies = impl_bodies(&single(textarea));
        assert!(bodies["text"]
            .contains(r#"self.0.set_attr("value",AttrValue::String(v.to_string()));"#));
        assert!(!bodies["text"].contains("body"));

        let div = ElementDescriptor::container("Div", "is a division.");
        let bodies = impl_bodies(&single(div));
        assert!(bodies["text"].contains("self.body([text(v)])"));
        assert!(bodies["body"].contains("self.0.set_children(elems.into_iter().collect());"));
    }

    #[test]
    fn runtime_path_is_configurable() {
        let options = EmitOptions::new(syn::parse_quote!(crate::dom));
        let out = render(&ElementTable::new(Vec::new()), &options).unwrap();
        assert!(out.contains("use crate::dom::{"));
    }
}
