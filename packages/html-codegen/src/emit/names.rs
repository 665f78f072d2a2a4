//! Rust identifiers for the generated items.
//!
//! Method names follow the markup: attributes use their serialized name (`accept-charset`
//! becomes `accept_charset`), events their lower-cased name (`onclick`). Keywords come out
//! as raw identifiers.

use proc_macro2::{Ident, Span};

use crate::attributes::AttributeDescriptor;
use crate::events::EventDescriptor;

/// The element struct, named exactly like the element.
pub(crate) fn element_type(name: &str) -> Ident {
    ident(&sanitize(name))
}

/// The capability trait of an element.
pub(crate) fn element_trait(name: &str) -> Ident {
    ident(&format!("Html{}", sanitize(name)))
}

/// The constructor function. Also used as the name of the element's smoke test.
pub(crate) fn constructor(name: &str) -> Ident {
    ident(&sanitize(&name.to_lowercase()))
}

pub(crate) fn attribute_method(attr: &AttributeDescriptor) -> Ident {
    ident(&sanitize(&attr.serialized_name()))
}

pub(crate) fn event_method(event: &EventDescriptor) -> Ident {
    ident(&sanitize(&event.display_name.to_lowercase()))
}

fn sanitize(name: &str) -> String {
    let mut out: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

fn ident(name: &str) -> Ident {
    // syn refuses keywords when parsing a plain identifier
    if syn::parse_str::<Ident>(name).is_ok() {
        return Ident::new(name, Span::call_site());
    }

    match name {
        "self" | "Self" | "super" | "crate" | "_" => {
            Ident::new(&format!("{name}_"), Span::call_site())
        }
        _ => Ident::new_raw(name, Span::call_site()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::ValueKind;

    #[test]
    fn keywords_become_raw() {
        let attr = AttributeDescriptor::new("type", "Type", ValueKind::String);
        assert_eq!(attribute_method(&attr).to_string(), "r#type");

        let attr = AttributeDescriptor::new("loop", "Loop", ValueKind::Bool);
        assert_eq!(attribute_method(&attr).to_string(), "r#loop");
    }

    #[test]
    fn attribute_methods_follow_the_serialized_name() {
        let mut attr =
            AttributeDescriptor::new("accept-charset", "AcceptCharset", ValueKind::String);
        attr.serialized_name_override = Some("accept-charset");
        assert_eq!(attribute_method(&attr).to_string(), "accept_charset");

        let attr = AttributeDescriptor::new(
            "Conditional_Processing",
            "Conditional_processing",
            ValueKind::AttrValue,
        );
        assert_eq!(attribute_method(&attr).to_string(), "conditional_processing");

        let attr = AttributeDescriptor::new("x1", "X1", ValueKind::String);
        assert_eq!(attribute_method(&attr).to_string(), "x1");
    }

    #[test]
    fn element_names() {
        assert_eq!(element_type("SVGclipPath").to_string(), "SVGclipPath");
        assert_eq!(element_trait("A").to_string(), "HtmlA");
        assert_eq!(constructor("ElemSelfClosing").to_string(), "elemselfclosing");
        assert_eq!(constructor("H1").to_string(), "h1");
    }

    #[test]
    fn event_methods() {
        let event = EventDescriptor::new("ondblclick", "OnDblClick");
        assert_eq!(event_method(&event).to_string(), "ondblclick");
    }
}
