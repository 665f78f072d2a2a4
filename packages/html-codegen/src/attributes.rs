use std::fmt::{self, Display};

use crate::data::RawAttribute;

/// Selects the accessor shape generated for an attribute.
///
/// The tag strings are the ones used by the attribute tables. Anything the generator does not
/// know about is kept as [`ValueKind::Other`] and emitted with the same shape as
/// [`ValueKind::Any`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Url,
    Int,
    Float,
    Any,
    Bool,
    /// A boolean serialized as the text `"true"` or `"false"`.
    BoolForce,
    /// A boolean serialized as the text `"on"` or `"off"`.
    OnOff,
    /// A list of class names joined by spaces.
    StringClass,
    /// A single `key:value` CSS declaration stored under `style`.
    Style,
    /// A map of CSS declarations, applied through the `style` accessor.
    StyleMap,
    /// Raw setter for an arbitrary attribute name.
    AttrValue,
    /// `data-*` attributes.
    DataValue,
    /// `aria-*` attributes.
    AriaValue,
    /// The element namespace, kept outside the attribute store.
    Xmlns,
    Other(&'static str),
}

impl ValueKind {
    pub fn from_tag(tag: &'static str) -> Self {
        match tag {
            "string" => Self::String,
            "url" => Self::Url,
            "int" => Self::Int,
            "float64" => Self::Float,
            "any" => Self::Any,
            "bool" => Self::Bool,
            "bool|force" => Self::BoolForce,
            "on/off" => Self::OnOff,
            "string|class" => Self::StringClass,
            "style" => Self::Style,
            "style|map" => Self::StyleMap,
            "attr|value" => Self::AttrValue,
            "data|value" => Self::DataValue,
            "aria|value" => Self::AriaValue,
            "xmlns" => Self::Xmlns,
            other => Self::Other(other),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Url => "url",
            Self::Int => "int",
            Self::Float => "float64",
            Self::Any => "any",
            Self::Bool => "bool",
            Self::BoolForce => "bool|force",
            Self::OnOff => "on/off",
            Self::StringClass => "string|class",
            Self::Style => "style",
            Self::StyleMap => "style|map",
            Self::AttrValue => "attr|value",
            Self::DataValue => "data|value",
            Self::AriaValue => "aria|value",
            Self::Xmlns => "xmlns",
            Self::Other(tag) => tag,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Lookup identity inside its catalog.
    pub key: &'static str,
    /// Identifier used in generated docs and for ordering.
    pub display_name: &'static str,
    /// The markup name, when it is not just the lower-cased display name.
    pub serialized_name_override: Option<&'static str>,
    pub kind: ValueKind,
    pub doc: &'static str,
}

impl AttributeDescriptor {
    pub fn new(key: &'static str, display_name: &'static str, kind: ValueKind) -> Self {
        Self {
            key,
            display_name,
            serialized_name_override: None,
            kind,
            doc: "",
        }
    }

    /// The key the accessor stores its value under.
    pub fn serialized_name(&self) -> String {
        self.serialized_name_override
            .unwrap_or(self.display_name)
            .to_lowercase()
    }
}

impl From<&RawAttribute> for AttributeDescriptor {
    fn from(raw: &RawAttribute) -> Self {
        Self {
            key: raw.key,
            display_name: raw.name,
            serialized_name_override: raw.rename,
            kind: ValueKind::from_tag(raw.tag),
            doc: raw.doc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_known_kinds() {
        for tag in [
            "string",
            "url",
            "int",
            "float64",
            "any",
            "bool",
            "bool|force",
            "on/off",
            "string|class",
            "style",
            "style|map",
            "attr|value",
            "data|value",
            "aria|value",
            "xmlns",
        ] {
            let kind = ValueKind::from_tag(tag);
            assert!(!matches!(kind, ValueKind::Other(_)), "{tag} fell back");
            assert_eq!(kind.tag(), tag);
        }
    }

    #[test]
    fn unknown_tags_are_kept() {
        assert_eq!(ValueKind::from_tag("uint8"), ValueKind::Other("uint8"));
        assert_eq!(ValueKind::from_tag("uint8").to_string(), "uint8");
    }

    #[test]
    fn serialized_name_prefers_override() {
        let mut attr =
            AttributeDescriptor::new("accept-charset", "AcceptCharset", ValueKind::String);
        assert_eq!(attr.serialized_name(), "acceptcharset");

        attr.serialized_name_override = Some("accept-charset");
        assert_eq!(attr.serialized_name(), "accept-charset");
    }
}
