//! Element descriptors and the table the emitters walk.

use crate::attributes::AttributeDescriptor;
use crate::catalog::{CatalogError, Catalogs};
use crate::compose::Composer;
use crate::data;
use crate::events::EventDescriptor;

/// How an element accepts children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructuralKind {
    /// Public `body` and `text` accessors.
    Container,
    /// Children can only be set from inside the runtime crate.
    RestrictedContainer,
    /// Self-closing, no children at all.
    Childless,
}

/// Where the markup tag of an element comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagSource {
    Fixed(String),
    /// The constructor takes the tag as an argument.
    Caller,
}

/// What the `text` accessor of a container writes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextSlot {
    /// Replaces the children with a single text node.
    #[default]
    Children,
    /// Stores the text in the `value` attribute.
    ValueAttribute,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementDescriptor {
    pub name: &'static str,
    pub kind: StructuralKind,
    pub doc: &'static str,
    pub tag: TagSource,
    pub text: TextSlot,
    pub attributes: Vec<AttributeDescriptor>,
    pub events: Vec<EventDescriptor>,
}

impl ElementDescriptor {
    pub fn new(name: &'static str, kind: StructuralKind, doc: &'static str) -> Self {
        Self {
            name,
            kind,
            doc,
            tag: TagSource::Fixed(name.to_lowercase()),
            text: TextSlot::Children,
            attributes: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn container(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, StructuralKind::Container, doc)
    }

    pub fn restricted(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, StructuralKind::RestrictedContainer, doc)
    }

    pub fn childless(name: &'static str, doc: &'static str) -> Self {
        Self::new(name, StructuralKind::Childless, doc)
    }

    pub fn caller_tag(mut self) -> Self {
        self.tag = TagSource::Caller;
        self
    }

    pub fn text_in_value(mut self) -> Self {
        self.text = TextSlot::ValueAttribute;
        self
    }

    /// Attaches an already composed, sorted attribute list.
    pub fn attributes(mut self, attributes: Vec<AttributeDescriptor>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attaches an already composed, sorted event list.
    pub fn events(mut self, events: Vec<EventDescriptor>) -> Self {
        self.events = events;
        self
    }

    pub fn is_self_closing(&self) -> bool {
        self.kind == StructuralKind::Childless
    }
}

/// All elements, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementTable {
    elements: Vec<ElementDescriptor>,
}

impl ElementTable {
    pub fn new(elements: Vec<ElementDescriptor>) -> Self {
        Self { elements }
    }

    /// Resolves every built-in element against `catalogs`: HTML elements first, then SVG.
    pub fn builtin(catalogs: &Catalogs) -> Result<Self, CatalogError> {
        let composer = Composer::new(catalogs);

        let mut elements = data::html_elements(&composer)?;
        let html = elements.len();
        elements.extend(data::svg_elements(&composer)?);

        tracing::debug!(html, svg = elements.len() - html, "built element table");
        Ok(Self { elements })
    }

    pub fn elements(&self) -> &[ElementDescriptor] {
        &self.elements
    }

    pub fn get(&self, name: &str) -> Option<&ElementDescriptor> {
        self.elements.iter().find(|el| el.name == name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn table() -> ElementTable {
        ElementTable::builtin(&Catalogs::builtin()).expect("every table key resolves")
    }

    #[test]
    fn builtin_table_resolves() {
        let table = table();
        assert_eq!(table.len(), 181);
        assert_eq!(table.elements()[0].name, "A");
        assert_eq!(table.elements()[110].name, "SVGvkern");
    }

    #[test]
    fn element_names_are_unique() {
        let table = table();
        let mut seen = HashSet::new();
        for el in table.elements() {
            assert!(seen.insert(el.name), "{} appears twice", el.name);
        }
    }

    #[test]
    fn resolved_lists_are_sorted() {
        for el in table().elements() {
            assert!(
                el.attributes
                    .windows(2)
                    .all(|w| w[0].display_name <= w[1].display_name),
                "{} attributes out of order",
                el.name
            );
            assert!(
                el.events
                    .windows(2)
                    .all(|w| w[0].display_name <= w[1].display_name),
                "{} events out of order",
                el.name
            );
        }
    }

    #[test]
    fn structural_kinds_and_tags() {
        let table = table();

        let body = table.get("Body").unwrap();
        assert_eq!(body.kind, StructuralKind::RestrictedContainer);
        assert_eq!(body.tag, TagSource::Fixed("body".into()));

        let img = table.get("Img").unwrap();
        assert!(img.is_self_closing());

        let custom = table.get("ElemSelfClosing").unwrap();
        assert_eq!(custom.tag, TagSource::Caller);
        assert_eq!(custom.kind, StructuralKind::Childless);

        assert_eq!(table.get("Elem").unwrap().tag, TagSource::Caller);
        assert_eq!(table.get("Textarea").unwrap().text, TextSlot::ValueAttribute);
        assert_eq!(table.get("Div").unwrap().text, TextSlot::Children);

        let clip = table.get("SVGclipPath").unwrap();
        assert_eq!(clip.tag, TagSource::Fixed("svgclippath".into()));
    }

    #[test]
    fn media_elements_get_playback_events() {
        let table = table();
        for name in ["Audio", "Video"] {
            let el = table.get(name).unwrap();
            assert!(el.events.iter().any(|e| e.display_name == "OnPlay"), "{name}");
            assert!(el.events.iter().any(|e| e.display_name == "OnClick"), "{name}");
        }
    }
}
