//! The literal dataset the generator runs on.
//!
//! Raw rows stay as close to plain text as possible: the value kind is kept as its tag
//! string and only parsed when a [`Catalog`](crate::catalog::Catalog) is built from it.

mod html_attributes;
mod html_elements;
mod html_events;
mod svg_attributes;
mod svg_elements;
mod svg_events;

pub(crate) use html_attributes::HTML_ATTRIBUTES;
pub(crate) use html_elements::html_elements;
pub(crate) use html_events::HTML_EVENTS;
pub(crate) use svg_attributes::SVG_ATTRIBUTES;
pub(crate) use svg_elements::svg_elements;
pub(crate) use svg_events::SVG_EVENTS;

/// One row of an attribute table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawAttribute {
    pub key: &'static str,
    pub name: &'static str,
    pub rename: Option<&'static str>,
    pub tag: &'static str,
    pub doc: &'static str,
}

impl RawAttribute {
    /// Serialize under `name` instead of the lower-cased display name.
    pub(crate) const fn rename(mut self, name: &'static str) -> Self {
        self.rename = Some(name);
        self
    }
}

pub(crate) const fn attr(
    key: &'static str,
    name: &'static str,
    tag: &'static str,
    doc: &'static str,
) -> RawAttribute {
    RawAttribute {
        key,
        name,
        rename: None,
        tag,
        doc,
    }
}

/// One row of an event table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawEvent {
    pub key: &'static str,
    pub name: &'static str,
    pub doc: &'static str,
}

pub(crate) const fn event(key: &'static str, name: &'static str, doc: &'static str) -> RawEvent {
    RawEvent { key, name, doc }
}
