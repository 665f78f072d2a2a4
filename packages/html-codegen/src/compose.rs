//! Merging element-specific attribute and event lists with the fixed baseline sets.
//!
//! Every composer appends its fixed set to the caller's list and re-sorts by display name.
//! Only [`Composer::svg_animation_events`] skips entries the caller already supplied; the
//! others keep duplicates.

use crate::attributes::AttributeDescriptor;
use crate::catalog::{sort_by_display_name, CatalogError, Catalogs};
use crate::events::EventDescriptor;

/// Attributes present on every HTML element.
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "aria-*",
    "class",
    "contenteditable",
    "data-*",
    "dir",
    "draggable",
    "hidden",
    "id",
    "lang",
    "role",
    "spellcheck",
    "style",
    "styles",
    "tabindex",
    "title",
    "attribute",
];

/// Form, keyboard, mouse, drag and clipboard events present on every HTML element.
pub const GLOBAL_EVENTS: &[&str] = &[
    "onblur",
    "onchange",
    "oncontextmenu",
    "onfocus",
    "oninput",
    "oninvalid",
    "onreset",
    "onsearch",
    "onselect",
    "onsubmit",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onclick",
    "ondblclick",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onwheel",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "onscroll",
    "oncopy",
    "oncut",
    "onpaste",
];

/// Playback lifecycle events of audio and video elements.
pub const MEDIA_EVENTS: &[&str] = &[
    "onabort",
    "oncanplay",
    "oncanplaythrough",
    "oncuechange",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onpause",
    "onplay",
    "onplaying",
    "onprogress",
    "onratechange",
    "onseeked",
    "onseeking",
    "onstalled",
    "onsuspend",
    "ontimeupdate",
    "onvolumechange",
    "onwaiting",
];

// The space-prefixed keys are the catalog's own keys.
pub const SVG_DOCUMENT_EVENTS: &[&str] =
    &["onabort", " onerror", " onresize", " onscroll", " onunload"];

pub const SVG_DOCUMENT_ELEMENT_EVENTS: &[&str] = &["oncopy", "oncut", "onpaste"];

pub const SVG_GRAPHICAL_EVENTS: &[&str] = &["onactivate", "onfocusin", "onfocusout"];

pub const SVG_GLOBAL_EVENTS: &[&str] = &[
    "oncancel",
    "oncanplay",
    "oncanplaythrough",
    "onchange",
    "onclick",
    "onclose",
    "oncuechange",
    "ondblclick",
    "ondrag",
    "ondragend",
    "ondragenter",
    "ondragleave",
    "ondragover",
    "ondragstart",
    "ondrop",
    "ondurationchange",
    "onemptied",
    "onended",
    "onerror",
    "onfocus",
    "oninput",
    "oninvalid",
    "onkeydown",
    "onkeypress",
    "onkeyup",
    "onload",
    "onloadeddata",
    "onloadedmetadata",
    "onloadstart",
    "onmousedown",
    "onmouseenter",
    "onmouseleave",
    "onmousemove",
    "onmouseout",
    "onmouseover",
    "onmouseup",
    "onmousewheel",
    "onpause",
    "onplay",
    "onplaying",
    "onprogress",
    "onratechange",
    "onreset",
    "onresize",
    "onscroll",
    "onseeked",
    "onseeking",
    "onselect",
    "onshow",
    "onstalled",
    "onsubmit",
    "onsuspend",
    "ontimeupdate",
    "ontoggle",
    "onvolumechange",
    "onwaiting",
];

/// Animation events, as `(catalog key, display name)`.
const SVG_ANIMATION_EVENTS: &[(&str, &str)] = &[
    ("onbegin", "OnBegin"),
    ("onend", "OnEnd"),
    ("onrepeat", "OnRepeat"),
];

/// Resolves keys against a set of catalogs and merges the results with the baseline sets.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    catalogs: &'a Catalogs,
}

impl<'a> Composer<'a> {
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self { catalogs }
    }

    pub fn html_attributes(&self, keys: &[&str]) -> Result<Vec<AttributeDescriptor>, CatalogError> {
        self.catalogs.html_attributes.resolve(keys)
    }

    pub fn svg_attributes(&self, keys: &[&str]) -> Result<Vec<AttributeDescriptor>, CatalogError> {
        self.catalogs.svg_attributes.resolve(keys)
    }

    pub fn html_events(&self, keys: &[&str]) -> Result<Vec<EventDescriptor>, CatalogError> {
        self.catalogs.html_events.resolve(keys)
    }

    pub fn svg_events(&self, keys: &[&str]) -> Result<Vec<EventDescriptor>, CatalogError> {
        self.catalogs.svg_events.resolve(keys)
    }

    pub fn global_attributes(
        &self,
        extra: Vec<AttributeDescriptor>,
    ) -> Result<Vec<AttributeDescriptor>, CatalogError> {
        Ok(append(extra, self.html_attributes(GLOBAL_ATTRIBUTES)?))
    }

    pub fn global_events(
        &self,
        extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        Ok(append(extra, self.html_events(GLOBAL_EVENTS)?))
    }

    pub fn media_events(
        &self,
        extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        Ok(append(extra, self.html_events(MEDIA_EVENTS)?))
    }

    pub fn svg_document_events(
        &self,
        extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        Ok(append(extra, self.svg_events(SVG_DOCUMENT_EVENTS)?))
    }

    pub fn svg_document_element_events(
        &self,
        extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        Ok(append(extra, self.svg_events(SVG_DOCUMENT_ELEMENT_EVENTS)?))
    }

    pub fn svg_graphical_events(
        &self,
        extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        Ok(append(extra, self.svg_events(SVG_GRAPHICAL_EVENTS)?))
    }

    pub fn svg_global_events(
        &self,
        extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        Ok(append(extra, self.svg_events(SVG_GLOBAL_EVENTS)?))
    }

    /// Adds begin, end and repeat unless an event with the same display name is already there.
    pub fn svg_animation_events(
        &self,
        mut extra: Vec<EventDescriptor>,
    ) -> Result<Vec<EventDescriptor>, CatalogError> {
        for (key, name) in SVG_ANIMATION_EVENTS {
            if extra.iter().any(|event| event.display_name == *name) {
                continue;
            }
            extra.extend(self.svg_events(&[*key])?);
        }

        sort_by_display_name(&mut extra);
        Ok(extra)
    }
}

fn append<T: crate::catalog::Descriptor>(mut extra: Vec<T>, fixed: Vec<T>) -> Vec<T> {
    extra.extend(fixed);
    sort_by_display_name(&mut extra);
    extra
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T: crate::catalog::Descriptor>(items: &[T]) -> Vec<&'static str> {
        items.iter().map(|item| item.display_name()).collect()
    }

    fn count(events: &[EventDescriptor], name: &str) -> usize {
        events.iter().filter(|e| e.display_name == name).count()
    }

    #[test]
    fn global_attributes_alone() {
        let catalogs = Catalogs::builtin();
        let attrs = Composer::new(&catalogs).global_attributes(Vec::new()).unwrap();

        assert_eq!(attrs.len(), GLOBAL_ATTRIBUTES.len());
        assert_eq!(
            names(&attrs),
            [
                "AccessKey",
                "Aria",
                "Attr",
                "Class",
                "ContentEditable",
                "DataSet",
                "Dir",
                "Draggable",
                "Hidden",
                "ID",
                "Lang",
                "Role",
                "Spellcheck",
                "Style",
                "Styles",
                "TabIndex",
                "Title",
            ]
        );
    }

    #[test]
    fn global_attributes_merge_and_sort() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);
        let attrs = c
            .global_attributes(c.html_attributes(&["src", "width", "height"]).unwrap())
            .unwrap();

        assert_eq!(attrs.len(), GLOBAL_ATTRIBUTES.len() + 3);
        assert!(names(&attrs).windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn naive_composers_keep_duplicates() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);

        let click = c.html_events(&["onclick"]).unwrap();
        let events = c.global_events(click).unwrap();
        assert_eq!(count(&events, "OnClick"), 2);

        let copy = c.svg_events(&["oncopy"]).unwrap();
        let events = c.svg_document_element_events(copy).unwrap();
        assert_eq!(count(&events, "OnCopy"), 2);
    }

    #[test]
    fn media_events_stack_on_global_events() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);
        let events = c.media_events(c.global_events(Vec::new()).unwrap()).unwrap();

        assert_eq!(events.len(), GLOBAL_EVENTS.len() + MEDIA_EVENTS.len());
        assert_eq!(count(&events, "OnPlay"), 1);
    }

    #[test]
    fn animation_events_are_idempotent() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);

        let supplied = c.svg_events(&["onbegin"]).unwrap();
        let with_begin = c.svg_animation_events(supplied).unwrap();
        let without = c.svg_animation_events(Vec::new()).unwrap();

        for events in [&with_begin, &without] {
            assert_eq!(names(events), ["OnBegin", "OnEnd", "OnRepeat"]);
        }

        let twice = c.svg_animation_events(with_begin).unwrap();
        assert_eq!(count(&twice, "OnBegin"), 1);
        assert_eq!(count(&twice, "OnEnd"), 1);
        assert_eq!(count(&twice, "OnRepeat"), 1);
    }

    #[test]
    fn svg_document_events_use_verbatim_keys() {
        let catalogs = Catalogs::builtin();
        let events = Composer::new(&catalogs)
            .svg_document_events(Vec::new())
            .unwrap();

        assert_eq!(
            names(&events),
            ["OnAbort", "OoNerror", "OoNresize", "OoNscroll", "OoNunload"]
        );
    }

    #[test]
    fn baseline_sets_resolve() {
        let catalogs = Catalogs::builtin();
        let c = Composer::new(&catalogs);

        assert!(c.global_attributes(Vec::new()).is_ok());
        assert!(c.global_events(Vec::new()).is_ok());
        assert!(c.media_events(Vec::new()).is_ok());
        assert!(c.svg_document_events(Vec::new()).is_ok());
        assert!(c.svg_document_element_events(Vec::new()).is_ok());
        assert!(c.svg_graphical_events(Vec::new()).is_ok());
        assert!(c.svg_global_events(Vec::new()).is_ok());
        assert!(c.svg_animation_events(Vec::new()).is_ok());
    }
}
