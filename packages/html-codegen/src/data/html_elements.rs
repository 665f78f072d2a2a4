//! HTML element entries, in emission order.

use crate::catalog::CatalogError;
use crate::compose::Composer;
use crate::elements::ElementDescriptor;

pub(crate) fn html_elements(c: &Composer<'_>) -> Result<Vec<ElementDescriptor>, CatalogError> {
    Ok(vec![
        ElementDescriptor::container("A", "defines a hyperlink.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "download",
                "href",
                "hreflang",
                "media",
                "ping",
                "rel",
                "target",
                "type",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Abbr", "defines an abbreviation or an acronym.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Address", "defines contact information for the author/owner of a document.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Area", "defines an area inside an image-map.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "alt",
                "coords",
                "download",
                "href",
                "hreflang",
                "media",
                "rel",
                "shape",
                "target",
                "type",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Article", "defines an article.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Aside", "defines content aside from the page content.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Audio", "defines sound content.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "autoplay",
                "controls",
                "crossorigin",
                "loop",
                "muted",
                "preload",
                "src",
            ])?)?)
            .events(c.media_events(c.global_events(Vec::new())?)?),
        ElementDescriptor::container("B", "defines bold text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Base", "specifies the base URL/target for all relative URLs in a document.")
            .attributes(c.global_attributes(c.html_attributes(&["href", "target"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Bdi", "isolates a part of text that might be formatted in a different direction from other text outside it.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Bdo", "overrides the current text direction.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Blockquote", "defines a section that is quoted from another source.")
            .attributes(c.global_attributes(c.html_attributes(&["cite"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::restricted("Body", "defines the document's body.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(c.html_events(&[
                "onafterprint",
                "onbeforeprint",
                "onbeforeunload",
                "onerror",
                "onhashchange",
                "onload",
                "onmessage",
                "onoffline",
                "ononline",
                "onpagehide",
                "onpageshow",
                "onpopstate",
                "onresize",
                "onstorage",
                "onunload",
            ])?)?),
        ElementDescriptor::childless("Br", "defines a single line break.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Button", "defines a clickable button.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "autofocus",
                "disabled",
                "form",
                "formaction",
                "formenctype",
                "formmethod",
                "formnovalidate",
                "formtarget",
                "name",
                "type",
                "value",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Canvas", "is used to draw graphics on the fly.")
            .attributes(c.global_attributes(c.html_attributes(&["height", "width"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Caption", "defines a table caption.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Cite", "defines the title of a work.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Code", "defines a piece of computer code.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Col", "specifies column properties for each column within a colgroup element.")
            .attributes(c.global_attributes(c.html_attributes(&["span"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("ColGroup", "specifies a group of one or more columns in a table for formatting.")
            .attributes(c.global_attributes(c.html_attributes(&["span"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Data", "links the given content with a machine-readable translation.")
            .attributes(c.global_attributes(c.html_attributes(&["value"])?)?),
        ElementDescriptor::container("DataList", "specifies a list of pre-defined options for input controls.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Dd", "defines a description/value of a term in a description list.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Del", "defines text that has been deleted from a document.")
            .attributes(c.global_attributes(c.html_attributes(&["cite", "datetime"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Details", "defines additional details that the user can view or hide.")
            .attributes(c.global_attributes(c.html_attributes(&["open"])?)?)
            .events(c.global_events(c.html_events(&["ontoggle"])?)?),
        ElementDescriptor::container("Dfn", "represents the defining instance of a term.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Dialog", "defines a dialog box or window.")
            .attributes(c.global_attributes(c.html_attributes(&["open"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Div", "defines a section in a document.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Dl", "defines a description list.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Dt", "defines a term/name in a description list.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Elem", "represents an customizable HTML element.")
            .caller_tag()
            .attributes(c.global_attributes(c.html_attributes(&["xmlns"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("ElemSelfClosing", "represents a self closing custom HTML element.")
            .caller_tag()
            .attributes(c.global_attributes(c.html_attributes(&["xmlns"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Em", "defines emphasized text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Embed", "defines a container for an external (non-HTML) application.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "height",
                "src",
                "type",
                "width",
            ])?)?)
            .events(c.media_events(c.global_events(Vec::new())?)?),
        ElementDescriptor::container("FieldSet", "groups related elements in a form.")
            .attributes(c.global_attributes(c.html_attributes(&["disabled", "form", "name"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("FigCaption", "defines a caption for a figure element.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Figure", "specifies self-contained content.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Footer", "defines a footer for a document or section.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Form", "defines an HTML form for user input.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "accept-charset",
                "action",
                "autocomplete",
                "enctype",
                "method",
                "name",
                "novalidate",
                "target",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("H1", "defines HTML heading.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("H2", "defines HTML heading.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("H3", "defines HTML heading.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("H4", "defines HTML heading.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("H5", "defines HTML heading.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("H6", "defines HTML heading.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Head", "defines information about the document.")
            .attributes(c.global_attributes(Vec::new())?),
        ElementDescriptor::container("Header", "defines a header for a document or section.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Hr", "defines a thematic change in the content.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::restricted("Html", "defines the root of an HTML document.")
            .attributes(c.global_attributes(Vec::new())?),
        ElementDescriptor::container("I", "defines a part of text in an alternate voice or mood.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("IFrame", "defines an inline frame.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "allow",
                "allowfullscreen",
                "allowpaymentrequest",
                "height",
                "name",
                "referrerpolicy",
                "sandbox",
                "src",
                "srcdoc",
                "width",
                "loading",
            ])?)?)
            .events(c.global_events(c.html_events(&["onload"])?)?),
        ElementDescriptor::childless("Img", "defines an image.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "alt",
                "crossorigin",
                "height",
                "ismap",
                "sizes",
                "src",
                "srcset",
                "usemap",
                "width",
            ])?)?)
            .events(c.media_events(c.global_events(c.html_events(&["onload"])?)?)?),
        ElementDescriptor::childless("Input", "defines an input control.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "accept",
                "alt",
                "autocomplete",
                "autofocus",
                "capture",
                "checked",
                "dirname",
                "disabled",
                "form",
                "formaction",
                "formenctype",
                "formmethod",
                "formnovalidate",
                "formtarget",
                "height",
                "list",
                "max",
                "maxlength",
                "min",
                "multiple",
                "name",
                "pattern",
                "placeholder",
                "readonly",
                "required",
                "size",
                "src",
                "step",
                "type",
                "value",
                "width",
            ])?)?)
            .events(c.global_events(c.html_events(&["onload"])?)?),
        ElementDescriptor::container("Ins", "defines a text that has been inserted into a document.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Kbd", "defines keyboard input.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Label", "defines a label for an input element.")
            .attributes(c.global_attributes(c.html_attributes(&["for", "form"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Legend", "defines a caption for a fieldset element.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Li", "defines a list item.")
            .attributes(c.global_attributes(c.html_attributes(&["value"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Link", "defines the relationship between a document and an external resource (most used to link to style sheets).")
            .attributes(c.global_attributes(c.html_attributes(&[
                "crossorigin",
                "href",
                "hreflang",
                "media",
                "rel",
                "sizes",
                "type",
            ])?)?)
            .events(c.global_events(c.html_events(&["onload"])?)?),
        ElementDescriptor::container("Main", "specifies the main content of a document.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Map", "defines a client-side image-map.")
            .attributes(c.global_attributes(c.html_attributes(&["name"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Mark", "defines marked/highlighted text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Meta", ".")
            .attributes(c.global_attributes(c.html_attributes(&[
                "charset",
                "content",
                "http-equiv",
                "name",
                "property",
            ])?)?),
        ElementDescriptor::container("Meter", "defines a scalar measurement within a known range (a gauge).")
            .attributes(c.global_attributes(c.html_attributes(&[
                "form",
                "high",
                "low",
                "max",
                "min",
                "optimum",
                "value",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Nav", "defines navigation links.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("NoScript", "defines an alternate content for users that do not support client-side scripts.")
            .attributes(c.global_attributes(Vec::new())?),
        ElementDescriptor::container("Object", "defines an embedded object.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "data",
                "form",
                "height",
                "name",
                "type",
                "usemap",
                "width",
            ])?)?)
            .events(c.media_events(c.global_events(Vec::new())?)?),
        ElementDescriptor::container("Ol", "defines an ordered list.")
            .attributes(c.global_attributes(c.html_attributes(&["reversed", "start", "type"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("OptGroup", "defines a group of related options in a drop-down list.")
            .attributes(c.global_attributes(c.html_attributes(&["disabled", "label"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Option", "defines an option in a drop-down list.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "disabled",
                "label",
                "selected",
                "value",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Output", ".")
            .attributes(c.global_attributes(c.html_attributes(&["for", "form", "name"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("P", "defines a paragraph.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Param", "defines a parameter for an object.")
            .attributes(c.global_attributes(c.html_attributes(&["name", "value"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Picture", "defines a container for multiple image resources.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Pre", "defines preformatted text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Progress", "represents the progress of a task.")
            .attributes(c.global_attributes(c.html_attributes(&["max", "value"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Q", "defines a short quotation.")
            .attributes(c.global_attributes(c.html_attributes(&["cite"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Rp", "defines what to show in browsers that do not support ruby annotations.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Rt", "defines an explanation/pronunciation of characters (for East Asian typography).")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Ruby", "defines a ruby annotation (for East Asian typography).")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("S", "Defines text that is no longer correct.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Samp", "defines sample output from a computer program.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Script", "defines a client-side script.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "async",
                "charset",
                "crossorigin",
                "defer",
                "src",
                "type",
            ])?)?)
            .events(c.html_events(&["onload"])?),
        ElementDescriptor::container("Section", "defines a section in a document.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Select", "defines a drop-down list.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "autofocus",
                "disabled",
                "form",
                "multiple",
                "name",
                "required",
                "size",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Small", "defines smaller text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::childless("Source", ".")
            .attributes(c.global_attributes(c.html_attributes(&[
                "src",
                "srcset",
                "media",
                "sizes",
                "type",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Span", "defines a section in a document.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Strong", "defines important text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Style", "defines style information for a document.")
            .attributes(c.global_attributes(c.html_attributes(&["media", "type"])?)?)
            .events(c.global_events(c.html_events(&["onload"])?)?),
        ElementDescriptor::container("Sub", "defines subscripted text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Summary", "defines a visible heading for a details element.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Sup", "defines superscripted text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Table", "defines a table.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("TBody", "groups the body content in a table.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Td", "defines a cell in a table.")
            .attributes(c.global_attributes(c.html_attributes(&["colspan", "headers", "rowspan"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Template", "defines a template.")
            .attributes(c.global_attributes(Vec::new())?),
        ElementDescriptor::container("Textarea", "defines a multiline input control (text area).")
            .text_in_value()
            .attributes(c.global_attributes(c.html_attributes(&[
                "autofocus",
                "cols",
                "dirname",
                "disabled",
                "form",
                "maxlength",
                "name",
                "placeholder",
                "readonly",
                "required",
                "rows",
                "wrap",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("TFoot", "groups the footer content in a table.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Th", "defines a header cell in a table.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "abbr",
                "colspan",
                "headers",
                "rowspan",
                "scope",
            ])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("THead", "groups the header content in a table")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Time", "defines a date/time.")
            .attributes(c.global_attributes(c.html_attributes(&["datetime"])?)?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Title", "defines a title for the document.")
            .attributes(c.global_attributes(Vec::new())?),
        ElementDescriptor::container("Tr", "defines a row in a table.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("U", "defines text that should be stylistically different from normal text.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Ul", "defines an unordered list.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Var", "defines a variable.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
        ElementDescriptor::container("Video", "defines a video or movie.")
            .attributes(c.global_attributes(c.html_attributes(&[
                "autoplay",
                "controls",
                "crossorigin",
                "height",
                "loop",
                "muted",
                "poster",
                "preload",
                "src",
                "width",
            ])?)?)
            .events(c.media_events(c.global_events(Vec::new())?)?),
        ElementDescriptor::container("Wbr", "defines a possible line-break.")
            .attributes(c.global_attributes(Vec::new())?)
            .events(c.global_events(Vec::new())?),
    ])
}
