//! Generic markup attributes, keyed by their lookup name.

use super::{attr, RawAttribute};

#[rustfmt::skip]
pub(crate) const HTML_ATTRIBUTES: &[RawAttribute] = &[
    attr("abbr", "Abbr", "string", "specifies an abbreviated version of the content in a header cell."),
    attr("accept", "Accept", "string", "specifies the types of files that the server accepts (only for file type)."),
    attr("allow", "Allow", "string", "specifies a feature policy. Can be called multiple times to set multiple policies."),
    attr("allowfullscreen", "AllowFullscreen", "bool|force", "reports whether an iframe can activate fullscreen mode."),
    attr("allowpaymentrequest", "AllowPaymentRequest", "bool|force", "reports whether an iframe should be allowed to invoke the Payment Request API"),
    attr("aria-*", "Aria", "aria|value", "stores accessible rich internet applications (ARIA) data."),
    attr("attribute", "Attr", "attr|value", "sets the named attribute with the given value."),
    attr("accept-charset", "AcceptCharset", "string", "specifies the character encodings that are to be used for the form submission.").rename("accept-charset"),
    attr("accesskey", "AccessKey", "string", "specifies a shortcut key to activate/focus an element."),
    attr("action", "Action", "string", "specifies where to send the form-data when a form is submitted."),
    attr("alt", "Alt", "string", "specifies an alternate text when the original element fails to display."),
    attr("async", "Async", "bool", "specifies that the script is executed asynchronously (only for external scripts)."),
    attr("autocomplete", "AutoComplete", "on/off", "specifies whether the element should have autocomplete enabled."),
    attr("autofocus", "AutoFocus", "bool", "specifies that the element should automatically get focus when the page loads."),
    attr("autoplay", "AutoPlay", "bool", "specifies that the audio/video will start playing as soon as it is ready."),
    attr("capture", "Capture", "string", "specifies the capture input method in file upload controls"),
    attr("charset", "Charset", "string", "specifies the character encoding."),
    attr("checked", "Checked", "bool", "specifies that an input element should be pre-selected when the page loads (for checkbox or radio types)."),
    attr("cite", "Cite", "url", "specifies a URL which explains the quote/deleted/inserted text."),
    attr("class", "Class", "string|class", "specifies one or more classnames for an element (refers to a class in a style sheet)."),
    attr("cols", "Cols", "int", "specifies the visible width of a text area."),
    attr("colspan", "ColSpan", "int", "specifies the number of columns a table cell should span."),
    attr("content", "Content", "string", "gives the value associated with the http-equiv or name attribute."),
    attr("contenteditable", "ContentEditable", "bool", "specifies whether the content of an element is editable or not."),
    attr("controls", "Controls", "bool", "specifies that audio/video controls should be displayed (such as a play/pause button etc)."),
    attr("coords", "Coords", "string", "specifies the coordinates of the area."),
    attr("crossorigin", "CrossOrigin", "string", "sets the mode of the request to an HTTP CORS Request."),
    attr("data", "Data", "url", "specifies the URL of the resource to be used by the object."),
    attr("data-*", "DataSet", "data|value", "stores custom data private to the page or application."),
    attr("datetime", "DateTime", "string", "specifies the date and time."),
    attr("default", "Default", "bool", "specifies that the track is to be enabled if the user's preferences do not indicate that another track would be more appropriate."),
    attr("defer", "Defer", "bool", "specifies that the script is executed when the page has finished parsing (only for external scripts)."),
    attr("dir", "Dir", "string", "specifies the text direction for the content in an element."),
    attr("dirname", "DirName", "string", "specifies that the text direction will be submitted."),
    attr("disabled", "Disabled", "bool", "specifies that the specified element/group of elements should be disabled."),
    attr("download", "Download", "string", "specifies that the target will be downloaded when a user clicks on the hyperlink."),
    attr("draggable", "Draggable", "bool", "specifies whether an element is draggable or not."),
    attr("enctype", "EncType", "string", "specifies how the form-data should be encoded when submitting it to the server (only for post method)."),
    attr("for", "For", "string", "specifies which form element(s) a label/calculation is bound to."),
    attr("form", "Form", "string", "specifies the name of the form the element belongs to."),
    attr("formaction", "FormAction", "string", "specifies where to send the form-data when a form is submitted. Only for submit type."),
    attr("formenctype", "FormEncType", "string", "specifies how form-data should be encoded before sending it to a server. Only for submit type."),
    attr("formmethod", "FormMethod", "string", "specifies how to send the form-data (which HTTP method to use). Only for submit type."),
    attr("formnovalidate", "FormNoValidate", "bool", "specifies that the form-data should not be validated on submission. Only for submit type."),
    attr("formtarget", "FormTarget", "string", "specifies where to display the response after submitting the form. Only for submit type."),
    attr("headers", "Headers", "string", "specifies one or more headers cells a cell is related to."),
    attr("height", "Height", "int", "specifies the height of the element (in pixels)."),
    attr("hidden", "Hidden", "bool", "specifies that an element is not yet, or is no longer relevant."),
    attr("high", "High", "float64", "specifies the range that is considered to be a high value."),
    attr("href", "Href", "url", "specifies the URL of the page the link goes to."),
    attr("hreflang", "HrefLang", "string", "specifies the language of the linked document."),
    attr("http-equiv", "HTTPEquiv", "string", "provides an HTTP header for the information/value of the content attribute.").rename("http-equiv"),
    attr("id", "ID", "string", "specifies a unique id for an element."),
    attr("ismap", "IsMap", "bool", "specifies an image as a server-side image-map."),
    attr("kind", "Kind", "string", "specifies the kind of text track."),
    attr("label", "Label", "string", "specifies a shorter label for the option."),
    attr("lang", "Lang", "string", "specifies the language of the element's content."),
    attr("list", "List", "string", "refers to a datalist element that contains pre-defined options for an input element."),
    attr("loading", "Loading", "string", "indicates how the browser should load the iframe (eager|lazy)."),
    attr("loop", "Loop", "bool", "specifies that the audio/video will start over again, every time it is finished."),
    attr("low", "Low", "float64", "specifies the range that is considered to be a low value."),
    attr("max", "Max", "any", "Specifies the maximum value."),
    attr("maxlength", "MaxLength", "int", "specifies the maximum number of characters allowed in an element."),
    attr("media", "Media", "string", "specifies what media/device the linked document is optimized for."),
    attr("method", "Method", "string", "specifies the HTTP method to use when sending form-data."),
    attr("min", "Min", "any", "specifies a minimum value."),
    attr("multiple", "Multiple", "bool", "specifies that a user can enter more than one value."),
    attr("muted", "Muted", "bool", "specifies that the audio output of the video should be muted."),
    attr("name", "Name", "string", "specifies the name of the element."),
    attr("novalidate", "NoValidate", "bool", "specifies that the form should not be validated when submitted."),
    attr("open", "Open", "bool", "specifies that the details should be visible (open) to the user."),
    attr("optimum", "Optimum", "float64", "specifies what value is the optimal value for the gauge."),
    attr("pattern", "Pattern", "string", "specifies a regular expression that an input element's value is checked against."),
    attr("ping", "Ping", "string", "specifies a list of URLs to be notified if the user follows the hyperlink."),
    attr("placeholder", "Placeholder", "string", "specifies a short hint that describes the expected value of the element."),
    attr("poster", "Poster", "string", "specifies an image to be shown while the video is downloading, or until the user hits the play button."),
    attr("preload", "Preload", "string", "specifies if and how the author thinks the audio/video should be loaded when the page loads."),
    attr("property", "Property", "string", "specifies the property name."),
    attr("readonly", "ReadOnly", "bool", "specifies that the element is read-only."),
    attr("referrerpolicy", "ReferrerPolicy", "string", "specifies how much/which referrer information that will be sent when processing the iframe attributes"),
    attr("rel", "Rel", "string", "specifies the relationship between the current document and the linked document."),
    attr("required", "Required", "bool", "specifies that the element must be filled out before submitting the form."),
    attr("reversed", "Reversed", "bool", "specifies that the list order should be descending (9,8,7...)."),
    attr("role", "Role", "string", "specifies to parsing software the exact function of an element (and its children)."),
    attr("rows", "Rows", "int", "specifies the visible number of lines in a text area."),
    attr("rowspan", "Rowspan", "int", "specifies the number of rows a table cell should span."),
    attr("sandbox", "Sandbox", "any", "enables an extra set of restrictions for the content in an iframe."),
    attr("scope", "Scope", "string", "specifies whether a header cell is a header for a column, row, or group of columns or rows."),
    attr("selected", "Selected", "bool", "specifies that an option should be pre-selected when the page loads."),
    attr("shape", "Shape", "string", "specifies the shape of the area."),
    attr("size", "Size", "int", "specifies the width."),
    attr("sizes", "Sizes", "string", "specifies the size of the linked resource."),
    attr("span", "Span", "int", "specifies the number of columns to span."),
    attr("spellcheck", "Spellcheck", "bool|force", "specifies whether the element is to have its spelling and grammar checked or not."),
    attr("src", "Src", "url", "specifies the URL of the media file."),
    attr("srcdoc", "SrcDoc", "string", "specifies the HTML content of the page to show in the iframe."),
    attr("srclang", "SrcLang", "string", "specifies the language of the track text data (required if kind = \"subtitles\")."),
    attr("srcset", "SrcSet", "url", "specifies the URL of the image to use in different situations."),
    attr("start", "Start", "int", "specifies the start value of the ordered list."),
    attr("step", "Step", "float64", "specifies the legal number intervals for an input field."),
    attr("style", "Style", "style", "specifies a CSS style for an element. Can be called multiple times to set multiple css styles."),
    attr("styles", "Styles", "style|map", "specifies CSS styles for an element. Can be called multiple times to set multiple css styles."),
    attr("tabindex", "TabIndex", "int", "specifies the tabbing order of an element."),
    attr("target", "Target", "string", "specifies the target for where to open the linked document or where to submit the form."),
    attr("title", "Title", "string", "specifies extra information about an element."),
    attr("type", "Type", "string", "specifies the type of element."),
    attr("usemap", "UseMap", "string", "specifies an image as a client-side image-map."),
    attr("value", "Value", "any", "specifies the value of the element."),
    attr("width", "Width", "int", "specifies the width of the element."),
    attr("wrap", "Wrap", "string", "specifies how the text in a text area is to be wrapped when submitted in a form."),
    attr("xmlns", "XMLNS", "xmlns", "specifies the xml namespace of the element."),
];
