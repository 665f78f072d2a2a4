//! Generic interaction events.

use super::{event, RawEvent};

#[rustfmt::skip]
pub(crate) const HTML_EVENTS: &[RawEvent] = &[
    event("onafterprint", "OnAfterPrint", "runs the given handler after the document is printed."),
    event("onbeforeprint", "OnBeforePrint", "calls the given handler before the document is printed."),
    event("onbeforeunload", "OnBeforeUnload", "calls the given handler when the document is about to be unloaded."),
    event("onerror", "OnError", "calls the given handler when an error occurs."),
    event("onhashchange", "OnHashChange", "calls the given handler when there has been changes to the anchor part of the a URL."),
    event("onload", "OnLoad", "calls the given handler after the element is finished loading."),
    event("onmessage", "OnMessage", "calls then given handler when a message is triggered."),
    event("onoffline", "OnOffline", "calls the given handler when the browser starts to work offline."),
    event("ononline", "OnOnline", "calls the given handler when the browser starts to work online."),
    event("onpagehide", "OnPageHide", "calls the given handler when a user navigates away from a page."),
    event("onpageshow", "OnPageShow", "calls the given handler when a user navigates to a page."),
    event("onpopstate", "OnPopState", "calls the given handler when the window's history changes."),
    event("onresize", "OnResize", "calls the given handler when the browser window is resized."),
    event("onstorage", "OnStorage", "calls the given handler when a Web Storage area is updated."),
    event("onunload", "OnUnload", "calls the given handler once a page has unloaded (or the browser window has been closed)."),
    event("onblur", "OnBlur", "calls the given handler when the element loses focus."),
    event("onchange", "OnChange", "calls the given handler when the value of the element is changed."),
    event("oncontextmenu", "OnContextMenu", "calls the given handler when a context menu is triggered."),
    event("onfocus", "OnFocus", "calls the given handler when the element gets focus."),
    event("oninput", "OnInput", "calls the given handler when an element gets user input."),
    event("oninvalid", "OnInvalid", "calls the given handler when an element is invalid."),
    event("onreset", "OnReset", "calls the given handler when the Reset button in a form is clicked."),
    event("onsearch", "OnSearch", "calls the given handler when the user writes something in a search field."),
    event("onselect", "OnSelect", "calls the given handler after some text has been selected in an element."),
    event("onsubmit", "OnSubmit", "calls the given handler when a form is submitted."),
    event("onkeydown", "OnKeyDown", "calls the given handler when a user is pressing a key."),
    event("onkeypress", "OnKeyPress", "calls the given handler when a user presses a key."),
    event("onkeyup", "OnKeyUp", "calls the given handler when a user releases a key."),
    event("onclick", "OnClick", "calls the given handler when there is a mouse click on the element."),
    event("ondblclick", "OnDblClick", "calls the given handler when there is a mouse double-click on the element."),
    event("onmousedown", "OnMouseDown", "calls the given handler when a mouse button is pressed down on an element."),
    event("onmouseenter", "OnMouseEnter", "calls the given handler when a mouse button is initially moved so that its hotspot is within the element at which the event was fired."),
    event("onmouseleave", "OnMouseLeave", "calls the given handler when the mouse pointer is fired when the pointer has exited the element and all of its descendants."),
    event("onmousemove", "OnMouseMove", "calls the given handler when the mouse pointer is moving while it is over an element."),
    event("onmouseout", "OnMouseOut", "calls the given handler when the mouse pointer moves out of an element."),
    event("onmouseover", "OnMouseOver", "calls the given handler when the mouse pointer moves over an element."),
    event("onmouseup", "OnMouseUp", "calls the given handler when a mouse button is released over an element."),
    event("onwheel", "OnWheel", "calls the given handler when the mouse wheel rolls up or down over an element."),
    event("ondrag", "OnDrag", "calls the given handler when an element is dragged."),
    event("ondragend", "OnDragEnd", "calls the given handler at the end of a drag operation."),
    event("ondragenter", "OnDragEnter", "calls the given handler when an element has been dragged to a valid drop target."),
    event("ondragleave", "OnDragLeave", "calls the given handler when an element leaves a valid drop target."),
    event("ondragover", "OnDragOver", "calls the given handler when an element is being dragged over a valid drop target."),
    event("ondragstart", "OnDragStart", "calls the given handler at the start of a drag operation."),
    event("ondrop", "OnDrop", "calls the given handler when dragged element is being dropped."),
    event("onscroll", "OnScroll", "calls the given handler when an element's scrollbar is being scrolled."),
    event("oncopy", "OnCopy", "calls the given handler when the user copies the content of an element."),
    event("oncut", "OnCut", "calls the given handler when the user cuts the content of an element."),
    event("onpaste", "OnPaste", "calls the given handler when the user pastes some content in an element."),
    event("onabort", "OnAbort", "calls the given handler on abort."),
    event("oncanplay", "OnCanPlay", "calls the given handler when a file is ready to start playing (when it has buffered enough to begin)."),
    event("oncanplaythrough", "OnCanPlayThrough", "calls the given handler when a file can be played all the way to the end without pausing for buffering."),
    event("oncuechange", "OnCueChange", "calls the given handler when the cue changes in a track element."),
    event("ondurationchange", "OnDurationChange", "calls the given handler when the length of the media changes."),
    event("onemptied", "OnEmptied", "calls the given handler when something bad happens and the file is suddenly unavailable (like unexpectedly disconnects)."),
    event("onended", "OnEnded", "calls the given handler when the media has reach the end."),
    event("onloadeddata", "OnLoadedData", "calls the given handler when media data is loaded."),
    event("onloadedmetadata", "OnLoadedMetaData", "calls the given handler when meta data (like dimensions and duration) are loaded."),
    event("onloadstart", "OnLoadStart", "calls the given handler just as the file begins to load before anything is actually loaded."),
    event("onpause", "OnPause", "calls the given handler when the media is paused either by the user or programmatically."),
    event("onplay", "OnPlay", "calls the given handler when the media is ready to start playing."),
    event("onplaying", "OnPlaying", "calls the given handler when the media actually has started playing."),
    event("onprogress", "OnProgress", "calls the given handler when the browser is in the process of getting the media data."),
    event("onratechange", "OnRateChange", "calls the given handler each time the playback rate changes (like when a user switches to a slow motion or fast forward mode)."),
    event("onseeked", "OnSeeked", "calls the given handler when the seeking attribute is set to false indicating that seeking has ended."),
    event("onseeking", "OnSeeking", "calls the given handler when the seeking attribute is set to true indicating that seeking is active."),
    event("onstalled", "OnStalled", "calls the given handler when the browser is unable to fetch the media data for whatever reason."),
    event("onsuspend", "OnSuspend", "calls the given handler when fetching the media data is stopped before it is completely loaded for whatever reason."),
    event("ontimeupdate", "OnTimeUpdate", "calls the given handler when the playing position has changed (like when the user fast forwards to a different point in the media)."),
    event("onvolumechange", "OnVolumeChange", "calls the given handler each time the volume is changed which (includes setting the volume to \"mute\")."),
    event("onwaiting", "OnWaiting", "calls the given handler when the media has paused but is expected to resume (like when the media pauses to buffer more data)."),
    event("ontoggle", "OnToggle", "calls the given handler when the user opens or closes the details element."),
];
