//! Vector-graphics events. Most entries carry no documentation. The space-prefixed
//! document-level keys are looked up verbatim.

use super::{event, RawEvent};

#[rustfmt::skip]
pub(crate) const SVG_EVENTS: &[RawEvent] = &[
    event("onbegin", "OnBegin", ""),
    event("onend", "OnEnd", ""),
    event("onrepeat", "OnRepeat", ""),
    event("oncopy", "OnCopy", ""),
    event("oncut", "OnCut", ""),
    event("onpaste", "OnPaste", ""),
    event("onabort", "OnAbort", ""),
    event(" onerror", "OoNerror", ""),
    event(" onresize", "OoNresize", ""),
    event(" onscroll", "OoNscroll", ""),
    event(" onunload", "OoNunload", ""),
    event("onactivate", "OnActivate", ""),
    event("onfocusin", "OnFocusin", ""),
    event("onfocusout", "OnFocusout", ""),
    event("oncancel", "OnCancel", ""),
    event("oncanplay", "OnCanplay", ""),
    event("oncanplaythrough", "OnCanplaythrough", ""),
    event("onchange", "OnChange", ""),
    event("onclick", "OnClick", ""),
    event("onclose", "OnClose", ""),
    event("oncuechange", "OnCuechange", ""),
    event("ondblclick", "OnDblclick", ""),
    event("ondrag", "OnDrag", ""),
    event("ondragend", "OnDragend", ""),
    event("ondragenter", "OnDragenter", ""),
    event("ondragleave", "OnDragleave", ""),
    event("ondragover", "OnDragover", ""),
    event("ondragstart", "OnDragstart", ""),
    event("ondrop", "OnDrop", ""),
    event("ondurationchange", "OnDurationchange", ""),
    event("onemptied", "OnEmptied", ""),
    event("onended", "OnEnded", ""),
    event("onerror", "OnError", ""),
    event("onfocus", "OnFocus", ""),
    event("oninput", "OnInput", ""),
    event("oninvalid", "OnInvalid", ""),
    event("onkeydown", "OnKeyDown", ""),
    event("onkeypress", "OnKeyPress", ""),
    event("onkeyup", "OnKeyUp", ""),
    event("onload", "OnLoad", ""),
    event("onloadeddata", "OnLoadeddata", ""),
    event("onloadedmetadata", "OnLoadedmetadata", ""),
    event("onloadstart", "OnLoadstart", ""),
    event("onmousedown", "OnMousedown", ""),
    event("onmouseenter", "OnMouseenter", ""),
    event("onmouseleave", "OnMouseleave", ""),
    event("onmousemove", "OnMousemove", ""),
    event("onmouseout", "OnMouseout", ""),
    event("onmouseover", "OnMouseover", ""),
    event("onmouseup", "OnMouseup", ""),
    event("onmousewheel", "OnMousewheel", ""),
    event("onpause", "OnPause", ""),
    event("onplay", "OnPlay", ""),
    event("onplaying", "OnPlaying", ""),
    event("onprogress", "OnProgress", ""),
    event("onratechange", "OnRatechange", ""),
    event("onreset", "OnReset", ""),
    event("onresize", "OnResize", ""),
    event("onscroll", "OnScroll", ""),
    event("onseeked", "OnSeeked", ""),
    event("onseeking", "OnSeeking", ""),
    event("onselect", "OnSelect", ""),
    event("onshow", "OnShow", ""),
    event("onstalled", "OnStalled", ""),
    event("onsubmit", "OnSubmit", ""),
    event("onsuspend", "OnSuspend", ""),
    event("ontimeupdate", "OnTimeupdate", ""),
    event("ontoggle", "OnToggle", ""),
    event("onvolumechange", "OnVolumechange", ""),
    event("onwaiting", "OnWaiting", ""),
];
