//! Tag name tables: the preset builders and serialization categories.

/// Tags that get a pre-registered builder in every [`Html`](crate::Html)
pub const PRESET_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "b", "base",
    "basefont", "bdo", "bgsound", "big", "blink", "blockquote",
    "body", "br", "button", "caption", "center", "cite", "code",
    "col", "colgroup", "dd", "del", "dfn", "dir", "div", "dl", "dt",
    "em", "embed", "fieldset", "font", "form", "frame", "frameset",
    "h1", "h2", "h3", "h4", "h5", "h6", "head", "hr", "html", "i",
    "iframe", "ilayer", "img", "input", "ins", "isindex", "kbd",
    "label", "legend", "li", "link", "listing", "map", "menu", "meta",
    "multicol", "nobr", "noembed", "noframes", "nolayer", "noscript",
    "object", "ol", "optgroup", "option", "p", "param", "plaintext",
    "pre", "q", "s", "samp", "script", "select", "small", "spacer",
    "span", "strike", "strong", "style", "sub", "sup", "table",
    "tbody", "td", "textarea", "tfoot", "th", "thead", "title", "tr",
    "tt", "u", "ul", "var", "wbr", "xmp",
];

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame",
    "hr", "img", "input", "keygen", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children serialize without escaping
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script",
    "style", "xmp",
];

/// Check if a tag has a preset builder (exact match)
pub fn is_preset(tag: &str) -> bool {
    PRESET_TAGS.contains(&tag)
}

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Check if a tag is a raw text element
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}
