//! Initial values and inheritance for computed styles.

/// Properties children take from their parent when not declared.
pub(crate) const INHERITED: &[&str] = &["font-size", "color", "line-height"];

/// Root font size in pixels.
pub(crate) const ROOT_FONT_SIZE_PX: f64 = 16.0;

const HIDDEN_TAGS: &[&str] = &["head", "style", "script", "title", "meta", "link"];
const INLINE_TAGS: &[&str] = &[
    "a", "span", "img", "svg", "picture", "em", "strong", "b", "i", "u", "code", "label", "small",
    "abbr", "sub", "sup",
];
const INLINE_BLOCK_TAGS: &[&str] = &["input", "button", "select", "textarea"];

/// Initial value of `property` for an element with `tag`.
pub(crate) fn initial_value(property: &str, tag: &str) -> Option<String> {
    let value = match property {
        "font-size" => return Some(format_px(ROOT_FONT_SIZE_PX)),
        "color" => "rgb(0, 0, 0)",
        "background-color" => "rgba(0, 0, 0, 0)",
        "line-height" => "normal",
        "display" => display_for(tag),
        _ => return None,
    };
    Some(value.to_string())
}

fn display_for(tag: &str) -> &'static str {
    if HIDDEN_TAGS.contains(&tag) {
        "none"
    } else if INLINE_TAGS.contains(&tag) {
        "inline"
    } else if INLINE_BLOCK_TAGS.contains(&tag) {
        "inline-block"
    } else if tag == "li" {
        "list-item"
    } else {
        "block"
    }
}

/// Resolve a declared font size against the parent's pixel size.
///
/// Returns `None` for values this document cannot resolve (keywords, `calc`).
pub(crate) fn resolve_font_size(declared: &str, parent_px: Option<f64>) -> Option<f64> {
    let declared = declared.trim();
    let parent = parent_px.unwrap_or(ROOT_FONT_SIZE_PX);

    let (number, scale) = if let Some(n) = declared.strip_suffix("px") {
        (n, 1.0)
    } else if let Some(n) = declared.strip_suffix("rem") {
        (n, ROOT_FONT_SIZE_PX)
    } else if let Some(n) = declared.strip_suffix("em") {
        (n, parent)
    } else if let Some(n) = declared.strip_suffix('%') {
        (n, parent / 100.0)
    } else {
        return None;
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| n * scale)
}

pub(crate) fn format_px(px: f64) -> String {
    format!("{}px", px)
}
