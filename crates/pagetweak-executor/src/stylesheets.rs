//! Stylesheets and literal colors for display modes.

/// Background written on the body by high contrast and light mode.
pub(crate) const WHITE_BACKGROUND: &str = "#FFFFFF";

/// Body text color restored by light mode.
pub(crate) const LIGHT_TEXT: &str = "#333333";

/// Black on white everywhere, outranking page-authored rules.
pub const HIGH_CONTRAST_CSS: &str = r#"
* {
    background-color: white !important;
    color: black !important;
    border-color: black !important;
}
a {
    color: #0000EE !important;
    text-decoration: underline !important;
}
a:visited {
    color: #551A8B !important;
}
img, svg, video {
    filter: contrast(1.2) !important;
}
button, input, select, textarea {
    border: 1px solid black !important;
}
"#;

/// Light text on a dark background.
pub const DARK_MODE_CSS: &str = r#"
html, body {
    background-color: #121212 !important;
    color: #E0E0E0 !important;
}
* {
    color: #E0E0E0;
    background-color: #121212;
}
a {
    color: #8AB4F8 !important;
}
a:visited {
    color: #C58AF9 !important;
}
h1, h2, h3, h4, h5, h6 {
    color: #FFFFFF !important;
}
input, textarea, select, button {
    background-color: #333333 !important;
    color: #E0E0E0 !important;
    border: 1px solid #555555 !important;
}
img, video, canvas {
    filter: brightness(0.8) contrast(1.2) !important;
}
"#;
