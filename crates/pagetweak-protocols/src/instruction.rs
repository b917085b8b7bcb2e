//! Structured instructions produced by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selectors for the element sets instructions target.
pub mod selectors {
    /// Every text-bearing element inside the body.
    pub const TEXT_ELEMENTS: &str = "body *";

    /// The element that paints the document background.
    pub const DOCUMENT_BACKGROUND: &str = "body";

    /// The body and everything inside it.
    pub const DOCUMENT_TEXT: &str = "body, body *";

    /// Raster and vector images, including ARIA images.
    pub const IMAGES: &str = r#"img, picture, svg, [role="img"]"#;

    /// Block and inline text containers that carry line height.
    pub const LINE_HEIGHT_TARGETS: &str = "p, div, span, li, h1, h2, h3, h4, h5, h6";
}

/// Style properties an instruction may set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    FontSize,
    BackgroundColor,
    Color,
    Display,
    LineHeight,
}

impl StyleProperty {
    /// CSS property name as used in declarations.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::FontSize => "font-size",
            Self::BackgroundColor => "background-color",
            Self::Color => "color",
            Self::Display => "display",
            Self::LineHeight => "line-height",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A structured page mutation.
///
/// Created fresh per submission, consumed once by the executor. The serialized
/// form is what crosses the boundary between the shell and the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Instruction {
    /// Set one style property on every element matching `selector`.
    SetStyle {
        selector: String,
        property: StyleProperty,
        value: String,
    },

    /// Shift the computed font size by `delta_px`, clamped to a floor.
    AdjustFontSize {
        selector: String,
        #[serde(rename = "deltaPx")]
        delta_px: i32,
    },

    /// Set an absolute unitless line height.
    SetLineHeight { selector: String, value: f64 },

    /// Global black-on-white override.
    HighContrast,

    /// Global dark theme override.
    DarkMode,

    /// Drop mode overrides and restore light body colors.
    LightMode,

    /// Reload the document, discarding every mutation.
    ReloadPage,

    /// The command matched no rule.
    NoMatch,
}

impl Instruction {
    /// Shorthand for a [`Instruction::SetStyle`].
    pub fn set_style(
        selector: impl Into<String>,
        property: StyleProperty,
        value: impl Into<String>,
    ) -> Self {
        Self::SetStyle {
            selector: selector.into(),
            property,
            value: value.into(),
        }
    }

    /// Wire tag of this instruction.
    pub fn action(&self) -> &'static str {
        match self {
            Self::SetStyle { .. } => "SET_STYLE",
            Self::AdjustFontSize { .. } => "ADJUST_FONT_SIZE",
            Self::SetLineHeight { .. } => "SET_LINE_HEIGHT",
            Self::HighContrast => "HIGH_CONTRAST",
            Self::DarkMode => "DARK_MODE",
            Self::LightMode => "LIGHT_MODE",
            Self::ReloadPage => "RELOAD_PAGE",
            Self::NoMatch => "NO_MATCH",
        }
    }

    /// Whether the executor can act on this instruction.
    pub fn is_executable(&self) -> bool {
        !matches!(self, Self::NoMatch)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetStyle {
                selector,
                property,
                value,
            } => write!(f, "{} {}: {} on '{}'", self.action(), property, value, selector),
            Self::AdjustFontSize { selector, delta_px } => {
                write!(f, "{} {:+}px on '{}'", self.action(), delta_px, selector)
            }
            Self::SetLineHeight { selector, value } => {
                write!(f, "{} {} on '{}'", self.action(), value, selector)
            }
            _ => f.write_str(self.action()),
        }
    }
}

#[cfg(test)]
#[path = "instruction_tests.rs"]
mod tests;
