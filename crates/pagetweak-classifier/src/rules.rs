//! The ordered rule cascade.
//!
//! Vocabularies overlap ("increase" is both a font-size and a line-height
//! word, "display" both a verb and a property), so the position of a rule in
//! [`RULES`] is part of its meaning.

use std::sync::LazyLock;

use regex::Regex;

use pagetweak_config::ClassifierConfig;
use pagetweak_protocols::{selectors, Instruction, StyleProperty};

use crate::colors::ColorTable;

const RESET_WORDS: &[&str] = &["reset", "reload", "refresh", "restore", "revert", "clear"];
const INCREASE_WORDS: &[&str] = &["increase", "bigger", "larger", "grow", "enlarge"];
const DECREASE_WORDS: &[&str] = &["decrease", "smaller", "reduce", "shrink"];
const SIZE_WORDS: &[&str] = &["font", "text", "size"];
const BACKGROUND_WORDS: &[&str] = &["background", "bg"];
const TEXT_COLOR_PHRASES: &[&str] = &["text color", "font color", "color text", "color font"];
const HIDE_WORDS: &[&str] = &["hide", "remove", "disable"];
const SHOW_WORDS: &[&str] = &["show", "display", "enable", "unhide"];
const IMAGE_WORDS: &[&str] = &["image", "img", "picture", "photo"];
const LINE_HEIGHT_PHRASES: &[&str] = &["line height", "line spacing", "spacing between lines"];
const LINE_MORE_WORDS: &[&str] = &["increase", "bigger", "larger", "more"];
const LINE_LESS_WORDS: &[&str] = &["decrease", "smaller", "less", "reduce"];
const HIGH_CONTRAST_PHRASES: &[&str] = &["high contrast", "contrast mode", "increase contrast"];
const DARK_PHRASES: &[&str] = &["dark mode", "night mode", "dark theme"];
const LIGHT_PHRASES: &[&str] = &["light mode", "day mode", "light theme"];

static FONT_SIZE_PX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font\s+size\s+([0-9]+)\s*px").expect("font size pattern is valid"));
static SET_FONT_SIZE_TO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"set\s+font\s+size\s+to\s+([0-9]+)").expect("font size pattern is valid")
});

/// What a rule can see besides the command text.
pub(crate) struct RuleContext<'a> {
    pub config: &'a ClassifierConfig,
    pub colors: &'a ColorTable,
}

/// A named predicate/builder pair.
pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: fn(&str, &RuleContext<'_>) -> Option<Instruction>,
}

/// Evaluated top to bottom; the first `Some` wins.
pub(crate) static RULES: &[Rule] = &[
    Rule { name: "reload", apply: reload },
    Rule { name: "absolute-font-size", apply: absolute_font_size },
    Rule { name: "increase-font-size", apply: increase_font_size },
    Rule { name: "decrease-font-size", apply: decrease_font_size },
    Rule { name: "background-color", apply: background_color },
    Rule { name: "text-color", apply: text_color },
    Rule { name: "hide-images", apply: hide_images },
    Rule { name: "show-images", apply: show_images },
    Rule { name: "line-height", apply: line_height },
    Rule { name: "high-contrast", apply: high_contrast },
    Rule { name: "dark-mode", apply: dark_mode },
    Rule { name: "light-mode", apply: light_mode },
];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}

fn reload(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    contains_any(text, RESET_WORDS).then_some(Instruction::ReloadPage)
}

fn absolute_font_size(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    let size = [&*FONT_SIZE_PX, &*SET_FONT_SIZE_TO]
        .into_iter()
        .filter_map(|re| re.captures(text))
        .find_map(|caps| caps[1].parse::<u32>().ok())?;

    Some(Instruction::set_style(
        selectors::TEXT_ELEMENTS,
        StyleProperty::FontSize,
        format!("{}px", size),
    ))
}

fn font_step(ctx: &RuleContext<'_>) -> i32 {
    i32::try_from(ctx.config.font_step_px).unwrap_or(i32::MAX)
}

fn increase_font_size(text: &str, ctx: &RuleContext<'_>) -> Option<Instruction> {
    (contains_any(text, INCREASE_WORDS) && contains_any(text, SIZE_WORDS)).then(|| {
        Instruction::AdjustFontSize {
            selector: selectors::TEXT_ELEMENTS.to_string(),
            delta_px: font_step(ctx),
        }
    })
}

fn decrease_font_size(text: &str, ctx: &RuleContext<'_>) -> Option<Instruction> {
    (contains_any(text, DECREASE_WORDS) && contains_any(text, SIZE_WORDS)).then(|| {
        Instruction::AdjustFontSize {
            selector: selectors::TEXT_ELEMENTS.to_string(),
            delta_px: -font_step(ctx),
        }
    })
}

fn background_color(text: &str, ctx: &RuleContext<'_>) -> Option<Instruction> {
    if !contains_any(text, BACKGROUND_WORDS) {
        return None;
    }
    // No resolvable color falls through rather than producing a no-op.
    let color = ctx.colors.find_in(text)?;
    Some(Instruction::set_style(
        selectors::DOCUMENT_BACKGROUND,
        StyleProperty::BackgroundColor,
        color,
    ))
}

fn text_color(text: &str, ctx: &RuleContext<'_>) -> Option<Instruction> {
    if !contains_any(text, TEXT_COLOR_PHRASES) {
        return None;
    }
    let color = ctx.colors.find_in(text)?;
    Some(Instruction::set_style(
        selectors::DOCUMENT_TEXT,
        StyleProperty::Color,
        color,
    ))
}

fn hide_images(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    (contains_any(text, HIDE_WORDS) && contains_any(text, IMAGE_WORDS))
        .then(|| Instruction::set_style(selectors::IMAGES, StyleProperty::Display, "none"))
}

fn show_images(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    (contains_any(text, SHOW_WORDS) && contains_any(text, IMAGE_WORDS))
        .then(|| Instruction::set_style(selectors::IMAGES, StyleProperty::Display, "inline-block"))
}

fn line_height(text: &str, ctx: &RuleContext<'_>) -> Option<Instruction> {
    if !contains_any(text, LINE_HEIGHT_PHRASES) {
        return None;
    }

    let value = if contains_any(text, LINE_MORE_WORDS) {
        ctx.config.line_height_increase
    } else if contains_any(text, LINE_LESS_WORDS) {
        ctx.config.line_height_decrease
    } else {
        return None;
    };

    Some(Instruction::SetLineHeight {
        selector: selectors::LINE_HEIGHT_TARGETS.to_string(),
        value,
    })
}

fn high_contrast(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    contains_any(text, HIGH_CONTRAST_PHRASES).then_some(Instruction::HighContrast)
}

fn dark_mode(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    contains_any(text, DARK_PHRASES).then_some(Instruction::DarkMode)
}

fn light_mode(text: &str, _: &RuleContext<'_>) -> Option<Instruction> {
    contains_any(text, LIGHT_PHRASES).then_some(Instruction::LightMode)
}
