use super::*;

use pagetweak_protocols::{selectors, StyleProperty};

fn set_style(selector: &str, property: StyleProperty, value: &str) -> Instruction {
    Instruction::set_style(selector, property, value)
}

fn adjust(delta_px: i32) -> Instruction {
    Instruction::AdjustFontSize {
        selector: selectors::TEXT_ELEMENTS.to_string(),
        delta_px,
    }
}

fn line_height(value: f64) -> Instruction {
    Instruction::SetLineHeight {
        selector: selectors::LINE_HEIGHT_TARGETS.to_string(),
        value,
    }
}

#[test]
fn test_reload_vocabulary_wins_over_everything() {
    for text in [
        "please RESET the page",
        "Reload",
        "refresh now",
        "restore defaults",
        "revert changes",
        "clear everything",
        "increase font size then reset",
        "dark mode and refresh",
        "set background to blue and restore",
    ] {
        assert_eq!(classify(text), Instruction::ReloadPage, "input: {text}");
    }
}

#[test]
fn test_absolute_font_size_px() {
    assert_eq!(
        classify("font size 42px"),
        set_style(selectors::TEXT_ELEMENTS, StyleProperty::FontSize, "42px")
    );
    assert_eq!(
        classify("Font Size 14 PX"),
        set_style(selectors::TEXT_ELEMENTS, StyleProperty::FontSize, "14px")
    );
}

#[test]
fn test_set_font_size_to() {
    assert_eq!(
        classify("Set font size to 18"),
        set_style(selectors::TEXT_ELEMENTS, StyleProperty::FontSize, "18px")
    );
    assert_eq!(
        classify("set font size to 20px"),
        set_style(selectors::TEXT_ELEMENTS, StyleProperty::FontSize, "20px")
    );
}

#[test]
fn test_absolute_font_size_non_numeric_falls_through() {
    // No numeric capture: the relative rule gets its turn.
    assert_eq!(classify("font size bigger please"), adjust(2));
}

#[test]
fn test_absolute_font_size_rejects_signed_and_overflowing_values() {
    assert_eq!(classify("font size -5px"), Instruction::NoMatch);
    assert_eq!(classify("font size 99999999999px"), Instruction::NoMatch);
}

#[test]
fn test_relative_font_size() {
    assert_eq!(classify("increase font size"), adjust(2));
    assert_eq!(classify("decrease text size"), adjust(-2));
    assert_eq!(classify("make text bigger"), adjust(2));
    assert_eq!(classify("enlarge the font"), adjust(2));
    assert_eq!(classify("shrink the font"), adjust(-2));
    assert_eq!(classify("smaller text please"), adjust(-2));
}

#[test]
fn test_increase_without_size_vocabulary_is_not_font_size() {
    assert_eq!(classify("increase contrast"), Instruction::HighContrast);
}

#[test]
fn test_background_for_every_color() {
    let classifier = Classifier::default();
    for (phrase, value) in classifier.colors().iter() {
        let text = format!("set background to {phrase}");
        assert_eq!(
            classifier.classify(&text),
            set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, value),
            "input: {text}"
        );
    }
}

#[test]
fn test_light_blue_never_falls_back_to_blue() {
    assert_eq!(
        classify("change background to light blue"),
        set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, "lightblue")
    );
    assert_eq!(
        classify("Make the BG Light Blue"),
        set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, "lightblue")
    );
}

#[test]
fn test_background_synonyms() {
    assert_eq!(
        classify("bg grey"),
        set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, "gray")
    );
    assert_eq!(
        classify("background cream"),
        set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, "cornsilk")
    );
}

#[test]
fn test_background_without_color_is_no_match() {
    assert_eq!(classify("make the background very cool"), Instruction::NoMatch);
    assert_eq!(classify("change background"), Instruction::NoMatch);
}

#[test]
fn test_text_color() {
    assert_eq!(
        classify("change text color to dark gray"),
        set_style(selectors::DOCUMENT_TEXT, StyleProperty::Color, "darkgray")
    );
    assert_eq!(
        classify("font color maroon"),
        set_style(selectors::DOCUMENT_TEXT, StyleProperty::Color, "maroon")
    );
    assert_eq!(
        classify("color text navy"),
        set_style(selectors::DOCUMENT_TEXT, StyleProperty::Color, "navy")
    );
}

#[test]
fn test_text_color_without_color_is_no_match() {
    assert_eq!(classify("change text color"), Instruction::NoMatch);
}

#[test]
fn test_hide_images() {
    let hidden = set_style(selectors::IMAGES, StyleProperty::Display, "none");
    assert_eq!(classify("hide images"), hidden);
    assert_eq!(classify("remove all pictures"), hidden);
    assert_eq!(classify("disable photos"), hidden);
    assert_eq!(classify("hide img"), hidden);
}

#[test]
fn test_show_images() {
    let shown = set_style(selectors::IMAGES, StyleProperty::Display, "inline-block");
    assert_eq!(classify("show images"), shown);
    assert_eq!(classify("display the pictures again"), shown);
    assert_eq!(classify("enable photos"), shown);
}

#[test]
fn test_unhide_is_caught_by_hide() {
    // "unhide" contains "hide" and the hide rule runs first.
    let hidden = set_style(selectors::IMAGES, StyleProperty::Display, "none");
    assert_eq!(classify("unhide images"), hidden);
}

#[test]
fn test_line_height() {
    assert_eq!(classify("increase line height"), line_height(1.5));
    assert_eq!(classify("more spacing between lines"), line_height(1.5));
    assert_eq!(classify("decrease line spacing"), line_height(1.2));
    assert_eq!(classify("reduce line height"), line_height(1.2));
    assert_eq!(classify("less line spacing"), line_height(1.2));
}

#[test]
fn test_line_height_without_direction_falls_through() {
    assert_eq!(classify("line height"), Instruction::NoMatch);
}

#[test]
fn test_modes() {
    assert_eq!(classify("high contrast"), Instruction::HighContrast);
    assert_eq!(classify("enable contrast mode"), Instruction::HighContrast);
    assert_eq!(classify("switch to dark mode"), Instruction::DarkMode);
    assert_eq!(classify("night mode please"), Instruction::DarkMode);
    assert_eq!(classify("dark theme"), Instruction::DarkMode);
    assert_eq!(classify("light mode"), Instruction::LightMode);
    assert_eq!(classify("day mode"), Instruction::LightMode);
    assert_eq!(classify("Light Theme"), Instruction::LightMode);
}

#[test]
fn test_earlier_rules_take_priority() {
    assert_eq!(
        classify("dark mode background black"),
        set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, "black")
    );
    assert_eq!(classify("bigger text in dark mode"), adjust(2));
}

#[test]
fn test_no_match() {
    assert_eq!(classify("make it pretty"), Instruction::NoMatch);
    assert_eq!(classify("变大 🎉"), Instruction::NoMatch);
}

#[test]
fn test_configured_font_step() {
    let classifier = Classifier::new(ClassifierConfig {
        font_step_px: 4,
        ..Default::default()
    });
    assert_eq!(classifier.classify("increase font size"), adjust(4));
    assert_eq!(classifier.classify("decrease font size"), adjust(-4));
}

#[test]
fn test_configured_line_heights() {
    let classifier = Classifier::new(ClassifierConfig {
        line_height_increase: 2.0,
        line_height_decrease: 1.0,
        ..Default::default()
    });
    assert_eq!(classifier.classify("increase line height"), line_height(2.0));
    assert_eq!(classifier.classify("decrease line height"), line_height(1.0));
}

#[test]
fn test_custom_color_table() {
    let classifier = Classifier::default().with_colors(ColorTable::new([("rebecca", "rebeccapurple")]));
    assert_eq!(
        classifier.classify("background rebecca"),
        set_style(selectors::DOCUMENT_BACKGROUND, StyleProperty::BackgroundColor, "rebeccapurple")
    );
    assert_eq!(classifier.classify("background blue"), Instruction::NoMatch);
}

#[test]
fn test_rule_order() {
    let names: Vec<&str> = Classifier::rule_names().collect();
    assert_eq!(names.len(), 12);
    assert_eq!(names.first(), Some(&"reload"));
    assert_eq!(names.get(1), Some(&"absolute-font-size"));
    assert_eq!(names.last(), Some(&"light-mode"));
}
