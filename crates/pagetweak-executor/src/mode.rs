//! Display mode state and the transition between modes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pagetweak_config::ExecutorConfig;
use pagetweak_protocols::{DocumentTree, ExecutionError, StyleBlock, StyleProperty};

use crate::batch::{apply_each, write_style, BatchReport, ElementResult};
use crate::stylesheets::{DARK_MODE_CSS, HIGH_CONTRAST_CSS, LIGHT_TEXT, WHITE_BACKGROUND};

/// Which global mode override is active.
///
/// At most one mode style block exists in a document at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// No override block.
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl DisplayMode {
    /// Read the active mode from the style blocks present in `doc`.
    ///
    /// High contrast wins if a document somehow carries both blocks.
    pub fn detect(doc: &dyn DocumentTree, config: &ExecutorConfig) -> Self {
        if doc.style_block(&config.high_contrast_block_id()).is_some() {
            Self::HighContrast
        } else if doc.style_block(&config.dark_mode_block_id()).is_some() {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Message reported once the mode is applied.
    pub(crate) fn applied_message(&self) -> &'static str {
        match self {
            Self::Light => "Light mode applied",
            Self::Dark => "Dark mode applied",
            Self::HighContrast => "High contrast mode applied",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
            Self::HighContrast => f.write_str("high contrast"),
        }
    }
}

/// Move `doc` into `target`.
///
/// Both mode blocks are removed first, whatever the current mode is, so a
/// re-apply replaces its block and the two modes never stack. The target
/// block is inserted even when the body rejects its inline writes. Returns
/// the number of elements given inline styles.
pub(crate) fn transition(
    doc: &mut dyn DocumentTree,
    config: &ExecutorConfig,
    from: DisplayMode,
    target: DisplayMode,
) -> Result<usize, ExecutionError> {
    let body = doc.body()?;

    let high_contrast_id = config.high_contrast_block_id();
    let dark_id = config.dark_mode_block_id();
    let removed_high_contrast = doc.remove_style_block(&high_contrast_id);
    let removed_dark = doc.remove_style_block(&dark_id);
    debug!(
        %from,
        %target,
        removed_high_contrast,
        removed_dark,
        "Switching display mode"
    );

    let background = StyleProperty::BackgroundColor.css_name();
    let text = StyleProperty::Color.css_name();
    let report = match target {
        DisplayMode::HighContrast => {
            let report = apply_each(doc, &[body], |doc, element| {
                write_style(doc, element, background, WHITE_BACKGROUND)
            });
            doc.insert_style_block(StyleBlock::new(high_contrast_id, HIGH_CONTRAST_CSS));
            report
        }
        DisplayMode::Dark => {
            doc.insert_style_block(StyleBlock::new(dark_id, DARK_MODE_CSS));
            BatchReport::default()
        }
        DisplayMode::Light => apply_each(doc, &[body], |doc, element| {
            let wrote_background = write_style(doc, element, background, WHITE_BACKGROUND);
            let wrote_text = write_style(doc, element, text, LIGHT_TEXT);
            match (wrote_background, wrote_text) {
                (ElementResult::Failed(err), ElementResult::Failed(_)) => {
                    ElementResult::Failed(err)
                }
                (ElementResult::Failed(err), _) | (_, ElementResult::Failed(err)) => {
                    warn!(%element, error = %err, "Body kept part of the light mode styles");
                    ElementResult::Applied
                }
                _ => ElementResult::Applied,
            }
        }),
    };
    Ok(report.applied)
}
