//! Instruction execution.

use tracing::{debug, warn};

use pagetweak_config::ExecutorConfig;
use pagetweak_protocols::{
    DocumentTree, ElementId, ExecutionError, Instruction, Outcome, StyleProperty,
};

use crate::batch::{apply_each, parse_leading_number, write_style, BatchReport, ElementResult};
use crate::mode::{transition, DisplayMode};

/// Applies instructions to a document.
///
/// Holds the display mode of the document it runs against; use one executor
/// per document session.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: ExecutorConfig,
    mode: DisplayMode,
}

impl Executor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            config,
            mode: DisplayMode::Light,
        }
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// The display mode last applied.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Re-read the display mode from the blocks present in `doc`.
    pub fn sync_mode(&mut self, doc: &dyn DocumentTree) -> DisplayMode {
        self.mode = DisplayMode::detect(doc, &self.config);
        self.mode
    }

    /// Execute `instruction`, reporting any error as a failed outcome.
    pub fn execute(&mut self, instruction: &Instruction, doc: &mut dyn DocumentTree) -> Outcome {
        match self.try_execute(instruction, doc) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(action = instruction.action(), error = %err, "Instruction failed");
                Outcome::failure(failure_reason(instruction, &err))
            }
        }
    }

    /// Execute `instruction`.
    pub fn try_execute(
        &mut self,
        instruction: &Instruction,
        doc: &mut dyn DocumentTree,
    ) -> Result<Outcome, ExecutionError> {
        debug!(%instruction, "Executing instruction");

        match instruction {
            Instruction::SetStyle {
                selector,
                property,
                value,
            } => {
                let report = set_style(doc, selector, *property, value)?;
                Ok(Outcome::success(
                    report.applied,
                    format!("Applied style to {} elements", report.applied),
                ))
            }
            Instruction::AdjustFontSize { selector, delta_px } => {
                let report = self.adjust_font_size(doc, selector, *delta_px)?;
                Ok(Outcome::success(
                    report.applied,
                    format!("Modified font size for {} elements", report.applied),
                ))
            }
            Instruction::SetLineHeight { selector, value } => {
                let report =
                    set_style(doc, selector, StyleProperty::LineHeight, &value.to_string())?;
                Ok(Outcome::success(
                    report.applied,
                    format!("Applied style to {} elements", report.applied),
                ))
            }
            Instruction::HighContrast => self.switch_mode(doc, DisplayMode::HighContrast),
            Instruction::DarkMode => self.switch_mode(doc, DisplayMode::Dark),
            Instruction::LightMode => self.switch_mode(doc, DisplayMode::Light),
            Instruction::ReloadPage => {
                // Triggering the reload is the action; what the page does next is not ours.
                if let Err(err) = doc.reload() {
                    warn!(error = %err, "Page reload reported an error");
                }
                self.mode = DisplayMode::Light;
                Ok(Outcome::success(0, "Page reloaded"))
            }
            Instruction::NoMatch => Err(ExecutionError::NotExecutable(
                instruction.action().to_string(),
            )),
        }
    }

    fn adjust_font_size(
        &self,
        doc: &mut dyn DocumentTree,
        selector: &str,
        delta_px: i32,
    ) -> Result<BatchReport, ExecutionError> {
        let elements = doc.query_selector_all(selector)?;
        debug!(selector, matched = elements.len(), "Resolved font size targets");
        if elements.is_empty() {
            return Err(ExecutionError::ZeroElementsForSizeAdjustment {
                selector: selector.to_string(),
            });
        }

        let floor = self.config.min_font_size_px;
        let report = apply_each(doc, &elements, |doc, element| {
            adjust_element_font_size(doc, element, f64::from(delta_px), floor)
        });
        debug!(?report, "Font size batch finished");
        Ok(report)
    }

    fn switch_mode(
        &mut self,
        doc: &mut dyn DocumentTree,
        target: DisplayMode,
    ) -> Result<Outcome, ExecutionError> {
        match transition(doc, &self.config, self.mode, target) {
            Ok(affected) => {
                self.mode = target;
                Ok(Outcome::success(affected, target.applied_message()))
            }
            Err(err) => {
                // The transition may have stopped halfway.
                self.sync_mode(doc);
                Err(err)
            }
        }
    }
}

fn set_style(
    doc: &mut dyn DocumentTree,
    selector: &str,
    property: StyleProperty,
    value: &str,
) -> Result<BatchReport, ExecutionError> {
    let elements = doc.query_selector_all(selector)?;
    debug!(selector, matched = elements.len(), "Resolved style targets");
    if elements.is_empty() {
        // Not an error: plenty of pages have no images.
        warn!(selector, "No elements found for selector");
    }

    let css_name = property.css_name();
    let report = apply_each(doc, &elements, |doc, element| {
        write_style(doc, element, css_name, value)
    });
    debug!(?report, "Style batch finished");
    Ok(report)
}

fn adjust_element_font_size(
    doc: &mut dyn DocumentTree,
    element: ElementId,
    delta_px: f64,
    floor_px: f64,
) -> ElementResult {
    let css_name = StyleProperty::FontSize.css_name();
    let computed = match doc.computed_style(element, css_name) {
        Ok(value) => value,
        Err(err) => return ElementResult::Failed(err),
    };

    let Some(current) = computed.as_deref().and_then(parse_leading_number) else {
        return ElementResult::Skipped;
    };

    let size = (current + delta_px).max(floor_px);
    write_style(doc, element, css_name, &format!("{}px", size))
}

fn failure_reason(instruction: &Instruction, err: &ExecutionError) -> String {
    let task = match instruction {
        Instruction::SetStyle { .. } | Instruction::SetLineHeight { .. } => "apply style",
        Instruction::AdjustFontSize { .. } => "modify font size",
        Instruction::HighContrast => "apply high contrast mode",
        Instruction::DarkMode => "apply dark mode",
        Instruction::LightMode => "apply light mode",
        Instruction::ReloadPage => "reload page",
        Instruction::NoMatch => return err.to_string(),
    };

    match err {
        ExecutionError::ZeroElementsForSizeAdjustment { .. } => err.to_string(),
        _ => format!("Failed to {}: {}", task, err),
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
