//! Classifier entry points.

use std::sync::LazyLock;

use tracing::debug;

use pagetweak_config::ClassifierConfig;
use pagetweak_protocols::Instruction;

use crate::colors::ColorTable;
use crate::rules::{RuleContext, RULES};

static DEFAULT_CLASSIFIER: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// Classify `text` with the default configuration and color table.
pub fn classify(text: &str) -> Instruction {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Rule-based command classifier.
///
/// Pure: no state changes between calls, never fails. Unrecognized input
/// yields [`Instruction::NoMatch`].
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
    colors: ColorTable,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            colors: ColorTable::standard(),
        }
    }

    /// Replace the color table.
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = colors;
        self
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names() -> impl Iterator<Item = &'static str> {
        RULES.iter().map(|rule| rule.name)
    }

    /// Map a command onto an instruction. Matching is case-insensitive.
    pub fn classify(&self, text: &str) -> Instruction {
        let text = text.to_lowercase();
        let ctx = RuleContext {
            config: &self.config,
            colors: &self.colors,
        };

        for rule in RULES {
            if let Some(instruction) = (rule.apply)(&text, &ctx) {
                debug!(rule = rule.name, %instruction, "Command classified");
                return instruction;
            }
        }

        debug!(command = %text, "Command not recognized");
        Instruction::NoMatch
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
