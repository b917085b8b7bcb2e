//! Per-element mutation batches.

use tracing::warn;

use pagetweak_protocols::{DocumentError, DocumentTree, ElementId};

/// Result of mutating a single element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementResult {
    /// The mutation was written.
    Applied,
    /// The element was left alone (e.g. unparsable computed value).
    Skipped,
    /// The element rejected the mutation.
    Failed(DocumentError),
}

/// Tally of a batch over a matched element set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub matched: usize,
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchReport {
    fn record(mut self, element: ElementId, result: ElementResult) -> Self {
        match result {
            ElementResult::Applied => self.applied += 1,
            ElementResult::Skipped => self.skipped += 1,
            ElementResult::Failed(err) => {
                warn!(%element, error = %err, "Element rejected style mutation");
                self.failed += 1;
            }
        }
        self
    }
}

/// Run `mutate` on every element, never stopping at a failure.
pub(crate) fn apply_each<F>(
    doc: &mut dyn DocumentTree,
    elements: &[ElementId],
    mut mutate: F,
) -> BatchReport
where
    F: FnMut(&mut dyn DocumentTree, ElementId) -> ElementResult,
{
    let initial = BatchReport {
        matched: elements.len(),
        ..Default::default()
    };

    elements
        .iter()
        .fold(initial, |report, &element| report.record(element, mutate(&mut *doc, element)))
}

/// Write one inline declaration.
pub(crate) fn write_style(
    doc: &mut dyn DocumentTree,
    element: ElementId,
    property: &str,
    value: &str,
) -> ElementResult {
    match doc.set_inline_style(element, property, value) {
        Ok(()) => ElementResult::Applied,
        Err(err) => ElementResult::Failed(err),
    }
}

/// Leading numeric prefix of a CSS value, the way `parseFloat` reads it.
pub(crate) fn parse_leading_number(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by digits.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
