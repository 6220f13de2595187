//! Threshold Editor State Machine
//!
//! Pure view-state for inline threshold editing, kept separate from the
//! Leptos component so the transitions are directly testable. The editor
//! toggles between a read-only display and an editable pair of inputs;
//! the server is the authority on what values are acceptable.

use crate::format::{opt_or_placeholder, PLACEHOLDER};
use crate::model::AttributeThreshold;

/// Input masking allows at most this many digits after the decimal point.
pub const MAX_DECIMAL_DIGITS: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing,
}

/// Outcome of a save gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveAction {
    /// Drafts match the displayed values; no network call is made.
    NoChange,
    /// Submit these raw draft strings to the update endpoint.
    Submit { low: String, high: String },
}

/// Viewing ⇄ Editing state for one attribute's threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdEditor {
    mode: EditorMode,
    displayed_low: String,
    displayed_high: String,
    draft_low: String,
    draft_high: String,
}

impl ThresholdEditor {
    /// Start in Viewing with the fetched threshold, or placeholders when no
    /// threshold is configured.
    pub fn new(threshold: Option<&AttributeThreshold>) -> Self {
        let (low, high) = match threshold {
            Some(t) => (
                opt_or_placeholder(&t.threshold_low_value),
                opt_or_placeholder(&t.threshold_high_value),
            ),
            None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
        };
        ThresholdEditor {
            mode: EditorMode::Viewing,
            displayed_low: low,
            displayed_high: high,
            draft_low: String::new(),
            draft_high: String::new(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn displayed_low(&self) -> &str {
        &self.displayed_low
    }

    pub fn displayed_high(&self) -> &str {
        &self.displayed_high
    }

    pub fn draft_low(&self) -> &str {
        &self.draft_low
    }

    pub fn draft_high(&self) -> &str {
        &self.draft_high
    }

    pub fn set_draft_low(&mut self, value: impl Into<String>) {
        self.draft_low = value.into();
    }

    pub fn set_draft_high(&mut self, value: impl Into<String>) {
        self.draft_high = value.into();
    }

    fn displayed_as_draft(displayed: &str) -> String {
        if displayed == PLACEHOLDER {
            String::new()
        } else {
            displayed.to_string()
        }
    }

    /// Viewing → Editing: populate the inputs from the displayed values.
    pub fn begin_edit(&mut self) {
        self.draft_low = Self::displayed_as_draft(&self.displayed_low);
        self.draft_high = Self::displayed_as_draft(&self.displayed_high);
        self.mode = EditorMode::Editing;
    }

    /// Editing → Viewing, drafts discarded. The caller clears any banners.
    pub fn cancel(&mut self) {
        self.draft_low.clear();
        self.draft_high.clear();
        self.mode = EditorMode::Viewing;
    }

    /// Save gesture. Unchanged drafts return straight to Viewing without a
    /// network call; changed drafts stay in Editing until the server answers
    /// ([`apply_update`](Self::apply_update) on success, nothing on failure —
    /// the clinician's edits survive a failed save).
    pub fn submit(&mut self) -> SaveAction {
        let unchanged = self.draft_low == Self::displayed_as_draft(&self.displayed_low)
            && self.draft_high == Self::displayed_as_draft(&self.displayed_high);
        if unchanged {
            self.cancel();
            SaveAction::NoChange
        } else {
            SaveAction::Submit {
                low: self.draft_low.clone(),
                high: self.draft_high.clone(),
            }
        }
    }

    /// Server accepted the update: both the displayed and draft values now
    /// reflect the response, and the editor returns to Viewing.
    pub fn apply_update(&mut self, threshold: &AttributeThreshold) {
        self.displayed_low = opt_or_placeholder(&threshold.threshold_low_value);
        self.displayed_high = opt_or_placeholder(&threshold.threshold_high_value);
        self.cancel();
    }
}

/// Cosmetic keystroke masking for the threshold inputs: digits, one decimal
/// point, and a bounded number of post-decimal digits, assuming insertion at
/// the end of `current`. Not validation; the server decides valid ranges.
pub fn accept_keystroke(current: &str, ch: char) -> bool {
    if ch == '.' {
        return !current.contains('.');
    }
    if !ch.is_ascii_digit() {
        return false;
    }
    match current.find('.') {
        Some(dot) => current.len() - dot - 1 < MAX_DECIMAL_DIGITS,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(low: Option<f64>, high: Option<f64>) -> AttributeThreshold {
        AttributeThreshold {
            threshold_low_value: low,
            threshold_high_value: high,
        }
    }

    #[test]
    fn test_starts_viewing_with_placeholder_when_unconfigured() {
        let editor = ThresholdEditor::new(None);
        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert_eq!(editor.displayed_low(), PLACEHOLDER);
        assert_eq!(editor.displayed_high(), PLACEHOLDER);
    }

    #[test]
    fn test_begin_edit_copies_displayed_values() {
        let mut editor = ThresholdEditor::new(Some(&threshold(Some(60.0), Some(90.0))));
        editor.begin_edit();
        assert_eq!(editor.mode(), EditorMode::Editing);
        assert_eq!(editor.draft_low(), "60");
        assert_eq!(editor.draft_high(), "90");
    }

    #[test]
    fn test_begin_edit_maps_placeholder_to_empty_draft() {
        let mut editor = ThresholdEditor::new(Some(&threshold(None, Some(90.0))));
        editor.begin_edit();
        assert_eq!(editor.draft_low(), "");
        assert_eq!(editor.draft_high(), "90");
    }

    #[test]
    fn test_unchanged_submit_is_a_no_op() {
        let mut editor = ThresholdEditor::new(Some(&threshold(Some(60.0), Some(90.0))));
        editor.begin_edit();
        assert_eq!(editor.submit(), SaveAction::NoChange);
        assert_eq!(editor.mode(), EditorMode::Viewing);
    }

    #[test]
    fn test_changed_submit_issues_one_request() {
        let mut editor = ThresholdEditor::new(Some(&threshold(Some(60.0), Some(90.0))));
        editor.begin_edit();
        editor.set_draft_high("95.5");
        assert_eq!(
            editor.submit(),
            SaveAction::Submit {
                low: "60".to_string(),
                high: "95.5".to_string(),
            }
        );
        // Remains editable until the server answers.
        assert_eq!(editor.mode(), EditorMode::Editing);
    }

    #[test]
    fn test_apply_update_syncs_displayed_and_returns_to_viewing() {
        let mut editor = ThresholdEditor::new(Some(&threshold(Some(60.0), Some(90.0))));
        editor.begin_edit();
        editor.set_draft_high("95.5");
        let _ = editor.submit();

        editor.apply_update(&threshold(Some(60.0), Some(95.5)));
        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert_eq!(editor.displayed_high(), "95.5");

        // The next edit starts from the server's values.
        editor.begin_edit();
        assert_eq!(editor.draft_high(), "95.5");
    }

    #[test]
    fn test_cancel_discards_drafts() {
        let mut editor = ThresholdEditor::new(Some(&threshold(Some(60.0), Some(90.0))));
        editor.begin_edit();
        editor.set_draft_low("10");
        editor.cancel();
        assert_eq!(editor.mode(), EditorMode::Viewing);
        assert_eq!(editor.displayed_low(), "60");

        editor.begin_edit();
        assert_eq!(editor.draft_low(), "60");
    }

    #[test]
    fn test_keystroke_masking() {
        assert!(accept_keystroke("", '5'));
        assert!(accept_keystroke("12", '3'));
        assert!(accept_keystroke("12", '.'));
        assert!(!accept_keystroke("1.", '.'));
        assert!(!accept_keystroke("12", 'a'));
        assert!(!accept_keystroke("12", '-'));
        // One digit after the decimal point, no more.
        assert!(accept_keystroke("12.", '5'));
        assert!(!accept_keystroke("12.5", '7'));
    }
}
