//! Editable state of the filter prompt.
//!
//! The prompt walks the five filter fields in toolbar order. Text fields
//! collect typed characters; the status field cycles through its translated
//! options. Submitting produces an [`AppliedFilter`].

use crate::explorer::{AppliedFilter, FilterField, FilterKind};

/// In-progress filter entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPrompt {
    field: FilterField,
    input: String,
    options: Vec<String>,
    option_index: usize,
}

impl FilterPrompt {
    /// Opens a prompt on the first filter field.
    ///
    /// `options` are the labels offered by the select field.
    #[must_use]
    pub const fn new(options: Vec<String>) -> Self {
        Self {
            field: FilterField::Description,
            input: String::new(),
            options,
            option_index: 0,
        }
    }

    /// Field the prompt currently targets.
    #[must_use]
    pub const fn field(&self) -> FilterField {
        self.field
    }

    /// Text typed so far.
    #[must_use]
    pub const fn input(&self) -> &str {
        self.input.as_str()
    }

    /// Moves to the next field and discards the typed text.
    pub fn next_field(&mut self) {
        self.field = self.field.next();
        self.input.clear();
        self.option_index = 0;
    }

    /// Appends a character to a text field. Ignored on select fields.
    pub fn push_char(&mut self, character: char) {
        if self.field.kind() == FilterKind::Text {
            self.input.push(character);
        }
    }

    /// Removes the last typed character, if any.
    pub fn backspace(&mut self) {
        let _ = self.input.pop();
    }

    /// Advances a select field to its next option, wrapping around.
    pub fn next_value(&mut self) {
        if self.field.kind() != FilterKind::Select {
            return;
        }
        let next = self.option_index.saturating_add(1);
        self.option_index = if next < self.options.len() { next } else { 0 };
    }

    /// Current value: the trimmed text, or the highlighted option.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self.field.kind() {
            FilterKind::Text => Some(self.input.trim()).filter(|text| !text.is_empty()),
            FilterKind::Select => self.options.get(self.option_index).map(String::as_str),
        }
    }

    /// Builds the filter to apply, or `None` when the value is empty.
    #[must_use]
    pub fn to_filter(&self) -> Option<AppliedFilter> {
        self.value()
            .map(|value| AppliedFilter::new(self.field, value))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn prompt() -> FilterPrompt {
        FilterPrompt::new(vec![
            "Pending".to_owned(),
            "Denied".to_owned(),
            "Approved".to_owned(),
        ])
    }

    fn move_to(prompt: &mut FilterPrompt, field: FilterField) {
        while prompt.field() != field {
            prompt.next_field();
        }
    }

    #[rstest]
    fn typed_text_becomes_a_filter(mut prompt: FilterPrompt) {
        for character in " bob ".chars() {
            prompt.push_char(character);
        }
        prompt.backspace();

        assert_eq!(
            prompt.to_filter(),
            Some(AppliedFilter::new(FilterField::Description, "bob"))
        );
    }

    #[rstest]
    fn blank_text_yields_no_filter(mut prompt: FilterPrompt) {
        prompt.push_char(' ');
        assert_eq!(prompt.to_filter(), None);
    }

    #[rstest]
    fn changing_field_discards_text(mut prompt: FilterPrompt) {
        prompt.push_char('x');
        prompt.next_field();

        assert_eq!(prompt.field(), FilterField::RequestId);
        assert_eq!(prompt.input(), "");
    }

    #[rstest]
    fn select_field_cycles_options_and_ignores_typing(mut prompt: FilterPrompt) {
        move_to(&mut prompt, FilterField::ApprovalState);
        prompt.push_char('z');
        assert_eq!(prompt.value(), Some("Pending"));

        prompt.next_value();
        assert_eq!(prompt.value(), Some("Denied"));

        prompt.next_value();
        prompt.next_value();
        assert_eq!(
            prompt.to_filter(),
            Some(AppliedFilter::new(FilterField::ApprovalState, "Pending"))
        );
    }
}
