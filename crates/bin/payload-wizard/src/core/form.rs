//! Sub-form draft state
//!
//! A [`Form`] owns its fields and its focus index. Nothing here outlives the
//! screen that created it.

/// Single-line text input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub char_limit: usize,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            char_limit,
        }
    }

    /// Append a character; input past the limit is dropped
    pub fn push(&mut self, c: char) {
        if self.value.chars().count() < self.char_limit {
            self.value.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

/// Ordered fields with a focus cursor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    fields: Vec<TextField>,
    focus: usize,
    /// Cursor blink phase of the focused field
    pub cursor_visible: bool,
}

impl Form {
    pub fn new(fields: Vec<TextField>) -> Self {
        Self {
            fields,
            focus: 0,
            cursor_visible: true,
        }
    }

    pub fn fields(&self) -> &[TextField] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        if self.focus + 1 < self.fields.len() {
            self.focus += 1;
        }
        self.cursor_visible = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
        self.cursor_visible = true;
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.push(c);
        }
        self.cursor_visible = true;
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.pop();
        }
        self.cursor_visible = true;
    }

    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Trimmed value of field `index`, empty if out of range
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(TextField::trimmed).unwrap_or("")
    }

    /// Replace the value of field `index`, bypassing the char limit
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }
}
