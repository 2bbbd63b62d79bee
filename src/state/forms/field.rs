//! Form field value objects

use crate::state::Subject;

/// Identifies one input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Subject,
    Message,
    Terms,
}

impl FieldId {
    /// Fields in focus order
    pub const ALL: [FieldId; 6] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Subject,
        FieldId::Message,
        FieldId::Terms,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::Terms => "terms_accepted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number (Optional)",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Terms => "I agree to the Terms & Conditions and Privacy Policy",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::FullName => Some("👤"),
            Self::Email => Some("✉"),
            Self::Phone => Some("☎"),
            Self::Message => Some("✎"),
            Self::Subject | Self::Terms => None,
        }
    }

    /// Position in focus order
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Subject => 3,
            Self::Message => 4,
            Self::Terms => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Subject>),
    Toggle(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form input with its configuration and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new single-line or multiline text field
    pub fn text(id: FieldId, is_multiline: bool) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new select field with nothing chosen
    pub fn choice(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Choice(None),
            is_multiline: false,
        }
    }

    /// Create a new checkbox field, unchecked
    pub fn toggle(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Toggle(false),
            is_multiline: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Get the text value (empty for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) | FieldValue::Toggle(_) => "",
        }
    }

    /// Get the chosen subject (None for non-choice fields)
    pub fn as_choice(&self) -> Option<Subject> {
        match &self.value {
            FieldValue::Choice(choice) => *choice,
            FieldValue::Text(_) | FieldValue::Toggle(_) => None,
        }
    }

    /// Get the checkbox state (false for non-toggle fields)
    pub fn as_toggle(&self) -> bool {
        match &self.value {
            FieldValue::Toggle(checked) => *checked,
            FieldValue::Text(_) | FieldValue::Choice(_) => false,
        }
    }

    /// Whether the field holds something the user entered
    pub fn has_value(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Choice(choice) => choice.is_some(),
            FieldValue::Toggle(checked) => *checked,
        }
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(_) | FieldValue::Toggle(_) => {
                // Select and checkbox have no characters to delete
            }
        }
    }

    /// Reset the field to its empty state
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(choice) => *choice = None,
            FieldValue::Toggle(checked) => *checked = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(subject)) => subject.label().to_string(),
            FieldValue::Choice(None) => String::new(),
            FieldValue::Toggle(true) => "[x]".to_string(),
            FieldValue::Toggle(false) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_through_all() {
        for (i, id) in FieldId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(FieldId::from_index(i), Some(*id));
        }
        assert_eq!(FieldId::from_index(6), None);
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = FormField::text(FieldId::FullName, false);
        field.push_char('A');
        field.push_char('l');
        assert_eq!(field.as_text(), "Al");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
        assert!(field.has_value());
    }

    #[test]
    fn test_push_char_ignored_on_choice() {
        let mut field = FormField::choice(FieldId::Subject);
        field.push_char('x');
        assert!(field.as_choice().is_none());
        assert!(!field.has_value());
    }

    #[test]
    fn test_clear_resets_each_kind() {
        let mut text = FormField::text(FieldId::Message, true);
        text.push_char('h');
        text.clear();
        assert_eq!(text.as_text(), "");

        let mut choice = FormField::choice(FieldId::Subject);
        choice.value = FieldValue::Choice(Some(Subject::Sales));
        choice.clear();
        assert!(choice.as_choice().is_none());

        let mut toggle = FormField::toggle(FieldId::Terms);
        toggle.value = FieldValue::Toggle(true);
        toggle.clear();
        assert!(!toggle.as_toggle());
    }

    #[test]
    fn test_display_value() {
        let mut choice = FormField::choice(FieldId::Subject);
        assert_eq!(choice.display_value(), "");
        choice.value = FieldValue::Choice(Some(Subject::Support));
        assert_eq!(choice.display_value(), "Support");

        let toggle = FormField::toggle(FieldId::Terms);
        assert_eq!(toggle.display_value(), "[ ]");
    }

    #[test]
    fn test_icons_only_on_text_inputs() {
        assert!(FieldId::Email.icon().is_some());
        assert!(FieldId::Subject.icon().is_none());
        assert!(FieldId::Terms.icon().is_none());
    }
}
