//! Submitted contact data

/// Subject options offered by the select field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Support,
    Sales,
    Feedback,
    Other,
}

impl Subject {
    /// All subjects in display order
    pub const ALL: [Subject; 4] = [
        Subject::Support,
        Subject::Sales,
        Subject::Feedback,
        Subject::Other,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Support => Self::Sales,
            Self::Sales => Self::Feedback,
            Self::Feedback => Self::Other,
            Self::Other => Self::Support,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Support => Self::Other,
            Self::Sales => Self::Support,
            Self::Feedback => Self::Sales,
            Self::Other => Self::Feedback,
        }
    }

    /// Value as stored in the submission (lowercase)
    pub fn value(&self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Sales => "sales",
            Self::Feedback => "feedback",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Support => "Support",
            Self::Sales => "Sales",
            Self::Feedback => "Feedback",
            Self::Other => "Other",
        }
    }
}

/// Validated, immutable record of one contact form submission.
///
/// Only the form controller creates these, and only after every
/// validator has passed and the terms were accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    full_name: String,
    email: String,
    phone: String,
    subject: Subject,
    message: String,
    terms_accepted: bool,
}

impl Submission {
    pub(crate) fn new(
        full_name: String,
        email: String,
        phone: String,
        subject: Subject,
        message: String,
    ) -> Self {
        Self {
            full_name,
            email,
            phone,
            subject,
            message,
            terms_accepted: true,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Phone number, `None` when the optional field was left empty
    pub fn phone(&self) -> Option<&str> {
        if self.phone.is_empty() {
            None
        } else {
            Some(&self.phone)
        }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// First word of the full name, used for the greeting
    pub fn first_name(&self) -> &str {
        self.full_name.split(' ').next().unwrap_or(&self.full_name)
    }

    /// Labeled summary rows in display order
    pub fn summary_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("Name", self.full_name()), ("Email", self.email())];
        if let Some(phone) = self.phone() {
            fields.push(("Phone", phone));
        }
        fields.push(("Subject", self.subject.label()));
        fields.push(("Message", self.message()));
        fields
    }

    /// Plain-text summary, one `Label: value` row per field
    pub fn summary_text(&self) -> String {
        self.summary_fields()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
pub fn sample_submission() -> Submission {
    Submission::new(
        "Ada Lovelace".to_string(),
        "ada@example.com".to_string(),
        "+44 (0) 20-7946".to_string(),
        Subject::Feedback,
        "The analytical engine weaves algebraic patterns.".to_string(),
    )
}
