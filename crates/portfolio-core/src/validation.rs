//! Contact form validation.
//!
//! [`validate`] is pure and total. An empty [`ValidationResult`] means the
//! form may be dispatched; anything else must stop the submission.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum trimmed length of the name field
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length of the message field
pub const MESSAGE_MIN_CHARS: usize = 10;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Trim surrounding whitespace, counting a byte order mark as whitespace
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Loose email shape check: `local@domain.tld` without whitespace
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    NameRequired,
    NameTooShort,
    EmailRequired,
    EmailInvalid,
    MessageRequired,
    MessageTooShort,
}

impl ValidationError {
    /// Stable reason code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "nameRequired",
            ValidationError::NameTooShort => "nameTooShort",
            ValidationError::EmailRequired => "emailRequired",
            ValidationError::EmailInvalid => "emailInvalid",
            ValidationError::MessageRequired => "messageRequired",
            ValidationError::MessageTooShort => "messageTooShort",
        }
    }

    /// Localization key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "validation.nameRequired",
            ValidationError::NameTooShort => "validation.nameTooShort",
            ValidationError::EmailRequired => "validation.emailRequired",
            ValidationError::EmailInvalid => "validation.emailInvalid",
            ValidationError::MessageRequired => "validation.messageRequired",
            ValidationError::MessageTooShort => "validation.messageTooShort",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-field failures. No entry for a field means it is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: BTreeMap<FormField, ValidationError>,
}

impl ValidationResult {
    /// Whether every field passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure for `field`, if any
    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, ValidationError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Drop the failure for `field`, typically once the user edits it
    pub fn clear(&mut self, field: FormField) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    fn insert(&mut self, field: FormField, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

impl FromIterator<(FormField, ValidationError)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (FormField, ValidationError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Raw contact form input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn normalized(&self) -> Self {
        Self {
            name: trim_input(&self.name).to_string(),
            email: trim_input(&self.email).to_string(),
            message: trim_input(&self.message).to_string(),
        }
    }

    /// Current value of `field`
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Mutable access to `field`, for input bindings
    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Validate a contact form.
///
/// Lengths are counted in characters after trimming. The email shape is
/// checked on the value as typed.
pub fn validate(form: &ContactForm) -> ValidationResult {
    let mut result = ValidationResult::default();

    let name = trim_input(&form.name);
    if name.is_empty() {
        result.insert(FormField::Name, ValidationError::NameRequired);
    } else if name.chars().count() < NAME_MIN_CHARS {
        result.insert(FormField::Name, ValidationError::NameTooShort);
    }

    if trim_input(&form.email).is_empty() {
        result.insert(FormField::Email, ValidationError::EmailRequired);
    } else if !is_valid_email(&form.email) {
        result.insert(FormField::Email, ValidationError::EmailInvalid);
    }

    let message = trim_input(&form.message);
    if message.is_empty() {
        result.insert(FormField::Message, ValidationError::MessageRequired);
    } else if message.chars().count() < MESSAGE_MIN_CHARS {
        result.insert(FormField::Message, ValidationError::MessageTooShort);
    }

    result
}
