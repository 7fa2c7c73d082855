//! Outbound contact messages.
//!
//! A valid form becomes a `mailto:` URI addressed to the portfolio owner.
//! Delivery is left to the user's mail client; nothing here touches the
//! network.

use std::fmt::Write as _;

use crate::validation::{validate, ContactForm, ValidationResult};

/// A composed message ready to hand to the host's URI opener
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoMessage {
    /// Compose a message from a form.
    ///
    /// The form is validated first; an invalid form yields its validation
    /// result and no message.
    pub fn compose(recipient: &str, form: &ContactForm) -> Result<Self, ValidationResult> {
        let result = validate(form);
        if !result.is_valid() {
            return Err(result);
        }

        let form = form.normalized();
        Ok(Self {
            recipient: recipient.to_string(),
            subject: format!("Portfolio Contact from {}", form.name),
            body: format!(
                "Name: {}\nEmail: {}\n\nMessage:\n{}",
                form.name, form.email, form.message
            ),
        })
    }

    /// `mailto:` URI with percent-encoded subject and body
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_uri_component(&self.subject),
            encode_uri_component(&self.body)
        )
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FormField, ValidationError};

    #[test]
    fn invalid_form_is_not_composed() {
        let form = ContactForm::new("Jo", "not-an-email", "short");
        let errors = MailtoMessage::compose("me@example.com", &form).unwrap_err();
        assert_eq!(errors.get(FormField::Email), Some(ValidationError::EmailInvalid));
    }

    #[test]
    fn valid_form_builds_uri() {
        let form = ContactForm::new("Ada Lovelace", "ada@example.com", "This message is long enough.");
        let message = MailtoMessage::compose("me@example.com", &form).unwrap();

        assert_eq!(message.subject, "Portfolio Contact from Ada Lovelace");
        assert_eq!(
            message.body,
            "Name: Ada Lovelace\nEmail: ada@example.com\n\nMessage:\nThis message is long enough."
        );
        assert_eq!(
            message.to_uri(),
            "mailto:me@example.com?subject=Portfolio%20Contact%20from%20Ada%20Lovelace\
             &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0A\
             This%20message%20is%20long%20enough."
        );
    }

    #[test]
    fn fields_are_trimmed_in_the_message() {
        let form = ContactForm::new("  Ada ", "ada@example.com", "  Hello there, friend!  ");
        let message = MailtoMessage::compose("me@example.com", &form).unwrap();
        assert_eq!(message.subject, "Portfolio Contact from Ada");
        assert!(message.body.ends_with("Message:\nHello there, friend!"));
    }

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_uri_component("a b&c=d?e/f#g"), "a%20b%26c%3Dd%3Fe%2Ff%23g");
        assert_eq!(encode_uri_component("ሰ"), "%E1%88%B0");
        assert_eq!(encode_uri_component(""), "");
    }
}
