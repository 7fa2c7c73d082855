//! Contact Section
//!
//! Direct links on one side, the message form on the other. A valid form
//! is handed to the mail client as a `mailto:` link; nothing is sent from
//! the application itself.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{
    display_url, ContactForm, FormField, MailtoMessage, SectionId, ValidationResult,
};
use portfolio_ui::{Button, ButtonVariant, Input, Section, SectionHeading, SectionTone, TextArea};

use crate::components::icons::{Glyph, Icon};
use crate::context::{use_content, use_i18n};
use crate::external::{open_external, open_or_log};

/// How long the success note stays before the form resets to idle
const STATUS_RESET_SECS: u64 = 5;

/// Outcome of the last submit
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum SubmitStatus {
    #[default]
    Idle,
    Success,
    /// Validation failed
    Invalid,
    /// The mail client could not be launched
    OpenFailed,
}

impl SubmitStatus {
    /// Localization key and CSS modifier for the status line
    fn message(&self) -> Option<(&'static str, &'static str)> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some(("contact.successMessage", "success")),
            SubmitStatus::Invalid => Some(("contact.errorMessage", "error")),
            SubmitStatus::OpenFailed => Some(("contact.openFailed", "error")),
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let i18n = use_i18n();
    let content = use_content();
    let contact = content.contact.clone();

    let mut draft = use_signal(ContactForm::default);
    let mut errors = use_signal(ValidationResult::default);
    let mut status = use_signal(SubmitStatus::default);

    let recipient = contact.email.clone();
    let onsubmit = move |e: FormEvent| {
        e.prevent_default();

        let message = match MailtoMessage::compose(&recipient, &draft.read()) {
            Ok(message) => message,
            Err(result) => {
                tracing::debug!(failures = result.len(), "Contact form rejected");
                errors.set(result);
                status.set(SubmitStatus::Invalid);
                return;
            }
        };

        errors.set(ValidationResult::default());
        match open_external(&message.to_uri()) {
            Ok(()) => {
                draft.set(ContactForm::default());
                status.set(SubmitStatus::Success);
                spawn(async move {
                    tokio::time::sleep(Duration::from_secs(STATUS_RESET_SECS)).await;
                    if status() == SubmitStatus::Success {
                        status.set(SubmitStatus::Idle);
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not hand message to the mail client");
                status.set(SubmitStatus::OpenFailed);
            }
        }
    };

    // Editing a field clears its error until the next submit
    let mut edit = move |field: FormField, value: String| {
        *draft.write().field_mut(field) = value;
        errors.write().clear(field);
    };

    let field_error = |field: FormField| errors.read().get(field).map(|e| i18n.t(e.message_key()));

    let email_uri = contact.email_uri();
    let phone_uri = contact.phone_uri();
    let linkedin_url = contact.linkedin_url.clone();
    let github_url = contact.github_url.clone();
    let current = draft();

    rsx! {
        Section { id: SectionId::Contact.as_str().to_string(), tone: SectionTone::Dark,
            SectionHeading { title: i18n.t("contact.title") }

            div { class: "contact-grid",
                // Direct links
                div { class: "contact-links stagger",
                    button {
                        class: "contact-link",
                        r#type: "button",
                        onclick: move |_| open_or_log(&email_uri),
                        span { class: "contact-link-icon", Icon { glyph: Glyph::Mail } }
                        span { class: "contact-link-label", "{contact.email}" }
                    }

                    if let (Some(phone), Some(uri)) = (contact.phone.clone(), phone_uri) {
                        button {
                            class: "contact-link",
                            r#type: "button",
                            onclick: move |_| open_or_log(&uri),
                            span { class: "contact-link-icon", Icon { glyph: Glyph::Phone } }
                            span { class: "contact-link-label", "{phone}" }
                        }
                    }

                    button {
                        class: "contact-link",
                        r#type: "button",
                        onclick: move |_| open_or_log(&linkedin_url),
                        span { class: "contact-link-icon", Icon { glyph: Glyph::Linkedin } }
                        span { class: "contact-link-label", {display_url(&contact.linkedin_url)} }
                    }

                    button {
                        class: "contact-link",
                        r#type: "button",
                        onclick: move |_| open_or_log(&github_url),
                        span { class: "contact-link-icon", Icon { glyph: Glyph::Github } }
                        span { class: "contact-link-label", {display_url(&contact.github_url)} }
                    }
                }

                // Message form
                form { class: "contact-form reveal", "novalidate": "true", onsubmit,
                    Input {
                        id: "name".to_string(),
                        value: current.name.clone(),
                        label: Some(i18n.t("contact.name")),
                        placeholder: Some(i18n.t("contact.name")),
                        error: field_error(FormField::Name),
                        oninput: move |value| edit(FormField::Name, value),
                    }
                    Input {
                        id: "email".to_string(),
                        input_type: "email".to_string(),
                        value: current.email.clone(),
                        label: Some(i18n.t("contact.email")),
                        placeholder: Some(i18n.t("contact.email")),
                        error: field_error(FormField::Email),
                        oninput: move |value| edit(FormField::Email, value),
                    }
                    TextArea {
                        id: "message".to_string(),
                        value: current.message.clone(),
                        label: Some(i18n.t("contact.message")),
                        placeholder: Some(i18n.t("contact.message")),
                        error: field_error(FormField::Message),
                        oninput: move |value| edit(FormField::Message, value),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        {i18n.t("contact.send")}
                    }

                    if let Some((key, tone)) = status().message() {
                        p { class: "form-status {tone}", role: "status", {i18n.t(key)} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_shows_no_status() {
        assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
        assert!(SubmitStatus::Idle.message().is_none());
    }

    #[test]
    fn status_lines_use_translated_keys() {
        assert_eq!(
            SubmitStatus::Success.message(),
            Some(("contact.successMessage", "success"))
        );
        assert_eq!(
            SubmitStatus::Invalid.message(),
            Some(("contact.errorMessage", "error"))
        );
        assert_eq!(
            SubmitStatus::OpenFailed.message(),
            Some(("contact.openFailed", "error"))
        );
    }
}
