//! Input Field Components
//!
//! Text inputs and textareas for the contact form.
//! Features:
//! - Dark inset background with subtle border
//! - Emerald border on focus
//! - Inline error message under the field, red border while invalid

use dioxus::prelude::*;

use crate::components::button::class_list;

/// CSS class for a field, flagged when it carries an error
fn field_class(base: &str, error: Option<&str>) -> String {
    class_list(base, error.map(|_| "invalid"))
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Visually hidden label for screen readers
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         placeholder: "Name".to_string(),
///         error: name_error,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = field_class("input-field", props.error.as_deref());
    let error_id = format!("{}-error", props.id);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "sr-only", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                "aria-invalid": props.error.is_some(),
                "aria-describedby": "{error_id}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { id: "{error_id}", class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Visually hidden label for screen readers
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = field_class("input-field textarea", props.error.as_deref());
    let error_id = format!("{}-error", props.id);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "sr-only", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                "aria-invalid": props.error.is_some(),
                "aria-describedby": "{error_id}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { id: "{error_id}", class: "field-error", role: "alert", "{error}" }
            }
        }
    }
}
