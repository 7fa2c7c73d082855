//! Property-based tests for the portfolio core
//!
//! Uses proptest to check the invariants of language switching, key lookup,
//! scroll tracking and form validation over generated inputs.

use std::collections::HashMap;

use portfolio_core::{
    validate, ContactForm, Locale, Localizer, MemoryStore, PreferenceSession, PreferenceStore,
    ScrollTracker, SectionBounds, SectionId, HEADER_OFFSET,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary language-ish codes, most of them unsupported
fn language_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{0,3}").expect("valid regex"),
        Just("EN".to_string()),
        Just(" en".to_string()),
        Just("am ".to_string()),
        ".{0,8}",
    ]
}

/// Dotted lookup keys
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}").expect("valid regex")
}

/// Contiguous page layout: five sections with positive heights
fn layout_strategy() -> impl Strategy<Value = Vec<SectionBounds>> {
    (0.0f64..500.0, prop::collection::vec(1.0f64..2000.0, 5)).prop_map(|(start, heights)| {
        let mut top = start;
        SectionId::ALL
            .into_iter()
            .zip(heights)
            .map(|(id, height)| {
                let bounds = SectionBounds::new(id, top, height);
                top += height;
                bounds
            })
            .collect()
    })
}

/// Free text, including whitespace-heavy and non-ASCII input
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,40}",
        "[ \t\n]{0,5}[a-zA-Z ]{0,20}[ \t\n]{0,5}",
        "[ሀ-ፐ]{0,15}",
    ]
}

fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9.]{1,10}@[a-z0-9]{1,10}\\.[a-z]{2,4}",
        ".{0,20}",
    ]
}

fn localizer() -> Localizer {
    let table = |entries: &[(&str, &str)]| -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    };
    let en = Locale::new("en", "English", "", table(&[("a.b", "en-ab"), ("c", "en-c")]));
    let am = Locale::new("am", "አማርኛ", "", table(&[("a.b", "am-ab")]));
    Localizer::new(vec![en, am], "en").expect("valid language set")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Strings outside the supported set never change the active language
    #[test]
    fn unsupported_language_never_changes_state(
        start_am in any::<bool>(),
        code in language_code_strategy(),
    ) {
        prop_assume!(code != "en" && code != "am");

        let mut session = PreferenceSession::open(
            PreferenceStore::new(MemoryStore::new()),
            Localizer::builtin().expect("builtin tables"),
        );
        if start_am {
            session.set_language("am");
        }
        let before = session.language().to_string();

        prop_assert!(!session.set_language(&code));
        prop_assert_eq!(session.language(), before.as_str());
    }

    /// Lookup resolves active table, then default table, then the key itself
    #[test]
    fn lookup_fallback_chain(key in key_strategy(), active_am in any::<bool>()) {
        let mut l = localizer();
        if active_am {
            l.set_language("am");
        }

        let expected = match (active_am, key.as_str()) {
            (true, "a.b") => "am-ab",
            (false, "a.b") => "en-ab",
            (_, "c") => "en-c",
            (_, other) => other,
        };
        prop_assert_eq!(l.t(&key), expected);
    }

    /// A position strictly inside section i reports section i
    #[test]
    fn position_inside_section_reports_it(
        layout in layout_strategy(),
        index in 0usize..5,
        fraction in 0.0f64..1.0,
    ) {
        let target = layout[index];
        let scroll_y = target.top + target.height * fraction - HEADER_OFFSET;
        // Same arithmetic the tracker performs
        prop_assume!(target.contains(scroll_y + HEADER_OFFSET));

        let mut tracker = ScrollTracker::new();
        let active = tracker.update(scroll_y, &layout);
        prop_assert_eq!(active, target.id);
    }

    /// Positions above the first section keep whatever was active
    #[test]
    fn position_above_page_keeps_previous(
        layout in layout_strategy(),
        previous in 0usize..5,
        gap in 0.001f64..1000.0,
    ) {
        let mut tracker = ScrollTracker::new();
        tracker.set_active(SectionId::ALL[previous]);

        let position = layout[0].top - gap;
        let active = tracker.update(position - HEADER_OFFSET, &layout);
        prop_assert_eq!(active, SectionId::ALL[previous]);
    }

    /// Validation is total and only ever reports the three form fields
    #[test]
    fn validation_is_total(
        name in text_strategy(),
        email in email_strategy(),
        message in text_strategy(),
    ) {
        let result = validate(&ContactForm::new(name, email, message));
        prop_assert!(result.len() <= 3);
    }

    /// Re-validating normalized valid input yields no errors
    #[test]
    fn normalized_valid_input_stays_valid(
        name in text_strategy(),
        email in email_strategy(),
        message in text_strategy(),
    ) {
        let form = ContactForm::new(name, email, message);
        if validate(&form).is_valid() {
            let normalized = form.normalized();
            prop_assert!(validate(&normalized).is_valid());
            prop_assert_eq!(normalized.normalized(), normalized);
        }
    }

    /// Validation is deterministic
    #[test]
    fn validation_is_deterministic(
        name in text_strategy(),
        email in email_strategy(),
        message in text_strategy(),
    ) {
        let form = ContactForm::new(name, email, message);
        prop_assert_eq!(validate(&form), validate(&form.clone()));
    }
}
