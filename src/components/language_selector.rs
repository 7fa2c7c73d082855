//! Language picker listing every supported table.

use dioxus::prelude::*;

use crate::context::use_i18n;

#[component]
pub fn LanguageSelector() -> Element {
    let mut i18n = use_i18n();
    let current = i18n.language();
    let label = i18n.t("language.select");

    rsx! {
        select {
            class: "language-select",
            "aria-label": "{label}",
            value: "{current}",
            onchange: move |e| {
                i18n.set_language(&e.value());
            },
            for (code, name) in i18n.languages() {
                option {
                    key: "{code}",
                    value: "{code}",
                    selected: code == current,
                    "{name}"
                }
            }
        }
    }
}
