use dioxus::prelude::*;
use portfolio_core::PreferenceSession;

use crate::context::{load_content, open_session};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single portfolio page; sections are reached by scrolling
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the preference session, content, and routing.
#[component]
pub fn App() -> Element {
    let session: Signal<PreferenceSession> = use_signal(open_session);

    use_context_provider(|| session);
    use_context_provider(load_content);

    // Keep the document language in step for fonts and screen readers
    use_effect(move || {
        let code = session.read().language().to_string();
        document::eval(&format!("document.documentElement.lang = '{}';", code));
    });

    let theme_class = session.read().theme().css_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell {theme_class}",
            Router::<Route> {}
        }
    }
}
