//! Bridge between the webview's scroll events and [`ScrollTracker`].
//!
//! A small script measures every section on scroll (at most once per
//! animation frame) and sends `{ scroll_y, sections }` back over the eval
//! channel. The tracker decides which navigation entry is highlighted.

use dioxus::prelude::*;
use portfolio_core::{ScrollSample, ScrollTracker, SectionId};

const LISTENER_JS: &str = r#"
const ids = __SECTION_IDS__;
let pending = false;

function measure() {
  pending = false;
  const sections = [];
  for (const id of ids) {
    const el = document.getElementById(id);
    if (el) {
      sections.push({ id, top: el.offsetTop, height: el.offsetHeight });
    }
  }
  dioxus.send({ scroll_y: window.scrollY, sections });
}

function onScroll() {
  if (!pending) {
    pending = true;
    requestAnimationFrame(measure);
  }
}

if (window.__portfolioScroll) {
  window.removeEventListener('scroll', window.__portfolioScroll);
  window.removeEventListener('resize', window.__portfolioScroll);
}
window.__portfolioScroll = onScroll;
window.addEventListener('scroll', onScroll, { passive: true });
window.addEventListener('resize', onScroll);
onScroll();
"#;

const REMOVE_JS: &str = r#"
if (window.__portfolioScroll) {
  window.removeEventListener('scroll', window.__portfolioScroll);
  window.removeEventListener('resize', window.__portfolioScroll);
  delete window.__portfolioScroll;
}
"#;

/// Listener script with the tracked section ids filled in
fn listener_script() -> String {
    let ids: Vec<String> = SectionId::ALL
        .iter()
        .map(|id| format!("'{}'", id.as_str()))
        .collect();
    LISTENER_JS.replace("__SECTION_IDS__", &format!("[{}]", ids.join(", ")))
}

/// Hook returning the tracker behind the navigation highlight.
///
/// Installs the scroll listener on mount and removes it on unmount.
pub fn use_active_section() -> Signal<ScrollTracker> {
    let mut tracker = use_signal(ScrollTracker::new);

    use_future(move || async move {
        let mut eval = document::eval(&listener_script());

        loop {
            match eval.recv::<ScrollSample>().await {
                Ok(sample) => {
                    // Only write when the highlight moves
                    let mut next = *tracker.peek();
                    let id = next.apply(&sample);
                    if id != tracker.peek().active() {
                        tracing::debug!(section = %id, scroll_y = sample.scroll_y, "Active section changed");
                        tracker.set(next);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Scroll listener stopped");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        document::eval(REMOVE_JS);
    });

    tracker
}

/// Highlight `id` right away, then smoothly scroll it into view.
///
/// Scroll samples from the animation take over once they arrive.
pub fn jump_to_section(mut tracker: Signal<ScrollTracker>, id: SectionId) {
    tracker.write().set_active(id);
    scroll_to_section(id);
}

/// Smoothly scroll the section with `id` into view
pub fn scroll_to_section(id: SectionId) {
    document::eval(&format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        id.as_str()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_tracks_every_section() {
        let script = listener_script();
        assert!(!script.contains("__SECTION_IDS__"));
        assert!(script.contains("const ids = ['hero', 'about', 'skills', 'projects', 'contact'];"));
    }

    #[test]
    fn listener_is_throttled_per_frame() {
        assert!(LISTENER_JS.contains("requestAnimationFrame(measure)"));
        assert!(REMOVE_JS.contains("removeEventListener('scroll'"));
    }
}
