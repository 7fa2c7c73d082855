//! Handing links to the operating system.
//!
//! Project demos, social profiles and the composed `mailto:` message all
//! open in the user's default handler instead of the webview.

use std::path::PathBuf;

use anyhow::Context;

/// Whether `target` carries a URI scheme the OS can open directly
fn has_scheme(target: &str) -> bool {
    ["http://", "https://", "mailto:", "tel:", "file://"]
        .iter()
        .any(|scheme| target.starts_with(scheme))
}

/// Local file behind a site-relative asset path like `/cv/resume.pdf`
pub fn asset_path(path: &str) -> PathBuf {
    let relative = path.trim_start_matches('/');
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(relative)
}

/// Open a URL or site-relative asset with the default handler
pub fn open_external(target: &str) -> anyhow::Result<()> {
    if has_scheme(target) {
        open::that_detached(target).with_context(|| format!("Failed to open {}", target))?;
    } else {
        let path = asset_path(target);
        open::that_detached(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }
    tracing::info!(uri = target, "Opened externally");
    Ok(())
}

/// [`open_external`] for click handlers that only need the failure logged
pub fn open_or_log(target: &str) {
    if let Err(e) = open_external(target) {
        tracing::warn!(error = %e, "Could not open link");
    }
}
