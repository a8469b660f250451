//! Renderer glue. Everything here talks to the host window through
//! `document::eval`, so the same code runs in the browser and in the
//! desktop webview.

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::scroll::is_scrolled;

// The handler is parked on `window` so the unmount script can detach it.
// At most one observer is attached at a time.
const SCROLL_LISTENER_JS: &str = r#"
    if (window.__storefrontScroll) {
        window.removeEventListener("scroll", window.__storefrontScroll);
    }
    window.__storefrontScroll = () => dioxus.send(window.scrollY);
    dioxus.send(window.scrollY);
    window.addEventListener("scroll", window.__storefrontScroll, { passive: true });
"#;

const SCROLL_UNLISTEN_JS: &str = r#"
    if (window.__storefrontScroll) {
        window.removeEventListener("scroll", window.__storefrontScroll);
        window.__storefrontScroll = undefined;
    }
"#;

/// Reactive "is scrolled" flag, recomputed on every window scroll event.
/// The window listener is removed when the calling component unmounts.
pub fn use_is_scrolled(threshold: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);

    use_drop(|| {
        debug!("detaching scroll listener");
        let _ = document::eval(SCROLL_UNLISTEN_JS);
    });

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        loop {
            match listener.recv::<f64>().await {
                Ok(offset) => {
                    let next = is_scrolled(offset, threshold);
                    if next != *scrolled.peek() {
                        debug!(offset, scrolled = next, "navbar scroll state changed");
                        scrolled.set(next);
                    }
                }
                Err(err) => {
                    warn!("scroll listener closed: {err}");
                    break;
                }
            }
        }
    });

    scrolled
}
