//! Streams the host's vertical scroll position into a signal.

use dioxus::document;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

const SCROLL_LISTENER_JS: &str = r#"
window.addEventListener(
    "scroll",
    () => { dioxus.send(window.scrollY); },
    { passive: true }
);
dioxus.send(window.scrollY);
"#;

/// Registers a scroll listener in the host and mirrors every
/// notification into the returned signal. The listener task is
/// dropped with the calling scope.
pub fn use_scroll_offset() -> Signal<f64> {
    let mut offset = use_signal(|| 0.0f64);

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let mut listener = document::eval(SCROLL_LISTENER_JS);
        loop {
            match listener.recv::<f64>().await {
                Ok(y) => offset.set(y),
                Err(e) => {
                    warn!("scroll listener channel closed: {e:?}");
                    break;
                }
            }
        }
    });

    offset
}
