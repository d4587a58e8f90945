use dioxus::prelude::*;

use crate::hooks::AudioPlayer;

/// The fixed transport strip at the very top of the page: play/pause,
/// previous, next, the current track title, and the volume slider.
#[component]
pub fn TransportBar() -> Element {
    let mut player = use_context::<AudioPlayer>();

    let is_playing = player.is_playing();
    let track_title = player.track().title;
    let volume = player.volume();

    rsx! {
        div {
            class: "transport-bar",
            div {
                class: "transport-controls",
                button {
                    class: "transport-button",
                    "aria-label": if is_playing { "Pause" } else { "Play" },
                    onclick: move |_| player.toggle(),
                    if is_playing { "⏸" } else { "▶" }
                }
                button {
                    class: "transport-button",
                    "aria-label": "Previous track",
                    onclick: move |_| player.prev(),
                    "⏮"
                }
                button {
                    class: "transport-button",
                    "aria-label": "Next track",
                    onclick: move |_| player.next(),
                    "⏭"
                }
                span {
                    class: "gradient-text transport-title",
                    "{track_title}"
                }
            }
            div {
                class: "transport-volume",
                span { class: "gradient-text", "🔊" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.1",
                    value: "{volume}",
                    oninput: move |evt| {
                        if let Ok(v) = evt.value().parse::<f32>() {
                            player.set_volume(v);
                        }
                    },
                }
            }
        }
    }
}
