//! The playlist controller: a transport state machine bound to the
//! page's single `<audio>` element.
//!
//! State transitions live in [`model::playback::PlaybackState`]; this
//! hook applies each transition to the element through the eval
//! bridge. Media failures are non-fatal: they are logged and never
//! block the UI, and nothing is retried.

use dioxus::document;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use model::playback::PlaybackState;
use model::playback::DEFAULT_VOLUME;
use model::track::Track;

/// The id of the `<audio>` element rendered by the page root.
pub const AUDIO_ELEMENT_ID: &str = "jukebox";

/// Why an audio-element operation did not complete.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// The platform refused to start playback, typically an autoplay
    /// policy rejection before the first user gesture.
    #[error("playback rejected by the platform: {0}")]
    Rejected(String),
    /// The eval bridge to the media element failed.
    #[error("media element script failed: {0}")]
    Bridge(String),
}

/// Handle over the transport state. Copy, so event handlers can each
/// capture their own.
#[derive(Clone, Copy)]
pub struct AudioPlayer {
    state: Signal<PlaybackState>,
}

impl AudioPlayer {
    /// The currently selected playlist entry.
    pub fn track(&self) -> &'static Track {
        self.state.read().track()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing()
    }

    pub fn volume(&self) -> f32 {
        self.state.read().volume()
    }

    /// Play if paused, pause if playing.
    ///
    /// The flag flips regardless of whether the play attempt succeeds;
    /// a rejected play promise is logged and nothing else.
    pub fn toggle(&mut self) {
        if self.state.peek().is_playing() {
            run_element_js("el.pause();");
        } else {
            spawn(async move {
                if let Err(e) = start_playback().await {
                    warn!("playback not started: {e}");
                }
            });
        }
        self.state.with_mut(|s| {
            s.toggle();
        });
    }

    /// Advances to the next track; the element source swaps on
    /// re-render. Looping stays enabled, so a track repeats rather
    /// than auto-advancing.
    pub fn next(&mut self) {
        self.state.with_mut(PlaybackState::next);
    }

    /// Retreats to the previous track, wrapping past the start.
    pub fn prev(&mut self) {
        self.state.with_mut(PlaybackState::prev);
    }

    /// Clamps and stores the volume, then applies it to the element.
    pub fn set_volume(&mut self, volume: f32) {
        let applied = self.state.with_mut(|s| s.set_volume(volume));
        run_element_js(&format!("el.volume = {applied};"));
    }
}

/// Creates the transport state and schedules the one autoplay attempt
/// the page makes at creation: track 0 at volume 0.5. Autoplay
/// policies commonly reject this; the rejection is logged and ignored.
pub fn use_audio_player() -> AudioPlayer {
    let state = use_signal(PlaybackState::default);

    use_effect(move || {
        run_element_js(&format!("el.volume = {DEFAULT_VOLUME};"));
        spawn(async move {
            match start_playback().await {
                Ok(()) => info!("autoplay started"),
                Err(e) => warn!("autoplay prevented: {e}"),
            }
        });
    });

    AudioPlayer { state }
}

/// Runs a script with `el` bound to the audio element, if it exists.
/// Failures are logged; there is nothing to surface to the caller.
fn run_element_js(body: &str) {
    let js = format!(
        r#"
        const el = document.getElementById("{AUDIO_ELEMENT_ID}");
        if (el) {{ {body} }}
        "#
    );
    spawn(async move {
        if let Err(e) = document::eval(&js).await {
            warn!("media element script failed: {e:?}");
        }
    });
}

/// Asks the element to play and waits for the play promise to settle.
/// A missing element resolves as success: there is simply nothing to
/// play yet.
async fn start_playback() -> Result<(), PlayerError> {
    let mut eval = document::eval(
        r#"
        const el = document.getElementById("jukebox");
        if (el === null) {
            dioxus.send(null);
        } else {
            el.play()
                .then(() => dioxus.send(null))
                .catch((err) => dioxus.send(String(err)));
        }
        "#,
    );
    match eval.recv::<Option<String>>().await {
        Ok(None) => Ok(()),
        Ok(Some(reason)) => Err(PlayerError::Rejected(reason)),
        Err(e) => Err(PlayerError::Bridge(format!("{e:?}"))),
    }
}
