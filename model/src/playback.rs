//! The playlist transport state machine.
//!
//! This is deliberately free of any audio I/O: the UI layer applies
//! each transition to the underlying media element, while the
//! transitions themselves stay synchronous and testable.

use crate::track::Track;
use crate::track::PLAYLIST;
use crate::track::TRACK_COUNT;

/// The volume the player starts at before the user touches the slider.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Transport state: which track is selected, whether we are playing,
/// and the output gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    current_track: usize,
    is_playing: bool,
    volume: f32,
}

impl PlaybackState {
    pub fn current_track_index(&self) -> usize {
        self.current_track
    }

    /// The currently selected playlist entry.
    pub fn track(&self) -> &'static Track {
        &PLAYLIST[self.current_track]
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Flips the play/pause flag and reports the new value.
    ///
    /// The flip is unconditional: whether the platform actually starts
    /// playback is the caller's concern, and a rejected play attempt
    /// does not roll this back.
    pub fn toggle(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    /// Advances to the next track, wrapping at the end of the playlist.
    pub fn next(&mut self) {
        self.current_track = (self.current_track + 1) % TRACK_COUNT;
    }

    /// Retreats to the previous track, wrapping past the start.
    pub fn prev(&mut self) {
        self.current_track = (self.current_track + TRACK_COUNT - 1) % TRACK_COUNT;
    }

    /// Sets the output gain, clamped to `[0, 1]`. Returns the value
    /// actually stored.
    pub fn set_volume(&mut self, volume: f32) -> f32 {
        self.volume = volume.clamp(0.0, 1.0);
        self.volume
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track: 0,
            is_playing: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_track_paused_at_half_volume() {
        let state = PlaybackState::default();
        assert_eq!(state.current_track_index(), 0);
        assert!(!state.is_playing());
        assert_eq!(state.volume(), 0.5);
        assert_eq!(state.track().title, "JME - The Very Best");
    }

    #[test]
    fn next_then_prev_round_trips_from_any_index() {
        for start in 0..TRACK_COUNT {
            let mut state = PlaybackState::default();
            for _ in 0..start {
                state.next();
            }
            state.next();
            state.prev();
            assert_eq!(state.current_track_index(), start);

            state.prev();
            state.next();
            assert_eq!(state.current_track_index(), start);
        }
    }

    #[test]
    fn next_cycles_back_after_track_count_steps() {
        for start in 0..TRACK_COUNT {
            let mut state = PlaybackState::default();
            for _ in 0..start {
                state.next();
            }
            for _ in 0..TRACK_COUNT {
                state.next();
            }
            assert_eq!(state.current_track_index(), start);
        }
    }

    #[test]
    fn prev_from_first_track_wraps_to_last() {
        let mut state = PlaybackState::default();
        state.prev();
        assert_eq!(state.current_track_index(), TRACK_COUNT - 1);
    }

    #[test]
    fn toggle_twice_restores_play_state() {
        let mut state = PlaybackState::default();
        assert!(state.toggle());
        assert!(!state.toggle());
        assert!(!state.is_playing());
    }

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut state = PlaybackState::default();
        assert_eq!(state.set_volume(1.7), 1.0);
        assert_eq!(state.set_volume(-0.3), 0.0);
        assert_eq!(state.set_volume(0.25), 0.25);
    }
}
