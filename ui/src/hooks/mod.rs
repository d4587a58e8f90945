// Hooks binding page-domain state from `model` to Dioxus signals.

pub mod use_audio_player;
pub mod use_countdown;
pub mod use_scroll_offset;

pub use use_audio_player::use_audio_player;
pub use use_audio_player::AudioPlayer;
pub use use_audio_player::PlayerError;
pub use use_audio_player::AUDIO_ELEMENT_ID;
pub use use_countdown::use_countdown;
pub use use_scroll_offset::use_scroll_offset;
