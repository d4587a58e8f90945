//! Pure page-domain logic for the TEDDI landing page.
//!
//! Nothing in this crate touches the UI runtime: the countdown
//! arithmetic, the playlist state machine, the scroll-driven header
//! transform, and the mock balance lookup are all plain data types so
//! they can be exercised directly by tests.

pub mod countdown;
pub mod playback;
pub mod scroll;
pub mod theme;
pub mod track;
pub mod wallet;
