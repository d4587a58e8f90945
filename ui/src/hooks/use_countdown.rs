//! Drives the launch countdown at one tick per second.

use std::time::Duration;

use dioxus::prelude::*;
use model::countdown::Countdown;

use crate::compat::Ticker;

/// Creates the countdown signal and a coroutine that decrements it
/// every second until it clamps at zero.
///
/// The coroutine is owned by the calling scope, so tearing the page
/// down drops the interval with it; no periodic callback leaks.
pub fn use_countdown() -> Signal<Countdown> {
    let mut countdown = use_signal(Countdown::default);

    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        let mut ticker = Ticker::every(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            if countdown.peek().is_finished() {
                // Stays at zero forever; nothing fires at expiry.
                continue;
            }
            countdown.with_mut(Countdown::tick);
        }
    });

    countdown
}
