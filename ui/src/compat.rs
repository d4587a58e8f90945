// A repeating-timer shim over the wasm and native runtimes, so hooks
// can await ticks without caring which platform they run on.

#[cfg(target_arch = "wasm32")]
pub use wasm32::Ticker;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::Ticker;

#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::time::Duration;

    use futures::StreamExt;
    use gloo_timers::future::IntervalStream;

    /// A repeating timer backed by a browser interval. Dropping the
    /// stream clears the interval, so no callback outlives its owner.
    pub struct Ticker {
        inner: IntervalStream,
    }

    impl Ticker {
        pub fn every(period: Duration) -> Self {
            Self {
                inner: IntervalStream::new(period.as_millis() as u32),
            }
        }

        pub async fn tick(&mut self) {
            self.inner.next().await;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm32 {
    use std::time::Duration;

    use tokio::time::Instant;
    use tokio::time::Interval;
    use tokio::time::MissedTickBehavior;

    /// A repeating timer backed by tokio. The first tick fires one
    /// full period after creation, matching the browser behavior.
    pub struct Ticker {
        inner: Interval,
    }

    impl Ticker {
        pub fn every(period: Duration) -> Self {
            let mut inner = tokio::time::interval_at(Instant::now() + period, period);
            inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Self { inner }
        }

        pub async fn tick(&mut self) {
            self.inner.tick().await;
        }
    }
}
