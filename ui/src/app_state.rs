//! Mutable, reactive page-level state shared across sections.

use dioxus::prelude::*;
use model::theme::Theme;
use model::wallet::BalanceReport;

/// Signals provided as a Dioxus context so any section can read or
/// update them and trigger a re-render.
#[derive(Clone, Copy)]
pub struct PageState {
    /// The presentational dark/light toggle.
    pub theme: Signal<Theme>,
    /// The latest mock balance lookup. `None` before the first submit.
    pub wallet_report: Signal<Option<BalanceReport>>,
    /// Vertical scroll offset in pixels, streamed from the host.
    pub scroll_y: Signal<f64>,
}
