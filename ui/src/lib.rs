// The client-side Dioxus application: a single marketing page for the
// TEDDI token with a background jukebox, a launch countdown, and a
// mock rewards checker.

use dioxus::prelude::*;
use model::theme::Theme;

mod app_state;
pub mod assets;
mod compat;
pub mod components;
pub mod hooks;
pub mod nav;
mod sections;

pub use app_state::PageState;

use components::SiteHeader;
use components::TransportBar;
use hooks::AUDIO_ELEMENT_ID;
use sections::AboutSection;
use sections::CommunitySection;
use sections::HeroSection;
use sections::PokechainSection;
use sections::PokedexSection;
use sections::TokenomicsSection;
use sections::WalletSection;

const PAGE_CSS: &str = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        font-family: ui-sans-serif, system-ui, sans-serif;
    }

    /* --- THEME --- */
    .page {
        min-height: 100vh;
        transition: background-color 0.3s, color 0.3s;
    }
    .page.dark { background-color: #000; color: #fff; }
    .page.light { background-color: #fff; color: #000; }

    .gradient-text {
        background-image: linear-gradient(to right, #ec4899, #a855f7, #3b82f6);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        font-weight: bold;
    }

    /* --- TRANSPORT BAR --- */
    .transport-bar {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 20;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0.5rem 1rem;
        backdrop-filter: blur(12px);
        background-color: rgba(0, 0, 0, 0.2);
    }
    .transport-controls {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .transport-button {
        border: none;
        cursor: pointer;
        color: #fff;
        padding: 0.5rem;
        border-radius: 9999px;
        font-size: 1rem;
        line-height: 1;
        background-image: linear-gradient(to right, #ec4899, #a855f7, #3b82f6);
    }
    .transport-title { margin-left: 0.5rem; }
    .transport-volume {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .transport-volume input[type="range"] {
        width: 8rem;
        accent-color: #a855f7;
    }

    /* --- SITE HEADER --- */
    .site-header {
        position: fixed;
        top: 3rem; left: 0; right: 0;
        z-index: 10;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem;
        backdrop-filter: blur(12px);
        background-color: rgba(0, 0, 0, 0.2);
    }
    .header-logo-frame {
        width: 150px;
        display: flex;
        align-items: center;
    }
    @keyframes spin-pulse {
        0%   { transform: rotate(0deg)   scale(1); }
        50%  { transform: rotate(180deg) scale(1.1); }
        100% { transform: rotate(360deg) scale(1); }
    }
    .spin-pulse { animation: spin-pulse 5s linear infinite; }

    .nav-list {
        display: flex;
        gap: 1rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        border: none;
        cursor: pointer;
        background-color: #000;
        color: #fff;
        padding: 0.25rem 0.5rem;
    }
    .nav-link:hover { color: #fde047; }

    .theme-toggle {
        border: none;
        cursor: pointer;
        padding: 0.5rem;
        border-radius: 9999px;
        background-color: rgba(128, 128, 128, 0.2);
        backdrop-filter: blur(12px);
    }
    .theme-toggle img { width: 1.5rem; height: 1.5rem; display: block; }

    /* --- BANNER + LAYOUT --- */
    .banner { padding-top: 160px; }
    .banner img {
        width: 100%;
        height: 24rem;
        object-fit: cover;
        display: block;
    }
    main.container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 6rem 1rem;
    }

    /* --- HERO --- */
    .hero { text-align: center; margin-bottom: 4rem; }
    .hero-icon { width: 180px; height: 180px; }
    .hero-tagline { font-size: 1.5rem; }
    .hero-countdown { margin-top: 2rem; font-size: 2.25rem; }
    .hero-caption { margin-top: 1rem; font-size: 1.25rem; }

    .inline-icon  { width: 60px;  height: 60px; vertical-align: middle; margin: 0 0.25rem; }
    .inline-logo  { width: 120px; height: 60px; vertical-align: middle; margin: 0 0.25rem; object-fit: contain; }
    .inline-badge { width: 24px;  height: 24px; vertical-align: middle; margin: 0 0.25rem; }

    @keyframes pop-in {
        from { transform: scale(0); }
        to   { transform: scale(1); }
    }
    .pop-in { animation: pop-in 0.5s ease-out; }
    @keyframes fade-in {
        from { opacity: 0; }
        to   { opacity: 1; }
    }
    .fade-in { animation: fade-in 0.5s ease-out 0.5s backwards; }
    @keyframes rise-in {
        from { transform: translateY(50px); opacity: 0; }
        to   { transform: translateY(0);    opacity: 1; }
    }
    .rise-in { animation: rise-in 0.6s ease-out 1s backwards; }

    /* --- SECTION CARDS --- */
    .page-section { margin-bottom: 4rem; }
    .section-card {
        padding: 4px;
        border-radius: 0.5rem;
        transition: transform 0.15s ease-out;
    }
    .section-card:hover { transform: scale(1.05); }
    .section-card-inner {
        border-radius: 0.5rem;
        padding: 1.5rem;
    }
    .page.dark .section-card-inner { background-color: #000; }
    .page.light .section-card-inner { background-color: #fff; }

    .about-layout, .pokedex-layout {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .about-copy, .pokedex-copy { flex: 1; }
    .about-portrait, .pokedex-art { width: 200px; height: 200px; }

    .tokenomics-list { font-size: 1.25rem; }

    /* --- WALLET --- */
    .wallet-form { margin-bottom: 1rem; }
    .wallet-input {
        width: 100%;
        padding: 0.5rem;
        border-radius: 0.25rem;
        border: 1px solid #ccc;
        color: #000;
    }
    .wallet-submit {
        margin-top: 0.5rem;
        border: none;
        cursor: pointer;
        background-color: #eab308;
        color: #000;
        padding: 0.5rem 1rem;
        border-radius: 0.25rem;
    }
    .wallet-submit:hover { background-color: #ca8a04; }
    .balance-results { font-size: 1.25rem; }

    /* --- COMMUNITY --- */
    .community-links {
        margin-top: 1rem;
        display: flex;
        gap: 1rem;
    }
    .community-link {
        color: #fff;
        text-decoration: none;
        padding: 0.5rem 1rem;
        border-radius: 0.25rem;
    }
    .community-link.telegram   { background-color: #3b82f6; }
    .community-link.telegram:hover   { background-color: #2563eb; }
    .community-link.pokecenter { background-color: #22c55e; }
    .community-link.pokecenter:hover { background-color: #16a34a; }
    .community-link.twitter    { background-color: #60a5fa; }
    .community-link.twitter:hover    { background-color: #3b82f6; }

    /* --- FOOTER --- */
    .page footer {
        text-align: center;
        padding: 1rem 0;
        backdrop-filter: blur(12px);
        background-color: rgba(128, 128, 128, 0.1);
    }
"#;

/// The application root: document metadata plus the page itself.
#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Teddiursa - the cutest token on PulseChain" }
        style { "{PAGE_CSS}" }
        Page {}
    }
}

/// The whole landing page. All shared state is created here and
/// provided through context; everything below is presentational.
#[component]
fn Page() -> Element {
    let theme = use_signal(Theme::default);
    let wallet_report = use_signal(|| None);
    let scroll_y = hooks::use_scroll_offset();
    use_context_provider(|| PageState {
        theme,
        wallet_report,
        scroll_y,
    });

    let player = hooks::use_audio_player();
    use_context_provider(|| player);

    let theme_class = theme();
    let track_src = player.track().source_url;

    rsx! {
        div {
            class: "page {theme_class}",
            TransportBar {}
            SiteHeader {}

            // The single media element every transport action targets.
            // Looping is always on: a finished track repeats instead of
            // advancing.
            audio {
                id: AUDIO_ELEMENT_ID,
                src: "{track_src}",
                r#loop: true,
            }

            div {
                class: "banner",
                img {
                    src: assets::HERO_BANNER,
                    alt: "Pokemon characters",
                }
            }

            main {
                class: "container",
                HeroSection {}
                AboutSection {}
                PokechainSection {}
                PokedexSection {}
                TokenomicsSection {}
                WalletSection {}
                CommunitySection {}
            }

            footer {
                p { "Made with love by Cuddles for the Pokechain Community. 2024" }
            }
        }
    }
}
