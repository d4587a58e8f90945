use dioxus::prelude::*;

use crate::assets;
use crate::hooks::use_countdown;

/// The hero: the big icon, the tagline, and the launch countdown.
#[component]
pub fn HeroSection() -> Element {
    let countdown = use_countdown();
    let display = countdown.read().display();

    rsx! {
        section {
            id: "hero",
            class: "hero",
            img {
                class: "hero-icon pop-in",
                src: assets::TEDDI_ICON,
                alt: "Teddiursa icon",
            }
            p {
                class: "hero-tagline fade-in",
                "The cutest token on "
                img {
                    class: "inline-logo",
                    src: assets::PULSECHAIN_LOGO,
                    alt: "PulseChain logo",
                }
                "!"
            }
            div {
                class: "hero-countdown gradient-text rise-in",
                "{display}"
            }
            p {
                class: "hero-caption rise-in",
                "Until "
                img {
                    class: "inline-icon",
                    src: assets::TEDDI_ICON,
                    alt: "Teddiursa icon",
                }
                " Launch"
            }
        }
    }
}
