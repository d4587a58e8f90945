use dioxus::prelude::*;

use crate::assets;
use crate::components::GradientCard;

#[component]
pub fn CommunitySection() -> Element {
    rsx! {
        section {
            id: "community",
            class: "page-section",
            GradientCard {
                gradient: "linear-gradient(to right, #3b82f6, #6366f1, #a855f7)".to_string(),
                h2 { "Join the Pokechain Community" }
                p {
                    "Be part of the "
                    img {
                        class: "inline-icon",
                        src: assets::TEDDI_ICON,
                        alt: "Teddiursa icon",
                    }
                    " family! Connect with us on social media and join our "
                    "Telegram groups for the latest updates, memes, and "
                    "honey-sweet discussions."
                }
                div {
                    class: "community-links",
                    a {
                        class: "community-link telegram",
                        href: assets::TEDDIURSA_TELEGRAM_URL,
                        "Teddiursa Telegram"
                    }
                    a {
                        class: "community-link pokecenter",
                        href: assets::POKECENTER_TELEGRAM_URL,
                        "Pokecenter Telegram"
                    }
                    a {
                        class: "community-link twitter",
                        href: assets::TWITTER_URL,
                        "Twitter"
                    }
                }
            }
        }
    }
}
