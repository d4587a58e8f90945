use dioxus::prelude::*;

use crate::assets;
use crate::components::GradientCard;

#[component]
pub fn PokedexSection() -> Element {
    rsx! {
        section {
            id: "pokedex",
            class: "page-section",
            GradientCard {
                gradient: "linear-gradient(to right, #3b82f6, #a855f7, #ef4444)".to_string(),
                h2 { "The Pokédex: Catch 'Em All!" }
                div {
                    class: "pokedex-layout",
                    div {
                        class: "pokedex-copy",
                        p {
                            "The Pokédex is an essential tool for every trainer. "
                            "In the world of Pokechain, our Pokédex represents "
                            "the collection of all Pokémon-inspired tokens on "
                            "the PulseChain network."
                        }
                        p {
                            "Just like in the games, our goal is to \"catch 'em "
                            "all\" - collect and trade the various tokens to "
                            "complete your digital Pokédex. Each token "
                            "represents a unique character with its own traits, "
                            "abilities, and potential for growth."
                        }
                        p {
                            "Can you catch them all? Start your journey with "
                            img {
                                class: "inline-icon",
                                src: assets::TEDDI_ICON,
                                alt: "Teddiursa icon",
                            }
                            " and see how many tokens you can collect!"
                        }
                    }
                    img {
                        class: "pokedex-art",
                        src: assets::POKEDEX_ART,
                        alt: "Pokédex",
                    }
                }
            }
        }
    }
}
