use dioxus::prelude::*;

use crate::assets;
use crate::components::GradientCard;

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section {
            id: "about",
            class: "page-section",
            GradientCard {
                div {
                    class: "about-layout",
                    div {
                        class: "about-copy",
                        h2 { "About" }
                        p {
                            img {
                                class: "inline-icon",
                                src: assets::TEDDI_ICON,
                                alt: "Teddiursa icon",
                            }
                            " was airdropped for free to the Pokechain community on "
                            img {
                                class: "inline-logo",
                                src: assets::PULSECHAIN_LOGO,
                                alt: "PulseChain logo",
                            }
                            ". It's a cute and fun token that brings joy to its holders!"
                        }
                        p {
                            "Teddiursa, the Little Bear "
                            img {
                                class: "inline-logo",
                                src: assets::POKEMON_LOGO,
                                alt: "Pokemon logo",
                            }
                            ", is known for its adorable appearance and its love for "
                            "sweet honey. Just like our token, Teddiursa is small but "
                            "full of potential. It has a crescent moon mark on its "
                            "forehead, which glows when it finds honey. Similarly, our "
                            "token aims to sweeten your crypto journey!"
                        }
                    }
                    img {
                        class: "about-portrait",
                        src: assets::TEDDIURSA_PORTRAIT,
                        alt: "Teddiursa",
                    }
                }
            }
        }
    }
}
