use dioxus::prelude::*;

use crate::components::GradientCard;

#[component]
pub fn PokechainSection() -> Element {
    rsx! {
        section {
            id: "pokechain",
            class: "page-section",
            GradientCard {
                gradient: "linear-gradient(to right, #ef4444, #eab308, #3b82f6)".to_string(),
                h2 { "Pokechain: The Pokémon Trend on PulseChain" }
                p {
                    "Pokechain represents the exciting Pokémon-inspired trend "
                    "taking over PulseChain. It's a community-driven movement "
                    "that brings the nostalgia and fun of Pokémon into the "
                    "world of cryptocurrency."
                }
                p {
                    "As part of this trend, various Pokémon-themed tokens have "
                    "emerged, each representing different characters and their "
                    "unique traits. These tokens not only serve as digital "
                    "assets but also as a way for fans to engage with their "
                    "favorite characters in the crypto space."
                }
                h3 { "How Teddiursa Adds Value to Pokechain" }
                ul {
                    li {
                        "Unique character representation: Teddiursa brings its "
                        "cute and lovable personality to the Pokechain "
                        "ecosystem, adding diversity to the inspired tokens."
                    }
                    li {
                        "Community engagement: as a free airdrop to the "
                        "Pokechain community, TEDDI encourages wider "
                        "participation and helps grow the overall movement."
                    }
                    li {
                        "Reward mechanism: with its 3% rewards in Teddy "
                        "tokens, TEDDI introduces an innovative tokenomics "
                        "model to the Pokechain trend."
                    }
                    li {
                        "Cross-token interactions: the connection between "
                        "TEDDI and Teddy tokens showcases the potential for "
                        "interesting token interactions within the ecosystem."
                    }
                    li {
                        "Community-driven liquidity: for the token to thrive, "
                        "the community adds its own liquidity to the trading "
                        "pools, and keeps a healthy bag of TEDDI liquid to "
                        "continue receiving rewards."
                    }
                }
            }
        }
    }
}
