use dioxus::prelude::*;

use crate::assets;
use crate::components::GradientCard;

#[component]
pub fn TokenomicsSection() -> Element {
    rsx! {
        section {
            id: "tokenomics",
            class: "page-section",
            GradientCard {
                gradient: "linear-gradient(to right, #22c55e, #eab308, #ef4444)".to_string(),
                h2 { "Tokenomics" }
                ul {
                    class: "tokenomics-list",
                    li {
                        "Airdropped to the Pokechain community for free "
                        "(as sweet as honey!)"
                    }
                    li {
                        "3% rewards in "
                        img {
                            class: "inline-badge",
                            src: assets::TEDDY_ICON,
                            alt: "Teddy icon",
                        }
                        " on buys/sells (because sharing is caring!)"
                    }
                    li {
                        "No honey... err, tokens were harmed in the making of "
                        "this meme coin!"
                    }
                }
            }
        }
    }
}
