//! In-page anchor navigation. There is no router: every nav action is
//! a smooth scroll to a section id.

use dioxus::document;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use model::scroll::SECTION_SCROLL_OFFSET_PX;

/// One entry in the fixed header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub section_id: &'static str,
    pub label: &'static str,
}

/// The navigable sections, in header order.
pub const NAV_SECTIONS: [NavEntry; 5] = [
    NavEntry {
        section_id: "about",
        label: "About",
    },
    NavEntry {
        section_id: "pokechain",
        label: "Pokechain",
    },
    NavEntry {
        section_id: "pokedex",
        label: "Pokédex",
    },
    NavEntry {
        section_id: "tokenomics",
        label: "Tokenomics",
    },
    NavEntry {
        section_id: "community",
        label: "Community",
    },
];

/// Smooth-scrolls to the section with the given id, compensating for
/// the fixed header. A missing element makes this a silent no-op.
pub fn scroll_to_section(section_id: &str) {
    let js = format!(
        r#"
        const el = document.getElementById("{section_id}");
        if (el) {{
            const top = el.getBoundingClientRect().top
                + window.pageYOffset
                - {SECTION_SCROLL_OFFSET_PX};
            window.scrollTo({{ top: top, behavior: "smooth" }});
        }}
        "#
    );
    spawn(async move {
        if let Err(e) = document::eval(&js).await {
            warn!("scroll-to-section script failed: {e:?}");
        }
    });
}
