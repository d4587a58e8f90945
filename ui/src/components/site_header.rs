use dioxus::prelude::*;
use model::scroll::HeaderTransform;

use crate::app_state::PageState;
use crate::assets;
use crate::nav;

/// The fixed navigation header: the animated logo (which shrinks and
/// fades with scroll), the section links, and the theme toggle.
#[component]
pub fn SiteHeader() -> Element {
    let page = use_context::<PageState>();
    let mut theme = page.theme;
    let scroll_y = page.scroll_y;

    // Recomputed on every scroll notification.
    let transform = HeaderTransform::at(scroll_y());
    let logo_style = format!(
        "height: {:.0}px; width: {:.0}px; opacity: {:.2};",
        transform.height, transform.height, transform.opacity
    );

    // The toggle shows the artwork of the theme it switches to.
    let current = theme();
    let toggle_icon = if current.is_dark() {
        assets::SUN_SYMBOL
    } else {
        assets::MOON_SYMBOL
    };
    let toggle_label = if current.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        header {
            class: "site-header",
            div {
                class: "header-logo-frame",
                img {
                    // The spin-pulse loop is decorative and runs for the
                    // page's whole lifetime, independent of scroll.
                    class: "header-logo spin-pulse",
                    style: "{logo_style}",
                    src: assets::TEDDI_ICON,
                    alt: "Teddiursa icon",
                }
            }
            nav {
                ul {
                    class: "nav-list",
                    for entry in nav::NAV_SECTIONS {
                        li {
                            button {
                                class: "nav-link",
                                onclick: move |_| nav::scroll_to_section(entry.section_id),
                                "{entry.label}"
                            }
                        }
                    }
                }
            }
            button {
                class: "theme-toggle",
                "aria-label": "{toggle_label}",
                onclick: move |_| {
                    let next = theme().toggled();
                    theme.set(next);
                },
                img {
                    src: "{toggle_icon}",
                    alt: "{toggle_label}",
                }
            }
        }
    }
}
