use dioxus::prelude::*;

/// A content card framed by a 4px gradient border, with the hover
/// scale effect the page uses on every section.
///
/// The inner panel picks up the page theme (black on dark, white on
/// light) from the `.section-card-inner` rules in the page stylesheet.
#[derive(Props, Clone, PartialEq)]
pub struct GradientCardProps {
    /// CSS background for the border frame.
    #[props(default = "linear-gradient(to right, #ec4899, #a855f7, #3b82f6)".to_string())]
    pub gradient: String,
    pub children: Element,
}

#[component]
pub fn GradientCard(props: GradientCardProps) -> Element {
    rsx! {
        div {
            class: "section-card",
            style: "background: {props.gradient};",
            div {
                class: "section-card-inner",
                {props.children}
            }
        }
    }
}
