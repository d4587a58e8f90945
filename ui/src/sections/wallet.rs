use dioxus::prelude::*;
use model::wallet::format_grouped;
use model::wallet::BalanceReport;

use crate::app_state::PageState;
use crate::assets;
use crate::components::GradientCard;

/// The mock balance checker. The form intercepts submission, ignores
/// the typed address, and fabricates both balances from the RNG.
/// Results render only while the token balance is positive; a real
/// zero would hide them again, which is the intended behavior.
#[component]
pub fn WalletSection() -> Element {
    let page = use_context::<PageState>();
    let mut report = page.wallet_report;
    let mut wallet_address = use_signal(String::new);

    let shown = report().filter(BalanceReport::is_displayable).map(|r| {
        (
            format_grouped(r.token_balance),
            format_grouped(r.reward_balance),
        )
    });

    rsx! {
        section {
            id: "wallet",
            class: "page-section",
            GradientCard {
                gradient: "linear-gradient(to right, #3b82f6, #6366f1, #a855f7)".to_string(),
                h2 {
                    "Check Your "
                    img {
                        class: "inline-badge",
                        src: assets::TEDDY_ICON,
                        alt: "Teddy icon",
                    }
                    " Rewards"
                }
                form {
                    class: "wallet-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let address = wallet_address.peek().clone();
                        let result = BalanceReport::lookup(&mut rand::rng(), &address);
                        report.set(Some(result));
                    },
                    input {
                        r#type: "text",
                        class: "wallet-input",
                        placeholder: "Not Yet Live... Stay Tuned",
                        value: "{wallet_address}",
                        oninput: move |evt| wallet_address.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "wallet-submit",
                        "Check Balance"
                    }
                }
                if let Some((token, rewards)) = shown {
                    div {
                        class: "balance-results",
                        p {
                            "Your "
                            img {
                                class: "inline-icon",
                                src: assets::TEDDI_ICON,
                                alt: "Teddiursa icon",
                            }
                            " Balance: {token}"
                        }
                        p {
                            "Your "
                            img {
                                class: "inline-badge",
                                src: assets::TEDDY_ICON,
                                alt: "Teddy icon",
                            }
                            " Rewards: {rewards}"
                        }
                    }
                }
            }
        }
    }
}
