use dioxus::prelude::*;

use crate::components::{Icon, IconKind};
use crate::session::use_language;
use crate::t;

/// Newsletter call-to-action strip. Collects nothing: the input and button
/// are presentational.
#[component]
pub fn NewsletterCta() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "cta", lang: "{lang}",
            div { class: "cta__ornament",
                Icon { kind: IconKind::Leaf, class: "cta__leaf" }
            }
            div { class: "container cta__inner",
                h2 { class: "cta__title", {t!("cta-title")} }
                p { class: "cta__body", {t!("cta-body")} }
                div { class: "cta__form",
                    input {
                        r#type: "email",
                        class: "cta__input",
                        placeholder: t!("cta-email-placeholder"),
                    }
                    button { r#type: "button", class: "button button--gold",
                        {t!("cta-subscribe")}
                    }
                }
            }
        }
    }
}
