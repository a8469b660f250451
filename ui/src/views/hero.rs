use dioxus::prelude::*;

use crate::components::app_navbar::{SECTION_ABOUT, SECTION_HOME, SECTION_PRODUCTS};
use crate::components::{Icon, IconKind};
use crate::session::use_language;
use crate::t;

#[component]
pub fn Hero(background: String) -> Element {
    let lang = use_language();

    rsx! {
        section { id: SECTION_HOME, class: "hero", lang: "{lang}",
            div { class: "hero__backdrop",
                img { class: "hero__image", src: "{background}", alt: t!("hero-image-alt") }
                div { class: "hero__overlay" }
            }

            div { class: "hero__content",
                div { class: "hero__badge", {t!("hero-badge")} }
                h1 { class: "hero__title",
                    {t!("hero-title-lead")}
                    br {}
                    span { class: "hero__title-highlight", {t!("hero-title-highlight")} }
                }
                p { class: "hero__intro", {t!("hero-intro")} }
                div { class: "hero__actions",
                    a { class: "button button--accent", href: "#{SECTION_PRODUCTS}",
                        {t!("hero-cta-explore")}
                        Icon { kind: IconKind::ArrowRight, class: "icon--sm" }
                    }
                    a { class: "button button--glass", href: "#{SECTION_ABOUT}",
                        {t!("hero-cta-story")}
                    }
                }
            }
        }
    }
}
