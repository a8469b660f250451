use dioxus::prelude::*;

use crate::components::app_navbar::SECTION_ABOUT;
use crate::components::{Icon, IconKind};
use crate::session::use_language;
use crate::t;

#[component]
pub fn AboutSection(image: String) -> Element {
    let lang = use_language();
    let points = [
        t!("about-point-farmers"),
        t!("about-point-quality"),
        t!("about-point-packaging"),
        t!("about-point-livelihood"),
    ];

    rsx! {
        section { id: SECTION_ABOUT, class: "about", lang: "{lang}",
            div { class: "container about__inner",
                div { class: "about__media",
                    img { class: "about__image", src: "{image}", alt: t!("about-image-alt") }
                    div { class: "about__stat",
                        div { class: "about__stat-row",
                            span { class: "about__stat-value", "10+" }
                            span { class: "about__stat-label", {t!("about-years-label")} }
                        }
                        div { class: "about__stat-track",
                            div { class: "about__stat-fill" }
                        }
                    }
                }

                div { class: "about__copy",
                    h4 { class: "about__eyebrow", {t!("about-eyebrow")} }
                    h2 { class: "about__title", {t!("about-title")} }
                    p { class: "about__body", {t!("about-body")} }
                    ul { class: "about__points",
                        for (idx, point) in points.into_iter().enumerate() {
                            li { key: "{idx}", class: "about__point",
                                Icon { kind: IconKind::CheckCircle, class: "about__check" }
                                span { "{point}" }
                            }
                        }
                    }
                    button { r#type: "button", class: "button button--primary",
                        {t!("about-cta")}
                    }
                }
            }
        }
    }
}
