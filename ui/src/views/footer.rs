use dioxus::prelude::*;

use crate::components::app_navbar::{SECTION_ABOUT, SECTION_CONTACT, SECTION_HOME, SECTION_PRODUCTS};
use crate::components::{BrandMark, Icon, IconKind};
use crate::core::catalog::ContactInfo;
use crate::core::format::current_year;
use crate::session::use_language;
use crate::t;

#[component]
pub fn Footer(brand_primary: String, brand_accent: String, contact: ContactInfo) -> Element {
    let lang = use_language();
    let quick_links = [
        (format!("#{SECTION_HOME}"), t!("nav-home")),
        (format!("#{SECTION_PRODUCTS}"), t!("nav-products")),
        (format!("#{SECTION_ABOUT}"), t!("nav-about")),
        ("#".to_string(), t!("footer-privacy")),
        ("#".to_string(), t!("footer-terms")),
    ];
    let product_links = [
        t!("footer-product-robusta"),
        t!("footer-product-arabica"),
        t!("footer-product-macadamia"),
        t!("footer-product-pepper"),
        t!("footer-product-honey"),
    ];
    let copyright = t!("footer-copyright", year = current_year().to_string());

    rsx! {
        footer { id: SECTION_CONTACT, class: "footer", lang: "{lang}",
            div { class: "container",
                div { class: "footer__grid",
                    div { class: "footer__brand",
                        BrandMark { primary: brand_primary, accent: brand_accent }
                        p { class: "footer__tagline", {t!("footer-tagline")} }
                        div { class: "footer__socials",
                            a { class: "footer__social", href: "#", aria_label: "Facebook",
                                Icon { kind: IconKind::Facebook, class: "icon--sm" }
                            }
                            a { class: "footer__social", href: "#", aria_label: "Instagram",
                                Icon { kind: IconKind::Instagram, class: "icon--sm" }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer__heading", {t!("footer-quick-links")} }
                        ul { class: "footer__list",
                            for (idx, (href, label)) in quick_links.into_iter().enumerate() {
                                li { key: "{idx}",
                                    a { class: "footer__link", href: "{href}", "{label}" }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer__heading", {t!("footer-products-heading")} }
                        ul { class: "footer__list",
                            for (idx, label) in product_links.into_iter().enumerate() {
                                li { key: "{idx}",
                                    a { class: "footer__link", href: "#", "{label}" }
                                }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer__heading", {t!("footer-contact-heading")} }
                        ul { class: "footer__list footer__contact",
                            li { class: "footer__contact-item",
                                Icon { kind: IconKind::MapPin, class: "footer__contact-icon" }
                                span { "{contact.address}" }
                            }
                            li { class: "footer__contact-item",
                                Icon { kind: IconKind::Phone, class: "footer__contact-icon" }
                                span { "{contact.phone}" }
                            }
                            li { class: "footer__contact-item",
                                Icon { kind: IconKind::Mail, class: "footer__contact-icon" }
                                span { "{contact.email}" }
                            }
                        }
                    }
                }

                div { class: "footer__bottom",
                    p { "{copyright}" }
                }
            }
        }
    }
}
