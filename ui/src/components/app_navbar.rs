use crate::components::icons::{Icon, IconKind};
use crate::core::cart::CartCounter;
use crate::core::platform::use_is_scrolled;
use crate::i18n;
use crate::session::use_session;
use crate::t;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

// Navbar stylesheet (also inlined for release native builds, which have no asset server)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// In-page anchors, in display order.
pub const SECTION_HOME: &str = "home";
pub const SECTION_PRODUCTS: &str = "products";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_CONTACT: &str = "contact";

/// (anchor, localized label) for each navbar entry.
pub fn nav_links() -> [(&'static str, String); 4] {
    [
        (SECTION_HOME, t!("nav-home")),
        (SECTION_PRODUCTS, t!("nav-products")),
        (SECTION_ABOUT, t!("nav-about")),
        (SECTION_CONTACT, t!("nav-contact")),
    ]
}

/// Brand wordmark shared by the navbar and the footer.
#[component]
pub fn BrandMark(primary: String, accent: String) -> Element {
    rsx! {
        a { class: "brand", href: "#",
            Icon { kind: IconKind::Leaf, class: "brand__icon" }
            span { class: "brand__text",
                "{primary}"
                span { class: "brand__accent", "{accent}" }
            }
        }
    }
}

/// Fixed top navigation: brand, section anchors, cart badge, mobile menu and
/// locale switcher. Turns solid once the page scrolls past `scroll_threshold`.
#[component]
pub fn AppNavbar(
    cart: CartCounter,
    brand_primary: String,
    brand_accent: String,
    scroll_threshold: f64,
) -> Element {
    i18n::init();

    let is_scrolled = use_is_scrolled(scroll_threshold);
    let mut menu_open = use_signal(|| false);

    let session = use_session();
    let current_lang = session.lang;
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if let Err(err) = session.switch_language(&val) {
            warn!(lang = %val, "language switch rejected: {err}");
        }
    };

    let state_class = if is_scrolled() {
        "navbar--scrolled"
    } else {
        "navbar--top"
    };
    let links = nav_links();
    let toggle_icon = if menu_open() {
        IconKind::Close
    } else {
        IconKind::Menu
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar {state_class}", lang: "{current_lang()}",
            div { class: "navbar__inner container",
                BrandMark { primary: brand_primary, accent: brand_accent }

                div { class: "navbar__links",
                    for (anchor, label) in links.iter() {
                        a { key: "{anchor}", class: "navbar__link", href: "#{anchor}", "{label}" }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__cart",
                        aria_label: t!("nav-cart-label"),
                        Icon { kind: IconKind::ShoppingCart }
                        if let Some(count) = cart.badge() {
                            span { class: "navbar__cart-badge", "{count}" }
                        }
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_label: t!("nav-menu-toggle"),
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| {
                            let open = menu_open();
                            menu_open.set(!open);
                        },
                        Icon { kind: toggle_icon }
                    }
                }
            }

            if menu_open() {
                div { class: "navbar__mobile",
                    for (anchor, label) in links.iter() {
                        a {
                            key: "{anchor}",
                            class: "navbar__mobile-link",
                            href: "#{anchor}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
