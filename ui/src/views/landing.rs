use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::core::catalog::Storefront;
use crate::session::{use_language, use_session};

use super::{AboutSection, Features, Footer, Hero, NewsletterCta, ProductsSection};

#[cfg(debug_assertions)]
fn log_landing_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    debug!(lang, "landing render");
}

/// The whole storefront page. The only writer of the session cart; everything
/// else is derived from the [`Storefront`] in context (falls back to the
/// seeded one).
#[component]
pub fn Landing() -> Element {
    let store = try_use_context::<Storefront>().unwrap_or_default();
    let session = use_session();
    let lang_current = use_language();

    #[cfg(debug_assertions)]
    {
        log_landing_render(&lang_current);
    }

    let cart = session.cart;
    let on_add = move |_: ()| session.add_to_cart();

    rsx! {
        div { class: "page page-landing", lang: "{lang_current}",
            AppNavbar {
                cart: cart(),
                brand_primary: store.brand_primary.clone(),
                brand_accent: store.brand_accent.clone(),
                scroll_threshold: store.scroll_threshold,
            }
            Hero { background: store.hero_image.clone() }
            Features {}
            ProductsSection {
                catalog: store.catalog.clone(),
                categories: store.filter_categories.clone(),
                on_add,
            }
            AboutSection { image: store.about_image.clone() }
            NewsletterCta {}
            Footer {
                brand_primary: store.brand_primary.clone(),
                brand_accent: store.brand_accent.clone(),
                contact: store.contact.clone(),
            }
        }
    }
}
