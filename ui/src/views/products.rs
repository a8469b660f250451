use dioxus::prelude::*;

use crate::components::app_navbar::SECTION_PRODUCTS;
use crate::components::{Icon, IconKind, ProductCard};
use crate::core::catalog::Catalog;
use crate::core::filter::{filter_tabs, visible_products, FilterSelection};
use crate::session::{use_language, use_session};
use crate::t;

/// Featured products: filter tabs over a card grid. The only writer of the
/// session's filter selection; add-to-cart clicks are forwarded through `on_add`.
#[component]
pub fn ProductsSection(
    catalog: Catalog,
    categories: Vec<String>,
    on_add: EventHandler<()>,
) -> Element {
    let session = use_session();
    let lang = use_language();

    let filter = session.filter;
    let current = filter();
    let all_label = t!("products-filter-all");
    let tabs: Vec<(FilterSelection, String, bool, &'static str)> = filter_tabs(&categories, &current)
        .into_iter()
        .map(|tab| {
            let label = match &tab.selection {
                FilterSelection::All => all_label.clone(),
                FilterSelection::Category(category) => category.clone(),
            };
            let state = if tab.active { "filter-tab--active" } else { "" };
            (tab.selection, label, tab.active, state)
        })
        .collect();
    let visible: Vec<_> = visible_products(&catalog, &current)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section { id: SECTION_PRODUCTS, class: "products", lang: "{lang}",
            div { class: "container",
                div { class: "section-heading",
                    h2 { class: "section-heading__title", {t!("products-title")} }
                    div { class: "section-heading__rule" }
                    p { class: "section-heading__intro", {t!("products-intro")} }
                }

                div { class: "products__filters", role: "tablist",
                    for (next, label, active, state) in tabs.into_iter() {
                        button {
                            key: "{label}",
                            r#type: "button",
                            role: "tab",
                            aria_selected: "{active}",
                            class: "filter-tab {state}",
                            onclick: move |_| session.select(next.clone()),
                            "{label}"
                        }
                    }
                }

                div { class: "products__grid",
                    for product in visible.into_iter() {
                        ProductCard { key: "{product.id}", product, on_add }
                    }
                }

                div { class: "products__more",
                    button { r#type: "button", class: "link-button",
                        {t!("products-view-all")}
                        Icon { kind: IconKind::ArrowRight, class: "icon--sm" }
                    }
                }
            }
        }
    }
}
