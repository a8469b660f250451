use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::core::catalog::Product;
use crate::core::format::{format_price, format_rating};
use crate::t;

#[component]
pub fn ProductCard(product: Product, on_add: EventHandler<()>) -> Element {
    let price = format_price(product.price);
    let rating = format_rating(product.rating);

    rsx! {
        article { class: "product-card",
            div { class: "product-card__media",
                img {
                    class: "product-card__image",
                    src: "{product.image}",
                    alt: "{product.name}",
                    loading: "lazy",
                }
                span { class: "product-card__category", "{product.category}" }
            }
            div { class: "product-card__body",
                div { class: "product-card__rating",
                    Icon { kind: IconKind::Star, class: "product-card__star" }
                    span { "{rating}" }
                }
                h3 { class: "product-card__name", "{product.name}" }
                div { class: "product-card__footer",
                    span { class: "product-card__price", "{price}" }
                    button {
                        r#type: "button",
                        class: "product-card__add",
                        aria_label: t!("products-add-label"),
                        onclick: move |_| on_add.call(()),
                        Icon { kind: IconKind::ShoppingCart }
                    }
                }
            }
        }
    }
}
