//! Shared UI crate for the TâyNguyên Farm storefront. State, derivations and
//! every page section live here; platform crates only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod session;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{AppNavbar, BrandMark};

    pub mod icons;
    pub use icons::{Icon, IconKind};

    mod product_card;
    pub use product_card::ProductCard;
}

/// Shared theme stylesheet (ui/assets/theme/main.css).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
