//! Per-visit page state shared through Dioxus context.
//!
//! The cart, the filter selection and the active language live here instead of
//! inside the section components, so they outlive any remount of the page tree.
//! Launchers provide one [`Session`] at the root; [`use_session`] falls back to
//! a page-local one when nothing was provided.

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use i18n_embed::I18nEmbedError;

use crate::core::cart::CartCounter;
use crate::core::filter::FilterSelection;
use crate::i18n;

#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    pub cart: Signal<CartCounter>,
    pub filter: Signal<FilterSelection>,
    /// Active locale code; components that read it re-render on a switch.
    pub lang: Signal<String>,
}

impl Session {
    /// Must be called inside a component scope (signals are owned by it).
    pub fn new() -> Self {
        Self {
            cart: Signal::new(CartCounter::new()),
            filter: Signal::new(FilterSelection::default()),
            lang: Signal::new(i18n::current_language()),
        }
    }

    pub fn add_to_cart(mut self) {
        self.cart.with_mut(|c| c.add_item());
        debug!(count = self.cart.peek().count(), "item added to cart");
    }

    pub fn select(mut self, selection: FilterSelection) {
        debug!(selection = selection.label(), "filter changed");
        self.filter.set(selection);
    }

    /// Switch the Fluent loader, then publish the new code to subscribers.
    /// The signal is left untouched when the loader rejects `tag`.
    pub fn switch_language(mut self, tag: &str) -> Result<(), I18nEmbedError> {
        i18n::set_language(tag)?;
        debug!(lang = tag, "language switched");
        self.lang.set(tag.to_string());
        Ok(())
    }
}

/// The session from context, or a fresh one owned by the calling component.
pub fn use_session() -> Session {
    use_hook(|| try_consume_context::<Session>().unwrap_or_else(|| provide_context(Session::new())))
}

/// Subscribe the calling component to language switches and return the active
/// code. Sections render it as their `lang` attribute.
pub fn use_language() -> String {
    let session = use_session();
    let lang = session.lang;
    lang()
}
