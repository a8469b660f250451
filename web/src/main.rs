use dioxus::prelude::*;

use ui::core::catalog::Storefront;
use ui::session::Session;
use ui::views::Landing;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Cart, filter and language code for the whole visit; the navbar's
    // locale switcher writes the language.
    use_context_provider(Session::new);
    use_context_provider(Storefront::seeded);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Landing {}
    }
}
