use dioxus::prelude::*;

use crate::components::{Icon, IconKind};
use crate::session::use_language;
use crate::t;

struct Feature {
    icon: IconKind,
    tone: &'static str,
    title: String,
    body: String,
}

fn features() -> [Feature; 3] {
    [
        Feature {
            icon: IconKind::Leaf,
            tone: "feature-card__icon--green",
            title: t!("feature-natural-title"),
            body: t!("feature-natural-body"),
        },
        Feature {
            icon: IconKind::Sun,
            tone: "feature-card__icon--yellow",
            title: t!("feature-flavor-title"),
            body: t!("feature-flavor-body"),
        },
        Feature {
            icon: IconKind::Droplet,
            tone: "feature-card__icon--blue",
            title: t!("feature-clean-title"),
            body: t!("feature-clean-body"),
        },
    ]
}

#[component]
pub fn Features() -> Element {
    let lang = use_language();

    rsx! {
        section { class: "features", lang: "{lang}",
            div { class: "container features__grid",
                for (idx, feature) in features().into_iter().enumerate() {
                    div { key: "{idx}", class: "feature-card",
                        div { class: "feature-card__icon-wrap",
                            Icon { kind: feature.icon, class: "feature-card__icon {feature.tone}" }
                        }
                        h3 { class: "feature-card__title", "{feature.title}" }
                        p { class: "feature-card__body", "{feature.body}" }
                    }
                }
            }
        }
    }
}
