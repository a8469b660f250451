//! Inline SVG icon set (24×24 stroke icons, `currentColor`).

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    CheckCircle,
    Droplet,
    Facebook,
    Instagram,
    Leaf,
    Mail,
    MapPin,
    Menu,
    Phone,
    ShoppingCart,
    Star,
    Sun,
    Close,
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
}

use Shape::{Circle, Path, Rect};

impl IconKind {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Self::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Self::CheckCircle => &[
                Circle { cx: 12.0, cy: 12.0, r: 10.0 },
                Path("m9 12 2 2 4-4"),
            ],
            Self::Droplet => &[Path(
                "M12 22a7 7 0 0 0 7-7c0-2-1-3.9-3-5.5s-3.5-4-4-6.5c-.5 2.5-2 4.9-4 6.5C6 11.1 5 13 5 15a7 7 0 0 0 7 7z",
            )],
            Self::Facebook => &[Path(
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            )],
            Self::Instagram => &[
                Rect { x: 2.0, y: 2.0, w: 20.0, h: 20.0, rx: 5.0 },
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Path("M17.5 6.5h.01"),
            ],
            Self::Leaf => &[
                Path("M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"),
                Path("M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"),
            ],
            Self::Mail => &[
                Rect { x: 2.0, y: 4.0, w: 20.0, h: 16.0, rx: 2.0 },
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Self::MapPin => &[
                Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"),
                Circle { cx: 12.0, cy: 10.0, r: 3.0 },
            ],
            Self::Menu => &[Path("M4 6h16"), Path("M4 12h16"), Path("M4 18h16")],
            Self::Phone => &[Path(
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            )],
            Self::ShoppingCart => &[
                Circle { cx: 8.0, cy: 21.0, r: 1.0 },
                Circle { cx: 19.0, cy: 21.0, r: 1.0 },
                Path("M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"),
            ],
            Self::Star => &[Path(
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            )],
            Self::Sun => &[
                Circle { cx: 12.0, cy: 12.0, r: 4.0 },
                Path("M12 2v2"),
                Path("M12 20v2"),
                Path("m4.93 4.93 1.41 1.41"),
                Path("m17.66 17.66 1.41 1.41"),
                Path("M2 12h2"),
                Path("M20 12h2"),
                Path("m6.34 17.66-1.41 1.41"),
                Path("m19.07 4.93-1.41 1.41"),
            ],
            Self::Close => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
        }
    }
}

fn render_shape(shape: Shape) -> Element {
    match shape {
        Path(d) => rsx! { path { d: "{d}" } },
        Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
        Rect { x, y, w, h, rx } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "{rx}" }
        },
    }
}

/// Decorative icon; hidden from assistive tech.
#[component]
pub fn Icon(kind: IconKind, #[props(into, default)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in kind.shapes().iter().copied() {
                {render_shape(shape)}
            }
        }
    }
}
