use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// If no builder is registered, `AppNavbar` falls back to any raw
/// `children` passed in.
pub struct NavBuilder {
    pub map: fn(label: &str) -> Element,
    pub stations: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        let map = (b.map)("Map");
        let stations = (b.stations)("Stations");

        rsx! {
            nav { class: "navbar__links",
                {map}
                {stations}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-mark", "Redmap" }
                    }
                    span { class: "navbar__brand-subtitle", "Red Line ridership, month by month" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
