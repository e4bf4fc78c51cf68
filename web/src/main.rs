use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{MapView, StationsView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    MapView {},
    #[route("/stations")]
    StationsView {},
}

const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_map(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MapView {},
        "{label}"
    })
}
fn nav_stations(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::StationsView {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        map: nav_map,
        stations: nav_stations,
    });

    rsx! {
        // Shared theme, embedded so web and desktop style identically.
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
