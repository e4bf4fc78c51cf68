#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{MapView, StationsView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    MapView {},
    #[route("/stations")]
    StationsView {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// /assets needed.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(
            WindowBuilder::new()
                .with_title(format!("Redmap – v{}", env!("CARGO_PKG_VERSION")))
                .with_maximized(true),
        ))
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_map(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::MapView {}, "{label}" })
}
fn nav_stations(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::StationsView {}, "{label}" })
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        map: nav_map,
        stations: nav_stations,
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for
        // desktop builds)
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
