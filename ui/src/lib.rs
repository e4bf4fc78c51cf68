//! Shared UI crate for Redmap. Cross-platform logic and views live here.

pub mod core;
pub mod map;
pub mod views;

pub mod components {
    // Application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Legend and sequence widgets anchored to the map view.
    pub mod legend;
    pub mod sequence_control;
    pub use legend::Legend;
    pub use sequence_control::SequenceControl;
}
