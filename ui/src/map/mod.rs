//! Map rendering: symbol set, projection, and the SVG canvas component.

pub mod projection;
pub mod symbols;

mod view;
pub use view::MapCanvas;
