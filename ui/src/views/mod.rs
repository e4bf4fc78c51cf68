mod map;
pub use map::MapView;

mod stations;
pub use stations::StationsView;
