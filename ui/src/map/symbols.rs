//! Rendered symbol set and its synchronization to the current attribute.
//!
//! One [`RenderedSymbol`] per station, created at load time for month 0 and
//! mutated in place on every index change. [`SymbolSet::sync_to`] is the
//! single choke point: it recomputes every radius and popup, then hands the
//! fresh stats to the caller so the legend redraws from the same pass.

use crate::core::attributes;
use crate::core::dataset::{Dataset, Station};
use crate::core::scaling;
use crate::core::stats::SymbolStats;

/// Popup text for one symbol: station name, month label parsed from the
/// attribute key, and the raw customer count.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub station: String,
    pub month: String,
    pub customers: f64,
}

/// A visual marker bound 1:1 to a station.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSymbol {
    /// Index into the owning set's station list.
    pub station: usize,
    pub radius: f64,
    pub popup: PopupContent,
}

/// The full rendered symbol set plus the data it renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSet {
    stations: Vec<Station>,
    months: Vec<String>,
    symbols: Vec<RenderedSymbol>,
}

impl SymbolSet {
    /// Build symbols for every station at month index 0.
    pub fn new(dataset: Dataset) -> Self {
        let Dataset { stations, months } = dataset;
        let first_key = months.first().map(String::as_str).unwrap_or_default();

        let symbols = stations
            .iter()
            .enumerate()
            .map(|(i, station)| {
                let value = station.value_for(first_key).unwrap_or(0.0);
                RenderedSymbol {
                    station: i,
                    radius: scaling::prop_radius(value),
                    popup: popup_for(station, first_key, value),
                }
            })
            .collect();

        Self {
            stations,
            months,
            symbols,
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn symbols(&self) -> &[RenderedSymbol] {
        &self.symbols
    }

    /// Synchronize every symbol to the attribute at `index` and return the
    /// stats over the values actually found.
    ///
    /// Stations missing the key keep their previous radius and popup. When
    /// *no* station carries the key the set is left untouched and `None`
    /// comes back, so the legend never renders from infinities.
    pub fn sync_to(&mut self, index: usize) -> Option<SymbolStats> {
        let key = self.months.get(index)?.clone();

        let mut values = Vec::with_capacity(self.symbols.len());
        for symbol in &mut self.symbols {
            let station = &self.stations[symbol.station];
            let Some(value) = station.value_for(&key) else {
                continue;
            };
            symbol.radius = scaling::prop_radius(value);
            symbol.popup = popup_for(station, &key, value);
            values.push(value);
        }

        SymbolStats::over(values)
    }
}

fn popup_for(station: &Station, key: &str, value: f64) -> PopupContent {
    PopupContent {
        station: station.name.clone(),
        month: attributes::month_label(key).to_string(),
        customers: value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset;

    fn dataset() -> Dataset {
        dataset::parse(
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": { "type": "Point", "coordinates": [-87.63, 41.88] },
                        "properties": {
                            "StationName": "Lake",
                            "Number": "40260",
                            "January_2018": 10,
                            "February_2018": 90
                        }
                    },
                    {
                        "type": "Feature",
                        "geometry": { "type": "Point", "coordinates": [-87.62, 41.89] },
                        "properties": {
                            "StationName": "Chicago",
                            "Number": "41450",
                            "January_2018": 50
                        }
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn symbols_start_at_month_zero() {
        let set = SymbolSet::new(dataset());
        assert_eq!(set.symbols().len(), 2);
        assert_eq!(set.symbols()[0].radius, scaling::prop_radius(10.0));
        assert_eq!(set.symbols()[0].popup.month, "January");
        assert_eq!(set.symbols()[0].popup.customers, 10.0);
    }

    #[test]
    fn sync_updates_radii_popups_and_stats() {
        let mut set = SymbolSet::new(dataset());
        let stats = set.sync_to(1).unwrap();

        // Only "Lake" carries February; "Chicago" keeps its January state.
        assert_eq!(set.symbols()[0].radius, scaling::prop_radius(90.0));
        assert_eq!(set.symbols()[0].popup.month, "February");
        assert_eq!(set.symbols()[1].popup.month, "January");

        assert_eq!(stats.min, 90.0);
        assert_eq!(stats.max, 90.0);
    }

    #[test]
    fn sync_is_idempotent() {
        let mut set = SymbolSet::new(dataset());
        let first = set.sync_to(0);
        let snapshot = set.symbols().to_vec();
        let second = set.sync_to(0);
        assert_eq!(first, second);
        assert_eq!(set.symbols(), snapshot.as_slice());
    }

    #[test]
    fn out_of_range_index_leaves_set_untouched() {
        let mut set = SymbolSet::new(dataset());
        let snapshot = set.symbols().to_vec();
        assert!(set.sync_to(99).is_none());
        assert_eq!(set.symbols(), snapshot.as_slice());
    }
}
