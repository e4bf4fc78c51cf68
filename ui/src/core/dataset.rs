//! Station dataset loading.
//!
//! The source is a GeoJSON FeatureCollection of Point features, one per Red
//! Line station, with `StationName`, `Number`, and twelve monthly ridership
//! counts in its properties. The file ships embedded in this crate so the
//! web and desktop targets share one loader; swapping in an HTTP fetch
//! would only touch [`load`].

use geojson::{FeatureCollection, GeoJson, Value as GeomValue};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

use crate::core::attributes;
use crate::core::error::DataError;

const STATIONS_GEOJSON: &str = include_str!("../../assets/data/cta_red_line.geojson");

/// One station, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub number: Option<u32>,
    pub lon: f64,
    pub lat: f64,
    /// Monthly ridership keyed by attribute key (`"January_2018"` → count).
    pub ridership: HashMap<String, f64>,
}

impl Station {
    /// Ridership for the given attribute key, if this station carries it.
    pub fn value_for(&self, key: &str) -> Option<f64> {
        self.ridership.get(key).copied()
    }

    /// Sum across every monthly key this station carries.
    pub fn annual_total(&self) -> f64 {
        self.ridership.values().sum()
    }
}

/// Parsed station collection plus the canonical attribute-key sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub stations: Vec<Station>,
    /// Ordered monthly keys, taken from the first feature and treated as
    /// canonical for every station.
    pub months: Vec<String>,
}

impl Dataset {
    /// Attribute key at `index`, if in range.
    pub fn month_at(&self, index: usize) -> Option<&str> {
        self.months.get(index).map(String::as_str)
    }
}

/// Load and parse the embedded station dataset.
///
/// Async so the setup sequence suspends until data is available, matching
/// how the views consume it through `use_resource`.
pub async fn load() -> Result<Dataset, DataError> {
    parse(STATIONS_GEOJSON)
}

/// Parse a GeoJSON document into a [`Dataset`].
pub fn parse(raw: &str) -> Result<Dataset, DataError> {
    let geojson =
        GeoJson::from_str(raw).map_err(|err| DataError::DataLoad(err.to_string()))?;
    let collection = FeatureCollection::try_from(geojson)
        .map_err(|err| DataError::DataLoad(err.to_string()))?;

    if collection.features.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let first_properties = collection.features[0]
        .properties
        .as_ref()
        .ok_or(DataError::NoMonths)?;
    let months = attributes::month_keys(first_properties.keys().map(String::as_str))?;

    let mut stations = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        // Point features only; anything else in the file is ignored.
        let (lon, lat) = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(GeomValue::Point(coords)) if coords.len() >= 2 => (coords[0], coords[1]),
            _ => continue,
        };

        let Some(properties) = feature.properties.as_ref() else {
            continue;
        };

        let name = properties
            .get("StationName")
            .and_then(Value::as_str)
            .unwrap_or("Unknown station")
            .to_string();
        let number = properties.get("Number").and_then(numeric_u32);

        let mut ridership = HashMap::with_capacity(months.len());
        for key in properties.keys() {
            if !attributes::is_month_key(key) {
                continue;
            }
            if let Some(count) = properties.get(key).and_then(numeric_f64) {
                ridership.insert(key.clone(), count);
            }
        }

        stations.push(Station {
            name,
            number,
            lon,
            lat,
            ridership,
        });
    }

    Ok(Dataset { stations, months })
}

/// Numeric coercion: the source stores some numbers as JSON strings.
fn numeric_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn numeric_u32(value: &Value) -> Option<u32> {
    numeric_f64(value).map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-87.6303, 41.8807] },
                "properties": {
                    "StationName": "Lake",
                    "Number": "40260",
                    "January_2018": 312000,
                    "February_2018": "289500",
                    "December_2018": 301250
                }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-87.628, 41.8963] },
                "properties": {
                    "StationName": "Chicago",
                    "Number": "41450",
                    "January_2018": 268400,
                    "February_2018": 250100,
                    "December_2018": 255800
                }
            }
        ]
    }"#;

    #[test]
    fn parses_stations_and_canonical_months() {
        let dataset = parse(FIXTURE).unwrap();
        assert_eq!(dataset.stations.len(), 2);
        assert_eq!(
            dataset.months,
            vec!["January_2018", "February_2018", "December_2018"]
        );

        let lake = &dataset.stations[0];
        assert_eq!(lake.name, "Lake");
        assert_eq!(lake.number, Some(40260));
        assert_eq!(lake.lon, -87.6303);
        // String-encoded counts coerce like numeric ones.
        assert_eq!(lake.value_for("February_2018"), Some(289500.0));
        assert_eq!(lake.value_for("March_2018"), None);
    }

    #[test]
    fn empty_collection_is_rejected() {
        let raw = r#"{ "type": "FeatureCollection", "features": [] }"#;
        assert_eq!(parse(raw), Err(DataError::EmptyDataset));
    }

    #[test]
    fn garbage_input_is_a_load_error() {
        assert!(matches!(parse("not geojson"), Err(DataError::DataLoad(_))));
    }

    #[test]
    fn annual_total_sums_monthly_keys() {
        let dataset = parse(FIXTURE).unwrap();
        let lake = &dataset.stations[0];
        assert_eq!(lake.annual_total(), 312000.0 + 289500.0 + 301250.0);
    }

    #[test]
    fn embedded_dataset_parses() {
        let dataset = parse(STATIONS_GEOJSON).unwrap();
        assert_eq!(dataset.months.len(), 12);
        assert!(!dataset.stations.is_empty());
    }
}
