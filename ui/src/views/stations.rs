use dioxus::prelude::*;

use crate::core::attributes;
use crate::core::dataset::{self, Dataset, Station};
use crate::core::format;

/// Tabular per-station summary: number, busiest and quietest month, and the
/// annual total across the twelve attribute keys.
#[component]
pub fn StationsView() -> Element {
    let data = use_resource(|| dataset::load());

    rsx! {
        section { class: "page page-stations",
            h1 { "Stations" }
            p { "Every Red Line station in the dataset, with its CTA station number and 2018 ridership extremes." }

            match &*data.read() {
                Some(Ok(dataset)) => render_table(dataset),
                Some(Err(err)) => rsx! {
                    div { class: "page-map__banner", role: "alert", "⚠️ {err}" }
                },
                None => rsx! {
                    p { class: "page-map__placeholder", "Loading station data…" }
                },
            }
        }
    }
}

struct StationRow {
    number: String,
    name: String,
    busiest: String,
    quietest: String,
    total: String,
}

fn render_table(dataset: &Dataset) -> Element {
    let rows: Vec<StationRow> = dataset
        .stations
        .iter()
        .map(|station| station_row(station, &dataset.months))
        .collect();

    rsx! {
        table { class: "stations-table",
            thead {
                tr {
                    th { "#" }
                    th { "Station" }
                    th { "Busiest month" }
                    th { "Quietest month" }
                    th { "2018 total" }
                }
            }
            tbody {
                for row in rows {
                    tr { key: "{row.number}-{row.name}",
                        td { class: "stations-table__number", "{row.number}" }
                        td { class: "stations-table__name", "{row.name}" }
                        td { "{row.busiest}" }
                        td { "{row.quietest}" }
                        td { class: "stations-table__total", "{row.total}" }
                    }
                }
            }
        }
    }
}

fn station_row(station: &Station, months: &[String]) -> StationRow {
    let extreme = |pick_max: bool| -> String {
        let candidates = months
            .iter()
            .filter_map(|key| station.value_for(key).map(|value| (key, value)));
        let found = if pick_max {
            candidates.max_by(|a, b| a.1.total_cmp(&b.1))
        } else {
            candidates.min_by(|a, b| a.1.total_cmp(&b.1))
        };
        match found {
            Some((key, value)) => format!(
                "{} ({})",
                attributes::month_label(key),
                format::format_count(value)
            ),
            None => "—".to_string(),
        }
    };

    StationRow {
        number: station
            .number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "—".to_string()),
        name: station.name.clone(),
        busiest: extreme(true),
        quietest: extreme(false),
        total: format::format_count(station.annual_total()),
    }
}
