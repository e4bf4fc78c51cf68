use dioxus::prelude::*;

use crate::core::attributes;
use crate::core::format;
use crate::core::scaling;
use crate::core::stats::SymbolStats;

const LEGEND_W: f64 = 230.0;
const LEGEND_H: f64 = 120.0;
/// Shared baseline the three circles sit on.
const BASELINE: f64 = 100.0;
const CIRCLE_X: f64 = 80.0;
const TEXT_X: f64 = 150.0;

struct LegendRow {
    label: &'static str,
    radius: f64,
    cy: f64,
    text_y: f64,
    text: String,
}

/// Three labeled circles — max, mean, min — drawn at the same scale as the
/// map symbols so the legend reads directly against them. Each circle's
/// vertical offset comes from its own radius, keeping all three tangent to
/// one baseline.
#[component]
pub fn Legend(month_key: String, stats: SymbolStats) -> Element {
    let title = attributes::month_title(&month_key);

    // Fixed text rows, matching the circle order top to bottom.
    let rows: Vec<LegendRow> = [
        ("max", stats.max, 50.0),
        ("mean", stats.mean, 75.0),
        ("min", stats.min, 99.0),
    ]
    .into_iter()
    .map(|(label, value, text_y)| {
        let radius = scaling::prop_radius(value);
        LegendRow {
            label,
            radius,
            cy: BASELINE - radius,
            text_y,
            text: format::format_legend_value(value),
        }
    })
    .collect();

    rsx! {
        div { class: "legend-control",
            div { class: "legend-control__title",
                strong { "Station Customers" }
                br {}
                "{title}"
            }
            svg {
                class: "legend-control__svg",
                width: "{LEGEND_W}",
                height: "{LEGEND_H}",

                for row in rows {
                    circle {
                        key: "circle-{row.label}",
                        class: "legend-control__circle",
                        cx: "{CIRCLE_X}",
                        cy: "{row.cy}",
                        r: "{row.radius}",
                        fill: "#C70039",
                        fill_opacity: "0.6",
                        stroke: "#fff",
                        stroke_width: "1",
                    }
                    text {
                        key: "text-{row.label}",
                        class: "legend-control__text",
                        x: "{TEXT_X}",
                        y: "{row.text_y}",
                        "{row.text}"
                    }
                }
            }
        }
    }
}
