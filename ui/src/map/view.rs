use dioxus::prelude::*;

use crate::core::format;
use crate::map::projection::Projection;
use crate::map::symbols::{RenderedSymbol, SymbolSet};

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 760.0;
const PADDING: f64 = 40.0;

const POPUP_W: f64 = 190.0;
const POPUP_H: f64 = 72.0;

/// SVG canvas with one proportional circle per station.
///
/// Hovering a symbol shows its popup, offset above the marker by its own
/// radius; leaving hides it again.
#[component]
pub fn MapCanvas(set: SymbolSet) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let points: Vec<(f64, f64)> = set
        .stations()
        .iter()
        .map(|station| (station.lon, station.lat))
        .collect();
    let projection = Projection::fit(&points, VIEW_W, VIEW_H, PADDING);

    let dots: Vec<SymbolDot> = projection
        .map(|proj| {
            set.symbols()
                .iter()
                .enumerate()
                .map(|(i, symbol)| {
                    let station = &set.stations()[symbol.station];
                    let (cx, cy) = proj.project(station.lon, station.lat);
                    SymbolDot {
                        index: i,
                        cx,
                        cy,
                        radius: symbol.radius,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let popup = hovered().and_then(|i| {
        let dot = dots.iter().find(|dot| dot.index == i)?;
        let symbol = set.symbols().get(i)?;
        Some(popup_box(dot, symbol))
    });

    rsx! {
        div { class: "map-canvas",
            svg {
                class: "map-canvas__svg",
                view_box: "0 0 {VIEW_W} {VIEW_H}",
                preserve_aspect_ratio: "xMidYMid meet",
                role: "img",
                "aria-label": "Red Line station ridership map",

                for dot in dots.iter().copied() {
                    circle {
                        key: "{dot.index}",
                        class: "map-canvas__symbol",
                        cx: "{dot.cx}",
                        cy: "{dot.cy}",
                        r: "{dot.radius}",
                        fill: "#C70039",
                        stroke: "#fff",
                        stroke_width: "2",
                        fill_opacity: "0.5",
                        onmouseenter: move |_| hovered.set(Some(dot.index)),
                        onmouseleave: move |_| hovered.set(None),
                    }
                }

                if let Some(popup) = popup {
                    {render_popup(popup)}
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SymbolDot {
    index: usize,
    cx: f64,
    cy: f64,
    radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct PopupBox {
    x: f64,
    y: f64,
    station: String,
    month: String,
    customers: String,
}

fn popup_box(dot: &SymbolDot, symbol: &RenderedSymbol) -> PopupBox {
    // Anchor above the marker, offset by its radius; keep inside the view.
    let x = (dot.cx - POPUP_W / 2.0).clamp(4.0, VIEW_W - POPUP_W - 4.0);
    let y = (dot.cy - dot.radius - POPUP_H - 8.0).max(4.0);
    PopupBox {
        x,
        y,
        station: symbol.popup.station.clone(),
        month: symbol.popup.month.clone(),
        customers: format::format_count(symbol.popup.customers),
    }
}

fn render_popup(popup: PopupBox) -> Element {
    let text_x = popup.x + 12.0;
    let line1 = popup.y + 22.0;
    let line2 = popup.y + 42.0;
    let line3 = popup.y + 62.0;

    rsx! {
        g { class: "map-canvas__popup",
            rect {
                x: "{popup.x}",
                y: "{popup.y}",
                width: "{POPUP_W}",
                height: "{POPUP_H}",
                rx: "6",
                fill: "#fff",
                stroke: "#C70039",
                stroke_width: "1",
                fill_opacity: "0.95",
            }
            text { class: "map-canvas__popup-title", x: "{text_x}", y: "{line1}",
                "Station: {popup.station}"
            }
            text { class: "map-canvas__popup-line", x: "{text_x}", y: "{line2}",
                "Month: {popup.month}"
            }
            text { class: "map-canvas__popup-line", x: "{text_x}", y: "{line3}",
                "Customers: {popup.customers}"
            }
        }
    }
}
