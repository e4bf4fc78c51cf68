use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::{Legend, SequenceControl};
use crate::core::dataset;
use crate::core::sequence::SequenceController;
use crate::core::stats::SymbolStats;
use crate::map::symbols::SymbolSet;
use crate::map::MapCanvas;

/// User intent funneled into the sequencing coroutine.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MapEvent {
    Advance,
    Retreat,
    SetIndex(usize),
}

/// The main page: proportional-symbol map, sequence slider, and legend.
///
/// All index transitions run through one `SequenceController` owned by the
/// coroutine below; its observer rewrites the symbol set and legend stats
/// synchronously on every change, so the slider, symbols, and legend can
/// never show different months.
#[component]
pub fn MapView() -> Element {
    let symbols = use_signal(|| Option::<SymbolSet>::None);
    let stats = use_signal(|| Option::<SymbolStats>::None);
    let months = use_signal(Vec::<String>::new);
    let index = use_signal(|| 0usize);
    let banner = use_signal(|| Option::<String>::None);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<MapEvent>| {
        let mut symbols = symbols;
        let mut stats = stats;
        let mut months = months;
        let mut index = index;
        let mut banner = banner;

        async move {
            // One-time setup: nothing below initializes if the load fails.
            let dataset = match dataset::load().await {
                Ok(dataset) => dataset,
                Err(err) => {
                    banner.set(Some(err.to_string()));
                    return;
                }
            };

            months.set(dataset.months.clone());
            let month_count = dataset.months.len();

            let mut set = SymbolSet::new(dataset);
            let initial = set.sync_to(0);
            symbols.set(Some(set));
            stats.set(initial);

            let mut controller = SequenceController::new(month_count);
            controller.subscribe(Box::new(move |i| {
                index.set(i);
                let mut synced = None;
                symbols.with_mut(|slot| {
                    if let Some(set) = slot.as_mut() {
                        synced = set.sync_to(i);
                    }
                });
                match synced {
                    Some(fresh) => {
                        stats.set(Some(fresh));
                        banner.set(None);
                    }
                    // Keep the previous legend rather than drawing from
                    // infinities; just surface the gap.
                    None => banner.set(Some(
                        "No ridership data for the selected month.".to_string(),
                    )),
                }
            }));

            while let Some(event) = rx.next().await {
                let transition = match event {
                    MapEvent::Advance => {
                        controller.advance();
                        Ok(())
                    }
                    MapEvent::Retreat => {
                        controller.retreat();
                        Ok(())
                    }
                    MapEvent::SetIndex(i) => controller.set_index(i).map(|_| ()),
                };
                if let Err(err) = transition {
                    banner.set(Some(err.to_string()));
                }
            }
        }
    });

    let month_keys = months();
    let current_index = index();
    let current_month = month_keys.get(current_index).cloned();
    let banner_text = banner();

    let legend = match (current_month, stats()) {
        (Some(month_key), Some(stats)) => Some(rsx! {
            Legend { month_key, stats }
        }),
        _ => None,
    };

    rsx! {
        section { class: "page page-map",
            div { class: "page-map__header",
                h1 { "Red Line ridership" }
                p { "Monthly customers per station, 2018. Symbol area is proportional to the count; hover a station for details." }
            }

            if let Some(message) = banner_text {
                div { class: "page-map__banner", role: "alert", "⚠️ {message}" }
            }

            match symbols() {
                Some(set) => rsx! {
                    div { class: "page-map__layout",
                        MapCanvas { set }

                        aside { class: "page-map__side",
                            {legend}
                            SequenceControl {
                                index: current_index,
                                len: month_keys.len(),
                                on_retreat: move |_| coroutine.send(MapEvent::Retreat),
                                on_advance: move |_| coroutine.send(MapEvent::Advance),
                                on_set: move |i| coroutine.send(MapEvent::SetIndex(i)),
                            }
                        }
                    }
                },
                None => rsx! {
                    p { class: "page-map__placeholder", "Loading station data…" }
                },
            }
        }
    }
}
