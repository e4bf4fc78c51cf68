//! Legend statistics over the rendered symbol set.

use serde::{Deserialize, Serialize};

/// Min / mean / max over the values currently on display.
///
/// `mean` is the midpoint of the extremes, `(min + max) / 2`, not an
/// arithmetic average of all values. The legend's middle circle has always
/// been anchored to that midpoint and downstream expectations depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SymbolStats {
    /// Aggregate over the given values, ignoring non-finite entries.
    ///
    /// Returns `None` when no finite value remains, so a missing attribute
    /// key degrades to "no stats" rather than a ±∞ legend.
    pub fn over<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;

        for value in values {
            if !value.is_finite() {
                continue;
            }
            seen = true;
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
        }

        if !seen {
            return None;
        }

        Some(Self {
            min,
            max,
            mean: (min + max) / 2.0,
        })
    }
}
