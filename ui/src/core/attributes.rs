//! Attribute-key recognition and extraction.
//!
//! The dataset encodes its time series as one property per month
//! (`"January_2018"`, `"February_2018"`, …) alongside non-temporal
//! properties like `StationName`. The ordered key sequence taken from the
//! *first* feature is treated as canonical for the whole collection.

use crate::core::error::DataError;

/// Canonical month names, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Whether a property key is a monthly time-series bucket.
///
/// A key qualifies when it is exactly a month name, or a month name
/// followed by `_` and a year suffix. Each of the twelve names is tested
/// individually; `"Mayfair"` or `"Number"` never qualify.
pub fn is_month_key(key: &str) -> bool {
    MONTH_NAMES.iter().any(|month| {
        key == *month
            || key
                .strip_prefix(month)
                .is_some_and(|rest| rest.starts_with('_'))
    })
}

/// Extract the ordered monthly attribute keys from an iterator over the
/// first feature's property names.
///
/// Key order is preserved as it appears in the source. Fails with
/// [`DataError::NoMonths`] when nothing qualifies.
pub fn month_keys<'a, I>(property_names: I) -> Result<Vec<String>, DataError>
where
    I: IntoIterator<Item = &'a str>,
{
    let keys: Vec<String> = property_names
        .into_iter()
        .filter(|key| is_month_key(key))
        .map(str::to_string)
        .collect();

    if keys.is_empty() {
        Err(DataError::NoMonths)
    } else {
        Ok(keys)
    }
}

/// Month portion of an attribute key (`"January_2018"` → `"January"`).
pub fn month_label(key: &str) -> &str {
    key.split('_').next().unwrap_or(key)
}

/// Display title for an attribute key (`"January_2018"` → `"January 2018"`).
pub fn month_title(key: &str) -> String {
    match key.split_once('_') {
        Some((month, year)) => format!("{month} {year}"),
        None => key.to_string(),
    }
}
