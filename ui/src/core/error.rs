//! Error taxonomy for dataset loading and sequencing.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DataError {
    /// The GeoJSON source could not be read or parsed.
    #[error("failed to load station data: {0}")]
    DataLoad(String),

    /// The feature collection parsed but holds zero features.
    #[error("station dataset contains no features")]
    EmptyDataset,

    /// The first feature carries no recognizable monthly attribute key.
    #[error("no monthly ridership attributes found on the dataset")]
    NoMonths,

    /// `set_index` was called with an index outside `[0, len)`.
    #[error("attribute index {given} out of range (have {len} months)")]
    InvalidIndex { given: usize, len: usize },
}
