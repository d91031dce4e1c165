//! Read-only record store backed by a CSV dataset.
//!
//! The store is constructed once during initialization and passed explicitly
//! to the filter and aggregation layers; nothing mutates it afterwards. Rows
//! are sorted by date at load time and the observed `[min_date, max_date]`
//! bounds are kept alongside them, since the frontend's date picker is bound
//! to exactly that interval.

pub mod error;

pub use error::{StoreError, StoreResult};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::{DateRange, RentalRecord};

/// Columns every dataset file must carry. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 7] = [
    "date",
    "hour",
    "total_count_day",
    "total_count_hour",
    "workingday_day",
    "weather_day",
    "season_day",
];

/// In-memory, read-only view of the bike-sharing dataset.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<RentalRecord>,
    bounds: DateRange,
}

impl RecordStore {
    /// Load the dataset from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the file cannot be opened, a required
    /// column is missing, any row fails type coercion, or the file holds no
    /// rows.
    pub fn from_csv_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Load the dataset from any CSV reader.
    ///
    /// Useful for tests and for callers that already hold the bytes.
    pub fn from_reader<R: Read>(reader: R) -> StoreResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(StoreError::MissingColumn(column.to_string()));
            }
        }

        let records = csv_reader
            .deserialize()
            .collect::<Result<Vec<RentalRecord>, _>>()?;

        Self::from_records(records)
    }

    /// Build a store from already-parsed records: sort by date, compute bounds.
    fn from_records(mut records: Vec<RentalRecord>) -> StoreResult<Self> {
        if records.is_empty() {
            return Err(StoreError::Empty);
        }

        // Stable sort keeps hourly rows in file order within each day.
        records.sort_by_key(|r| r.date);

        let bounds = DateRange::new(
            records.first().map(|r| r.date).unwrap_or_default(),
            records.last().map(|r| r.date).unwrap_or_default(),
        );

        Ok(Self { records, bounds })
    }

    /// All records, sorted by date.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Observed `[min_date, max_date]` interval of the dataset.
    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records. Always false for a loaded store,
    /// since an empty dataset is rejected at load time.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
