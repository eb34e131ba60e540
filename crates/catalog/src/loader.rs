//! CSV loader for the movie catalog.
//!
//! Schema policy:
//! - `title` and `genres` are required columns; their absence is fatal
//!   (there is nothing to recommend from without them).
//! - `rating`, `runtime`, `streaming_services`, `poster_url` and `imdb_url`
//!   are optional. A missing column, a blank cell or an unparsable value all
//!   resolve to a per-row default; rows are never rejected.
//!
//! Defaults are applied exactly once here, so downstream code never has to
//! re-check for absent fields.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, DEFAULT_RUNTIME_MINUTES, Movie};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Column positions resolved once from the header row
struct ColumnMap {
    title: usize,
    genres: usize,
    rating: Option<usize>,
    runtime: Option<usize>,
    services: Option<usize>,
    poster_url: Option<usize>,
    imdb_url: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| CatalogError::MissingColumn {
                column: name.to_string(),
            })
        };
        Ok(Self {
            title: require("title")?,
            genres: require("genres")?,
            rating: find("rating"),
            runtime: find("runtime"),
            services: find("streaming_services"),
            poster_url: find("poster_url"),
            imdb_url: find("imdb_url"),
        })
    }
}

impl Catalog {
    /// Load the catalog from a CSV file on disk.
    ///
    /// This is the main entry point for loading data.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the catalog from any CSV reader.
    ///
    /// # Returns
    /// * `Ok(Catalog)` - the loaded catalog, in dataset row order
    /// * `Err` - only for structural defects: I/O failure, a malformed CSV,
    ///   a missing required column, or an empty dataset
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let columns = ColumnMap::from_headers(csv_reader.headers()?)?;

        let mut movies = Vec::new();
        for (idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            movies.push(parse_row(&columns, &record, idx + 1));
        }

        if movies.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        info!("Loaded {} movies", movies.len());
        Ok(Catalog::from_movies(movies))
    }
}

/// Build one movie from a CSV record, defaulting every optional field.
///
/// `row` is the 1-based data row number, used only for log context.
fn parse_row(columns: &ColumnMap, record: &StringRecord, row: usize) -> Movie {
    let field = |col: Option<usize>| col.and_then(|c| record.get(c)).unwrap_or("").trim();

    let rating = match field(columns.rating) {
        "" => 0.0,
        raw => raw.parse().unwrap_or_else(|_| {
            warn!("row {row}: unparsable rating '{raw}', defaulting to 0.0");
            0.0
        }),
    };

    let runtime = match field(columns.runtime) {
        "" => DEFAULT_RUNTIME_MINUTES,
        raw => raw.parse().unwrap_or_else(|_| {
            warn!("row {row}: unparsable runtime '{raw}', defaulting to {DEFAULT_RUNTIME_MINUTES}");
            DEFAULT_RUNTIME_MINUTES
        }),
    };

    let services = field(columns.services)
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Movie {
        title: field(Some(columns.title)).to_string(),
        genres: field(Some(columns.genres)).to_string(),
        rating,
        runtime,
        services,
        poster_url: field(columns.poster_url).to_string(),
        imdb_url: field(columns.imdb_url).to_string(),
    }
}
