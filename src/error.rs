//! Error types for the GTOPO30 library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline phase in which a query failed.
///
/// Every [`GtopoError`] belongs to exactly one phase, so callers can tell
/// which stage of a query went wrong without matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    /// Mapping coordinates to a tile id.
    Locate,
    /// Reading and parsing the `.HDR` descriptor.
    Header,
    /// Resolving a cell in the `.DEM` raster.
    Sample,
}

impl fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryPhase::Locate => "locate",
            QueryPhase::Header => "header",
            QueryPhase::Sample => "sample",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when querying GTOPO30 data.
#[derive(Error, Debug)]
pub enum GtopoError {
    /// No GTOPO30 tile covers the coordinates.
    #[error("Coordinates out of range: lat={lat}, lon={lon} (valid: lat ±90°, lon ±180°)")]
    OutOfRange { lat: f64, lon: f64 },

    /// The `.HDR` descriptor could not be read.
    #[error("Header IO error reading {path}: {source}")]
    HeaderIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recognized header key holds a value that does not parse.
    #[error("Malformed header field {key}: {value:?}")]
    MalformedField { key: &'static str, value: String },

    /// The `.DEM` raster could not be opened or mapped.
    #[error("DEM IO error reading {path}: {source}")]
    DemIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header does not describe a sampleable grid.
    #[error("Invalid tile geometry: nrows={nrows}, ncols={ncols}, xdim={xdim}, ydim={ydim}")]
    InvalidGeometry {
        nrows: i64,
        ncols: i64,
        xdim: f64,
        ydim: f64,
    },

    /// The `.DEM` file is shorter than the raster its header describes.
    #[error("Truncated DEM file {path}: {actual} bytes (raster needs {expected})")]
    TruncatedDem {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// The coordinates resolve to a cell outside the tile's grid.
    #[error(
        "Coordinates out of tile bounds: lat={lat}, lon={lon} resolves to cell \
         ({row}, {col}) in a {nrows}x{ncols} grid"
    )]
    OutOfBounds {
        lat: f64,
        lon: f64,
        row: i64,
        col: i64,
        nrows: i64,
        ncols: i64,
    },
}

impl GtopoError {
    /// The query pipeline phase this error belongs to.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtopo30::{GtopoError, QueryPhase};
    ///
    /// let err = GtopoError::OutOfRange { lat: 91.0, lon: 0.0 };
    /// assert_eq!(err.phase(), QueryPhase::Locate);
    /// ```
    pub fn phase(&self) -> QueryPhase {
        match self {
            GtopoError::OutOfRange { .. } => QueryPhase::Locate,
            GtopoError::HeaderIo { .. } | GtopoError::MalformedField { .. } => QueryPhase::Header,
            GtopoError::DemIo { .. }
            | GtopoError::InvalidGeometry { .. }
            | GtopoError::TruncatedDem { .. }
            | GtopoError::OutOfBounds { .. } => QueryPhase::Sample,
        }
    }
}

/// Result type alias using [`GtopoError`].
pub type Result<T> = std::result::Result<T, GtopoError>;
