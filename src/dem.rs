//! GTOPO30 raster access.
//!
//! This module provides [`DemTile`] for memory-mapping a `.DEM` raster and
//! resolving geographic coordinates to elevation samples.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{GtopoError, Result};
use crate::header::DemHeader;

/// Sample value conventionally written where a GTOPO30 cell holds no
/// measurement, typically open ocean.
pub const NODATA: i16 = -9999;

/// A memory-mapped GTOPO30 elevation raster.
///
/// # Example
///
/// ```ignore
/// use gtopo30::{DemHeader, DemTile};
///
/// let header = DemHeader::from_file("/data/gtopo30/W020N40.HDR")?;
/// let tile = DemTile::open("/data/gtopo30/W020N40.DEM", header)?;
/// let elevation = tile.get_elevation(0.5, 6.5)?;
/// println!("Elevation: {}m", elevation);
/// ```
pub struct DemTile {
    /// Memory-mapped raster data.
    data: Mmap,
    /// Geometry the raster was opened with.
    header: DemHeader,
}

impl DemTile {
    /// Open and memory-map a `.DEM` raster described by `header`.
    ///
    /// The file may be longer than the raster; trailing bytes are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header does not describe a usable grid (non-positive
    ///   dimensions or pixel sizes)
    /// - The file cannot be opened or memory-mapped
    /// - The file holds fewer than `nrows * ncols` 16-bit samples
    pub fn open<P: AsRef<Path>>(path: P, header: DemHeader) -> Result<Self> {
        let path = path.as_ref();

        let usable = header.nrows > 0
            && header.ncols > 0
            && header.xdim > 0.0
            && header.ydim > 0.0;
        if !usable {
            return Err(GtopoError::InvalidGeometry {
                nrows: header.nrows,
                ncols: header.ncols,
                xdim: header.xdim,
                ydim: header.ydim,
            });
        }

        let file = File::open(path).map_err(|source| GtopoError::DemIo {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: Memory mapping is safe as long as the file is not modified
        // while mapped. We open the file read-only and don't expose the mapping.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| GtopoError::DemIo {
            path: path.to_path_buf(),
            source,
        })?;

        let expected = (header.nrows as u64)
            .saturating_mul(header.ncols as u64)
            .saturating_mul(2);
        if (mmap.len() as u64) < expected {
            return Err(GtopoError::TruncatedDem {
                path: path.to_path_buf(),
                expected,
                actual: mmap.len() as u64,
            });
        }

        Ok(Self { data: mmap, header })
    }

    /// Get the elevation at the specified coordinates.
    ///
    /// The cell is selected by flooring the coordinate's offset from the
    /// upper-left map position; no interpolation is performed. A cell
    /// holding the nodata sentinel is returned as-is.
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in decimal degrees
    /// * `lon` - Longitude in decimal degrees
    ///
    /// # Errors
    ///
    /// Returns [`GtopoError::OutOfBounds`] if the coordinates resolve to a
    /// cell outside the raster.
    pub fn get_elevation(&self, lat: f64, lon: f64) -> Result<i16> {
        let header = &self.header;

        let col = ((lon - header.ulxmap) / header.xdim).floor();
        let row = ((header.ulymap - lat) / header.ydim).floor();

        // Bounds-check in f64; a NaN coordinate fails here
        let inside =
            col >= 0.0 && col < header.ncols as f64 && row >= 0.0 && row < header.nrows as f64;
        if !inside {
            return Err(GtopoError::OutOfBounds {
                lat,
                lon,
                row: row as i64,
                col: col as i64,
                nrows: header.nrows,
                ncols: header.ncols,
            });
        }

        // 2 bytes per sample, row-major from the upper-left corner
        let offset = (row as usize * header.ncols as usize + col as usize) * 2;
        Ok(i16::from_be_bytes([self.data[offset], self.data[offset + 1]]))
    }

    /// The header this raster was opened with.
    pub fn header(&self) -> &DemHeader {
        &self.header
    }
}
