//! High-level elevation queries against a directory of GTOPO30 tiles.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dem::DemTile;
use crate::error::Result;
use crate::header::DemHeader;
use crate::tile::{self, TileId};

/// Handle to a directory holding GTOPO30 tile files.
///
/// The directory is expected to contain `<TILE>.HDR` / `<TILE>.DEM` pairs
/// named after the tiles they cover, e.g. `W020N40.HDR` and `W020N40.DEM`.
/// Tiles are opened per query; nothing is cached between calls.
///
/// # Example
///
/// ```ignore
/// use gtopo30::Gtopo30;
///
/// let dem = Gtopo30::new("/data/gtopo30");
/// let elevation = dem.get_elevation(46.8523, -121.7603)?;
/// println!("Mount Rainier: {}m", elevation);
/// ```
pub struct Gtopo30 {
    base_dir: PathBuf,
}

impl Gtopo30 {
    /// Create a handle for the tile files under `base_dir`.
    ///
    /// The directory is not touched until a query runs, so this never fails;
    /// a missing directory surfaces as an error from the query that needs it.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the elevation at the specified coordinates.
    ///
    /// Resolves the covering tile, opens its header and raster from the
    /// handle's directory, and samples the cell containing the point. Cells
    /// without a measurement return the nodata sentinel (-9999 in standard
    /// GTOPO30 tiles); use [`get_elevation_checked`](Self::get_elevation_checked)
    /// to have those mapped to `None` instead.
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in decimal degrees (-90 to 90)
    /// * `lon` - Longitude in decimal degrees (-180 to 180)
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates fall outside the valid range, if
    /// the tile files are missing or unreadable, or if the point resolves to
    /// a cell outside the tile's raster. [`GtopoError::phase`] tells the
    /// stages apart.
    ///
    /// [`GtopoError::phase`]: crate::error::GtopoError::phase
    pub fn get_elevation(&self, lat: f64, lon: f64) -> Result<i16> {
        let tile = tile::locate(lat, lon)?;
        tracing::debug!(lat = lat, lon = lon, tile = %tile, "Resolved tile");

        let dem = self.open_tile(tile)?;
        let elevation = dem.get_elevation(lat, lon)?;
        tracing::debug!(
            lat = lat,
            lon = lon,
            elevation = elevation,
            "Sampled elevation"
        );
        Ok(elevation)
    }

    /// Get the elevation at the specified coordinates, with nodata cells
    /// mapped to `None`.
    ///
    /// A cell matching the nodata value declared by the tile's header (or
    /// the GTOPO30 default of -9999 when the header omits it) yields
    /// `Ok(None)`; every other sample yields `Ok(Some(elevation))`.
    pub fn get_elevation_checked(&self, lat: f64, lon: f64) -> Result<Option<i16>> {
        let tile = tile::locate(lat, lon)?;
        tracing::debug!(lat = lat, lon = lon, tile = %tile, "Resolved tile");

        let dem = self.open_tile(tile)?;
        let elevation = dem.get_elevation(lat, lon)?;
        if dem.header().is_nodata(elevation) {
            Ok(None)
        } else {
            Ok(Some(elevation))
        }
    }

    /// Open the header and raster for `tile` from the handle's directory.
    ///
    /// Useful when many points fall in the same tile: sample the returned
    /// [`DemTile`] directly instead of re-opening it per query.
    ///
    /// # Errors
    ///
    /// Returns an error if the header is missing or malformed, or if the
    /// raster cannot be opened.
    pub fn open_tile(&self, tile: TileId) -> Result<DemTile> {
        let header = DemHeader::from_file(self.base_dir.join(tile.hdr_file_name()))?;
        tracing::trace!(
            tile = %tile,
            nrows = header.nrows,
            ncols = header.ncols,
            "Parsed tile header"
        );
        DemTile::open(self.base_dir.join(tile.dem_file_name()), header)
    }

    /// List the tiles present in the handle's directory, sorted by name.
    ///
    /// A tile counts as present when a `.DEM` file with a recognized tile
    /// name exists; other files are ignored. An unreadable directory yields
    /// an empty list.
    pub fn available_tiles(&self) -> Vec<TileId> {
        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut tiles: Vec<TileId> = entries
            .flatten()
            .filter_map(|entry| {
                let name = entry.file_name();
                let stem = name.to_str()?.strip_suffix(".DEM")?;
                TileId::parse(stem)
            })
            .collect();
        tiles.sort_by_key(|tile| tile.to_string());
        tiles
    }

    /// The directory this handle reads tiles from.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Get the elevation at the specified coordinates from tiles under `base_dir`.
///
/// Convenience wrapper for one-off queries; construct a [`Gtopo30`] handle
/// when issuing more than one.
///
/// # Errors
///
/// Same as [`Gtopo30::get_elevation`].
pub fn get_elevation<P: AsRef<Path>>(lat: f64, lon: f64, base_dir: P) -> Result<i16> {
    Gtopo30::new(base_dir).get_elevation(lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_available_tiles() {
        let dir = TempDir::new().unwrap();
        for name in [
            "W020N40.DEM",
            "E060S10.DEM",
            "W140S60.DEM", // not a real tile, the Antarctic band has no W140
            "FOO.DEM",
            "W020N40.HDR",
            "readme.txt",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let dem = Gtopo30::new(dir.path());
        let names: Vec<String> = dem
            .available_tiles()
            .iter()
            .map(|tile| tile.to_string())
            .collect();
        assert_eq!(names, ["E060S10", "W020N40"]);
    }

    #[test]
    fn test_available_tiles_missing_directory() {
        let dem = Gtopo30::new("/no/such/directory");
        assert!(dem.available_tiles().is_empty());
    }

    #[test]
    fn test_base_dir() {
        let dem = Gtopo30::new("/data/gtopo30");
        assert_eq!(dem.base_dir(), Path::new("/data/gtopo30"));
    }
}
