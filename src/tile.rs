//! GTOPO30 tile identification.
//!
//! This module maps geographic coordinates to the 33 standard GTOPO30 tiles
//! and converts between tile ids and their paired file names.
//!
//! # Tile Id Format
//!
//! A tile id is 7 characters naming the upper-left corner of the tile's
//! coverage, longitude label first: `W020N40` covers longitudes [-20°, 20°)
//! and latitudes [-10°, 40°). Tiles are 40° wide between 90°N and 60°S and
//! 60° wide in the Antarctic band below 60°S, so the polar ids (`W000S60`
//! and friends) follow a different longitude grid than the rest.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{GtopoError, Result};

/// One longitude slice of a latitude band.
#[derive(Debug)]
struct LonSlice {
    min: f64,
    max: f64,
    label: &'static str,
}

/// One latitude band with its longitude slicing.
#[derive(Debug)]
struct LatBand {
    min: f64,
    max: f64,
    label: &'static str,
    slices: &'static [LonSlice],
}

/// 40°-wide longitude slices used by the three bands north of 60°S.
#[rustfmt::skip]
static MID_SLICES: [LonSlice; 9] = [
    LonSlice { min: -180.0, max: -140.0, label: "W180" },
    LonSlice { min: -140.0, max: -100.0, label: "W140" },
    LonSlice { min: -100.0, max: -60.0, label: "W100" },
    LonSlice { min: -60.0, max: -20.0, label: "W060" },
    LonSlice { min: -20.0, max: 20.0, label: "W020" },
    LonSlice { min: 20.0, max: 60.0, label: "E020" },
    LonSlice { min: 60.0, max: 100.0, label: "E060" },
    LonSlice { min: 100.0, max: 140.0, label: "E100" },
    LonSlice { min: 140.0, max: 180.0, label: "E140" },
];

/// 60°-wide longitude slices used by the Antarctic band.
#[rustfmt::skip]
static POLAR_SLICES: [LonSlice; 6] = [
    LonSlice { min: -180.0, max: -120.0, label: "W180" },
    LonSlice { min: -120.0, max: -60.0, label: "W120" },
    LonSlice { min: -60.0, max: 0.0, label: "W060" },
    LonSlice { min: 0.0, max: 60.0, label: "W000" },
    LonSlice { min: 60.0, max: 120.0, label: "E060" },
    LonSlice { min: 120.0, max: 180.0, label: "E120" },
];

/// The four latitude bands, northernmost first.
#[rustfmt::skip]
static LAT_BANDS: [LatBand; 4] = [
    LatBand { min: 40.0, max: 90.0, label: "N90", slices: &MID_SLICES },
    LatBand { min: -10.0, max: 40.0, label: "N40", slices: &MID_SLICES },
    LatBand { min: -60.0, max: -10.0, label: "S10", slices: &MID_SLICES },
    LatBand { min: -90.0, max: -60.0, label: "S60", slices: &POLAR_SLICES },
];

/// Identifier of one of the 33 standard GTOPO30 tiles.
///
/// Obtain one from [`locate`], [`TileId::parse`], or [`TileId::all`]; the
/// `Display` impl renders the 7-character id.
#[derive(Clone, Copy)]
pub struct TileId {
    band: &'static LatBand,
    slice: &'static LonSlice,
}

impl TileId {
    /// Parse a tile id such as `"W020N40"`.
    ///
    /// Only the 33 standard ids are accepted: `W140S60` is rejected because
    /// the Antarctic band slices longitude by 60°, not 40°, so no such tile
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtopo30::TileId;
    ///
    /// assert!(TileId::parse("E060S10").is_some());
    /// assert!(TileId::parse("W140S60").is_none());
    /// assert!(TileId::parse("invalid").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<TileId> {
        // 4 characters of longitude label, then 3 of latitude label
        let lon_label = name.get(..4)?;
        let lat_label = name.get(4..)?;
        let band = LAT_BANDS.iter().find(|band| band.label == lat_label)?;
        let slice = band.slices.iter().find(|slice| slice.label == lon_label)?;
        Some(TileId { band, slice })
    }

    /// Iterate over all 33 tile ids, northernmost band first, west to east.
    pub fn all() -> impl Iterator<Item = TileId> {
        LAT_BANDS
            .iter()
            .flat_map(|band| band.slices.iter().map(move |slice| TileId { band, slice }))
    }

    /// The geographic area this tile covers.
    pub fn extent(&self) -> TileExtent {
        TileExtent {
            min_lat: self.band.min,
            max_lat: self.band.max,
            min_lon: self.slice.min,
            max_lon: self.slice.max,
        }
    }

    /// File name of the tile's header descriptor, e.g. `W020N40.HDR`.
    pub fn hdr_file_name(&self) -> String {
        format!("{}.HDR", self)
    }

    /// File name of the tile's elevation raster, e.g. `W020N40.DEM`.
    pub fn dem_file_name(&self) -> String {
        format!("{}.DEM", self)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.slice.label, self.band.label)
    }
}

impl fmt::Debug for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileId({}{})", self.slice.label, self.band.label)
    }
}

impl PartialEq for TileId {
    fn eq(&self, other: &Self) -> bool {
        self.band.label == other.band.label && self.slice.label == other.slice.label
    }
}

impl Eq for TileId {}

impl Hash for TileId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.band.label.hash(state);
        self.slice.label.hash(state);
    }
}

/// Nominal geographic coverage of a tile.
///
/// Lower bounds are closed. Upper bounds are open so adjacent extents do
/// not overlap, except at the +90° and +180° globe edges where they close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileExtent {
    /// Southern boundary latitude.
    pub min_lat: f64,
    /// Northern boundary latitude.
    pub max_lat: f64,
    /// Western boundary longitude.
    pub min_lon: f64,
    /// Eastern boundary longitude.
    pub max_lon: f64,
}

impl TileExtent {
    /// Check whether the coordinates fall inside this extent.
    ///
    /// Agrees with [`locate`] everywhere: a coordinate is contained by
    /// exactly the tile that `locate` resolves it to.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let lat_in = lat >= self.min_lat
            && (lat < self.max_lat || (lat == self.max_lat && self.max_lat == 90.0));
        let lon_in = lon >= self.min_lon
            && (lon < self.max_lon || (lon == self.max_lon && self.max_lon == 180.0));
        lat_in && lon_in
    }
}

/// Map coordinates to the GTOPO30 tile that covers them.
///
/// Latitude bands are matched north to south, so a coordinate on a shared
/// band edge (lat 40°, -10° or -60°) goes to the northern band. Longitude
/// slices are half-open `[min, max)`, so a shared slice edge goes to the
/// eastern slice; the easternmost slice closes at +180°.
///
/// # Arguments
///
/// * `lat` - Latitude in decimal degrees (-90 to 90)
/// * `lon` - Longitude in decimal degrees (-180 to 180)
///
/// # Errors
///
/// Returns [`GtopoError::OutOfRange`] if no tile covers the coordinates.
///
/// # Examples
///
/// ```
/// use gtopo30::locate;
///
/// assert_eq!(locate(0.0, 0.0).unwrap().to_string(), "W020N40");
/// assert_eq!(locate(45.0, 10.0).unwrap().to_string(), "W020N90");
/// assert_eq!(locate(-75.0, -150.0).unwrap().to_string(), "W180S60");
/// ```
pub fn locate(lat: f64, lon: f64) -> Result<TileId> {
    let band = LAT_BANDS
        .iter()
        .find(|band| lat >= band.min && lat <= band.max)
        .ok_or(GtopoError::OutOfRange { lat, lon })?;

    for (i, slice) in band.slices.iter().enumerate() {
        let covered = if i + 1 == band.slices.len() {
            // The easternmost slice is closed at +180°
            lon >= slice.min && lon <= slice.max
        } else {
            lon >= slice.min && lon < slice.max
        };
        if covered {
            return Ok(TileId { band, slice });
        }
    }

    Err(GtopoError::OutOfRange { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_mid_bands() {
        assert_eq!(locate(0.0, 0.0).unwrap().to_string(), "W020N40");
        assert_eq!(locate(45.0, 10.0).unwrap().to_string(), "W020N90");
        assert_eq!(locate(35.6, 139.7).unwrap().to_string(), "E100N40"); // Tokyo
        assert_eq!(locate(-33.9, 151.2).unwrap().to_string(), "E140S10"); // Sydney
        assert_eq!(locate(19.4, -99.1).unwrap().to_string(), "W100N40"); // Mexico City
        assert_eq!(locate(63.1, -151.0).unwrap().to_string(), "W180N90"); // Denali
    }

    #[test]
    fn test_locate_polar_band() {
        assert_eq!(locate(-75.0, -150.0).unwrap().to_string(), "W180S60");
        assert_eq!(locate(-75.0, 30.0).unwrap().to_string(), "W000S60");
        assert_eq!(locate(-90.0, 0.0).unwrap().to_string(), "W000S60");
        assert_eq!(locate(-61.0, 100.0).unwrap().to_string(), "E060S60");
        assert_eq!(locate(-78.5, -85.6).unwrap().to_string(), "W120S60"); // Vinson Massif
    }

    #[test]
    fn test_locate_band_edges_go_north() {
        assert_eq!(locate(90.0, 0.0).unwrap().to_string(), "W020N90");
        assert_eq!(locate(40.0, 0.0).unwrap().to_string(), "W020N90");
        assert_eq!(locate(-10.0, 0.0).unwrap().to_string(), "W020N40");
        assert_eq!(locate(-60.0, 0.0).unwrap().to_string(), "W020S10");
        assert_eq!(locate(-90.0, 30.0).unwrap().to_string(), "W000S60");
    }

    #[test]
    fn test_locate_slice_edges_go_east() {
        assert_eq!(locate(0.0, 20.0).unwrap().to_string(), "E020N40");
        assert_eq!(locate(0.0, -140.0).unwrap().to_string(), "W140N40");
        assert_eq!(locate(0.0, -180.0).unwrap().to_string(), "W180N40");
        assert_eq!(locate(-75.0, -120.0).unwrap().to_string(), "W120S60");
        assert_eq!(locate(-75.0, 120.0).unwrap().to_string(), "E120S60");
    }

    #[test]
    fn test_locate_at_the_antimeridian() {
        // +180° belongs to the easternmost slice of each band
        assert_eq!(locate(0.0, 180.0).unwrap().to_string(), "E140N40");
        assert_eq!(locate(50.0, 180.0).unwrap().to_string(), "E140N90");
        assert_eq!(locate(-75.0, 180.0).unwrap().to_string(), "E120S60");
    }

    #[test]
    fn test_locate_out_of_range() {
        assert!(matches!(
            locate(90.1, 0.0),
            Err(GtopoError::OutOfRange { .. })
        ));
        assert!(matches!(
            locate(-90.1, 0.0),
            Err(GtopoError::OutOfRange { .. })
        ));
        assert!(matches!(
            locate(0.0, 180.1),
            Err(GtopoError::OutOfRange { .. })
        ));
        assert!(matches!(
            locate(0.0, -180.1),
            Err(GtopoError::OutOfRange { .. })
        ));
        assert!(matches!(
            locate(f64::NAN, 0.0),
            Err(GtopoError::OutOfRange { .. })
        ));
        assert!(matches!(
            locate(0.0, f64::NAN),
            Err(GtopoError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_all_yields_33_distinct_tiles() {
        let tiles: Vec<TileId> = TileId::all().collect();
        assert_eq!(tiles.len(), 33);

        let unique: std::collections::HashSet<TileId> = tiles.iter().copied().collect();
        assert_eq!(unique.len(), 33);

        // Three 9-tile bands plus the 6-tile Antarctic band
        let polar = tiles
            .iter()
            .filter(|tile| tile.to_string().ends_with("S60"))
            .count();
        assert_eq!(polar, 6);

        // Every id parses back to itself
        for tile in &tiles {
            assert_eq!(TileId::parse(&tile.to_string()), Some(*tile));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_ids() {
        assert_eq!(TileId::parse("W140S60"), None); // 40° label in the 60° band
        assert_eq!(TileId::parse("W000N40"), None); // 60° label in a 40° band
        assert_eq!(TileId::parse("w020n40"), None); // lowercase
        assert_eq!(TileId::parse("W020N40.DEM"), None);
        assert_eq!(TileId::parse("X020N40"), None);
        assert_eq!(TileId::parse("W020"), None);
        assert_eq!(TileId::parse(""), None);
    }

    #[test]
    fn test_file_names() {
        let tile = locate(0.0, 0.0).unwrap();
        assert_eq!(tile.hdr_file_name(), "W020N40.HDR");
        assert_eq!(tile.dem_file_name(), "W020N40.DEM");
    }

    #[test]
    fn test_extent() {
        let extent = TileId::parse("W020N40").unwrap().extent();
        assert_eq!(extent.min_lat, -10.0);
        assert_eq!(extent.max_lat, 40.0);
        assert_eq!(extent.min_lon, -20.0);
        assert_eq!(extent.max_lon, 20.0);

        assert!(extent.contains(0.0, 0.0));
        assert!(extent.contains(-10.0, -20.0));
        assert!(!extent.contains(40.0, 0.0)); // northern edge belongs to N90
        assert!(!extent.contains(0.0, 20.0)); // eastern edge belongs to E020
    }

    #[test]
    fn test_extent_closes_at_globe_edges() {
        assert!(TileId::parse("E140N90").unwrap().extent().contains(90.0, 180.0));
        assert!(TileId::parse("E120S60").unwrap().extent().contains(-75.0, 180.0));
        assert!(!TileId::parse("E140N40").unwrap().extent().contains(40.0, 180.0));
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_locate_total_over_domain_property(
                lat in -90.0..=90.0_f64,
                lon in -180.0..=180.0_f64,
            ) {
                let tile = locate(lat, lon);
                prop_assert!(tile.is_ok(), "no tile for lat={}, lon={}", lat, lon);
            }

            #[test]
            fn test_located_extent_contains_coords_property(
                lat in -90.0..=90.0_f64,
                lon in -180.0..=180.0_f64,
            ) {
                let tile = locate(lat, lon).unwrap();
                prop_assert!(
                    tile.extent().contains(lat, lon),
                    "{} does not contain lat={}, lon={}",
                    tile, lat, lon
                );
            }

            #[test]
            fn test_extents_partition_the_globe_property(
                lat in -90.0..=90.0_f64,
                lon in -180.0..=180.0_f64,
            ) {
                // Exactly one tile claims any in-range coordinate
                let covering = TileId::all()
                    .filter(|tile| tile.extent().contains(lat, lon))
                    .count();
                prop_assert_eq!(covering, 1, "lat={}, lon={}", lat, lon);
            }

            #[test]
            fn test_locate_is_deterministic_property(
                lat in -90.0..=90.0_f64,
                lon in -180.0..=180.0_f64,
            ) {
                prop_assert_eq!(locate(lat, lon).unwrap(), locate(lat, lon).unwrap());
            }
        }
    }
}
