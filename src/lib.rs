//! # GTOPO30 Elevation Library
//!
//! A library for querying elevation data from the USGS GTOPO30 global
//! digital elevation model. GTOPO30 covers the globe at a horizontal grid
//! spacing of 30 arc seconds (roughly one kilometer) and splits it into 33
//! tiles of flat 16-bit rasters.
//!
//! ## Features
//!
//! - **Global**: resolves any coordinate on Earth to its covering tile
//! - **Fast**: memory-mapped rasters, one sample read per query
//! - **Self-contained**: parses the plain `.HDR` / `.DEM` tile pairs as
//!   distributed, no GIS toolchain required
//! - **Typed errors**: every failure names the pipeline phase it came from
//!
//! ## Quick Start
//!
//! ```ignore
//! use gtopo30::Gtopo30;
//!
//! let dem = Gtopo30::new("/data/gtopo30");
//!
//! // Matterhorn
//! let elevation = dem.get_elevation(45.9766, 7.6585)?;
//! println!("Elevation: {}m", elevation);
//!
//! // Open ocean reads as the nodata sentinel; the checked variant maps it
//! // to None
//! match dem.get_elevation_checked(0.0, -30.0)? {
//!     Some(elevation) => println!("Elevation: {}m", elevation),
//!     None => println!("No data (ocean)"),
//! }
//! ```
//!
//! ## Data Format
//!
//! Each GTOPO30 tile is a pair of files named after the geographic position
//! of its upper-left corner, e.g. `W020N40`:
//!
//! - `<TILE>.HDR`: ASCII header of `KEY VALUE` lines describing the grid
//!   (row/column counts, upper-left pixel center, pixel sizes, nodata value)
//! - `<TILE>.DEM`: flat big-endian signed 16-bit raster, row-major from the
//!   upper-left corner, elevations in meters
//!
//! Cells without a measurement (open ocean) hold the nodata value, -9999 in
//! the standard distribution.
//!
//! ## Data Sources
//!
//! GTOPO30 tiles are distributed by the USGS EROS archive:
//!
//! - <https://earthexplorer.usgs.gov/>
//! - <https://www.usgs.gov/centers/eros/science/usgs-eros-archive-digital-elevation-global-30-arc-second-elevation-gtopo30>

pub mod dem;
pub mod error;
pub mod header;
pub mod query;
pub mod tile;

// Re-export main types at crate root for convenience
pub use dem::{DemTile, NODATA};
pub use error::{GtopoError, QueryPhase, Result};
pub use header::{ByteOrder, DemHeader};
pub use query::{get_elevation, Gtopo30};
pub use tile::{locate, TileExtent, TileId};
