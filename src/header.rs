//! GTOPO30 header descriptors.
//!
//! Each GTOPO30 tile ships a `.HDR` companion file: an ASCII list of
//! `KEY VALUE` lines describing the raster's dimensions, encoding, and
//! geo-reference. This module parses those descriptors into [`DemHeader`].

use std::fs;
use std::path::Path;

use crate::error::{GtopoError, Result};

/// Sample byte order declared by a header's `BYTEORDER` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first (`M`, for Motorola). The GTOPO30
    /// convention, and the default when the key is absent.
    #[default]
    Big,
    /// Least significant byte first (any flag other than `M`).
    Little,
}

impl ByteOrder {
    fn from_flag(value: &str) -> ByteOrder {
        if value == "M" {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }
}

/// Geometry and encoding of one GTOPO30 tile, as declared by its `.HDR`
/// descriptor.
///
/// Keys missing from the descriptor keep their defaults: zero for numeric
/// fields, big-endian byte order, and the conventional -9999 nodata
/// sentinel. Checking that the result describes a usable grid is the
/// raster reader's job, not the parser's.
#[derive(Debug, Clone, PartialEq)]
pub struct DemHeader {
    /// Declared sample byte order. GTOPO30 rasters are big-endian in
    /// practice and are decoded as such regardless of this field.
    pub byte_order: ByteOrder,
    /// Band interleave layout, `BIL` for GTOPO30.
    pub layout: String,
    /// Number of raster rows.
    pub nrows: i64,
    /// Number of raster columns.
    pub ncols: i64,
    /// Number of bands, 1 for GTOPO30.
    pub nbands: i64,
    /// Bits per sample, 16 for GTOPO30.
    pub nbits: i64,
    /// Bytes per row of one band.
    pub band_row_bytes: i64,
    /// Bytes per full row across all bands.
    pub total_row_bytes: i64,
    /// Gap in bytes between bands.
    pub band_gap_bytes: i64,
    /// Sample value meaning "no measurement".
    pub nodata: i64,
    /// Longitude of the center of the upper-left pixel.
    pub ulxmap: f64,
    /// Latitude of the center of the upper-left pixel.
    pub ulymap: f64,
    /// Pixel width in degrees of longitude.
    pub xdim: f64,
    /// Pixel height in degrees of latitude.
    pub ydim: f64,
}

impl Default for DemHeader {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Big,
            layout: String::new(),
            nrows: 0,
            ncols: 0,
            nbands: 0,
            nbits: 0,
            band_row_bytes: 0,
            total_row_bytes: 0,
            band_gap_bytes: 0,
            // GTOPO30 convention; a zero default would collide with sea level
            nodata: -9999,
            ulxmap: 0.0,
            ulymap: 0.0,
            xdim: 0.0,
            ydim: 0.0,
        }
    }
}

impl DemHeader {
    /// Read and parse a `.HDR` descriptor file.
    ///
    /// # Errors
    ///
    /// Returns [`GtopoError::HeaderIo`] if the file cannot be read, or
    /// [`GtopoError::MalformedField`] if a recognized key holds a value
    /// that does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GtopoError::HeaderIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse `.HDR` descriptor text.
    ///
    /// Each line holds one whitespace-delimited `KEY VALUE` pair. Lines
    /// that do not split into exactly two fields are skipped, as are lines
    /// with unrecognized keys. Keys are case-sensitive; a repeated key
    /// overwrites the earlier value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gtopo30::DemHeader;
    ///
    /// let header = DemHeader::parse("NROWS 6000\nNCOLS 4800\n").unwrap();
    /// assert_eq!(header.nrows, 6000);
    /// assert_eq!(header.ncols, 4800);
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut header = Self::default();

        for line in text.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                continue;
            }
            let (key, value) = (fields[0], fields[1]);

            match key {
                "BYTEORDER" => header.byte_order = ByteOrder::from_flag(value),
                "LAYOUT" => header.layout = value.to_string(),
                "NROWS" => header.nrows = parse_int("NROWS", value)?,
                "NCOLS" => header.ncols = parse_int("NCOLS", value)?,
                "NBANDS" => header.nbands = parse_int("NBANDS", value)?,
                "NBITS" => header.nbits = parse_int("NBITS", value)?,
                "BANDROWBYTES" => header.band_row_bytes = parse_int("BANDROWBYTES", value)?,
                "TOTALROWBYTES" => header.total_row_bytes = parse_int("TOTALROWBYTES", value)?,
                "BANDGAPBYTES" => header.band_gap_bytes = parse_int("BANDGAPBYTES", value)?,
                "NODATA" => header.nodata = parse_int("NODATA", value)?,
                "ULXMAP" => header.ulxmap = parse_float("ULXMAP", value)?,
                "ULYMAP" => header.ulymap = parse_float("ULYMAP", value)?,
                "XDIM" => header.xdim = parse_float("XDIM", value)?,
                "YDIM" => header.ydim = parse_float("YDIM", value)?,
                _ => {}
            }
        }

        Ok(header)
    }

    /// Check whether a sample equals this header's nodata sentinel.
    pub fn is_nodata(&self, sample: i16) -> bool {
        i64::from(sample) == self.nodata
    }
}

fn parse_int(key: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| GtopoError::MalformedField {
        key,
        value: value.to_string(),
    })
}

fn parse_float(key: &'static str, value: &str) -> Result<f64> {
    value.parse().map_err(|_| GtopoError::MalformedField {
        key,
        value: value.to_string(),
    })
}
