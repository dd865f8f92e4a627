//! Basic example demonstrating gtopo30 library usage.
//!
//! Run with: cargo run --example basic -- /path/to/gtopo30/tiles

use gtopo30::{Gtopo30, GtopoError};
use std::env;

fn main() -> Result<(), GtopoError> {
    // Get data directory from command line
    let base_dir = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example basic -- /path/to/gtopo30/tiles");
        std::process::exit(1);
    });

    let dem = Gtopo30::new(&base_dir);

    // Query some famous locations
    let locations = [
        ("Mount Fuji, Japan", 35.3606, 138.7274),
        ("Mount Everest, Nepal", 27.9881, 86.9250),
        ("Denali, Alaska", 63.0695, -151.0074),
        ("Vinson Massif, Antarctica", -78.5254, -85.6171),
        ("Dead Sea shore, Israel/Jordan", 31.5, 35.47),
    ];

    println!("Elevation queries (30-arc-second cells):");
    println!("{:-<50}", "");

    for (name, lat, lon) in &locations {
        match dem.get_elevation_checked(*lat, *lon) {
            Ok(Some(elevation)) => {
                println!("{}: {}m", name, elevation);
            }
            Ok(None) => {
                println!("{}: no data (ocean cell)", name);
            }
            Err(GtopoError::HeaderIo { .. }) => {
                println!("{}: tile not available locally", name);
            }
            Err(e) => {
                println!("{}: error - {}", name, e);
            }
        }
    }

    println!("\nTiles under {}: {}", base_dir, dem.available_tiles().len());

    Ok(())
}
