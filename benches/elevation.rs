use std::io::Write;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use gtopo30::{locate, Gtopo30};

const NROWS: usize = 1200;
const NCOLS: usize = 1200;
const DEM_SIZE: usize = NROWS * NCOLS * 2;

/// Create a synthetic W020N40 tile with a simple elevation gradient.
fn create_tile(dir: &std::path::Path) {
    let header = format!(
        "BYTEORDER     M\n\
         LAYOUT        BIL\n\
         NROWS         {}\n\
         NCOLS         {}\n\
         NBANDS        1\n\
         NBITS         16\n\
         NODATA        -9999\n\
         ULXMAP        -19.5\n\
         ULYMAP        39.5\n\
         XDIM          0.03\n\
         YDIM          0.04\n",
        NROWS, NCOLS
    );
    std::fs::write(dir.join("W020N40.HDR"), header).unwrap();

    let mut data = vec![0u8; DEM_SIZE];
    for row in 0..NROWS {
        for col in 0..NCOLS {
            let elev = ((row + col) % 4000) as i16;
            let offset = (row * NCOLS + col) * 2;
            let bytes = elev.to_be_bytes();
            data[offset] = bytes[0];
            data[offset + 1] = bytes[1];
        }
    }
    let mut file = std::fs::File::create(dir.join("W020N40.DEM")).unwrap();
    file.write_all(&data).unwrap();
}

fn bench_locate(c: &mut Criterion) {
    c.bench_function("locate_tile", |b| {
        b.iter(|| {
            black_box(locate(black_box(35.3606), black_box(138.7274)).unwrap());
        });
    });
}

fn bench_single_query(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    create_tile(tmp.path());
    let dem = Gtopo30::new(tmp.path());

    c.bench_function("single_query_open_per_call", |b| {
        b.iter(|| {
            black_box(dem.get_elevation(black_box(8.0), black_box(0.0)).unwrap());
        });
    });
}

fn bench_reused_tile(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    create_tile(tmp.path());
    let dem = Gtopo30::new(tmp.path());
    let tile = dem.open_tile(locate(8.0, 0.0).unwrap()).unwrap();

    c.bench_function("single_query_reused_tile", |b| {
        b.iter(|| {
            black_box(tile.get_elevation(black_box(8.0), black_box(0.0)).unwrap());
        });
    });
}

criterion_group!(benches, bench_locate, bench_single_query, bench_reused_tile);
criterion_main!(benches);
