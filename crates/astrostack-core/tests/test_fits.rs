use std::io::Write;

use astrostack_core::error::StackError;
use astrostack_core::io::read_fits;

const BLOCK: usize = 2880;

/// Build a minimal valid FITS file: the mandatory header cards padded to a
/// 2880-byte block, followed by raw big-endian samples.
fn write_fits(
    path: &std::path::Path,
    bitpix: i32,
    naxis1: usize,
    naxis2: usize,
    bayerpat: Option<&str>,
    samples: &[u8],
) {
    let mut header = String::new();
    header.push_str(&card("SIMPLE", "T"));
    header.push_str(&card("BITPIX", &bitpix.to_string()));
    header.push_str(&card("NAXIS", "2"));
    header.push_str(&card("NAXIS1", &naxis1.to_string()));
    header.push_str(&card("NAXIS2", &naxis2.to_string()));
    if let Some(pat) = bayerpat {
        header.push_str(&card("BAYERPAT", &format!("'{pat}'")));
    }
    header.push_str("END");
    header.push_str(&" ".repeat(80 - 3));

    let pad = BLOCK - (header.len() % BLOCK);
    let pad = if pad == BLOCK { 0 } else { pad };
    header.push_str(&" ".repeat(pad));

    let mut file = std::fs::File::create(path).unwrap();
    file.write_all(header.as_bytes()).unwrap();
    file.write_all(samples).unwrap();
}

fn card(keyword: &str, value: &str) -> String {
    let mut c = format!("{keyword:<8}= {value}");
    c.truncate(80);
    format!("{c:<80}")
}

#[test]
fn reads_an_8bit_single_channel_image_and_normalizes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.fits");

    // 2x2 image, values 0, 64, 128, 255 -> normalized min=0, max=1.
    write_fits(&path, 8, 2, 2, None, &[0, 64, 128, 255]);

    let image = read_fits(&path).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    assert_eq!(image.components(), 1);

    let data = image.data();
    assert!((data[0] - 0.0).abs() < 1e-6);
    assert!((data[3] - 1.0).abs() < 1e-6);
}

#[test]
fn debayers_an_rggb_mosaic_to_half_resolution_rgb() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mosaic.fits");

    // 4x2 RGGB mosaic -> one 2x1 RGB output pixel pair.
    // Row0: R G0 R G0 ; Row1: G1 B G1 B
    let samples = [10u8, 20, 10, 20, 30, 40, 30, 40];
    write_fits(&path, 8, 4, 2, Some("RGGB"), &samples);

    let image = read_fits(&path).unwrap();
    assert_eq!(image.components(), 3);
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 1);

    // Values are normalized afterward, but ordering (R, (G0+G1)/2, B) with
    // the smallest input sample (10) mapping to the darkest channel still
    // holds: R < G-average < B in raw units, so after normalization R
    // channel value must be 0.0 (global min).
    let px = image.pixel(0, 0);
    assert!((px[0] - 0.0).abs() < 1e-6, "R channel should be the global min");
}

#[test]
fn unsupported_bayer_pattern_is_invalid_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.fits");
    write_fits(&path, 8, 2, 2, Some("GRBG"), &[1, 2, 3, 4]);

    let err = read_fits(&path).unwrap_err();
    assert!(matches!(err, StackError::InvalidImage(_)));
}

#[test]
fn truncated_pixel_data_is_invalid_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.fits");
    write_fits(&path, 8, 4, 4, None, &[1, 2, 3]);

    let err = read_fits(&path).unwrap_err();
    assert!(matches!(err, StackError::InvalidImage(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_fits(std::path::Path::new("/nonexistent/path.fits")).unwrap_err();
    assert!(matches!(err, StackError::Io(_)));
}
