//! Minimal FITS primary-HDU reader: ASCII header cards in 2880-byte blocks,
//! followed by a big-endian pixel plane, read via a memory-mapped file.

use std::fs::File;
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use memmap2::Mmap;

use crate::error::{Result, StackError};
use crate::image::{Image, ImageDescriptor};
use crate::io::bayer::debayer_rggb;

const HEADER_BLOCK_SIZE: usize = 2880;
const CARD_SIZE: usize = 80;

struct FitsHeader {
    bitpix: i32,
    naxis1: usize,
    naxis2: usize,
    bscale: f64,
    bzero: f64,
    bayerpat: Option<String>,
}

/// Read a FITS primary HDU from `path`, applying `BSCALE`/`BZERO` and, when
/// `BAYERPAT = 'RGGB'` is present, demosaicing to half-resolution RGB.
/// Normalizes the result into `[0, 1]` before returning.
pub fn read_fits(path: &Path) -> Result<Image> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    let (header, data_offset) = parse_header(&mmap)?;

    let pixel_count = header.naxis1 * header.naxis2;
    let sample_size = sample_size(header.bitpix)?;
    let needed = data_offset + pixel_count * sample_size;
    if mmap.len() < needed {
        return Err(StackError::InvalidImage(format!(
            "FITS data truncated: expected at least {needed} bytes, got {}",
            mmap.len()
        )));
    }

    let mut cursor = &mmap[data_offset..];
    let mut samples = Vec::with_capacity(pixel_count);
    for _ in 0..pixel_count {
        let raw = read_sample(&mut cursor, header.bitpix)?;
        samples.push((raw * header.bscale + header.bzero) as f32);
    }

    let mosaic = {
        let descriptor = ImageDescriptor::new(header.naxis1, header.naxis2, 1);
        let mut image = Image::new(descriptor);
        image.data_mut().copy_from_slice(&samples);
        image
    };

    let mut image = match header.bayerpat.as_deref() {
        None => mosaic,
        Some("RGGB") => debayer_rggb(&mosaic)?,
        Some(other) => {
            return Err(StackError::InvalidImage(format!(
                "unsupported BAYERPAT '{other}'"
            )));
        }
    };

    image.normalize();
    Ok(image)
}

fn sample_size(bitpix: i32) -> Result<usize> {
    match bitpix {
        8 | 16 | 32 | -32 | -64 => Ok((bitpix.unsigned_abs() / 8) as usize),
        other => Err(StackError::InvalidImage(format!(
            "unsupported BITPIX {other}"
        ))),
    }
}

fn read_sample(cursor: &mut &[u8], bitpix: i32) -> Result<f64> {
    let value = match bitpix {
        8 => cursor.read_u8()? as f64,
        16 => cursor.read_i16::<BigEndian>()? as f64,
        32 => cursor.read_i32::<BigEndian>()? as f64,
        -32 => cursor.read_f32::<BigEndian>()? as f64,
        -64 => cursor.read_f64::<BigEndian>()?,
        other => {
            return Err(StackError::InvalidImage(format!(
                "unsupported BITPIX {other}"
            )));
        }
    };
    Ok(value)
}

/// Parse primary-HDU cards until `END`, returning the header and the byte
/// offset the pixel data starts at (the next 2880-byte boundary).
fn parse_header(mmap: &[u8]) -> Result<(FitsHeader, usize)> {
    if mmap.len() < HEADER_BLOCK_SIZE {
        return Err(StackError::InvalidImage(
            "file too small for a FITS header block".into(),
        ));
    }

    let mut bitpix = None;
    let mut naxis = None;
    let mut naxis1 = None;
    let mut naxis2 = None;
    let mut bscale = 1.0f64;
    let mut bzero = 0.0f64;
    let mut bayerpat = None;
    let mut offset = 0usize;
    let mut found_end = false;

    'blocks: while offset + HEADER_BLOCK_SIZE <= mmap.len() {
        let block = &mmap[offset..offset + HEADER_BLOCK_SIZE];
        offset += HEADER_BLOCK_SIZE;

        for card in block.chunks(CARD_SIZE) {
            let card = std::str::from_utf8(card).unwrap_or("");
            let keyword = card.get(0..8).unwrap_or("").trim();
            match keyword {
                "END" => {
                    found_end = true;
                    break 'blocks;
                }
                "BITPIX" => bitpix = parse_int(card),
                "NAXIS" => naxis = parse_int(card),
                "NAXIS1" => naxis1 = parse_int(card),
                "NAXIS2" => naxis2 = parse_int(card),
                "BSCALE" => bscale = parse_float(card).unwrap_or(1.0),
                "BZERO" => bzero = parse_float(card).unwrap_or(0.0),
                "BAYERPAT" => bayerpat = parse_string(card),
                _ => {}
            }
        }
    }

    if !found_end {
        return Err(StackError::InvalidImage(
            "FITS header missing END card".into(),
        ));
    }

    let bitpix = bitpix.ok_or_else(|| StackError::InvalidImage("missing BITPIX".into()))? as i32;
    let naxis = naxis.ok_or_else(|| StackError::InvalidImage("missing NAXIS".into()))?;
    if naxis < 2 {
        return Err(StackError::InvalidImage(format!(
            "unsupported NAXIS {naxis}"
        )));
    }
    let naxis1 =
        naxis1.ok_or_else(|| StackError::InvalidImage("missing NAXIS1".into()))? as usize;
    let naxis2 =
        naxis2.ok_or_else(|| StackError::InvalidImage("missing NAXIS2".into()))? as usize;

    Ok((
        FitsHeader {
            bitpix,
            naxis1,
            naxis2,
            bscale,
            bzero,
            bayerpat,
        },
        offset,
    ))
}

fn card_value(card: &str) -> Option<&str> {
    let eq = card.find('=')?;
    let rest = &card[eq + 1..];
    let value = match rest.find('/') {
        Some(i) => &rest[..i],
        None => rest,
    };
    Some(value.trim())
}

fn parse_int(card: &str) -> Option<i64> {
    card_value(card)?.parse().ok()
}

fn parse_float(card: &str) -> Option<f64> {
    card_value(card)?.parse().ok()
}

fn parse_string(card: &str) -> Option<String> {
    let value = card_value(card)?;
    Some(value.trim_matches('\'').trim().to_string())
}
