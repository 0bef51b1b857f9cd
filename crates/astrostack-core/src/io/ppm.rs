//! Raw PPM writer: ASCII header, one byte per quantized sample.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::image::Image;

/// Write `image` (1 or 3 channels) as `P5`/`P6`. `gray_as_rgb` triplicates a
/// 1-channel image into `P6` instead of writing `P5`.
pub fn write_ppm(path: &Path, image: &Image, gray_as_rgb: bool) -> Result<()> {
    image.require_components(&[1, 3])?;

    let triplicate = image.components() == 1 && gray_as_rgb;
    let magic = if image.components() == 3 || triplicate {
        "P6"
    } else {
        "P5"
    };

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write!(out, "{magic} {} {} 255\n", image.width(), image.height())?;

    for pixel in image.data().chunks(image.components()) {
        if triplicate {
            let v = quantize(pixel[0]);
            out.write_all(&[v, v, v])?;
        } else {
            for &sample in pixel {
                out.write_all(&[quantize(sample)])?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn quantize(v: f32) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}
