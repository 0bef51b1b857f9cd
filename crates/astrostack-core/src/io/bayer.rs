//! RGGB-only Bayer demosaic: a 2x2 mosaic quad collapses to one half
//! resolution RGB pixel.

use crate::error::{Result, StackError};
use crate::image::{Image, ImageDescriptor};

/// `R, G0, G1, B` laid out as a `2x2` quad at `(x, y), (x+1, y), (x, y+1),
/// (x+1, y+1)` respectively; output green is `(G0 + G1) / 2`.
pub fn debayer_rggb(mosaic: &Image) -> Result<Image> {
    mosaic.require_components(&[1])?;

    let width = mosaic.width();
    let height = mosaic.height();
    if width % 2 != 0 || height % 2 != 0 {
        return Err(StackError::InvalidImage(format!(
            "RGGB mosaic dimensions must be even, got {width}x{height}"
        )));
    }

    let out_width = width / 2;
    let out_height = height / 2;
    let mut out = Image::new(ImageDescriptor::new(out_width, out_height, 3));

    for oy in 0..out_height {
        for ox in 0..out_width {
            let x = ox * 2;
            let y = oy * 2;
            let r = mosaic.pixel(x, y)[0];
            let g0 = mosaic.pixel(x + 1, y)[0];
            let g1 = mosaic.pixel(x, y + 1)[0];
            let b = mosaic.pixel(x + 1, y + 1)[0];

            let px = out.pixel_mut(ox, oy);
            px[0] = r;
            px[1] = (g0 + g1) / 2.0;
            px[2] = b;
        }
    }

    Ok(out)
}
