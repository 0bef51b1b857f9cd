//! Dark/bias subtraction: trivial per-pixel arithmetic over
//! identically-shaped images.

use crate::error::{Result, StackError};
use crate::image::Image;

/// `light -= dark + bias`, clamped at 0. `dark` and `bias` must each match
/// `light`'s descriptor exactly.
pub fn subtract(light: &mut Image, dark: Option<&Image>, bias: Option<&Image>) -> Result<()> {
    if let Some(dark) = dark {
        require_same_shape(light, dark)?;
    }
    if let Some(bias) = bias {
        require_same_shape(light, bias)?;
    }

    for i in 0..light.data().len() {
        let mut v = light.data()[i];
        if let Some(dark) = dark {
            v -= dark.data()[i];
        }
        if let Some(bias) = bias {
            v -= bias.data()[i];
        }
        light.data_mut()[i] = v.max(0.0);
    }

    Ok(())
}

fn require_same_shape(a: &Image, b: &Image) -> Result<()> {
    if a.descriptor() != b.descriptor() {
        return Err(StackError::InvalidImage(format!(
            "calibration frame shape {:?} does not match light frame shape {:?}",
            b.descriptor(),
            a.descriptor()
        )));
    }
    Ok(())
}
