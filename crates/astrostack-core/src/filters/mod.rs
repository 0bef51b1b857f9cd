pub mod binarize;
pub mod gaussian;
pub mod grayscale;

pub use binarize::{binarize, binarize_default};
pub use gaussian::gaussian_blur;
pub use grayscale::grayscale;
