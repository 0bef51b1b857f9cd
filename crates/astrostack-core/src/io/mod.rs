pub mod bayer;
pub mod fits;
pub mod ppm;

pub use bayer::debayer_rggb;
pub use fits::read_fits;
pub use ppm::write_ppm;
