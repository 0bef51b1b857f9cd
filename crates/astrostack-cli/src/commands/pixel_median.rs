use std::path::PathBuf;

use anyhow::Result;
use astrostack_core::pipeline::run_pixel_median;
use clap::Args;

#[derive(Args)]
pub struct PixelMedianArgs {
    /// Input frames (must share identical dimensions)
    pub inputs: Vec<PathBuf>,

    /// Output PPM path
    #[arg(long, default_value = "median.ppm")]
    pub output: PathBuf,
}

pub fn run(args: &PixelMedianArgs) -> Result<()> {
    run_pixel_median(&args.inputs, &args.output)?;
    println!("Saved to {}", args.output.display());
    Ok(())
}
