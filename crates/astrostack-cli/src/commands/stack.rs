use std::path::PathBuf;

use anyhow::Result;
use astrostack_core::aligner::AlignerConfig;
use astrostack_core::extractor::FrameExtractorConfig;
use astrostack_core::pipeline::{run_stack, StackPipelineConfig};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Args)]
pub struct StackArgs {
    /// Input FITS frames
    pub inputs: Vec<PathBuf>,

    /// Output PPM path
    #[arg(long, default_value = "stacked.ppm")]
    pub output: PathBuf,

    /// Dark calibration frame
    #[arg(long)]
    pub dark: Option<PathBuf>,

    /// Bias calibration frame
    #[arg(long)]
    pub bias: Option<PathBuf>,

    /// Constellation neighborhood size
    #[arg(long, default_value = "5")]
    pub k_neighbors: usize,

    /// Binarization threshold in standard deviations above the mean
    #[arg(long, default_value = "2.0")]
    pub sigma_k: f32,

    /// Minimum separation (px) before a star is folded into an existing catalog entry
    #[arg(long, default_value = "50.0")]
    pub dedup_radius: f32,
}

pub fn run(args: &StackArgs) -> Result<()> {
    let mut extractor = FrameExtractorConfig::default();
    extractor.binarize_k = args.sigma_k;
    extractor.constellation_k = args.k_neighbors;

    let aligner = AlignerConfig {
        constellation_k: args.k_neighbors,
        dedup_radius: args.dedup_radius,
    };

    let config = StackPipelineConfig {
        extractor,
        aligner,
        dark: args.dark.clone(),
        bias: args.bias.clone(),
    };

    crate::summary::print_stack_summary(&args.inputs, &args.output, &config.extractor, &config.aligner);

    let pb = ProgressBar::new(args.inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Stacking [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    run_stack(&args.inputs, &args.output, &config, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    })?;
    pb.finish();

    println!("Saved to {}", args.output.display());
    Ok(())
}
