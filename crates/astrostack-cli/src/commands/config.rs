use anyhow::Result;
use astrostack_core::aligner::AlignerConfig;
use astrostack_core::extractor::FrameExtractorConfig;
use serde::Serialize;

#[derive(Serialize)]
struct DefaultConfig {
    extractor: FrameExtractorConfig,
    aligner: AlignerConfig,
}

/// Print the default extractor/aligner configuration as TOML to stdout.
pub fn run() -> Result<()> {
    let config = DefaultConfig {
        extractor: FrameExtractorConfig::default(),
        aligner: AlignerConfig::default(),
    };
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}
