//! Styled pre-run summary of the stack configuration, printed to stdout
//! before the pipeline starts.

use console::Style;

use astrostack_core::aligner::AlignerConfig;
use astrostack_core::extractor::FrameExtractorConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_stack_summary(
    inputs: &[std::path::PathBuf],
    output: &std::path::Path,
    extractor: &FrameExtractorConfig,
    aligner: &AlignerConfig,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Astrostack"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(inputs.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.label.apply_to("Extraction"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Blur sigma"),
        s.value.apply_to(extractor.blur_sigma)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Binarize k"),
        s.value.apply_to(extractor.binarize_k)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Fine radius"),
        s.value.apply_to(extractor.fine_radius)
    );
    println!();

    println!("  {}", s.label.apply_to("Alignment"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("K neighbors"),
        s.value.apply_to(aligner.constellation_k)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Dedup radius"),
        s.value.apply_to(aligner.dedup_radius)
    );
    println!();
}
