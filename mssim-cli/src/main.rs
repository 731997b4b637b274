use clap::Parser;
use mssim::{SsimConfig, SsimEvaluator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Per-channel mean SSIM between two images")]
struct Cli {
    /// First image (PNG or JPEG).
    image_a: PathBuf,
    /// Second image, same dimensions as the first.
    image_b: PathBuf,
    /// Enable tracing output on stderr for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn header(channels: usize) -> &'static str {
    match channels {
        3 => "(R, G & B SSIM index)",
        _ => "(SSIM index)",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("mssim=info".parse()?))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    let evaluator = SsimEvaluator::new(SsimConfig::default())?;
    let scores = evaluator.compare_files(&cli.image_a, &cli.image_b)?;

    println!("{}", header(scores.channels().len()));
    for score in scores.channels() {
        println!("{:.3}%", score * 100.0);
    }

    Ok(())
}
