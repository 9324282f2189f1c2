//! beacon-eval: run the beacon detector over images or a labeled corpus.

use beacon_detector::vision::{evaluate_dir, load_normalized, render_overlay, EvaluationOptions};
use beacon_detector::{BeaconDetector, Thresholds};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "beacon-eval")]
#[command(about = "Classify the lit state of a two-lamp beacon in photographs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a labeled corpus (<corpus>/<state>/*.jpg).
    Evaluate(EvaluateArgs),

    /// Classify a single image.
    Detect(DetectArgs),

    /// Print the effective thresholds as TOML.
    ShowConfig(ThresholdArgs),
}

#[derive(Debug, Clone, Args)]
struct ThresholdArgs {
    /// Thresholds file (TOML). Unspecified keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Longest image edge the classification bounds are scaled to.
    #[arg(long)]
    reference_edge: Option<u32>,
}

impl ThresholdArgs {
    fn thresholds(&self) -> CliResult<Thresholds> {
        let thresholds = match &self.config {
            Some(path) => Thresholds::load(path).map_err(|e| -> CliError {
                format!("Failed to load config {}: {}", path.display(), e).into()
            })?,
            None => Thresholds::default(),
        };

        match self.reference_edge {
            Some(0) => Err("--reference-edge must be positive".into()),
            Some(edge) => Ok(thresholds.with_reference_edge(edge)),
            None => Ok(thresholds),
        }
    }
}

#[derive(Debug, Clone, Args)]
struct EvaluateArgs {
    /// Corpus root holding one directory per expected state.
    #[arg(long, default_value = "images")]
    corpus: PathBuf,

    /// Directory to write a debug overlay per image.
    #[arg(long)]
    overlay_dir: Option<PathBuf>,

    /// Path to write the evaluation report (JSON).
    #[arg(long)]
    report: Option<PathBuf>,

    #[command(flatten)]
    thresholds: ThresholdArgs,
}

#[derive(Debug, Clone, Args)]
struct DetectArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write a debug overlay (PNG).
    #[arg(long)]
    overlay: Option<PathBuf>,

    #[command(flatten)]
    thresholds: ThresholdArgs,
}

fn main() -> CliResult<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args),
        Commands::Detect(args) => run_detect(&args),
        Commands::ShowConfig(args) => run_show_config(&args),
    }
}

fn run_evaluate(args: &EvaluateArgs) -> CliResult<()> {
    let detector = BeaconDetector::new(args.thresholds.thresholds()?);

    let mut options = EvaluationOptions::default();
    if let Some(dir) = &args.overlay_dir {
        options = options.with_overlay_dir(dir);
    }

    log::info!("Evaluating corpus: {}", args.corpus.display());
    let report = evaluate_dir(&args.corpus, &detector, &options)?;

    if let Some(path) = &args.report {
        report.write_json(path)?;
        log::info!("Report written to {}", path.display());
    }

    let summary = report.summary;
    println!(
        "Pass: {}/{}. {:.1}%",
        summary.passed,
        summary.total(),
        summary.pass_rate()
    );
    Ok(())
}

fn run_detect(args: &DetectArgs) -> CliResult<()> {
    let thresholds = args.thresholds.thresholds()?;
    let detector = BeaconDetector::new(thresholds);

    let image = load_image_for(&args.image, thresholds.reference_edge)?;
    let (w, h) = image.dimensions();
    log::info!("Image size: {}x{}", w, h);

    let detection = detector.analyze(&image)?;
    log::info!(
        "Red pixels: {}, blue pixels: {}",
        detection.tally.total_red(),
        detection.tally.total_blue()
    );

    if let Some(path) = &args.overlay {
        render_overlay(&image, detection.state, &thresholds).save(path)?;
        log::info!("Overlay written to {}", path.display());
    }

    println!("{}", detection.state);
    Ok(())
}

fn run_show_config(args: &ThresholdArgs) -> CliResult<()> {
    print!("{}", args.thresholds()?.to_toml_string()?);
    Ok(())
}

fn load_image_for(path: &Path, edge: u32) -> CliResult<image::RgbImage> {
    load_normalized(path, edge).map_err(|e| -> CliError {
        format!("Failed to open image {}: {}", path.display(), e).into()
    })
}
