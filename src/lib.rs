//! Labelpaint: draw detection results onto images.
//!
//! Labelpaint turns the output of vision services (object and people
//! detection, OCR, face detection) into annotated copies of the analysed
//! image. Boxes and text polygons are stroked in a configurable style, box
//! labels are written just above each box, and the result is encoded to a
//! file.
//!
//! # Modules
//!
//! - [`geometry`]: Boxes, polygons, annotations and the JSON exchange format
//! - [`render`]: Styles, stroking, label text and image encoding
//! - [`detection`]: Vision service result models, draw policies and reports
//! - [`validation`]: Annotation list validation and error reporting
//! - [`config`]: TOML configuration
//! - [`error`]: Error types for labelpaint operations

pub mod config;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod render;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::{AppConfig, CONFIG_ENV};
use geometry::Annotation;
use render::{RenderRequest, Style};

pub use error::{LabelpaintError, RenderError, StyleError};

/// The labelpaint CLI application.
#[derive(Parser)]
#[command(name = "labelpaint")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// TOML config file with styles and output names.
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Report an image analysis result and draw its objects and people.
    Analyze(AnalyzeArgs),
    /// Report an OCR result and draw its word polygons.
    ReadText(ReadTextArgs),
    /// Report a face detection result and draw its face boxes.
    Faces(FacesArgs),
    /// Draw an annotation list onto an image.
    Render(RenderArgs),
    /// Validate an annotation list for errors and warnings.
    Validate(ValidateArgs),
}

/// Arguments for the analyze subcommand.
#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Image analysis result (JSON).
    input: PathBuf,

    /// The analysed image.
    #[arg(long)]
    image: PathBuf,

    /// Output image for objects (default from config).
    #[arg(long)]
    objects_out: Option<PathBuf>,

    /// Output image for people (default from config).
    #[arg(long)]
    people_out: Option<PathBuf>,
}

/// Arguments for the read-text subcommand.
#[derive(clap::Args)]
struct ReadTextArgs {
    /// Text read result (JSON).
    input: PathBuf,

    /// The analysed image.
    #[arg(long)]
    image: PathBuf,

    /// Output image (default from config).
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Arguments for the faces subcommand.
#[derive(clap::Args)]
struct FacesArgs {
    /// Face detection result (JSON).
    input: PathBuf,

    /// The analysed image.
    #[arg(long)]
    image: PathBuf,

    /// Output image (default from config).
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Arguments for the render subcommand.
#[derive(clap::Args)]
struct RenderArgs {
    /// Annotation list (JSON).
    input: PathBuf,

    /// The image to draw on.
    #[arg(long)]
    image: PathBuf,

    /// Output image; the extension picks the format (jpg, png or bmp).
    #[arg(long)]
    output: PathBuf,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Annotation list (JSON).
    input: PathBuf,

    /// Image width, enables the out-of-bounds check together with --height.
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Image height.
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the labelpaint CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), LabelpaintError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        debug!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(args, &config),
        Some(Commands::ReadText(args)) => run_read_text(args, &config),
        Some(Commands::Faces(args)) => run_faces(args, &config),
        Some(Commands::Render(args)) => run_render(args, &config),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            println!("labelpaint {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Draw detection boxes and text polygons onto images.");
            println!();
            println!("Run 'labelpaint --help' for usage information.");
            Ok(())
        }
    }
}

/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    // Fails only if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Execute the analyze subcommand.
fn run_analyze(args: AnalyzeArgs, config: &AppConfig) -> Result<(), LabelpaintError> {
    let analysis = detection::read_image_analysis(&args.input)?;
    print!("{}", detection::AnalysisReport(&analysis));

    let style = config.style.to_style()?;
    let source = render::decode_image(&args.image)?;

    let objects = detection::object_annotations(&analysis);
    if !objects.is_empty() {
        let output = args.objects_out.unwrap_or_else(|| config.output.objects.clone());
        draw(&source, &objects, &style, output)?;
    }

    let people = detection::people_annotations(&analysis);
    if !people.is_empty() {
        let output = args.people_out.unwrap_or_else(|| config.output.people.clone());
        draw(&source, &people, &style, output)?;
    }

    Ok(())
}

/// Execute the read-text subcommand.
fn run_read_text(args: ReadTextArgs, config: &AppConfig) -> Result<(), LabelpaintError> {
    let read = detection::read_text_read(&args.input)?;
    print!("{}", detection::TextReport(&read));

    let style = config.style.to_style()?;
    let source = render::decode_image(&args.image)?;
    let annotations = detection::text_annotations(&read);
    let output = args.output.unwrap_or_else(|| config.output.text.clone());
    draw(&source, &annotations, &style, output)
}

/// Execute the faces subcommand.
fn run_faces(args: FacesArgs, config: &AppConfig) -> Result<(), LabelpaintError> {
    let result = detection::read_face_detection(&args.input)?;
    print!("{}", detection::FaceReport(&result));

    if result.faces.is_empty() {
        return Ok(());
    }

    let style = config.face_style.to_style()?;
    let source = render::decode_image(&args.image)?;
    let annotations = detection::face_annotations(&result);
    let output = args.output.unwrap_or_else(|| config.output.faces.clone());
    draw(&source, &annotations, &style, output)
}

/// Execute the render subcommand.
fn run_render(args: RenderArgs, config: &AppConfig) -> Result<(), LabelpaintError> {
    let set = geometry::io_json::read_annotations_json(&args.input)?;
    info!(
        annotations = set.annotations.len(),
        input = %args.input.display(),
        "loaded annotations"
    );

    let style = config.style.to_style()?;
    let source = render::decode_image(&args.image)?;
    draw(&source, &set.annotations, &style, args.output)
}

fn draw(
    source: &image::DynamicImage,
    annotations: &[Annotation],
    style: &Style,
    output: PathBuf,
) -> Result<(), LabelpaintError> {
    let result = RenderRequest::new(source, annotations, style, output).render()?;
    info!(
        drawn = result.drawn,
        path = %result.path.display(),
        "annotated image written"
    );
    println!("Annotated image saved to {}", result.path.display());
    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), LabelpaintError> {
    let set = geometry::io_json::read_annotations_json(&args.input)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
        image_size: args.width.zip(args.height),
    };
    let report = validation::validate_annotations(&set.annotations, &opts);
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report.to_json()).map_err(|source| {
                LabelpaintError::JsonWrite {
                    path: PathBuf::from("<stdout>"),
                    source,
                }
            })?;
            println!("{}", json);
        }
        "text" => print!("{}", report),
        other => {
            return Err(LabelpaintError::UnsupportedFormat(format!(
                "'{}' (supported: text, json)",
                other
            )));
        }
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (opts.strict && has_warnings) {
        Err(LabelpaintError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}
