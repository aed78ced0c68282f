//! Command-line interface for generating paint-by-numbers pages

use crate::geometry::{Orientation, PageGeometry, PageSpec, PointMapper};
use crate::io::configuration::{
    A3, A4, A5, DEFAULT_ITERATIONS, DEFAULT_NUM_COLORS, DEFAULT_SEED, LEGAL, LETTER,
    POINTS_PER_CM, POINTS_PER_INCH, TABLOID,
};
use crate::io::debug::{DebugSink, DirectorySink, NullSink};
use crate::io::error::{MosaicError, Result};
use crate::io::image::load_grayscale;
use crate::io::progress::ProgressManager;
use crate::raster::{Quantizer, block_average};
use crate::render::{DocumentSpec, DrawCommand, grid_commands, shape_commands, write_document};
use crate::sampler::{MosaicConfig, ShapeMosaic};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ndarray::Array2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "paintnum")]
#[command(
    author,
    version,
    about = "Generate paint-by-numbers pages from photographs"
)]
/// Command-line arguments for the page generation tool
pub struct Cli {
    /// Page generation algorithm to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available page generation algorithms
#[derive(Subcommand)]
pub enum Command {
    /// Downsample the image into a grid of colored squares
    Downscale(DownscaleArgs),
    /// Cover the image with overlapping geometric shapes
    Shapes(ShapesArgs),
}

/// Arguments shared by every algorithm
#[derive(Args)]
pub struct CommonArgs {
    /// Input image to process
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output PostScript file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Paper size for the generated page
    #[arg(short, long, value_enum, default_value = "letter")]
    pub paper_size: PaperSize,

    /// Margin size with unit: "1 in", "2.5 cm" and "18 pt" are supported
    #[arg(short, long, value_parser = parse_length, default_value = "1 in")]
    pub margin: f64,

    /// How many palette levels are used in the printout
    #[arg(short, long, default_value_t = DEFAULT_NUM_COLORS)]
    pub num_colors: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Save intermediate rasters for debugging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the downscale algorithm
#[derive(Args)]
pub struct DownscaleArgs {
    /// Shared arguments
    #[command(flatten)]
    pub common: CommonArgs,

    /// Physical size of one grid square, with unit
    #[arg(long, value_parser = parse_length, default_value = "0.25 in")]
    pub square_size: f64,
}

/// Arguments for the shapes algorithm
#[derive(Args)]
pub struct ShapesArgs {
    /// Shared arguments
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of halving diameter tiers to sample
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,
}

/// Supported paper sizes
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PaperSize {
    /// US Letter, 8.5 x 11 in
    Letter,
    /// US Legal, 8.5 x 14 in
    Legal,
    /// US Tabloid, 11 x 17 in
    Tabloid,
    /// ISO A3
    A3,
    /// ISO A4
    A4,
    /// ISO A5
    A5,
}

impl PaperSize {
    /// Portrait dimensions in points
    pub const fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Letter => LETTER,
            Self::Legal => LEGAL,
            Self::Tabloid => TABLOID,
            Self::A3 => A3,
            Self::A4 => A4,
            Self::A5 => A5,
        }
    }
}

/// Parse a physical length like "1 in", "2.5 cm" or "18 pt" into points
///
/// # Errors
///
/// Returns a message if the unit is unrecognized, the number is unparsable,
/// or the length is negative.
pub fn parse_length(text: &str) -> std::result::Result<f64, String> {
    let trimmed = text.trim();
    let (value_text, factor) = if let Some(v) = trimmed.strip_suffix("in") {
        (v, POINTS_PER_INCH)
    } else if let Some(v) = trimmed.strip_suffix("cm") {
        (v, POINTS_PER_CM)
    } else if let Some(v) = trimmed.strip_suffix("pt") {
        (v, 1.0)
    } else {
        return Err(format!(
            "'{trimmed}' has no recognized unit (expected in, cm or pt)"
        ));
    };
    let value: f64 = value_text
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not a number: {e}", value_text.trim()))?;
    if value < 0.0 {
        return Err(format!("length must not be negative, got '{trimmed}'"));
    }
    Ok(value * factor)
}

/// Orchestrates a single page generation run
pub struct Processor {
    cli: Cli,
}

impl Processor {
    /// Create a processor for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected algorithm end to end
    ///
    /// # Errors
    ///
    /// Returns an error if loading, geometry validation, generation, or
    /// document writing fails.
    pub fn run(self) -> Result<()> {
        match self.cli.command {
            Command::Downscale(args) => run_downscale(&args),
            Command::Shapes(args) => run_shapes(&args),
        }
    }
}

struct RunContext {
    raster: Array2<u8>,
    geometry: PageGeometry,
    sink: Box<dyn DebugSink>,
}

fn prepare(common: &CommonArgs) -> Result<RunContext> {
    let raster = load_grayscale(&common.input)?;
    let (rows, cols) = raster.dim();

    let (width_pt, height_pt) = common.paper_size.dimensions();
    let page = PageSpec::new(width_pt, height_pt, common.margin)?;
    let orientation = Orientation::from_raster_dims(rows, cols);
    let geometry = PageGeometry::new(page, orientation);

    let sink: Box<dyn DebugSink> = if common.debug {
        Box::new(DirectorySink::new(debug_dir(&common.output)))
    } else {
        Box::new(NullSink)
    };

    Ok(RunContext {
        raster,
        geometry,
        sink,
    })
}

fn debug_dir(output: &Path) -> PathBuf {
    output.parent().map_or_else(|| PathBuf::from("debug"), |p| p.join("debug"))
}

fn run_downscale(args: &DownscaleArgs) -> Result<()> {
    let common = &args.common;
    let ctx = prepare(common)?;

    let block = ctx.geometry.block_size(ctx.raster.dim(), args.square_size)?;
    let downsampled = block_average(&ctx.raster, block)?;
    let quantizer = Quantizer::new(common.num_colors)?;
    let levels = quantizer.quantize_raster(&downsampled);

    ctx.sink.record("grayscale", &ctx.raster)?;
    ctx.sink.record("downsampled", &downsampled)?;
    let preview = levels.mapv(|level| quantizer.preview(level));
    ctx.sink.record("quantized", &preview)?;

    let commands = grid_commands(&levels);
    let (width_pt, height_pt) = ctx.geometry.document_dims();
    let spec = DocumentSpec {
        width_pt,
        height_pt,
        margin_pt: ctx.geometry.margin_pt(),
        num_colors: common.num_colors,
        cell_size_pt: Some(args.square_size),
    };
    write_output(&spec, &commands, &common.output)?;
    report_completion(common, commands.len());
    Ok(())
}

fn run_shapes(args: &ShapesArgs) -> Result<()> {
    let common = &args.common;
    let ctx = prepare(common)?;
    let (rows, _) = ctx.raster.dim();
    let scale = ctx.geometry.points_per_pixel(ctx.raster.dim())?;

    ctx.sink.record("grayscale", &ctx.raster)?;

    let config = MosaicConfig {
        iterations: args.iterations,
        num_colors: common.num_colors,
        seed: common.seed,
    };
    let mut mosaic = ShapeMosaic::new(&ctx.raster, &config)?;
    let diameters = mosaic.diameters().to_vec();

    let progress = (!common.quiet).then(|| ProgressManager::new(diameters.len()));

    let mut passes = Vec::with_capacity(diameters.len());
    for diameter in diameters {
        if let Some(ref pm) = progress {
            pm.start_pass(diameter, mosaic.planned_samples(diameter));
        }
        let pass = mosaic.run_pass(diameter)?;
        if pass.is_empty() {
            warn_degenerate(common, diameter);
        }
        if let Some(ref pm) = progress {
            pm.complete_pass();
        }
        passes.push(pass);
    }
    if let Some(ref pm) = progress {
        pm.finish();
    }

    let mapper = PointMapper::new(scale, rows);
    let commands = shape_commands(&passes, &mapper);
    let (width_pt, height_pt) = ctx.geometry.document_dims();
    let spec = DocumentSpec {
        width_pt,
        height_pt,
        margin_pt: ctx.geometry.margin_pt(),
        num_colors: common.num_colors,
        cell_size_pt: None,
    };
    write_output(&spec, &commands, &common.output)?;
    report_completion(common, commands.len());
    Ok(())
}

fn write_output(spec: &DocumentSpec, commands: &[DrawCommand], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| MosaicError::DocumentExport {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut out = BufWriter::new(file);
    write_document(spec, commands, &mut out).map_err(|e| MosaicError::DocumentExport {
        path: path.to_path_buf(),
        source: e,
    })?;
    out.flush().map_err(|e| MosaicError::DocumentExport {
        path: path.to_path_buf(),
        source: e,
    })
}

// Allow print for user feedback on non-fatal conditions
#[allow(clippy::print_stderr)]
fn warn_degenerate(common: &CommonArgs, diameter: usize) {
    if !common.quiet {
        eprintln!("Tier with diameter {diameter}px places no samples (continuing without it)");
    }
}

// Allow print for user feedback after a completed run
#[allow(clippy::print_stderr)]
fn report_completion(common: &CommonArgs, command_count: usize) {
    if !common.quiet {
        eprintln!(
            "Wrote {command_count} drawing commands to {}",
            common.output.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_units() {
        match parse_length("1 in") {
            Ok(v) => assert!((v - 72.0).abs() < 1e-9),
            Err(e) => unreachable!("inches should parse: {e}"),
        }
        match parse_length("2.54cm") {
            Ok(v) => assert!((v - 72.0).abs() < 1e-9),
            Err(e) => unreachable!("centimeters should parse: {e}"),
        }
        match parse_length(" 36 pt ") {
            Ok(v) => assert!((v - 36.0).abs() < 1e-9),
            Err(e) => unreachable!("points should parse: {e}"),
        }
    }

    #[test]
    fn test_parse_length_rejects_bad_input() {
        assert!(parse_length("12 furlongs").is_err());
        assert!(parse_length("abc in").is_err());
        assert!(parse_length("-1 in").is_err());
        assert!(parse_length("").is_err());
    }
}
