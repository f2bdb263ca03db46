//! gridcells - Detect table cell grids in raster page images
//!
//! A command line tool that runs grid detection on grayscale page images
//! and prints the detected cell rectangles, grouped into rows, as JSON or
//! CSV. With `--debug-dir` every intermediate detection stage is dumped as
//! a PNG next to the results.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use serde::Serialize;
use trellis_core::detect::{CellRect, detect_cell_rects, group_rows};
use trellis_core::diagnostics::PngDiagnosticSink;
use trellis_core::error::Result;
use trellis_core::settings::DetectionSettings;

/// Output type for the detected grid.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// JSON output, one document per input file (default)
    #[default]
    Json,
    /// CSV output: file,row,col,x,y,width,height
    Csv,
}

/// Detect table cell grids in raster page images and print the cell
/// rectangles grouped into rows.
#[derive(Parser, Debug)]
#[command(name = "gridcells")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to page images (PNG, JPEG, ...)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    // === Detection options ===
    /// Binary-inverted threshold cutoff
    #[arg(short = 't', long, default_value = "150")]
    threshold: u8,

    /// Value assigned to thresholded pixels
    #[arg(long = "max-val", default_value = "255")]
    max_val: u8,

    /// Trace contours on a Canny edge map instead of the thresholded mask
    #[arg(long, action = ArgAction::SetTrue)]
    canny: bool,

    /// Lower Canny hysteresis threshold
    #[arg(long = "canny-threshold1", default_value = "50")]
    canny_threshold1: f32,

    /// Upper Canny hysteresis threshold
    #[arg(long = "canny-threshold2", default_value = "200")]
    canny_threshold2: f32,

    /// Polygon approximation epsilon as a fraction of contour perimeter
    #[arg(long = "epsilon-scale", default_value = "0.02")]
    epsilon_scale: f64,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(long = "output-type", value_enum, default_value = "json")]
    output_type: OutputType,

    /// Directory to write diagnostic stage images to
    #[arg(long = "debug-dir")]
    debug_dir: Option<PathBuf>,

    /// Filename prefix for diagnostic images (defaults to the input stem)
    #[arg(long = "debug-prefix")]
    debug_prefix: Option<String>,
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: &'a str,
    rows: Vec<Vec<CellRect>>,
}

fn build_settings(args: &Args) -> DetectionSettings {
    DetectionSettings::builder()
        .bit_threshold(args.threshold)
        .bit_max_val(args.max_val)
        .canny_enabled(args.canny)
        .canny_threshold1(args.canny_threshold1)
        .canny_threshold2(args.canny_threshold2)
        .approx_epsilon_scale(args.epsilon_scale)
        .build()
}

fn detect_file(args: &Args, path: &Path, settings: &DetectionSettings) -> Result<Vec<Vec<CellRect>>> {
    let image = image::open(path)?.to_luma8();

    let rects = match &args.debug_dir {
        Some(dir) => {
            let prefix = args.debug_prefix.clone().unwrap_or_else(|| {
                path.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "page".to_string())
            });
            let mut sink = PngDiagnosticSink::new(dir, prefix);
            detect_cell_rects(&image, settings, Some(&mut sink))?
        }
        None => detect_cell_rects(&image, settings, None)?,
    };

    Ok(group_rows(&rects))
}

fn write_json(out: &mut dyn Write, reports: &[FileReport]) -> io::Result<()> {
    let body = serde_json::to_string_pretty(reports).expect("report serialization");
    writeln!(out, "{body}")
}

fn write_csv(out: &mut dyn Write, reports: &[FileReport]) -> io::Result<()> {
    writeln!(out, "file,row,col,x,y,width,height")?;
    for report in reports {
        for (r, row) in report.rows.iter().enumerate() {
            for (c, rect) in row.iter().enumerate() {
                writeln!(
                    out,
                    "{},{r},{c},{},{},{},{}",
                    report.file, rect.x, rect.y, rect.width, rect.height
                )?;
            }
        }
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = build_settings(&args);

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let rows = detect_file(&args, path, &settings)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        reports.push(FileReport {
            file: path.to_str().unwrap_or("<non-utf8 path>"),
            rows,
        });
    }

    match args.output_type {
        OutputType::Json => write_json(&mut output, &reports)?,
        OutputType::Csv => write_csv(&mut output, &reports)?,
    }
    output.flush()?;
    Ok(())
}
