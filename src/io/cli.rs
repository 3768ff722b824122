//! Command-line interface for generating, extending and analyzing designs

use crate::analysis::classification::Classification;
use crate::analysis::report::PatternAnalysis;
use crate::analysis::symmetry::SymmetryAnalyzer;
use crate::generation::presets::{Style, generate, generate_seeded};
use crate::generation::shapes::{circle, dot_grid, mandala, petal, spiral, star, symmetric_polygon};
use crate::geometry::point::{Point, PointSet};
use crate::io::configuration::{
    DEFAULT_CENTER, DEFAULT_GRID_SIZE, DEFAULT_GRID_SPACING, DEFAULT_INNER_RADIUS,
    DEFAULT_MANDALA_LAYERS, DEFAULT_MAX_ANALYSIS_POINTS, DEFAULT_RADIUS, DEFAULT_SEED,
    DEFAULT_SHAPE_COUNT, DEFAULT_SPIRAL_STEPS, DEFAULT_SPIRAL_TURNS, DEFAULT_STYLE_COMPLEXITY,
    DEFAULT_TOLERANCE, DESIGN_EXTENSION,
};
use crate::io::design::{Color, DesignAnalysis, DesignFile, DesignMetadata, current_timestamp};
use crate::io::error::{Result, WithPath, computation_error, invalid_input};
use crate::io::progress::ProgressManager;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kolam")]
#[command(
    author,
    version,
    about = "Generate kolam point patterns and analyze their symmetry"
)]
/// Command-line arguments for the kolam tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "kolam=warn",
            1 => "kolam=info",
            _ => "kolam=debug",
        }
    }

    /// Install the stderr log subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init_logging(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_filter()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| computation_error("logging setup", &e))
    }
}

/// Subcommands of the kolam tool
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a pattern from a style preset or a seeded random style
    Generate(GenerateArgs),
    /// Generate a single canonical shape
    Shape(ShapeArgs),
    /// Analyze a design file or every design in a directory
    Analyze(AnalyzeArgs),
}

/// Symmetry matching settings
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Maximum distance between a transformed point and its match
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Refuse to analyze patterns with more points than this
    #[arg(long, default_value_t = DEFAULT_MAX_ANALYSIS_POINTS)]
    pub max_points: usize,
}

impl AnalysisArgs {
    /// Build the analyzer described by these settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive tolerance or zero ceiling
    pub fn analyzer(&self) -> Result<SymmetryAnalyzer> {
        SymmetryAnalyzer::new(self.tolerance, self.max_points)
    }
}

/// Pattern center
#[derive(Args, Debug, Clone)]
pub struct CenterArgs {
    /// Horizontal coordinate of the pattern center
    #[arg(long, default_value_t = DEFAULT_CENTER[0], allow_negative_numbers = true)]
    pub cx: f64,

    /// Vertical coordinate of the pattern center
    #[arg(long, default_value_t = DEFAULT_CENTER[1], allow_negative_numbers = true)]
    pub cy: f64,
}

impl CenterArgs {
    /// Center as a validated point
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite coordinates
    pub fn point(&self) -> Result<Point> {
        Point::new(self.cx, self.cy)
    }
}

/// Where and how a generated pattern is written
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Design file to write (JSON on stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Extend the existing design at FILE instead of replacing it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Stroke color in #RRGGBB form; new designs default to #FF6B35
    #[arg(long)]
    pub color: Option<String>,

    /// Record the analysis block in the written design
    #[arg(long)]
    pub analyze: bool,

    /// Symmetry settings used with --analyze
    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments of the `generate` subcommand
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Style preset; a seeded random style is chosen when omitted
    #[arg(short, long, value_enum)]
    pub style: Option<Style>,

    /// Preset complexity from 1 to 10
    #[arg(short, long, requires = "style")]
    pub complexity: Option<u32>,

    /// Seed of the random style selection
    #[arg(long, conflicts_with = "style")]
    pub seed: Option<u64>,

    /// Pattern center
    #[command(flatten)]
    pub center: CenterArgs,

    /// Output settings
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Canonical shapes available to the `shape` subcommand
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Rectangular dot grid anchored at the origin
    Grid,
    /// Evenly spaced points on a circle
    Circle,
    /// Flower petals
    Petal,
    /// Archimedean spiral
    Spiral,
    /// Star with alternating outer and inner vertices
    Star,
    /// Regular polygon
    Polygon,
    /// Concentric symmetric layers
    Mandala,
}

/// Arguments of the `shape` subcommand
#[derive(Args, Debug, Clone)]
pub struct ShapeArgs {
    /// Shape to generate
    #[arg(value_enum)]
    pub kind: ShapeKind,

    /// Radius (outer radius for stars, maximum radius for spirals)
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    pub radius: f64,

    /// Inner radius of a star
    #[arg(long, default_value_t = DEFAULT_INNER_RADIUS)]
    pub inner_radius: f64,

    /// Points on a circle, petals, star points or polygon order
    #[arg(short = 'n', long, default_value_t = DEFAULT_SHAPE_COUNT)]
    pub count: usize,

    /// Dot grid rows
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub rows: usize,

    /// Dot grid columns
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub cols: usize,

    /// Dot grid spacing
    #[arg(long, default_value_t = DEFAULT_GRID_SPACING)]
    pub spacing: f64,

    /// Spiral turns
    #[arg(long, default_value_t = DEFAULT_SPIRAL_TURNS)]
    pub turns: f64,

    /// Spiral samples
    #[arg(long, default_value_t = DEFAULT_SPIRAL_STEPS)]
    pub steps: usize,

    /// Mandala layers
    #[arg(long, default_value_t = DEFAULT_MANDALA_LAYERS)]
    pub layers: usize,

    /// Pattern center (ignored by grids)
    #[command(flatten)]
    pub center: CenterArgs,

    /// Output settings
    #[command(flatten)]
    pub output: OutputArgs,
}

impl ShapeArgs {
    /// Generate the requested shape
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the shape parameters are degenerate
    pub fn build(&self) -> Result<PointSet> {
        let center = self.center.point()?;
        match self.kind {
            ShapeKind::Grid => dot_grid(self.rows, self.cols, self.spacing),
            ShapeKind::Circle => circle(&center, self.radius, self.count),
            ShapeKind::Petal => petal(&center, self.radius, self.count),
            ShapeKind::Spiral => spiral(&center, self.radius, self.turns, self.steps),
            ShapeKind::Star => star(&center, self.radius, self.inner_radius, self.count),
            ShapeKind::Polygon => symmetric_polygon(&center, self.radius, self.count),
            ShapeKind::Mandala => mandala(&center, self.layers),
        }
    }
}

/// Arguments of the `analyze` subcommand
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Design file or directory of design files
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Store the analysis block back into each design
    #[arg(short, long)]
    pub write: bool,

    /// Print one JSON record per design instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Symmetry settings
    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Machine-readable analysis of one design
#[derive(Serialize)]
struct AnalysisRecord {
    design: String,
    analysis: DesignAnalysis,
    classification: Classification,
    center: Option<Point>,
    average_radius: f64,
}

/// Dispatches parsed arguments to the pattern engine
pub struct CommandRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if generation, analysis or design file access fails
    pub fn run(&mut self) -> Result<()> {
        let Self {
            cli,
            progress_manager,
        } = self;

        match &cli.command {
            Command::Generate(args) => Self::generate(args),
            Command::Shape(args) => Self::shape(args),
            Command::Analyze(args) => Self::analyze(args, progress_manager.as_mut()),
        }
    }

    fn generate(args: &GenerateArgs) -> Result<()> {
        let center = args.center.point()?;

        let (points, metadata) = match args.style {
            Some(style) => {
                let complexity = args.complexity.unwrap_or(DEFAULT_STYLE_COMPLEXITY);
                let points = generate(style, &center, complexity)?;
                let metadata = DesignMetadata {
                    points: points.len(),
                    style: Some(style),
                    complexity: Some(complexity),
                    seed: None,
                };
                (points, metadata)
            }
            None => {
                let generated = generate_seeded(args.seed.unwrap_or(DEFAULT_SEED), &center)?;
                let metadata = DesignMetadata::from(&generated);
                (generated.points, metadata)
            }
        };

        tracing::info!(
            style = ?metadata.style,
            complexity = ?metadata.complexity,
            seed = ?metadata.seed,
            points = points.len(),
            "Generated pattern"
        );
        write_design(&args.output, points, Some(metadata))
    }

    fn shape(args: &ShapeArgs) -> Result<()> {
        let points = args.build()?;
        tracing::info!(shape = ?args.kind, points = points.len(), "Generated shape");
        write_design(&args.output, points, None)
    }

    fn analyze(args: &AnalyzeArgs, mut progress: Option<&mut ProgressManager>) -> Result<()> {
        let analyzer = args.analysis.analyzer()?;
        let files = collect_designs(&args.target)?;

        if files.is_empty() {
            tracing::warn!(path = %args.target.display(), "No design files found");
            return Ok(());
        }

        if let Some(pm) = progress.as_deref_mut() {
            pm.initialize(files.len());
        }

        let mut report = String::new();
        for file in &files {
            let mut design = DesignFile::load(file)?;
            if design.pattern.is_empty() {
                tracing::warn!(design = %file.display(), "No pattern to analyze");
            }

            let analysis = PatternAnalysis::of(&design.pattern, &analyzer)?;
            append_report(&mut report, file, &analysis, args.json)?;

            if args.write {
                design.analysis = Some(analysis.design_analysis());
                design.save(file)?;
                tracing::info!(design = %file.display(), "Stored analysis");
            }

            if let Some(pm) = progress.as_deref_mut() {
                pm.complete_file(file);
            }
        }

        if let Some(pm) = progress {
            pm.finish();
        }

        write_stdout(&report)
    }
}

fn write_design(
    output: &OutputArgs,
    points: PointSet,
    metadata: Option<DesignMetadata>,
) -> Result<()> {
    let color = output.color.as_deref().map(Color::parse).transpose()?;

    let mut design = match &output.output {
        Some(path) if output.append && path.exists() => {
            let mut existing = DesignFile::load(path)?;
            existing.append(&points);
            // Metadata no longer describes the whole pattern
            existing.metadata = None;
            existing.timestamp = current_timestamp();
            if let Some(color) = color {
                tracing::info!(design = %path.display(), %color, "Recolored design");
                existing.color = color;
            }
            existing
        }
        _ => {
            let design = DesignFile::new(points, color.unwrap_or_default());
            match metadata {
                Some(metadata) => design.with_metadata(metadata),
                None => design,
            }
        }
    };

    if output.analyze {
        design = design.analyzed(&output.analysis.analyzer()?)?;
    }

    match &output.output {
        Some(path) => {
            design.save(path)?;
            tracing::info!(
                design = %path.display(),
                points = design.pattern.len(),
                "Saved design"
            );
            Ok(())
        }
        None => {
            let mut text = design.to_json()?;
            text.push('\n');
            write_stdout(&text)
        }
    }
}

fn append_report(
    report: &mut String,
    file: &Path,
    analysis: &PatternAnalysis,
    json: bool,
) -> Result<()> {
    let written = if json {
        let record = AnalysisRecord {
            design: file.display().to_string(),
            analysis: analysis.design_analysis(),
            classification: analysis.classification,
            center: analysis.center,
            average_radius: analysis.average_radius,
        };
        let line = serde_json::to_string(&record).with_path(file)?;
        writeln!(report, "{line}")
    } else {
        writeln!(report, "{}\n{analysis}\n", file.display())
    };
    written.map_err(|e| computation_error("format report", &e))
}

fn collect_designs(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        Ok(vec![target.to_path_buf()])
    } else if target.is_dir() {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(target).with_path(target)? {
            let path = entry.with_path(target)?.path();
            if path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some(DESIGN_EXTENSION)
            {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_input(
            "target",
            &target.display(),
            &"must be a design file or directory",
        ))
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .with_path("<stdout>")
}
