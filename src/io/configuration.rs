//! Analysis constants, generator design constants and runtime defaults

// Symmetry matching
/// Maximum distance between a transformed point and its match
///
/// Tuned for the historical 20-unit canvas; override per analysis when the
/// pattern uses a different coordinate scale.
pub const DEFAULT_TOLERANCE: f64 = 0.5;
/// Smallest rotational order tested
pub const MIN_ROTATION_ORDER: u8 = 2;
/// Largest rotational order tested
pub const MAX_ROTATION_ORDER: u8 = 8;
/// Fewer points than this never report a symmetry
pub const MIN_SYMMETRY_POINTS: usize = 3;

// Bounds the quadratic worst case of symmetry analysis
/// Maximum point count accepted by the analyzer
pub const DEFAULT_MAX_ANALYSIS_POINTS: usize = 10_000;

// Complexity scoring
/// Upper bound of the complexity score
pub const MAX_COMPLEXITY_SCORE: u8 = 10;
/// Points contributing one unit of complexity
pub const POINTS_PER_COMPLEXITY_UNIT: usize = 5;
/// Radial spread contributing one unit of complexity
pub const SPREAD_PER_COMPLEXITY_UNIT: f64 = 2.0;
/// Fewer points than this always score zero
pub const MIN_COMPLEXITY_POINTS: usize = 2;

// Generator limits
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum number of points a single generator call may produce
pub const MAX_GENERATED_POINTS: usize = 1_000_000;

// Generator design constants
/// Samples traced along each petal
pub const PETAL_SAMPLES: usize = 10;
/// Default number of spiral samples
pub const DEFAULT_SPIRAL_STEPS: usize = 50;
/// Radius added per mandala layer
pub const MANDALA_RING_SPACING: f64 = 2.0;
/// Symmetry order before the first mandala layer is added
pub const MANDALA_BASE_ORDER: usize = 4;
/// Symmetry order added per mandala layer
pub const MANDALA_ORDER_STEP: usize = 2;

// Style presets
/// Highest complexity accepted by the style presets
pub const MAX_STYLE_COMPLEXITY: u32 = 10;
/// Default preset complexity
pub const DEFAULT_STYLE_COMPLEXITY: u32 = 5;
/// Number of spirals surrounding a traditional mandala
pub const SATELLITE_SPIRAL_COUNT: usize = 4;
/// Distance from the center to each satellite spiral
pub const SATELLITE_SPIRAL_DISTANCE: f64 = 8.0;
/// Outer radius of each satellite spiral
pub const SATELLITE_SPIRAL_RADIUS: f64 = 3.0;
/// Turns of each satellite spiral
pub const SATELLITE_SPIRAL_TURNS: f64 = 2.0;
/// Radius of the innermost modern ring
pub const MODERN_BASE_RADIUS: f64 = 2.0;
/// Radius added per modern ring
pub const MODERN_RADIUS_STEP: f64 = 1.5;
/// Vertex count of the innermost modern ring
pub const MODERN_BASE_SIDES: usize = 3;

// Canvas defaults
/// Center used when the caller does not supply one
pub const DEFAULT_CENTER: [f64; 2] = [10.0, 10.0];
/// Fixed seed for reproducible random style selection
pub const DEFAULT_SEED: u64 = 42;

// Shape command defaults
/// Default shape radius
pub const DEFAULT_RADIUS: f64 = 4.0;
/// Default inner radius of a star
pub const DEFAULT_INNER_RADIUS: f64 = 2.0;
/// Default vertex, petal or star point count
pub const DEFAULT_SHAPE_COUNT: usize = 8;
/// Default dot grid rows and columns
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Default dot grid spacing
pub const DEFAULT_GRID_SPACING: f64 = 2.0;
/// Default spiral turns
pub const DEFAULT_SPIRAL_TURNS: f64 = 3.0;
/// Default mandala layer count
pub const DEFAULT_MANDALA_LAYERS: usize = 3;

// Design file settings
/// Stroke color of new designs
pub const DEFAULT_COLOR: &str = "#FF6B35";
/// Extension of design files picked up from directories
pub const DESIGN_EXTENSION: &str = "json";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
