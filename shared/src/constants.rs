// Wheel timing
pub const SPIN_DURATION_MS: u32 = 6000;
pub const REVEAL_BUFFER_MS: u32 = 1000;
pub const MIN_EXTRA_SPINS: u32 = 5;
pub const MAX_EXTRA_SPINS: u32 = 7;
pub const SPIN_EASING: [f64; 4] = [0.15, 0.6, 0.3, 1.0];

// Angles are degrees, 0 at 3 o'clock, clockwise. 270 is the top of the wheel.
pub const FULL_TURN: f64 = 360.0;
pub const POINTER_ANGLE: f64 = 270.0;

// Item limits
pub const MIN_SPIN_ITEMS: usize = 2;
pub const MAX_ITEMS: usize = 36;
pub const LABEL_MAX_CHARS: usize = 15;
pub const LABEL_TRUNCATE_CHARS: usize = 12;
pub const LABEL_ELLIPSIS: &str = "...";

pub const DEFAULT_ITEMS: [&str; 6] = [
    "Prize 1",
    "Prize 2",
    "Prize 3",
    "Try Again",
    "Bonus Spin",
    "Nothing",
];

// SVG scene
pub const WHEEL_RADIUS: f64 = 150.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.65;
pub const HUB_OUTER_RATIO: f64 = 0.15;
pub const HUB_INNER_RATIO: f64 = 0.1;
pub const STROKE_WIDTH: f64 = 2.0;
pub const HUB_STROKE_WIDTH: f64 = 3.0;

pub const STROKE_COLOR: &str = "#FFFFFF";
pub const TEXT_COLOR: &str = "#FFFFFF";
pub const PLACEHOLDER_COLOR: &str = "#E5E7EB";
pub const HUB_OUTER_COLOR: &str = "#FFFFFF";
pub const HUB_OUTER_STROKE: &str = "#D1D5DB";
pub const HUB_INNER_COLOR: &str = "#4F46E5";

pub const PALETTE: [&str; 8] = [
    "#EF4444", // red-500
    "#3B82F6", // blue-500
    "#22C55E", // green-500
    "#EAB308", // yellow-500
    "#A855F7", // purple-500
    "#EC4899", // pink-500
    "#F97316", // orange-500
    "#14B8A6", // teal-500
];

// User-facing warnings
pub const EMPTY_LABEL_WARNING: &str = "Please enter an item name";
pub const DUPLICATE_LABEL_WARNING: &str = "This item already exists in the roulette!";
pub const TOO_MANY_ITEMS_WARNING: &str = "The wheel cannot hold any more items";
pub const NOT_ENOUGH_ITEMS_WARNING: &str = "Add at least two items to spin the wheel";
pub const SPIN_IN_PROGRESS_WARNING: &str = "Wait for the wheel to stop spinning";
