//! Application-wide constants.
//!
//! Centralizes gesture thresholds, colors and layout values so the
//! classifier, the feedback projector and the card view agree on them.

// ============================================================================
// Gesture Defaults
// ============================================================================

/// Horizontal travel (in pixels) below which a press is still a tap
pub const DRAG_NOISE_FLOOR: f32 = 10.0;

/// Rightward travel needed to commit a rating; leftward travel for "don't know"
pub const DEFAULT_DONT_KNOW_THRESHOLD: f32 = 100.0;

/// Leftward travel needed to commit "doesn't care"
pub const DEFAULT_DONT_CARE_THRESHOLD: f32 = 200.0;

/// Rightward travel that maps onto the full star range
pub const DEFAULT_RATING_RANGE: f32 = 200.0;

/// Degrees of card rotation per pixel of travel
pub const DEFAULT_ROTATION_FACTOR: f32 = 0.1;

/// Rotation is clamped to +/- this many degrees
pub const DEFAULT_MAX_ROTATION_DEGREES: f32 = 15.0;

/// Number of stars in a full rating
pub const MAX_STARS: u8 = 5;

// ============================================================================
// Colors (0xRRGGBB)
// ============================================================================

/// Card background when no tint applies
pub const CARD_BACKGROUND: u32 = 0x1f2937;

/// Page background
pub const PAGE_BACKGROUND: u32 = 0x111827;

/// Primary text color
pub const TEXT_COLOR: u32 = 0xf3f4f6;

/// Wash shown while dragging toward a rating
pub const TINT_LIKE: u32 = 0x166534;

/// Wash shown while dragging toward "don't know"
pub const TINT_NOPE: u32 = 0x991b1b;

/// Wash shown while dragging toward "doesn't care"
pub const TINT_DONT_CARE: u32 = 0x6b21a8;

/// Filled star
pub const STAR_FILLED: u32 = 0xffc107;

/// Empty star
pub const STAR_EMPTY: u32 = 0xe4e5e9;

// ============================================================================
// Layout
// ============================================================================

/// Default window size
pub const WINDOW_SIZE: (f32, f32) = (480.0, 640.0);

/// Card dimensions
pub const CARD_SIZE: (f32, f32) = (320.0, 420.0);

/// Border radius for the card
pub const CARD_RADIUS: f32 = 12.0;

// ============================================================================
// Remote API
// ============================================================================

/// Base URL used when no settings file overrides it
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Request timeout for decision submission, in seconds
pub const API_TIMEOUT_SECS: u64 = 10;

/// How often the card checks for an item delivered by the sink's workers
pub const NEXT_ITEM_POLL_MS: u64 = 100;
