//! Layout and motion constants for the projects section.
//!
//! Tuning should happen here so the view and the event handlers agree on the
//! strip geometry used to convert pointer pixels into translation percent.

/// Layout constants for the projects section composition.
pub mod layout {
    /// Horizontal padding applied on each side of the section.
    pub const HORIZONTAL_PADDING_SIDE: f32 = 32.0;
    /// Total horizontal padding applied (left + right).
    pub const HORIZONTAL_PADDING_TOTAL: f32 = HORIZONTAL_PADDING_SIDE * 2.0;
    /// Inner gap kept on each side of a card inside its slot.
    pub const CARD_GUTTER: f32 = 8.0;
    /// Height of the card strip.
    pub const STRIP_HEIGHT: f32 = 420.0;
    /// Height reserved for a card image.
    pub const CARD_IMAGE_HEIGHT: f32 = 320.0;
    pub const TITLE_SIZE: f32 = 32.0;
    pub const CARD_TITLE_SIZE: f32 = 20.0;
    pub const CAPTION_SIZE: f32 = 14.0;
    /// Default window size at launch.
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;
}

/// Frame cadence for drag tracking and settle easing.
pub mod motion {
    /// Tick interval in nanoseconds (~120 FPS).
    pub const TICK_NS: u64 = 8_333_333;
}

/// Strip width available for slides in a window `window_width` wide.
pub fn track_width(window_width: f32) -> f32 {
    (window_width - layout::HORIZONTAL_PADDING_TOTAL).max(0.0)
}
