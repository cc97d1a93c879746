//! Pointer input normalized at the boundary.

/// Raw pointer input from the host. Mouse and touch both reduce to a
/// horizontal coordinate in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Mouse { x: f32 },
    Touch { x: f32 },
}

impl PointerEvent {
    pub fn sample(self) -> PointerSample {
        match self {
            PointerEvent::Mouse { x } | PointerEvent::Touch { x } => {
                PointerSample { x }
            }
        }
    }
}

/// Source-independent pointer position consumed by the gesture tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
}

/// What ended a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEnd {
    Up,
    /// Pointer left the strip while pressed. Treated as an implicit release.
    Leave,
    TouchEnd,
    TouchCancel,
}
