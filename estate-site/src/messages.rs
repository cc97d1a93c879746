use std::fmt;
use std::time::Instant;

use iced::{Point, Size};

/// Touch phases reported by the global event listener, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchInput {
    Started(f32),
    Moved(f32),
    Ended,
    Cancelled,
}

#[derive(Clone)]
pub enum Message {
    // Arrow buttons
    NextProject,
    PrevProject,

    // Window
    WindowResized(Size),

    // Mouse over the project strip
    StripCursorMoved(Point),
    StripPressed,
    StripReleased,
    StripExited,
    /// The strip's scrollable moved, reporting its horizontal offset
    StripScrolled(f32),

    // Touch anywhere in the window
    Touch(TouchInput),

    /// Frame-synchronized tick driving drag frames and settle easing
    FrameTick(Instant),

    NoOp,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NextProject => "Projects::Next",
            Self::PrevProject => "Projects::Prev",
            Self::WindowResized(_) => "Window::Resized",
            Self::StripCursorMoved(_) => "Strip::CursorMoved",
            Self::StripPressed => "Strip::Pressed",
            Self::StripReleased => "Strip::Released",
            Self::StripExited => "Strip::Exited",
            Self::StripScrolled(_) => "Strip::Scrolled",
            Self::Touch(_) => "Strip::Touch",
            Self::FrameTick(_) => "Frame::Tick",
            Self::NoOp => "NoOp",
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowResized(size) => {
                write!(f, "Window::Resized({}x{})", size.width, size.height)
            }
            Self::StripCursorMoved(point) => {
                write!(f, "Strip::CursorMoved({:.1}, {:.1})", point.x, point.y)
            }
            Self::StripScrolled(x) => write!(f, "Strip::Scrolled({x:.1})"),
            Self::Touch(input) => write!(f, "Strip::Touch({input:?})"),
            other => f.write_str(other.name()),
        }
    }
}
