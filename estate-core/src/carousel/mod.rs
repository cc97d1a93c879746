//! Project carousel controller.
//!
//! The controller separates the settled state that drives rendering (index,
//! visible count) from the transient drag fields owned by the gesture
//! tracker. Hosts feed it window widths and pointer events, deliver the
//! frames it asks for, and draw the strip at [`CarouselController::translate_percent`]
//! or at the eased value held by its [`surface::VisualSurface`].

pub mod animator;
pub mod controller;
pub mod frame;
pub mod gesture;
pub mod navigator;
pub mod pointer;
pub mod projection;
pub mod surface;
pub mod viewport;

pub use animator::{Easing, SnapAnimator};
pub use controller::{CarouselController, CarouselSnapshot};
pub use frame::{FrameHandle, FrameLoop, FrameScheduler};
pub use gesture::{GesturePhase, GestureTracker, SettleOutcome};
pub use pointer::{PointerEnd, PointerEvent, PointerSample};
pub use surface::{Transition, VisualSurface};
pub use viewport::ViewportClass;
