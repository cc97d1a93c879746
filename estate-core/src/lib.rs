//! Estate du Oud core library.
//!
//! Holds the carousel controller that drives the "Projects Completed" strip:
//! viewport classification, wrap-around index navigation, the pointer drag
//! state machine and the translation it projects for the renderer. Loading of
//! the carousel configuration and the project catalogue also lives here so
//! front ends only wire events and draw.

pub mod carousel;
pub mod catalogue;
pub mod config;
pub mod error;

pub use carousel::{
    CarouselController, CarouselSnapshot, Easing, FrameLoop, FrameScheduler,
    GesturePhase, PointerEvent, PointerSample, ViewportClass,
};
pub use config::CarouselConfig;
pub use error::{CoreError, Result};
