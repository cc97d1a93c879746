//! CarouselController: settled index, visible window and live drag in one place.

use std::time::{Duration, Instant};

use super::frame::{FrameLoop, FrameScheduler};
use super::gesture::{GesturePhase, GestureTracker, SettleOutcome};
use super::navigator::{clamp_index, max_index, next_index, prev_index};
use super::pointer::{PointerEnd, PointerEvent};
use super::projection::{settled_translation, translate_percent};
use super::surface::{Transition, VisualSurface};
use super::viewport::{ViewportClass, visible_count};
use crate::config::CarouselConfig;

/// Point-in-time view of the controller for rendering and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub slide_count: usize,
    pub current_index: usize,
    pub max_index: usize,
    pub visible_count: usize,
    pub viewport: ViewportClass,
    pub phase: GesturePhase,
    pub drag_offset_percent: f32,
    pub translate_percent: f32,
    pub applied_percent: f32,
}

#[derive(Debug, Clone)]
pub struct CarouselController<S: FrameScheduler = FrameLoop> {
    config: CarouselConfig,
    slide_count: usize,
    viewport: ViewportClass,
    visible: usize,
    current_index: usize,
    tracker: GestureTracker,
    surface: VisualSurface,
    scheduler: S,
}

impl CarouselController<FrameLoop> {
    /// Mount a controller at index 0 for a window of `window_width` pixels.
    pub fn new(
        slide_count: usize,
        config: CarouselConfig,
        window_width: f32,
    ) -> Self {
        Self::with_scheduler(slide_count, config, window_width, FrameLoop::new())
    }

    /// Whether the drag tracker is waiting on a frame.
    pub fn frame_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Deliver a frame if one was requested. Returns the applied translation.
    pub fn poll_frame(&mut self, now: Instant) -> Option<f32> {
        self.scheduler.fire()?;
        self.on_frame(now)
    }
}

impl<S: FrameScheduler> CarouselController<S> {
    pub fn with_scheduler(
        slide_count: usize,
        config: CarouselConfig,
        window_width: f32,
        scheduler: S,
    ) -> Self {
        let viewport = ViewportClass::classify(window_width, &config);
        let visible = visible_count(viewport, slide_count, &config);
        let transition = settle_transition(&config);
        log::debug!(
            "Carousel mounted: {} slides, {:?} viewport ({} visible)",
            slide_count,
            viewport,
            visible
        );
        Self {
            config,
            slide_count,
            viewport,
            visible,
            current_index: 0,
            tracker: GestureTracker::new(),
            surface: VisualSurface::new(0.0, transition),
            scheduler,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn max_index(&self) -> usize {
        max_index(self.slide_count, self.visible)
    }

    pub fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn drag_offset_percent(&self) -> f32 {
        self.tracker.drag_offset()
    }

    pub fn surface(&self) -> &VisualSurface {
        &self.surface
    }

    /// Translation for the settled index with no drag applied.
    pub fn settled_translation(&self) -> f32 {
        settled_translation(self.current_index, self.visible)
    }

    /// Render projection: settled translation plus the live drag offset.
    pub fn translate_percent(&self) -> f32 {
        translate_percent(
            self.current_index,
            self.tracker.drag_offset(),
            self.visible,
            self.tracker.is_dragging(),
        )
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            slide_count: self.slide_count(),
            current_index: self.current_index,
            max_index: self.max_index(),
            visible_count: self.visible,
            viewport: self.viewport,
            phase: self.tracker.phase(),
            drag_offset_percent: self.drag_offset_percent(),
            translate_percent: self.translate_percent(),
            applied_percent: self.surface.applied(),
        }
    }

    /// Reclassify after a window resize and re-clamp the index. Returns true
    /// when the visible count changed.
    pub fn resize(&mut self, window_width: f32) -> bool {
        let viewport = ViewportClass::classify(window_width, &self.config);
        let visible = visible_count(viewport, self.slide_count, &self.config);
        self.viewport = viewport;
        if visible == self.visible {
            return false;
        }
        log::debug!(
            "Viewport {:?} at {:.0}px: visible {} -> {}",
            viewport,
            window_width,
            self.visible,
            visible
        );
        self.set_visible_count(visible);
        true
    }

    /// Override the visible count directly (floored at 1) and re-clamp.
    pub fn set_visible_count(&mut self, visible: usize) {
        self.visible = visible.max(1);
        let clamped = clamp_index(self.current_index, self.slide_count, self.visible);
        if clamped != self.current_index {
            log::debug!(
                "Re-clamped index {} -> {} (max {})",
                self.current_index,
                clamped,
                self.max_index()
            );
        }
        self.set_index(clamped, Instant::now());
    }

    /// Replace the slide count, keeping the current viewport class.
    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        let visible = visible_count(self.viewport, slide_count, &self.config);
        self.set_visible_count(visible);
    }

    /// Step right, wrapping to the start at the end boundary.
    pub fn next(&mut self) -> usize {
        let index = next_index(self.current_index, self.slide_count, self.visible);
        self.set_index(index, Instant::now());
        index
    }

    /// Step left, wrapping to the end boundary at the start.
    pub fn prev(&mut self) -> usize {
        let index = prev_index(self.current_index, self.slide_count, self.visible);
        self.set_index(index, Instant::now());
        index
    }

    /// Jump to `index`, clamped to the valid range.
    pub fn go_to(&mut self, index: usize) -> usize {
        let index = clamp_index(index, self.slide_count, self.visible);
        self.set_index(index, Instant::now());
        index
    }

    /// Pointer pressed on the strip: start tracking 1:1 with no transition.
    pub fn pointer_down(&mut self, event: PointerEvent, track_width_px: f32) {
        self.surface.set_transition(Transition::Immediate);
        let baseline = self.settled_translation();
        self.tracker.begin(
            event.sample(),
            baseline,
            track_width_px,
            &mut self.scheduler,
        );
    }

    /// Returns the live translation, or `None` when not dragging.
    pub fn pointer_move(&mut self, event: PointerEvent) -> Option<f32> {
        self.tracker.update(event.sample(), self.visible)
    }

    pub fn pointer_up(&mut self) -> Option<SettleOutcome> {
        self.settle(PointerEnd::Up)
    }

    /// Leaving the strip mid-drag is an implicit release. No-op otherwise.
    pub fn pointer_leave(&mut self) -> Option<SettleOutcome> {
        if !self.tracker.is_dragging() {
            return None;
        }
        self.settle(PointerEnd::Leave)
    }

    pub fn touch_end(&mut self) -> Option<SettleOutcome> {
        self.settle(PointerEnd::TouchEnd)
    }

    pub fn touch_cancel(&mut self) -> Option<SettleOutcome> {
        self.settle(PointerEnd::TouchCancel)
    }

    /// The host delivered the frame the tracker asked for. Applies the live
    /// translation and re-schedules while the drag continues.
    pub fn on_frame(&mut self, _now: Instant) -> Option<f32> {
        let live = self.tracker.on_frame(&mut self.scheduler)?;
        self.surface.apply(live);
        Some(live)
    }

    /// Advance the settle ease. Finishes the gesture once the strip lands.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let applied = self.surface.tick(now)?;
        if !self.surface.is_animating() {
            self.tracker.finish_settle();
        }
        Some(applied)
    }

    /// Whether anything still needs frames: a pending drag frame or an ease.
    pub fn needs_frames(&self) -> bool {
        self.tracker.pending_frame().is_some() || self.surface.is_animating()
    }

    /// Release every scheduled callback and drop any gesture in progress.
    /// Later index changes ease again.
    pub fn unmount(&mut self) {
        self.tracker.reset(&mut self.scheduler);
        self.surface.set_transition(settle_transition(&self.config));
        log::debug!("Carousel unmounted at index {}", self.current_index);
    }

    fn settle(&mut self, ended_by: PointerEnd) -> Option<SettleOutcome> {
        let outcome = self.tracker.end(
            ended_by,
            self.slide_count,
            self.visible,
            &mut self.scheduler,
        )?;
        self.surface.set_transition(settle_transition(&self.config));
        self.set_index(outcome.index, Instant::now());
        if !self.surface.is_animating() {
            self.tracker.finish_settle();
        }
        Some(outcome)
    }

    fn set_index(&mut self, index: usize, now: Instant) {
        let index = clamp_index(index, self.slide_count, self.visible);
        if index != self.current_index {
            log::debug!("Carousel index {} -> {}", self.current_index, index);
        }
        self.current_index = index;
        let settled = self.settled_translation();
        if self.tracker.is_dragging() {
            // Keep the live translation consistent with the new settled slot.
            self.tracker.rebase(settled);
        } else {
            self.surface.retarget(settled, now);
        }
    }
}

fn settle_transition(config: &CarouselConfig) -> Transition {
    Transition::Eased {
        duration: Duration::from_millis(config.settle.duration_ms),
        easing: config.settle.easing,
    }
}
