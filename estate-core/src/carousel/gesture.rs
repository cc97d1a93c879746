//! Drag gesture state machine: Idle -> Dragging -> Settling -> Idle.
//!
//! The tracker owns the transient drag fields (start coordinate, baseline
//! translation, live offset) and the single outstanding frame request. None
//! of these are part of the settled carousel state; the controller only
//! observes the tracker at gesture boundaries and when projecting a frame.

use super::frame::{FrameHandle, FrameScheduler};
use super::navigator::max_index;
use super::pointer::{PointerEnd, PointerSample};
use super::projection::slide_step_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    /// Released; the strip is easing toward the committed index.
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start_x: f32,
    baseline: f32,
    track_width: f32,
    offset: f32,
}

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleOutcome {
    /// Committed index, clamped to `[0, max(0, N - visible)]`.
    pub index: usize,
    /// Translation at the moment of release.
    pub live_translation: f32,
    /// Rounded slide count before clamping. May be negative or past the end.
    pub moved_slides: i64,
    pub ended_by: PointerEnd,
}

#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    session: Option<DragSession>,
    frame: Option<FrameHandle>,
}

/// Convert a pixel delta into percent of the strip, via one slide's width:
/// `(delta / (track / visible)) * (100 / visible)`. Degenerate tracks and
/// non-finite deltas yield 0.
pub fn delta_percent(delta_px: f32, track_width_px: f32, visible: usize) -> f32 {
    if !delta_px.is_finite()
        || !track_width_px.is_finite()
        || track_width_px <= 0.0
    {
        return 0.0;
    }
    let visible = visible.max(1) as f32;
    let slide_width_px = track_width_px / visible;
    (delta_px / slide_width_px) * (100.0 / visible)
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Outstanding frame request, if any. Only ever set while dragging.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frame
    }

    /// Offset beyond the baseline translation. Zero unless dragging.
    pub fn drag_offset(&self) -> f32 {
        match (self.phase, self.session) {
            (GesturePhase::Dragging, Some(session)) => session.offset,
            _ => 0.0,
        }
    }

    /// `baseline + offset` while dragging.
    pub fn live_translation(&self) -> Option<f32> {
        match (self.phase, self.session) {
            (GesturePhase::Dragging, Some(session)) => {
                Some(session.baseline + session.offset)
            }
            _ => None,
        }
    }

    /// Idle/Settling -> Dragging. Records the start coordinate and the
    /// settled translation as the baseline, and schedules the first frame.
    pub fn begin<S: FrameScheduler>(
        &mut self,
        sample: PointerSample,
        baseline: f32,
        track_width_px: f32,
        scheduler: &mut S,
    ) {
        if let Some(stale) = self.frame.take() {
            scheduler.cancel_frame(stale);
        }
        self.session = Some(DragSession {
            start_x: sample.x,
            baseline,
            track_width: track_width_px,
            offset: 0.0,
        });
        self.phase = GesturePhase::Dragging;
        self.frame = Some(scheduler.request_frame());
        log::debug!(
            "Drag started at x={:.1} (baseline={:.2}%, track={:.1}px)",
            sample.x,
            baseline,
            track_width_px
        );
    }

    /// Overwrite the live offset from the latest pointer sample. Returns the
    /// new live translation, or `None` when no drag is active.
    pub fn update(&mut self, sample: PointerSample, visible: usize) -> Option<f32> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        let session = self.session.as_mut()?;
        let diff_px = session.start_x - sample.x;
        session.offset = -delta_percent(diff_px, session.track_width, visible);
        Some(session.baseline + session.offset)
    }

    /// Move the drag baseline when the settled slot changes mid-drag. The
    /// pointer offset is kept.
    pub fn rebase(&mut self, baseline: f32) {
        if let Some(session) = self.session.as_mut() {
            session.baseline = baseline;
        }
    }

    /// The host delivered the requested frame. Re-schedules while dragging
    /// and returns the translation to apply.
    pub fn on_frame<S: FrameScheduler>(
        &mut self,
        scheduler: &mut S,
    ) -> Option<f32> {
        self.frame = None;
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        self.frame = Some(scheduler.request_frame());
        self.live_translation()
    }

    /// Dragging -> Settling. Cancels the outstanding frame and rounds the
    /// live translation to the nearest slide. Returns `None` when no drag is
    /// active.
    pub fn end<S: FrameScheduler>(
        &mut self,
        ended_by: PointerEnd,
        slide_count: usize,
        visible: usize,
        scheduler: &mut S,
    ) -> Option<SettleOutcome> {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        let session = self.session.take()?;
        self.phase = GesturePhase::Settling;

        let live = session.baseline + session.offset;
        let raw = (-live / slide_step_percent(visible)).round();
        let upper = max_index(slide_count, visible);
        let index = if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(upper)
        };

        let outcome = SettleOutcome {
            index,
            live_translation: live,
            moved_slides: raw as i64,
            ended_by,
        };
        log::debug!(
            "Drag ended by {:?}: live={:.2}% moved={} -> index {}",
            ended_by,
            live,
            outcome.moved_slides,
            index
        );
        Some(outcome)
    }

    /// Settling -> Idle.
    pub fn finish_settle(&mut self) {
        if self.phase == GesturePhase::Settling {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Drop any drag in progress and release the frame request.
    pub fn reset<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.session = None;
        self.phase = GesturePhase::Idle;
    }
}
