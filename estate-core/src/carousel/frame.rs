//! Per-frame callback scheduling.
//!
//! The drag tracker keeps the rendered strip in sync with the pointer by
//! asking the host for one frame at a time. A host implements
//! [`FrameScheduler`]; [`FrameLoop`] is the default implementation for hosts
//! that poll (an iced subscription, or a test) rather than register callbacks.

/// Opaque handle for one outstanding frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

pub trait FrameScheduler {
    /// Request a single frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame. Cancelling a handle that already
    /// fired or was already cancelled is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Polling scheduler holding at most one pending frame.
#[derive(Debug, Default, Clone)]
pub struct FrameLoop {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the pending request when the host delivers a frame.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for FrameLoop {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        // A fresh request supersedes any stale one.
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.is_some_and(|pending| pending.0 == handle.0) {
            self.pending = None;
        }
    }
}
