//! Next-frame scheduling and the owned running-loop resource

/// Identifies one outstanding "call me before the next repaint" request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host primitive that delivers one frame callback per display refresh.
pub trait FrameScheduler {
    /// Ask for a single frame before the next repaint.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a request that has not been delivered yet.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// A started frame loop.
///
/// Holds at most one pending request. Dropping it cancels that request,
/// so nothing runs against a surface that has gone away.
#[derive(Debug)]
pub struct RunningLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameRequest>,
}

impl<S: FrameScheduler> RunningLoop<S> {
    pub fn start(scheduler: S) -> Self {
        tracing::debug!("frame loop started");
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Ask for the next frame, replacing any request still outstanding.
    pub fn schedule_next(&mut self) -> FrameRequest {
        if let Some(stale) = self.pending.take() {
            self.scheduler.cancel_frame(stale);
        }
        let request = self.scheduler.request_frame();
        self.pending = Some(request);
        request
    }

    /// Consume the pending request when its frame arrives. `None` means the
    /// frame was not asked for and must not advance the simulation.
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn cancel_pending(&mut self) {
        if let Some(request) = self.pending.take() {
            tracing::debug!(request = request.id(), "cancelling pending frame");
            self.scheduler.cancel_frame(request);
        }
    }
}

impl<S: FrameScheduler> Drop for RunningLoop<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
