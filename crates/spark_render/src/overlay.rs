//! The burst overlay: frame loop, resize handling and teardown

use std::cell::RefCell;
use std::rc::Rc;

use spark_core::{BurstHandle, SharedSimulation, Simulation, StepReport};

use crate::canvas::{draw_particles, Canvas, SurfaceSize};
use crate::error::RenderError;
use crate::scheduler::{FrameScheduler, RunningLoop};

/// What one delivered frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub step: StepReport,
    /// Circles drawn (always equal to `step.live`)
    pub drawn: usize,
}

enum LoopState<C, S: FrameScheduler> {
    /// No drawable surface yet: nothing is scheduled or rendered
    Idle { scheduler: S },
    Running { canvas: C, frames: RunningLoop<S> },
    TornDown,
}

/// Owns the simulation loop for one rendering surface.
///
/// Lifecycle: `Idle` until a surface is attached, `Running` while frames
/// are delivered, `TornDown` forever after `teardown` (or drop), at which
/// point the pending frame request has been cancelled. Bursts can be
/// queued through [`BurstHandle`] in every state.
pub struct ParticleOverlay<C: Canvas, S: FrameScheduler> {
    simulation: SharedSimulation,
    viewport: SurfaceSize,
    state: LoopState<C, S>,
}

impl<C: Canvas, S: FrameScheduler> ParticleOverlay<C, S> {
    /// Create an idle overlay for `viewport`.
    pub fn new(simulation: Simulation, scheduler: S, viewport: SurfaceSize) -> Self {
        Self::with_shared(Rc::new(RefCell::new(simulation)), scheduler, viewport)
    }

    /// Create an idle overlay driving an already shared simulation.
    pub fn with_shared(simulation: SharedSimulation, scheduler: S, viewport: SurfaceSize) -> Self {
        Self {
            simulation,
            viewport,
            state: LoopState::Idle { scheduler },
        }
    }

    /// Create an overlay and start it if `canvas` is available. Without a
    /// surface the overlay stays idle; that is not an error.
    pub fn start(
        simulation: SharedSimulation,
        scheduler: S,
        viewport: SurfaceSize,
        canvas: Option<C>,
    ) -> Result<Self, RenderError> {
        let mut overlay = Self::with_shared(simulation, scheduler, viewport);
        match canvas {
            Some(canvas) => {
                overlay.attach_surface(canvas)?;
            }
            None => tracing::warn!("no drawable surface, particle overlay stays idle"),
        }
        Ok(overlay)
    }

    /// Capability for triggering bursts from elsewhere.
    pub fn burst_handle(&self) -> BurstHandle {
        BurstHandle::new(Rc::clone(&self.simulation))
    }

    /// Provide the drawing surface and start the loop.
    ///
    /// The canvas is sized to the viewport and the first frame runs right
    /// away, which also schedules the next one. Attaching to a running
    /// overlay swaps the surface; after teardown the canvas is dropped.
    pub fn attach_surface(&mut self, mut canvas: C) -> Result<Option<FrameReport>, RenderError> {
        canvas.resize(self.viewport);

        match std::mem::replace(&mut self.state, LoopState::TornDown) {
            LoopState::Idle { scheduler } => {
                tracing::info!(
                    width = self.viewport.width,
                    height = self.viewport.height,
                    "particle overlay started"
                );
                let mut frames = RunningLoop::start(scheduler);
                let first = Self::render_frame(&self.simulation, &mut canvas, &mut frames);
                self.state = LoopState::Running { canvas, frames };
                first.map(Some)
            }
            LoopState::Running { frames, .. } => {
                tracing::debug!("particle overlay surface replaced");
                self.state = LoopState::Running { canvas, frames };
                Ok(None)
            }
            LoopState::TornDown => {
                tracing::debug!("surface attached after teardown, ignoring");
                Ok(None)
            }
        }
    }

    /// Viewport changed: keep the surface the same pixel size.
    ///
    /// Particle coordinates are viewport pixels and are left alone.
    pub fn resize(&mut self, viewport: SurfaceSize) {
        self.viewport = viewport;
        if let LoopState::Running { canvas, .. } = &mut self.state {
            canvas.resize(viewport);
            tracing::debug!(width = viewport.width, height = viewport.height, "overlay resized");
        }
    }

    /// Host delivered a frame.
    ///
    /// Only a frame this overlay asked for advances the simulation; idle,
    /// torn-down and unrequested frames return `Ok(None)`.
    pub fn frame(&mut self) -> Result<Option<FrameReport>, RenderError> {
        let LoopState::Running { canvas, frames } = &mut self.state else {
            return Ok(None);
        };
        if frames.take_due().is_none() {
            return Ok(None);
        }
        Self::render_frame(&self.simulation, canvas, frames).map(Some)
    }

    /// Stop the loop: cancel the pending frame and release the surface.
    pub fn teardown(&mut self) {
        if !self.is_torn_down() {
            tracing::info!(live = self.simulation.borrow().len(), "particle overlay torn down");
        }
        // dropping RunningLoop cancels its request
        self.state = LoopState::TornDown;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    pub fn is_torn_down(&self) -> bool {
        matches!(self.state, LoopState::TornDown)
    }

    pub fn viewport(&self) -> SurfaceSize {
        self.viewport
    }

    pub fn canvas(&self) -> Option<&C> {
        match &self.state {
            LoopState::Running { canvas, .. } => Some(canvas),
            _ => None,
        }
    }

    pub fn simulation(&self) -> &SharedSimulation {
        &self.simulation
    }

    /// Clear, step, draw survivors, request the next frame, present.
    fn render_frame(
        simulation: &SharedSimulation,
        canvas: &mut C,
        frames: &mut RunningLoop<S>,
    ) -> Result<FrameReport, RenderError> {
        let mut simulation = simulation.borrow_mut();
        canvas.clear();
        let step = simulation.step();
        let drawn = draw_particles(canvas, simulation.particles());
        drop(simulation);

        frames.schedule_next();
        canvas.present()?;

        Ok(FrameReport { step, drawn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelCanvas;
    use crate::scheduler::tests::{Call, ManualScheduler};
    use glam::Vec2;
    use spark_core::ColorToken;

    #[derive(Debug, Clone, PartialEq)]
    enum Draw {
        Resize(SurfaceSize),
        Clear,
        Alpha(f32),
        Circle(Vec2, f32, ColorToken),
        Present,
    }

    #[derive(Debug, Default)]
    struct RecordingCanvas {
        size: SurfaceSize,
        log: Rc<RefCell<Vec<Draw>>>,
    }

    impl Canvas for RecordingCanvas {
        fn size(&self) -> SurfaceSize {
            self.size
        }

        fn resize(&mut self, size: SurfaceSize) {
            self.size = size;
            self.log.borrow_mut().push(Draw::Resize(size));
        }

        fn clear(&mut self) {
            self.log.borrow_mut().push(Draw::Clear);
        }

        fn set_global_alpha(&mut self, alpha: f32) {
            self.log.borrow_mut().push(Draw::Alpha(alpha));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ColorToken) {
            self.log
                .borrow_mut()
                .push(Draw::Circle(center, radius, color.clone()));
        }

        fn present(&mut self) -> Result<(), RenderError> {
            self.log.borrow_mut().push(Draw::Present);
            Ok(())
        }
    }

    const VIEWPORT: SurfaceSize = SurfaceSize::new(800, 600);

    fn idle() -> (
        ParticleOverlay<RecordingCanvas, ManualScheduler>,
        Rc<RefCell<Vec<Call>>>,
    ) {
        let scheduler = ManualScheduler::default();
        let calls = Rc::clone(&scheduler.calls);
        let overlay = ParticleOverlay::new(Simulation::seeded(21), scheduler, VIEWPORT);
        (overlay, calls)
    }

    #[test]
    fn idle_without_surface_but_queues_bursts() {
        let (mut overlay, calls) = idle();
        overlay.burst_handle().spawn(100.0, 100.0, "#ff0000");

        assert!(!overlay.is_running());
        assert_eq!(overlay.frame().ok().flatten(), None);
        assert!(calls.borrow().is_empty());

        let sim = overlay.simulation().borrow();
        assert_eq!(sim.len(), 80);
        assert_eq!(sim.tick_count(), 0);
        assert!(sim.particles().iter().all(|p| p.position == Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn start_without_canvas_is_not_an_error() {
        let simulation = Rc::new(RefCell::new(Simulation::seeded(1)));
        let overlay = ParticleOverlay::<RecordingCanvas, _>::start(
            simulation,
            ManualScheduler::default(),
            VIEWPORT,
            None,
        );
        assert!(overlay.is_ok_and(|o| !o.is_running()));
    }

    #[test]
    fn attach_sizes_surface_and_runs_first_frame() {
        let (mut overlay, calls) = idle();
        let canvas = RecordingCanvas::default();
        let log = Rc::clone(&canvas.log);

        let first = overlay.attach_surface(canvas).expect("attach");

        assert_eq!(first.map(|r| r.step.tick), Some(1));
        assert_eq!(log.borrow()[0], Draw::Resize(VIEWPORT));
        assert_eq!(log.borrow()[1], Draw::Clear);
        assert_eq!(*log.borrow().last().expect("drawn"), Draw::Present);
        assert_eq!(*calls.borrow(), vec![Call::Request(1)]);
    }

    #[test]
    fn frames_draw_survivors_with_life_as_alpha() {
        let (mut overlay, _) = idle();
        let canvas = RecordingCanvas::default();
        let log = Rc::clone(&canvas.log);
        overlay.attach_surface(canvas).expect("attach");

        overlay.burst_handle().spawn(50.0, 60.0, "#00f3ff");
        log.borrow_mut().clear();

        let report = overlay.frame().expect("frame").expect("requested");
        assert_eq!(report.drawn, 80);
        assert_eq!(report.step.live, 80);

        let sim = overlay.simulation().borrow();
        let log = log.borrow();
        let alphas: Vec<f32> = log
            .iter()
            .filter_map(|d| match d {
                Draw::Alpha(a) => Some(*a),
                _ => None,
            })
            .collect();
        let expected: Vec<f32> = sim.particles().iter().map(|p| p.life).collect();
        assert_eq!(alphas, expected);

        for (draw, p) in log
            .iter()
            .filter(|d| matches!(d, Draw::Circle(..)))
            .zip(sim.particles())
        {
            assert_eq!(*draw, Draw::Circle(p.position, p.size, p.color.clone()));
        }
    }

    #[test]
    fn each_delivered_frame_requests_the_next() {
        let (mut overlay, calls) = idle();
        overlay.attach_surface(RecordingCanvas::default()).expect("attach");

        assert!(overlay.frame().expect("frame").is_some());
        assert_eq!(overlay.simulation().borrow().tick_count(), 2);
        assert!(overlay.frame().expect("frame").is_some());
        assert_eq!(overlay.simulation().borrow().tick_count(), 3);
        assert_eq!(*calls.borrow(), vec![Call::Request(1), Call::Request(2), Call::Request(3)]);
    }

    #[test]
    fn resize_reaches_surface_before_next_render() {
        let (mut overlay, _) = idle();
        let canvas = RecordingCanvas::default();
        let log = Rc::clone(&canvas.log);
        overlay.attach_surface(canvas).expect("attach");
        overlay.burst_handle().spawn(10.0, 10.0, "red");
        log.borrow_mut().clear();

        let resized = SurfaceSize::new(1024, 768);
        overlay.resize(resized);
        let before: Vec<Vec2> = overlay
            .simulation()
            .borrow()
            .particles()
            .iter()
            .map(|p| p.position)
            .collect();

        assert_eq!(overlay.canvas().map(Canvas::size), Some(resized));
        assert!(before.iter().all(|&p| p == Vec2::new(10.0, 10.0)));

        overlay.frame().expect("frame");
        let log = log.borrow();
        assert_eq!(log[0], Draw::Resize(resized));
        assert_eq!(log[1], Draw::Clear);
    }

    #[test]
    fn teardown_cancels_and_stops_stepping() {
        let (mut overlay, calls) = idle();
        overlay.attach_surface(RecordingCanvas::default()).expect("attach");
        overlay.burst_handle().spawn(0.0, 0.0, "red");

        overlay.teardown();
        assert!(overlay.is_torn_down());
        assert_eq!(*calls.borrow(), vec![Call::Request(1), Call::Cancel(1)]);

        assert_eq!(overlay.frame().expect("frame"), None);
        assert_eq!(overlay.simulation().borrow().tick_count(), 1);

        // bursts still land, they just never animate
        overlay.burst_handle().spawn(0.0, 0.0, "red");
        assert_eq!(overlay.simulation().borrow().len(), 160);
        assert_eq!(
            overlay.attach_surface(RecordingCanvas::default()).expect("attach"),
            None
        );
    }

    #[test]
    fn dropping_overlay_cancels_pending_frame() {
        let (mut overlay, calls) = idle();
        overlay.attach_surface(RecordingCanvas::default()).expect("attach");
        drop(overlay);
        assert_eq!(*calls.borrow(), vec![Call::Request(1), Call::Cancel(1)]);
    }

    #[test]
    fn burst_fades_out_on_pixel_canvas() {
        let (overlay, _) = idle();
        let simulation = Rc::clone(overlay.simulation());
        drop(overlay);

        let mut overlay = ParticleOverlay::with_shared(
            simulation,
            ManualScheduler::default(),
            SurfaceSize::new(200, 200),
        );
        overlay
            .attach_surface(PixelCanvas::new(SurfaceSize::new(1, 1)))
            .expect("attach");
        overlay.burst_handle().spawn(100.0, 100.0, "#bc13fe");

        overlay.frame().expect("frame");
        let canvas = overlay.canvas().expect("running");
        assert_eq!(canvas.size(), SurfaceSize::new(200, 200));
        assert!(canvas.covered() > 0);

        for _ in 0..200 {
            overlay.frame().expect("frame");
        }
        assert!(overlay.simulation().borrow().is_empty());
        assert_eq!(overlay.canvas().map(PixelCanvas::covered), Some(0));
        assert_eq!(overlay.canvas().map(PixelCanvas::frames_presented), Some(202));
    }
}
