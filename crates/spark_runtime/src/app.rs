//! winit application driving the particle overlay

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use spark_core::consts::BURST_PARTICLES;
use spark_core::glam::Vec2;
use spark_core::{BurstHandle, SharedSimulation, Simulation};
use spark_metrics::{FrameTimer, PopulationStats};
use spark_render::window::{window_attributes, WindowConfig, WindowScheduler};
use spark_render::{GpuCanvas, ParticleOverlay};
use spark_services::Settings;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, ModifiersState, NamedKey},
    window::{Window, WindowId},
};

use crate::input::cue_for;

/// Frames kept in the rolling metrics windows
const METRICS_WINDOW: usize = 120;

/// Used when the configured report interval is unusable
const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(2);

type Overlay = ParticleOverlay<GpuCanvas, WindowScheduler>;

pub struct App {
    settings: Settings,
    simulation: SharedSimulation,
    bursts: BurstHandle,
    window: Option<Arc<Window>>,
    overlay: Option<Overlay>,
    cursor: Vec2,
    modifiers: ModifiersState,
    frame_timer: FrameTimer,
    population: PopulationStats,
    report_interval: Duration,
    last_report: Instant,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let simulation = match settings.simulation.seed {
            Some(seed) => {
                tracing::info!(seed, "using fixed simulation seed");
                Simulation::seeded(seed)
            }
            None => Simulation::from_entropy(),
        };
        let simulation = Rc::new(RefCell::new(simulation));
        let report_interval = settings
            .metrics
            .report_interval()
            .unwrap_or(DEFAULT_REPORT_INTERVAL);

        Self {
            bursts: BurstHandle::new(Rc::clone(&simulation)),
            simulation,
            settings,
            window: None,
            overlay: None,
            cursor: Vec2::ZERO,
            modifiers: ModifiersState::empty(),
            frame_timer: FrameTimer::new(METRICS_WINDOW),
            population: PopulationStats::new(METRICS_WINDOW),
            report_interval,
            last_report: Instant::now(),
        }
    }

    fn window_config(&self) -> WindowConfig {
        let window = &self.settings.window;
        WindowConfig {
            title: window.title.clone(),
            width: window.width,
            height: window.height,
            transparent: window.transparent,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(overlay) = &mut self.overlay {
            overlay.teardown();
        }
        event_loop.exit();
    }

    fn burst_at_cursor(&mut self, button: winit::event::MouseButton) {
        let Some(cue) = cue_for(button, self.modifiers) else {
            return;
        };
        let color = self.settings.palette.color_for(cue);
        self.bursts.spawn(self.cursor.x, self.cursor.y, color);
        self.population.record_burst(BURST_PARTICLES);
    }

    fn maybe_report(&mut self) {
        if self.last_report.elapsed() < self.report_interval {
            return;
        }
        self.last_report = Instant::now();

        tracing::info!(
            fps = self.frame_timer.fps(),
            frame_ms = self.frame_timer.interval_ms(),
            live = self.bursts.live(),
            avg_live = self.population.average_live(),
            peak_live = self.population.peak_live(),
            bursts = self.population.bursts(),
            spawned = self.population.spawned(),
            culled = self.population.culled(),
            "overlay metrics"
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(window_attributes(&self.window_config())) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                tracing::error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };

        let canvas = match pollster::block_on(GpuCanvas::new(Arc::clone(&window))) {
            Ok(canvas) => Some(canvas),
            Err(err) => {
                tracing::warn!(%err, "GPU rendering unavailable");
                None
            }
        };

        let overlay = Overlay::start(
            Rc::clone(&self.simulation),
            WindowScheduler::new(Arc::clone(&window)),
            window.inner_size().into(),
            canvas,
        );

        match overlay {
            Ok(overlay) => {
                self.overlay = Some(overlay);
                self.window = Some(window);
                tracing::info!("Ready! Click to burst (right = daily, Shift = due soon, Ctrl = overdue)");
            }
            Err(err) => {
                tracing::error!(%err, "first frame failed");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Close requested, shutting down...");
                self.shutdown(event_loop);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(overlay) = &mut self.overlay {
                    overlay.resize(new_size.into());
                }
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.burst_at_cursor(button);
            }
            WindowEvent::RedrawRequested => {
                let Some(overlay) = &mut self.overlay else {
                    return;
                };
                match overlay.frame() {
                    Ok(Some(report)) => {
                        self.frame_timer.mark();
                        self.population
                            .record_frame(report.step.live, report.step.culled);
                        self.maybe_report();
                    }
                    Ok(None) => {}
                    Err(err) => {
                        tracing::error!(%err, "rendering failed, shutting down");
                        self.shutdown(event_loop);
                    }
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // the window must outlive the surface, so drop the overlay first
        self.overlay = None;
        self.window = None;
    }
}
