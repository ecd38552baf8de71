use glam::Vec2;

use crate::api::types::{EntityId, SimEvent};
use crate::components::mesh::Color;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::{CameraSettings, PerspectiveCamera};
use crate::renderer::instance::RenderBuffer;
use crate::ui::panel::Panel;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Initial viewport width in CSS pixels (default: 800).
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels (default: 600).
    pub viewport_height: f32,
    /// Background color the host clears to (default: black).
    pub clear_color: Color,
    /// Maximum number of mesh instances per frame (default: 256).
    pub max_instances: usize,
    /// Maximum number of sim events per frame (default: 32).
    pub max_events: usize,
    /// Camera placement and projection.
    pub camera: CameraSettings,
    /// Markup kept at the end of the text panel on every render.
    pub panel_chrome: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            clear_color: Color::new(0.0, 0.0, 0.0),
            max_instances: 256,
            max_events: 32,
            camera: CameraSettings::default(),
            panel_chrome: String::new(),
        }
    }
}

/// The contract every simulation must fulfill.
///
/// The host invokes the runner once per display refresh; each invocation runs
/// exactly one `update`. Input that arrived since the previous frame is
/// visible through `input` during that update.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Build the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame tick: apply input, advance motion, emit events.
    /// Input is applied in arrival order; a `Resize` takes effect through
    /// `EngineContext::resize` at its place in the queue.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only pass for extra render instances.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to `Simulation::init` and `Simulation::update`.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub panel: Panel,
    pub events: Vec<SimEvent>,
    viewport: Vec2,
    frame: u64,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            scene: Scene::with_capacity(config.max_instances),
            camera: PerspectiveCamera::new(
                &config.camera,
                config.viewport_width,
                config.viewport_height,
            ),
            panel: Panel::new(config.panel_chrome.clone()),
            events: Vec::with_capacity(config.max_events),
            viewport: Vec2::new(config.viewport_width, config.viewport_height),
            frame: 0,
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an event to be forwarded to the host. Events past the
    /// configured capacity are dropped with a warning.
    pub fn emit_event(&mut self, event: SimEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full ({}), dropping kind {}", self.max_events, event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Current viewport size in CSS pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Record a new viewport size and update the camera aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.camera.resize(width, height);
    }

    /// Number of frames started so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Start a new frame: clear per-frame transient data.
    pub fn begin_frame(&mut self) {
        self.events.clear();
        self.frame += 1;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
}
