use glam::Vec2;
use orrery_engine::input::gesture::DEFAULT_DRAG_THRESHOLD;
use orrery_engine::input::queue::{InputEvent, InputQueue};
use orrery_engine::{
    CameraSettings, EngineContext, OrbitControls, PerspectiveCamera, PointerGesture,
    PointerRelease, SimConfig, SimEvent, Simulation,
};

use crate::bodies::{BodyRef, StarSystem};
use crate::orbit::{self, OrbitTuning};
use crate::picker::pick;
use crate::scene::{build_scene, BuiltScene};
use crate::stats::{show_stats, DISMISS_CONTROL};

/// Custom event kinds from the host page.
pub mod events {
    /// The panel's dismiss control was clicked.
    pub const DISMISS: u32 = 1;
    /// Put the camera back at its starting view.
    pub const RESET_VIEW: u32 = 2;
}

/// Sim event kinds to the host page.
pub mod sim_events {
    /// a: selected planet index, or -1.
    pub const SELECTION: f32 = 1.0;
    /// a: frame count.
    pub const FRAME_INFO: f32 = 2.0;
}

/// The Squaloid star system.
pub struct Squaloid {
    system: StarSystem,
    tuning: OrbitTuning,
    camera_settings: CameraSettings,
    built: BuiltScene,
    controls: OrbitControls,
    gesture: PointerGesture,
    selected: Option<usize>,
}

impl Squaloid {
    pub fn new() -> Self {
        let system = StarSystem::load().expect("Failed to load the Squaloid dataset");
        let config = SimConfig::default();
        let camera = PerspectiveCamera::new(
            &config.camera,
            config.viewport_width,
            config.viewport_height,
        );

        Self {
            system,
            tuning: OrbitTuning::default(),
            controls: OrbitControls::from_camera(&camera),
            camera_settings: config.camera,
            built: BuiltScene::default(),
            gesture: PointerGesture::new(DEFAULT_DRAG_THRESHOLD),
            selected: None,
        }
    }

    pub fn system(&self) -> &StarSystem {
        &self.system
    }

    pub fn built(&self) -> &BuiltScene {
        &self.built
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn handle_custom_event(&mut self, ctx: &mut EngineContext, kind: u32) {
        match kind {
            events::DISMISS => {
                ctx.panel.hide();
                self.selected = None;
                log::debug!("stats panel dismissed");
            }
            events::RESET_VIEW => {
                let viewport = ctx.viewport();
                ctx.camera = PerspectiveCamera::new(&self.camera_settings, viewport.x, viewport.y);
                self.controls = OrbitControls::from_camera(&ctx.camera);
                log::debug!("camera view reset");
            }
            other => log::warn!("unknown custom event kind {}", other),
        }
    }

    /// Pick the planet under `pointer` and show its stats. A miss leaves
    /// the panel and selection as they were.
    fn handle_click(&mut self, ctx: &mut EngineContext, pointer: Vec2) {
        let hit = pick(
            pointer,
            ctx.viewport(),
            &ctx.camera,
            &ctx.scene,
            &self.built.planets,
        );
        let Some(BodyRef::Planet(index)) = hit else {
            return;
        };
        if let Some(planet) = self.system.planet(index) {
            show_stats(planet, &mut ctx.panel);
            self.selected = Some(index);
        }
    }

    fn emit_events(&self, ctx: &mut EngineContext) {
        let selected = self.selected.map_or(-1.0, |i| i as f32);
        ctx.emit_event(SimEvent::new(sim_events::SELECTION, selected, 0.0, 0.0));
        let frame = ctx.frame() as f32;
        ctx.emit_event(SimEvent::new(sim_events::FRAME_INFO, frame, 0.0, 0.0));
    }
}

impl Simulation for Squaloid {
    fn config(&self) -> SimConfig {
        SimConfig {
            camera: self.camera_settings.clone(),
            panel_chrome: DISMISS_CONTROL.to_string(),
            ..SimConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.built = build_scene(&self.system, ctx);
        self.controls = OrbitControls::from_camera(&ctx.camera);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, .. } => self.handle_custom_event(ctx, kind),
                InputEvent::PointerDown { x, y } => self.gesture.press(Vec2::new(x, y)),
                InputEvent::PointerMove { x, y } => {
                    if let Some(delta) = self.gesture.motion(Vec2::new(x, y)) {
                        self.controls.rotate(delta, ctx.viewport().y);
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    if let PointerRelease::Click(pos) = self.gesture.release(Vec2::new(x, y)) {
                        self.handle_click(ctx, pos);
                    }
                }
                InputEvent::Wheel { delta } => self.controls.zoom(delta),
                InputEvent::Resize { width, height } => {
                    ctx.resize(width, height);
                    log::debug!("viewport resized to {}x{}", width, height);
                }
            }
        }

        self.controls.update(&mut ctx.camera);
        orbit::tick(&mut self.built.planets, &self.system, &self.tuning, &mut ctx.scene);

        self.emit_events(ctx);
    }
}

impl Default for Squaloid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (Squaloid, EngineContext) {
        let mut sim = Squaloid::new();
        let mut ctx = EngineContext::new(&sim.config());
        sim.init(&mut ctx);
        (sim, ctx)
    }

    fn frame(sim: &mut Squaloid, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for event in events {
            input.push(*event);
        }
        ctx.begin_frame();
        sim.update(ctx, &input);
    }

    fn planet_on_screen(sim: &Squaloid, ctx: &EngineContext, index: usize) -> Vec2 {
        let entity = sim.built().planets[index].entity;
        let pos = ctx.scene.get(entity).unwrap().pos;
        ctx.camera.world_to_screen(pos, ctx.viewport())
    }

    fn click(at: Vec2) -> [InputEvent; 2] {
        [
            InputEvent::PointerDown { x: at.x, y: at.y },
            InputEvent::PointerUp { x: at.x, y: at.y },
        ]
    }

    #[test]
    fn init_builds_the_whole_system() {
        let (sim, ctx) = started();
        assert_eq!(sim.built().planets.len(), 5);
        assert_eq!(ctx.scene.len(), 11);
        assert!(!ctx.panel.is_visible());
        assert!(ctx.panel.chrome().contains("<button"));
    }

    #[test]
    fn clicking_a_planet_shows_its_stats() {
        let (mut sim, mut ctx) = started();
        let at = planet_on_screen(&sim, &ctx, 4);
        frame(&mut sim, &mut ctx, &click(at));

        assert_eq!(sim.selected(), Some(4));
        assert!(ctx.panel.is_visible());
        assert!(ctx.panel.html().contains("Oozey Igneus Stats"));
        assert!(ctx.panel.html().ends_with(DISMISS_CONTROL));
        assert_eq!(ctx.events[0], SimEvent::new(sim_events::SELECTION, 4.0, 0.0, 0.0));
    }

    #[test]
    fn drag_rotates_camera_without_picking() {
        let (mut sim, mut ctx) = started();
        let start = planet_on_screen(&sim, &ctx, 4);
        let before = ctx.camera.position;
        frame(
            &mut sim,
            &mut ctx,
            &[
                InputEvent::PointerDown { x: start.x, y: start.y },
                InputEvent::PointerMove { x: start.x + 80.0, y: start.y },
                InputEvent::PointerUp { x: start.x + 80.0, y: start.y },
            ],
        );
        assert_eq!(sim.selected(), None);
        assert!(!ctx.panel.is_visible());
        assert!(ctx.camera.position.distance(before) > 1.0);
    }

    #[test]
    fn click_uses_viewport_in_effect_when_it_arrived() {
        let (mut sim, mut ctx) = started();
        let at = planet_on_screen(&sim, &ctx, 4);
        let [down, up] = click(at);
        frame(
            &mut sim,
            &mut ctx,
            &[down, up, InputEvent::Resize { width: 1600.0, height: 600.0 }],
        );
        assert_eq!(sim.selected(), Some(4));
        assert_eq!(ctx.viewport(), Vec2::new(1600.0, 600.0));
        assert!((ctx.camera.aspect - 1600.0 / 600.0).abs() < 1e-5);
    }

    #[test]
    fn resize_before_click_applies_to_that_click() {
        let (mut sim, mut ctx) = started();
        frame(
            &mut sim,
            &mut ctx,
            &[InputEvent::Resize { width: 1600.0, height: 600.0 }],
        );
        let at = planet_on_screen(&sim, &ctx, 4);
        frame(&mut sim, &mut ctx, &click(at));
        assert_eq!(sim.selected(), Some(4));
    }

    #[test]
    fn missing_click_keeps_previous_stats() {
        let (mut sim, mut ctx) = started();
        let at = planet_on_screen(&sim, &ctx, 4);
        frame(&mut sim, &mut ctx, &click(at));
        let html = ctx.panel.html();

        frame(&mut sim, &mut ctx, &click(Vec2::new(5.0, 5.0)));
        assert_eq!(sim.selected(), Some(4));
        assert_eq!(ctx.panel.html(), html);
    }

    #[test]
    fn dismiss_hides_panel_and_clears_selection() {
        let (mut sim, mut ctx) = started();
        let at = planet_on_screen(&sim, &ctx, 4);
        frame(&mut sim, &mut ctx, &click(at));
        frame(
            &mut sim,
            &mut ctx,
            &[InputEvent::Custom { kind: events::DISMISS, a: 0.0, b: 0.0, c: 0.0 }],
        );
        assert!(!ctx.panel.is_visible());
        assert!(ctx.panel.content().contains("Oozey Igneus"));
        assert_eq!(ctx.events[0].a, -1.0);
    }

    #[test]
    fn wheel_zoom_and_reset_view() {
        let (mut sim, mut ctx) = started();
        let start = ctx.camera.position;
        frame(&mut sim, &mut ctx, &[InputEvent::Wheel { delta: 1.0 }]);
        assert!(ctx.camera.position.length() > start.length() + 1.0);

        frame(
            &mut sim,
            &mut ctx,
            &[InputEvent::Custom { kind: events::RESET_VIEW, a: 0.0, b: 0.0, c: 0.0 }],
        );
        assert!(ctx.camera.position.distance(start) < 1e-2);
    }

    #[test]
    fn planets_advance_every_update() {
        let (mut sim, mut ctx) = started();
        for _ in 0..10 {
            frame(&mut sim, &mut ctx, &[]);
        }
        let jeglant = sim.built().planets[0];
        assert!((jeglant.angle - 10.0 * 0.0005).abs() < 1e-12);
        assert_eq!(ctx.events[1], SimEvent::new(sim_events::FRAME_INFO, 10.0, 0.0, 0.0));
    }
}
