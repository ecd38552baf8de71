//! Per-frame orbital motion on fixed circular paths.
//!
//! Angles accumulate in f64; positions convert to f32 only when written
//! into the scene.

use glam::Vec3;
use orrery_engine::Scene;

use crate::bodies::StarSystem;
use crate::scene::PlanetObject;

/// Per-frame motion constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTuning {
    /// Angle advanced per frame by a planet with revolution period 1.
    pub base_rate: f64,
    /// Self-rotation about Y added per frame, radians.
    pub spin_step: f32,
}

impl Default for OrbitTuning {
    fn default() -> Self {
        Self {
            base_rate: 0.001,
            spin_step: 0.01,
        }
    }
}

/// Angle advanced per frame for a given revolution period.
pub fn angular_speed(revolution: f64, tuning: &OrbitTuning) -> f64 {
    tuning.base_rate / revolution
}

/// Position on a circular orbit of radius `distance` in the XZ plane.
pub fn position_at(distance: f64, angle: f64) -> (f64, f64) {
    (distance * angle.cos(), distance * angle.sin())
}

/// Angle reached from 0 after `ticks` frames.
pub fn angle_after(ticks: u64, revolution: f64, tuning: &OrbitTuning) -> f64 {
    ticks as f64 * angular_speed(revolution, tuning)
}

/// Advance every planet by one frame and write its new position and spin.
pub fn tick(planets: &mut [PlanetObject], system: &StarSystem, tuning: &OrbitTuning, scene: &mut Scene) {
    for object in planets.iter_mut() {
        let Some(planet) = system.planet(object.index) else {
            continue;
        };

        object.angle += angular_speed(planet.revolution, tuning);
        let (x, z) = position_at(planet.distance_from_star, object.angle);

        if let Some(entity) = scene.get_mut(object.entity) {
            entity.pos = Vec3::new(x as f32, entity.pos.y, z as f32);
            entity.spin += tuning.spin_step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::build_scene;
    use orrery_engine::EngineContext;

    fn setup() -> (StarSystem, EngineContext, Vec<PlanetObject>) {
        let system = StarSystem::load().unwrap();
        let mut ctx = EngineContext::default();
        let built = build_scene(&system, &mut ctx);
        (system, ctx, built.planets)
    }

    #[test]
    fn angle_grows_linearly_with_ticks() {
        let (system, mut ctx, mut planets) = setup();
        let tuning = OrbitTuning::default();
        for _ in 0..1000 {
            tick(&mut planets, &system, &tuning, &mut ctx.scene);
        }
        for object in &planets {
            let revolution = system.planet(object.index).unwrap().revolution;
            let expected = 1000.0 * (0.001 / revolution);
            assert!((object.angle - expected).abs() < 1e-9, "{} vs {}", object.angle, expected);
            assert!((object.angle - angle_after(1000, revolution, &tuning)).abs() < 1e-9);
        }
    }

    #[test]
    fn planets_stay_on_their_circle() {
        let (system, mut ctx, mut planets) = setup();
        let tuning = OrbitTuning { base_rate: 0.5, ..OrbitTuning::default() };
        for _ in 0..50 {
            tick(&mut planets, &system, &tuning, &mut ctx.scene);
            for object in &planets {
                let d = system.planet(object.index).unwrap().distance_from_star as f32;
                let pos = ctx.scene.get(object.entity).unwrap().pos;
                let r2 = pos.x * pos.x + pos.z * pos.z;
                assert!((r2 - d * d).abs() / (d * d) < 1e-4);
                assert_eq!(pos.y, 0.0);
            }
        }
    }

    #[test]
    fn shorter_period_moves_faster() {
        let (system, mut ctx, mut planets) = setup();
        tick(&mut planets, &system, &OrbitTuning::default(), &mut ctx.scene);
        assert!(planets[0].angle > planets[1].angle);
        assert!((planets[0].angle - 0.0005).abs() < 1e-12);
    }

    #[test]
    fn spin_advances_independently_of_orbit() {
        let (system, mut ctx, mut planets) = setup();
        let tuning = OrbitTuning::default();
        for _ in 0..3 {
            tick(&mut planets, &system, &tuning, &mut ctx.scene);
        }
        for object in &planets {
            let spin = ctx.scene.get(object.entity).unwrap().spin;
            assert!((spin - 0.03).abs() < 1e-6);
        }
    }

    #[test]
    fn same_ticks_give_same_position() {
        let (system, mut ctx_a, mut a) = setup();
        let (_, mut ctx_b, mut b) = setup();
        let tuning = OrbitTuning::default();
        for _ in 0..10 {
            tick(&mut a, &system, &tuning, &mut ctx_a.scene);
            tick(&mut b, &system, &tuning, &mut ctx_b.scene);
        }
        assert_eq!(a, b);
        let pa = ctx_a.scene.get(a[2].entity).unwrap().pos;
        let pb = ctx_b.scene.get(b[2].entity).unwrap().pos;
        assert_eq!(pa, pb);
    }

    #[test]
    fn closed_form_position() {
        let (x, z) = position_at(100.0, std::f64::consts::FRAC_PI_2);
        assert!(x.abs() < 1e-9);
        assert!((z - 100.0).abs() < 1e-9);
    }
}
