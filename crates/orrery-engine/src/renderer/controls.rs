//! Orbit-style camera controls: drag to rotate around a target, wheel to zoom,
//! with exponential damping applied once per frame.

use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

use crate::renderer::camera::PerspectiveCamera;

/// Keeps the polar angle away from the poles so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-4;
/// Multiplicative zoom per wheel notch.
const ZOOM_STEP: f32 = 0.95;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    /// Fraction of the pending motion applied each frame (0..=1).
    pub damping: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    radius: f32,
    /// Angle around +Y, measured from +Z.
    azimuth: f32,
    /// Angle from +Y.
    polar: f32,
    azimuth_delta: f32,
    polar_delta: f32,
    zoom_scale: f32,
}

impl OrbitControls {
    /// Build controls matching the camera's current eye and target.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target: camera.target,
            damping: 0.05,
            rotate_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            radius,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            azimuth_delta: 0.0,
            polar_delta: 0.0,
            zoom_scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `delta` pixels.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.azimuth_delta -= TAU * delta.x / viewport_height * self.rotate_speed;
        self.polar_delta -= TAU * delta.y / viewport_height * self.rotate_speed;
    }

    /// Queue a zoom step; positive `wheel_delta` moves the eye away.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if wheel_delta > 0.0 {
            self.zoom_scale /= ZOOM_STEP;
        } else if wheel_delta < 0.0 {
            self.zoom_scale *= ZOOM_STEP;
        }
    }

    /// Distance from the eye to the target.
    pub fn distance(&self) -> f32 {
        self.radius
    }

    /// Apply damped motion and write the eye position into `camera`.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        self.azimuth = (self.azimuth + self.azimuth_delta * self.damping).rem_euclid(TAU);
        self.polar = (self.polar + self.polar_delta * self.damping)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.radius = (self.radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);

        self.azimuth_delta *= 1.0 - self.damping;
        self.polar_delta *= 1.0 - self.damping;
        self.zoom_scale = 1.0;

        let sin_polar = self.polar.sin();
        let offset = Vec3::new(
            self.radius * sin_polar * self.azimuth.sin(),
            self.radius * self.polar.cos(),
            self.radius * sin_polar * self.azimuth.cos(),
        );
        camera.position = self.target + offset;
        camera.target = self.target;
    }
}
