use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::systems::raycast::Ray;

/// Static camera parameters, supplied by the simulation's config.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 800.0, 500.0),
            target: Vec3::ZERO,
        }
    }
}

/// GPU-side uniform data for the camera.
/// 20 floats: column-major view-projection, then eye position (w = 1).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Right-handed perspective camera, Y-up, OpenGL clip depth (-1..1).
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(settings: &CameraSettings, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: settings.position,
            target: settings.target,
            fov_y: settings.fov_y_degrees.to_radians(),
            aspect: 1.0,
            near: settings.near,
            far: settings.far,
        };
        camera.resize(viewport_width, viewport_height);
        camera
    }

    /// Update the aspect ratio for a new viewport. Degenerate sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_height = (self.fov_y * 0.5).tan();
        // View space looks down -Z.
        let view_dir = Vec3::new(ndc.x * half_height * self.aspect, ndc.y * half_height, -1.0);
        let world_dir = self.view_matrix().inverse().transform_vector3(view_dir);
        Ray::new(self.position, world_dir)
    }

    /// Project a world point into viewport pixels (top-left origin).
    pub fn world_to_screen(&self, world: Vec3, viewport: Vec2) -> Vec2 {
        let ndc = self.view_projection().project_point3(world);
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        )
    }
}

/// Map viewport pixels to normalized device coordinates in [-1, 1].
/// Y is flipped: the top edge of the viewport maps to +1.
/// Returns `None` for an empty viewport.
pub fn screen_to_ndc(pointer: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (pointer.x / viewport.x) * 2.0 - 1.0,
        -(pointer.y / viewport.y) * 2.0 + 1.0,
    ))
}
