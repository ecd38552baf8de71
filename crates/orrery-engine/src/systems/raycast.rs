//! Ray casting against entity meshes.
//!
//! Spheres use the analytic ray/sphere solution; rings are tested as a
//! ray/plane intersection (plane normal +Y through the entity) followed by an
//! annulus check. Results are sorted nearest-first.

use glam::Vec3;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;

/// Hits closer than this to the ray origin are ignored.
const MIN_DISTANCE: f32 = 1e-3;
/// Rays this close to parallel with a ring's plane never hit it.
const PARALLEL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray; `dir` is normalized (a zero direction stays zero and hits nothing).
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.dir * distance
    }
}

/// A single intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: EntityId,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    pub point: Vec3,
}

/// Distance to the first intersection with a sphere, if any.
/// From inside the sphere this is the exit point.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near > MIN_DISTANCE {
        Some(near)
    } else if far > MIN_DISTANCE {
        Some(far)
    } else {
        None
    }
}

/// Distance to the intersection with a flat ring in the XZ plane at `center`.
pub fn intersect_ring(ray: &Ray, center: Vec3, inner: f32, outer: f32) -> Option<f32> {
    let denom = ray.dir.y;
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (center.y - ray.origin.y) / denom;
    if t < MIN_DISTANCE {
        return None;
    }
    let offset = ray.at(t) - center;
    let dist = offset.length();
    (dist >= inner && dist <= outer).then_some(t)
}

/// Intersect a single entity's mesh. Inactive or mesh-less entities never hit.
pub fn intersect_entity(ray: &Ray, entity: &Entity) -> Option<RayHit> {
    if !entity.active {
        return None;
    }
    let mesh = entity.mesh.as_ref()?;
    let distance = match mesh.shape {
        MeshShape::Sphere { radius } => intersect_sphere(ray, entity.pos, radius),
        MeshShape::Ring { inner, outer } => intersect_ring(ray, entity.pos, inner, outer),
    }?;
    Some(RayHit {
        entity: entity.id,
        distance,
        point: ray.at(distance),
    })
}

/// Intersect every entity and return all hits, nearest first.
pub fn intersect_entities<'a>(
    ray: &Ray,
    entities: impl Iterator<Item = &'a Entity>,
) -> Vec<RayHit> {
    let mut hits: Vec<RayHit> = entities.filter_map(|e| intersect_entity(ray, e)).collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
