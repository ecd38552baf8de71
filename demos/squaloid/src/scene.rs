//! Scene construction: one render object per body, one ring per orbit.

use glam::Vec3;
use orrery_engine::{Color, EngineContext, Entity, EntityId, Material, MeshComponent};

use crate::bodies::{BodyRef, StarSystem};

/// Radius of the star sphere in world units.
pub const STAR_RADIUS: f32 = 10.0;

/// Half-width of an orbit ring around its radius.
pub const RING_HALF_WIDTH: f32 = 0.1;

/// Orbit ring color.
pub const RING_COLOR: u32 = 0xaaaaaa;

/// The star's scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarObject {
    pub entity: EntityId,
    pub body: BodyRef,
}

/// A planet's scene object. `angle` is the orbital phase in radians and is
/// only advanced by the orbit updater.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetObject {
    pub entity: EntityId,
    pub index: usize,
    pub angle: f64,
}

impl PlanetObject {
    pub fn body(&self) -> BodyRef {
        BodyRef::Planet(self.index)
    }
}

/// Everything `build_scene` inserted into the scene.
#[derive(Debug, Clone, Default)]
pub struct BuiltScene {
    pub star: Option<StarObject>,
    pub planets: Vec<PlanetObject>,
    pub rings: Vec<EntityId>,
}

impl BuiltScene {
    /// Number of scene objects created.
    pub fn object_count(&self) -> usize {
        self.star.iter().count() + self.planets.len() + self.rings.len()
    }

    /// Look up which body a scene entity represents. Rings represent none.
    pub fn body_of(&self, entity: EntityId) -> Option<BodyRef> {
        if let Some(star) = self.star.filter(|s| s.entity == entity) {
            return Some(star.body);
        }
        self.planets
            .iter()
            .find(|p| p.entity == entity)
            .map(PlanetObject::body)
    }
}

/// Spawn the star, every planet at angle 0, and every orbit ring.
pub fn build_scene(system: &StarSystem, ctx: &mut EngineContext) -> BuiltScene {
    let mut built = BuiltScene::default();

    let star = system.star();
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(star.name.clone())
            .with_mesh(
                MeshComponent::sphere(STAR_RADIUS, Color::from_hex(star.color))
                    .with_material(Material::Basic),
            ),
    );
    built.star = Some(StarObject { entity: id, body: BodyRef::Star });

    for (index, planet) in system.planets().iter().enumerate() {
        let radius = planet.distance_from_star as f32;

        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(planet.name.clone())
                .with_pos(Vec3::new(radius, 0.0, 0.0))
                .with_mesh(
                    MeshComponent::sphere(planet.size as f32, Color::from_hex(planet.color))
                        .with_material(Material::Phong),
                ),
        );
        built.planets.push(PlanetObject { entity: id, index, angle: 0.0 });

        let ring_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(ring_id)
                .with_tag(format!("orbit:{}", planet.name))
                .with_mesh(
                    MeshComponent::ring(
                        radius - RING_HALF_WIDTH,
                        radius + RING_HALF_WIDTH,
                        Color::from_hex(RING_COLOR),
                    )
                    .with_material(Material::Basic)
                    .double_sided(),
                ),
        );
        built.rings.push(ring_id);
    }

    log::info!(
        "{}: built scene with {} planets, {} rings",
        system.name(),
        built.planets.len(),
        built.rings.len()
    );
    built
}
