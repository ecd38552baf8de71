use crate::components::entity::Entity;
use crate::components::mesh::{Material, MeshShape};
use crate::renderer::instance::{MeshInstance, RenderBuffer};

/// Convert an entity into its wire instance. `None` for inactive or mesh-less entities.
pub fn mesh_instance(entity: &Entity) -> Option<MeshInstance> {
    if !entity.active {
        return None;
    }
    let mesh = entity.mesh.as_ref()?;
    let (outer, inner) = match mesh.shape {
        MeshShape::Sphere { radius } => (radius, 0.0),
        MeshShape::Ring { inner, outer } => (outer, inner),
    };
    Some(MeshInstance {
        x: entity.pos.x,
        y: entity.pos.y,
        z: entity.pos.z,
        spin: entity.spin,
        shape: mesh.shape.code(),
        outer,
        inner,
        r: mesh.color.r,
        g: mesh.color.g,
        b: mesh.color.b,
        lit: if mesh.material == Material::Phong { 1.0 } else { 0.0 },
        double_sided: if mesh.double_sided { 1.0 } else { 0.0 },
    })
}

/// Rebuild the render buffer from entities, in scene order.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    let mut dropped = 0usize;
    for instance in entities.filter_map(mesh_instance) {
        if !buffer.push(instance) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::warn!(
            "render buffer full ({} instances), dropped {}",
            buffer.capacity(),
            dropped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{Color, MeshComponent};
    use glam::Vec3;

    #[test]
    fn build_buffer_from_sphere_and_ring() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(50.0, 0.0, 75.0))
                .with_spin(0.5)
                .with_mesh(MeshComponent::sphere(2.5, Color::from_hex(0xffa500))),
            Entity::new(EntityId(2)).with_mesh(
                MeshComponent::ring(99.9, 100.1, Color::from_hex(0xaaaaaa))
                    .with_material(Material::Basic)
                    .double_sided(),
            ),
        ];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let planet = buffer.instances[0];
        assert_eq!((planet.x, planet.z, planet.spin), (50.0, 75.0, 0.5));
        assert_eq!((planet.shape, planet.outer, planet.lit), (0.0, 2.5, 1.0));

        let ring = buffer.instances[1];
        assert_eq!((ring.shape, ring.inner, ring.outer), (1.0, 99.9, 100.1));
        assert_eq!((ring.lit, ring.double_sided), (0.0, 1.0));
    }

    #[test]
    fn build_buffer_skips_inactive_and_no_mesh() {
        let e1 = Entity::new(EntityId(1));
        let mut e2 = Entity::new(EntityId(2)).with_mesh(MeshComponent::default());
        e2.active = false;
        let e3 = Entity::new(EntityId(3)).with_mesh(MeshComponent::default());

        let entities = vec![e1, e2, e3];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
    }
}
