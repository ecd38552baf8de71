//! Pointer picking: screen point → camera ray → nearest planet.

use glam::Vec2;
use orrery_engine::{intersect_entities, screen_to_ndc, PerspectiveCamera, Scene};

use crate::bodies::BodyRef;
use crate::scene::PlanetObject;

/// Resolve a pointer position (viewport pixels, top-left origin) to the
/// nearest candidate planet under it. Only `candidates` are tested, so the
/// star and orbit rings never block or win a pick.
pub fn pick(
    pointer: Vec2,
    viewport: Vec2,
    camera: &PerspectiveCamera,
    scene: &Scene,
    candidates: &[PlanetObject],
) -> Option<BodyRef> {
    let ndc = screen_to_ndc(pointer, viewport)?;
    let ray = camera.ray_from_ndc(ndc);

    let targets = scene
        .iter()
        .filter(|e| candidates.iter().any(|c| c.entity == e.id));
    let nearest = intersect_entities(&ray, targets).into_iter().next()?;

    let hit = candidates.iter().find(|c| c.entity == nearest.entity)?;
    log::debug!("picked entity {:?} at distance {:.2}", nearest.entity, nearest.distance);
    Some(hit.body())
}
