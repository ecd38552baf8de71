pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod ui;

pub use glam;

// Re-export key types at crate root for convenience
pub use api::game::{Simulation, SimConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, SimEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, Material, MeshComponent, MeshShape};
pub use core::scene::Scene;
pub use renderer::camera::{CameraSettings, CameraUniform, PerspectiveCamera, screen_to_ndc};
pub use renderer::controls::OrbitControls;
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use input::gesture::{PointerGesture, PointerRelease};
pub use systems::raycast::{Ray, RayHit, intersect_entities};
pub use ui::panel::Panel;
pub use bridge::protocol::ProtocolLayout;
