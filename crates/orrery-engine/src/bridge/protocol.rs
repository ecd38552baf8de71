/// SharedArrayBuffer layout.
/// Must stay in sync with the host page's protocol reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]
/// [Instances: max_instances × 12 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::game::SimConfig;
use crate::api::types::SimEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_CLEAR_R: usize = 9;
pub const HEADER_CLEAR_G: usize = 10;
pub const HEADER_CLEAR_B: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,

    pub camera_data_floats: usize,
    pub instance_data_floats: usize,
    pub event_data_floats: usize,

    pub camera_data_offset: usize,
    pub instance_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let camera_data_floats = CameraUniform::FLOATS;
        let instance_data_floats = max_instances * MeshInstance::FLOATS;
        let event_data_floats = max_events * SimEvent::FLOATS;

        let camera_data_offset = HEADER_FLOATS;
        let instance_data_offset = camera_data_offset + camera_data_floats;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_events,
            camera_data_floats,
            instance_data_floats,
            event_data_floats,
            camera_data_offset,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }
}
