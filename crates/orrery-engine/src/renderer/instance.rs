use bytemuck::{Pod, Zeroable};

/// Per-instance mesh data written to SharedArrayBuffer for the host renderer.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Self-rotation about Y in radians.
    pub spin: f32,
    /// 0 = sphere, 1 = ring (see `MeshShape::code`).
    pub shape: f32,
    /// Sphere radius, or ring outer radius.
    pub outer: f32,
    /// Ring inner radius (0 for spheres).
    pub inner: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 1.0 when the host should apply lighting.
    pub lit: f32,
    /// 1.0 when both faces are drawn.
    pub double_sided: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all mesh instances for the current frame.
pub struct RenderBuffer {
    pub instances: Vec<MeshInstance>,
    capacity: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false (and drops it) once the wire capacity is reached.
    pub fn push(&mut self, instance: MeshInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_instance_is_48_bytes() {
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
        assert_eq!(MeshInstance::FLOATS, 12);
    }

    #[test]
    fn render_buffer_stops_at_capacity() {
        let mut buf = RenderBuffer::with_capacity(2);
        assert!(buf.push(MeshInstance::default()));
        assert!(buf.push(MeshInstance::default()));
        assert!(!buf.push(MeshInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }
}
