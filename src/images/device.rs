// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Device capabilities that affect translation.

/**
What the target device supports, as far as descriptor translation cares.

`buffer_index_count` is the size of the device's buffer index space.  Vertex buffers are
placed at its top, argument tables and push constants at its bottom.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceCapabilities {
    pub buffer_index_count: u32,
    pub sparse_textures: bool,
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self {
            buffer_index_count: 31,
            sparse_textures: false,
        }
    }
}

impl DeviceCapabilities {
    /// Capabilities of a wgpu device with `limits`.  wgpu has no sparse textures.
    #[cfg(feature = "backend_wgpu")]
    pub fn from_limits(limits: &wgpu::Limits) -> Self {
        Self {
            buffer_index_count: limits.max_vertex_buffers + limits.max_bind_groups,
            sparse_textures: false,
        }
    }
}
