/*! Pass and pipeline descriptions.

Render targets, pipeline state, vertex layouts and shader references, described without
reference to any backend.  The backend translators in this crate turn them into native
descriptors.
*/

pub mod blend;
pub mod depth_stencil;
pub mod device;
pub mod pipeline;
pub mod render_pass;
pub mod shader;
pub mod vertex_layout;

pub use device::DeviceCapabilities;
