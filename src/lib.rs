/*! tables_and_targets translates a frame graph's abstract resource bindings into what a GPU
backend consumes.

A frame graph knows its passes in terms of virtual resources: texture and buffer handles,
sampler descriptions, pixel formats, attachment lists.  Before anything is submitted, each
of those has to become something concrete:

| Abstract                         | Concrete                                               |
|----------------------------------|--------------------------------------------------------|
| Argument groups and group arrays | bytes in a binding table, encoded at most once a frame |
| Render target descriptors        | native render pass attachments with load/store ops     |
| Render pipeline descriptors      | shader functions, vertex buffers, blend, multisample   |
| Texture, sampler, heap, ...      | native descriptors, field for field                    |

# Binding tables

The hardware-agnostic side lives in [`bindings`].  An [`bindings::argument_group::ArgumentGroup`]
collects slot → resource assignments.  Binding it resolves every handle through the frame's
[`bindings::resolver::ResourceResolver`] and writes the result with a backend
[`bindings::encoder::ArgumentEncoder`].  Groups remember that they were encoded until the
frame graph calls `reset_for_frame`, so binding the same group from several passes costs
one encode.

# Passes and pipelines

[`images`] holds the abstract render pass and pipeline descriptions.  Load and store actions
are deliberately not part of [`images::render_pass::RenderTargetDescriptor`]: the frame graph
decides them per pass, from how attachments are used before and after, and supplies them
at translation time.

# Backends

The only backend is [wgpu](https://wgpu.rs), behind the default `backend_wgpu` feature.
It is exported as [`backend`].  Every translator there is a pure function of its inputs
apart from the device-backed [`backend::SamplerCache`] and [`backend::ShaderLibrary`], so
translation can be exercised without a GPU.

Failures that depend on the frame, such as a drawable of the wrong size or a missing shader
function, are reported as [`Error`].  Failures that only a bug upstream can cause, such as a
handle missing from the frame's resource map, panic.
*/

mod error;
pub mod bindings;
pub mod images;
pub mod pixel_formats;
mod imp;

pub use error::Error;

/// The wgpu backend.
#[cfg(feature = "backend_wgpu")]
pub mod backend {
    pub use crate::imp::*;
}
