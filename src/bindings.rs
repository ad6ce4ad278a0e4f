/*! Resource descriptions and argument binding.

The types here describe resources and their bindings in backend-neutral terms.  Handles
([`handles::TextureHandle`], [`handles::BufferHandle`]) name virtual resources that the
frame graph allocates fresh every frame; a [`resource_map::FrameResourceMap`] says where
they live this frame, and [`resolver::ResourceResolver`] looks them up.

[`argument_group::ArgumentGroup`] collects what one binding table holds and encodes it
through the [`encoder`] seam, at most once per frame.
*/

pub mod argument_group;
mod binder;
pub mod coordinates;
pub mod encoder;
pub mod handles;
pub mod heap;
pub mod resolver;
pub mod resource_map;
pub mod sampler;
pub mod texture;
pub mod visible_to;
