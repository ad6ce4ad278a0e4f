// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Resolves virtual handles to this frame's physical backing.
//!
//! Ordinary lookups are total: the allocator guarantees every handle a pass references is
//! present in the frame's map, so a miss is a bug upstream and panics.  Render targets are
//! the exception.  A render target may be the swap-chain drawable, which has to be acquired
//! and can have the wrong size, so [`ResourceResolver::render_target`] returns a `Result`.

use crate::Error;
use crate::bindings::coordinates::Size;
use crate::bindings::handles::{BufferHandle, TextureHandle};
use crate::bindings::resource_map::{
    DescriptorIndex, FrameResourceMap, PhysicalBuffer, PhysicalTexture, TextureBacking,
};
use crate::bindings::sampler::SamplerDescriptor;
use crate::pixel_formats::PixelFormat;

/// The swap-chain image for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawable {
    pub texture: DescriptorIndex,
    pub size: Size,
    pub format: PixelFormat,
}

/// Supplies the current frame's drawable.
pub trait DrawableProvider {
    /// Returns `None` when no drawable can be had this frame, for instance while minimised.
    fn acquire(&self) -> Option<Drawable>;
}

/// Hands out one native sampler state per distinct sampler description.
pub trait SamplerStateCache {
    fn sampler_state(&self, descriptor: &SamplerDescriptor) -> DescriptorIndex;
}

pub struct ResourceResolver<'f> {
    resources: &'f FrameResourceMap,
    samplers: &'f dyn SamplerStateCache,
    drawables: Option<&'f dyn DrawableProvider>,
}

impl<'f> ResourceResolver<'f> {
    pub fn new(resources: &'f FrameResourceMap, samplers: &'f dyn SamplerStateCache) -> Self {
        Self {
            resources,
            samplers,
            drawables: None,
        }
    }

    pub fn with_drawables(mut self, drawables: &'f dyn DrawableProvider) -> Self {
        self.drawables = Some(drawables);
        self
    }

    pub fn frame(&self) -> u64 {
        self.resources.frame()
    }

    /// Resolves a texture bound as a shader argument.
    ///
    /// # Panics
    /// If `handle` is not in the frame's map, or is backed by the drawable.  Drawables may
    /// only be resolved through [`Self::render_target`].
    pub fn texture(&self, handle: TextureHandle) -> PhysicalTexture {
        match self.resources.backing(handle) {
            Some(TextureBacking::Allocated(texture)) => texture,
            Some(TextureBacking::Drawable) => {
                panic!("{:?} is a drawable and may only be resolved as a render target", handle)
            }
            None => panic!("{:?} has no backing in frame {}", handle, self.resources.frame()),
        }
    }

    /// # Panics
    /// If `handle` is not in the frame's map.
    pub fn buffer(&self, handle: BufferHandle) -> PhysicalBuffer {
        match self.resources.buffer(handle) {
            Some(buffer) => buffer,
            None => panic!("{:?} has no backing in frame {}", handle, self.resources.frame()),
        }
    }

    pub fn sampler(&self, descriptor: &SamplerDescriptor) -> DescriptorIndex {
        self.samplers.sampler_state(descriptor)
    }

    /**
    Resolves a texture bound as a render target of size `requested`.

    Allocated textures resolve directly.  A drawable-backed texture is acquired from the
    drawable provider and must match `requested` exactly.

    # Panics
    If `handle` is not in the frame's map.
    */
    pub fn render_target(
        &self,
        handle: TextureHandle,
        requested: Size,
    ) -> Result<PhysicalTexture, Error> {
        match self.resources.backing(handle) {
            Some(TextureBacking::Allocated(texture)) => Ok(texture),
            Some(TextureBacking::Drawable) => {
                let drawable = self.drawables.and_then(|d| d.acquire()).ok_or_else(|| {
                    logwise::warn_sync!(
                        "No drawable available for {texture}",
                        texture = logwise::privacy::LogIt(&handle)
                    );
                    Error::DrawableUnavailable { texture: handle }
                })?;
                if drawable.size != requested {
                    logwise::warn_sync!(
                        "Render target {texture} wants {requested} but the drawable is {actual}",
                        texture = logwise::privacy::LogIt(&handle),
                        requested = logwise::privacy::LogIt(&requested),
                        actual = logwise::privacy::LogIt(&drawable.size)
                    );
                    return Err(Error::InvalidDrawableSize {
                        texture: handle,
                        requested,
                        actual: drawable.size,
                    });
                }
                Ok(PhysicalTexture {
                    index: drawable.texture,
                    size: drawable.size,
                    format: drawable.format,
                })
            }
            None => panic!("{:?} has no backing in frame {}", handle, self.resources.frame()),
        }
    }
}
