// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The frame-scoped table from virtual handles to physical backing.
//!
//! The resource allocator fills one [`FrameResourceMap`] per frame.  Physical references
//! taken from it are only meaningful for the frame that produced them: transient resources
//! may alias different memory next frame, and the drawable changes every frame.

use std::collections::HashMap;

use crate::bindings::coordinates::Size;
use crate::bindings::handles::{BufferHandle, TextureHandle};
use crate::pixel_formats::PixelFormat;

/**
A backend-native reference to a physical resource.

Physical textures, buffers and sampler states live in the backend's binding arrays;
the index is what a binding table stores and what shaders use to find the resource.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescriptorIndex(pub u32);

/// A physical texture for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalTexture {
    pub index: DescriptorIndex,
    pub size: Size,
    pub format: PixelFormat,
}

/// A physical buffer for the current frame: the buffer it lives in, plus where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalBuffer {
    pub index: DescriptorIndex,
    pub offset: u64,
}

/// What stands behind a virtual texture this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureBacking {
    /// Memory handed out by the resource allocator.
    Allocated(PhysicalTexture),
    /// The frame's swap-chain image.  Only known once a drawable is acquired.
    Drawable,
}

#[derive(Debug, Clone, Default)]
pub struct FrameResourceMap {
    frame: u64,
    textures: HashMap<TextureHandle, TextureBacking>,
    buffers: HashMap<BufferHandle, PhysicalBuffer>,
}

impl FrameResourceMap {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            textures: HashMap::new(),
            buffers: HashMap::new(),
        }
    }

    /// The frame this map describes.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn insert_texture(&mut self, handle: TextureHandle, texture: PhysicalTexture) {
        self.textures.insert(handle, TextureBacking::Allocated(texture));
    }

    /// Marks `handle` as backed by this frame's drawable.
    pub fn insert_drawable(&mut self, handle: TextureHandle) {
        self.textures.insert(handle, TextureBacking::Drawable);
    }

    pub fn insert_buffer(&mut self, handle: BufferHandle, buffer: PhysicalBuffer) {
        self.buffers.insert(handle, buffer);
    }

    pub fn backing(&self, handle: TextureHandle) -> Option<TextureBacking> {
        self.textures.get(&handle).copied()
    }

    pub fn buffer(&self, handle: BufferHandle) -> Option<PhysicalBuffer> {
        self.buffers.get(&handle).copied()
    }
}
