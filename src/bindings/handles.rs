// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Virtual resource handles.
//!
//! A handle names a texture or buffer owned by the frame graph.  It has no physical
//! backing by itself; the frame's [`FrameResourceMap`](super::resource_map::FrameResourceMap)
//! decides what it points at.  Two handles are the same resource exactly when their ids match.

/// A virtual texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// A virtual buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferHandle(u64);

impl BufferHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
    pub const fn id(&self) -> u64 {
        self.0
    }
}
