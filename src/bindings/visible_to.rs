// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Resource visibility and usage declarations.
//!
//! These describe where a resource's memory lives and how the GPU will touch it.  The
//! backend uses them to pick native usage flags, and refuses the combinations it cannot
//! express.
//!
//! # Examples
//!
//! ```
//! use tables_and_targets::bindings::visible_to::{StorageMode, TextureUsage};
//!
//! // A G-buffer target that a later pass samples.
//! let usage = TextureUsage::RENDER_TARGET | TextureUsage::SHADER_READ;
//! let storage = StorageMode::Private;
//! # let _ = (usage, storage);
//! ```

/// Where a resource's memory lives and who may access it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMode {
    /// Memory visible to both CPU and GPU; the CPU writes it directly.
    Shared,
    /// CPU and GPU copies kept in sync; typically used for readback.
    Managed,
    /// GPU-only memory.  The fastest choice for anything the CPU does not touch.
    Private,
    /// Tile memory that exists only for the duration of a pass.
    ///
    /// Only meaningful for render targets that are never loaded or stored.
    Memoryless,
}

impl StorageMode {
    pub const ALL: [StorageMode; 4] = [
        StorageMode::Shared,
        StorageMode::Managed,
        StorageMode::Private,
        StorageMode::Memoryless,
    ];
}

bitflags::bitflags! {
    /// How a texture will be used over its lifetime.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextureUsage: u8 {
        /// Sampled or read in shaders.
        const SHADER_READ = 1 << 0;
        /// Written from shaders as a storage image.
        const SHADER_WRITE = 1 << 1;
        /// Bound as a colour, depth or stencil attachment.
        const RENDER_TARGET = 1 << 2;
        /// Source of copy operations.
        const BLIT_SOURCE = 1 << 3;
        /// Destination of copy operations.
        const BLIT_DESTINATION = 1 << 4;
    }
}
