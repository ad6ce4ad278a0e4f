// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture and buffer descriptor translation.

use crate::Error;
use crate::bindings::texture::{TextureDescriptor, TextureType};
use crate::bindings::visible_to::{StorageMode, TextureUsage};

/**
A texture descriptor with owned fields.

`wgpu::TextureDescriptor` borrows its label and view formats, and says nothing about
how the texture will be viewed.  This carries both.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeTextureDescriptor {
    pub label: Option<String>,
    pub size: wgpu::Extent3d,
    pub mip_level_count: u32,
    pub sample_count: u32,
    pub dimension: wgpu::TextureDimension,
    pub view_dimension: wgpu::TextureViewDimension,
    pub format: wgpu::TextureFormat,
    pub usage: wgpu::TextureUsages,
}

impl NativeTextureDescriptor {
    pub fn as_wgpu(&self) -> wgpu::TextureDescriptor<'_> {
        wgpu::TextureDescriptor {
            label: self.label.as_deref(),
            size: self.size,
            mip_level_count: self.mip_level_count,
            sample_count: self.sample_count,
            dimension: self.dimension,
            format: self.format,
            usage: self.usage,
            view_formats: &[],
        }
    }
}

pub const fn texture_dimensions(
    texture_type: TextureType,
) -> (wgpu::TextureDimension, wgpu::TextureViewDimension) {
    match texture_type {
        TextureType::Type1D => (wgpu::TextureDimension::D1, wgpu::TextureViewDimension::D1),
        //wgpu has no 1D arrays; a one-texel-high 2D array reads the same
        TextureType::Type1DArray => (
            wgpu::TextureDimension::D2,
            wgpu::TextureViewDimension::D2Array,
        ),
        TextureType::Type2D | TextureType::Type2DMultisample => {
            (wgpu::TextureDimension::D2, wgpu::TextureViewDimension::D2)
        }
        TextureType::Type2DArray => (
            wgpu::TextureDimension::D2,
            wgpu::TextureViewDimension::D2Array,
        ),
        TextureType::TypeCube => (wgpu::TextureDimension::D2, wgpu::TextureViewDimension::Cube),
        TextureType::TypeCubeArray => (
            wgpu::TextureDimension::D2,
            wgpu::TextureViewDimension::CubeArray,
        ),
        TextureType::Type3D => (wgpu::TextureDimension::D3, wgpu::TextureViewDimension::D3),
    }
}

pub fn texture_usage_to_wgpu(usage: TextureUsage) -> wgpu::TextureUsages {
    let mut native = wgpu::TextureUsages::empty();
    if usage.contains(TextureUsage::SHADER_READ) {
        native |= wgpu::TextureUsages::TEXTURE_BINDING;
    }
    if usage.contains(TextureUsage::SHADER_WRITE) {
        native |= wgpu::TextureUsages::STORAGE_BINDING;
    }
    if usage.contains(TextureUsage::RENDER_TARGET) {
        native |= wgpu::TextureUsages::RENDER_ATTACHMENT;
    }
    if usage.contains(TextureUsage::BLIT_SOURCE) {
        native |= wgpu::TextureUsages::COPY_SRC;
    }
    if usage.contains(TextureUsage::BLIT_DESTINATION) {
        native |= wgpu::TextureUsages::COPY_DST;
    }
    native
}

pub fn texture_usage_from_wgpu(native: wgpu::TextureUsages) -> TextureUsage {
    let mut usage = TextureUsage::empty();
    if native.contains(wgpu::TextureUsages::TEXTURE_BINDING) {
        usage |= TextureUsage::SHADER_READ;
    }
    if native.contains(wgpu::TextureUsages::STORAGE_BINDING) {
        usage |= TextureUsage::SHADER_WRITE;
    }
    if native.contains(wgpu::TextureUsages::RENDER_ATTACHMENT) {
        usage |= TextureUsage::RENDER_TARGET;
    }
    if native.contains(wgpu::TextureUsages::COPY_SRC) {
        usage |= TextureUsage::BLIT_SOURCE;
    }
    if native.contains(wgpu::TextureUsages::COPY_DST) {
        usage |= TextureUsage::BLIT_DESTINATION;
    }
    usage
}

/**
Native texture usages for a texture with `usage` in `storage_mode`.

CPU-visible textures are reached through staging copies, so they gain both copy usages.

# Errors
Memoryless textures must be render targets and nothing else.
*/
pub fn texture_usages(
    usage: TextureUsage,
    storage_mode: StorageMode,
) -> Result<wgpu::TextureUsages, Error> {
    let native = texture_usage_to_wgpu(usage);
    match storage_mode {
        StorageMode::Shared | StorageMode::Managed => {
            Ok(native | wgpu::TextureUsages::COPY_SRC | wgpu::TextureUsages::COPY_DST)
        }
        StorageMode::Private => Ok(native),
        StorageMode::Memoryless => {
            if usage == TextureUsage::RENDER_TARGET {
                Ok(wgpu::TextureUsages::RENDER_ATTACHMENT)
            } else {
                Err(Error::NotYetSupported(
                    "memoryless textures used other than as render targets",
                ))
            }
        }
    }
}

pub fn translate_texture(descriptor: &TextureDescriptor) -> Result<NativeTextureDescriptor, Error> {
    let (dimension, view_dimension) = texture_dimensions(descriptor.texture_type);
    let depth_or_array_layers = match descriptor.texture_type {
        TextureType::Type1D | TextureType::Type2D | TextureType::Type2DMultisample => 1,
        TextureType::Type1DArray | TextureType::Type2DArray => descriptor.array_length,
        TextureType::TypeCube => 6,
        TextureType::TypeCubeArray => 6 * descriptor.array_length,
        TextureType::Type3D => descriptor.depth,
    };
    let sample_count = match descriptor.texture_type {
        TextureType::Type2DMultisample => descriptor.sample_count,
        _ => 1,
    };
    Ok(NativeTextureDescriptor {
        label: descriptor.label.clone(),
        size: wgpu::Extent3d {
            width: descriptor.width,
            height: descriptor.height,
            depth_or_array_layers,
        },
        mip_level_count: descriptor.mipmap_level_count,
        sample_count,
        dimension,
        view_dimension,
        format: descriptor.pixel_format.to_wgpu(),
        usage: texture_usages(descriptor.usage, descriptor.storage_mode)?,
    })
}

/**
Native buffer usages for a buffer in `storage_mode`.

Shared buffers are written by the CPU and copied from; managed buffers are copied into
and read back.  Private buffers may be bound any way the GPU likes.

# Errors
Buffers cannot be memoryless.
*/
pub fn buffer_usages(storage_mode: StorageMode) -> Result<wgpu::BufferUsages, Error> {
    match storage_mode {
        StorageMode::Shared => Ok(wgpu::BufferUsages::MAP_WRITE | wgpu::BufferUsages::COPY_SRC),
        StorageMode::Managed => Ok(wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST),
        StorageMode::Private => Ok(wgpu::BufferUsages::COPY_SRC
            | wgpu::BufferUsages::COPY_DST
            | wgpu::BufferUsages::VERTEX
            | wgpu::BufferUsages::INDEX
            | wgpu::BufferUsages::UNIFORM
            | wgpu::BufferUsages::STORAGE
            | wgpu::BufferUsages::INDIRECT),
        StorageMode::Memoryless => Err(Error::unmapped("buffer StorageMode", storage_mode)),
    }
}

pub fn storage_mode_from_buffer_usages(usages: wgpu::BufferUsages) -> StorageMode {
    if usages.contains(wgpu::BufferUsages::MAP_WRITE) {
        StorageMode::Shared
    } else if usages.contains(wgpu::BufferUsages::MAP_READ) {
        StorageMode::Managed
    } else {
        StorageMode::Private
    }
}

pub fn translate_buffer<'a>(
    label: Option<&'a str>,
    size: u64,
    storage_mode: StorageMode,
) -> Result<wgpu::BufferDescriptor<'a>, Error> {
    Ok(wgpu::BufferDescriptor {
        label,
        size,
        usage: buffer_usages(storage_mode)?,
        mapped_at_creation: false,
    })
}
