// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Abstract texture descriptions.

use crate::bindings::visible_to::{StorageMode, TextureUsage};
use crate::pixel_formats::PixelFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureType {
    Type1D,
    Type1DArray,
    Type2D,
    Type2DArray,
    Type2DMultisample,
    TypeCube,
    TypeCubeArray,
    Type3D,
}

/**
Everything needed to create a texture.

Fields follow the frame graph's conventions: `depth` is only meaningful for
[`TextureType::Type3D`], `array_length` counts array elements (cubes, not faces, for
cube arrays) and `sample_count` is only meaningful for multisample textures.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor {
    pub texture_type: TextureType,
    pub pixel_format: PixelFormat,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub mipmap_level_count: u32,
    pub array_length: u32,
    pub sample_count: u32,
    pub storage_mode: StorageMode,
    pub usage: TextureUsage,
    pub label: Option<String>,
}

impl TextureDescriptor {
    /// A single-level, private 2D texture.
    pub fn texture_2d(pixel_format: PixelFormat, width: u32, height: u32, usage: TextureUsage) -> Self {
        Self {
            texture_type: TextureType::Type2D,
            pixel_format,
            width,
            height,
            depth: 1,
            mipmap_level_count: 1,
            array_length: 1,
            sample_count: 1,
            storage_mode: StorageMode::Private,
            usage,
            label: None,
        }
    }

    /// A square cube texture with every face `size` texels on a side.
    pub fn texture_cube(pixel_format: PixelFormat, size: u32, usage: TextureUsage) -> Self {
        Self {
            texture_type: TextureType::TypeCube,
            ..Self::texture_2d(pixel_format, size, size, usage)
        }
    }
}
