// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Sampler descriptions.
//!
//! A [`SamplerDescriptor`] is a value, not a resource: binding one means "whatever native
//! sampler state matches this description".  Backends create those states once and hand
//! the same state back for equal descriptors, so the descriptor is `Eq + Hash`.
//!
//! ```
//! use tables_and_targets::bindings::sampler::{SamplerDescriptor, SamplerAddressMode, SamplerMipFilter};
//!
//! let mut tiling = SamplerDescriptor::default();
//! tiling.s_address_mode = SamplerAddressMode::Repeat;
//! tiling.t_address_mode = SamplerAddressMode::Repeat;
//! tiling.mip_filter = SamplerMipFilter::Linear;
//! assert_ne!(tiling, SamplerDescriptor::default());
//! ```

use std::hash::{Hash, Hasher};

/// Filtering within a mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerMinMagFilter {
    Nearest,
    Linear,
}

/// Filtering between mip levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerMipFilter {
    /// Only the base level is ever sampled.
    NotMipmapped,
    Nearest,
    Linear,
}

/// What happens to coordinates outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerAddressMode {
    ClampToEdge,
    Repeat,
    MirrorRepeat,
    /// Out-of-range reads return the descriptor's border colour.
    ClampToBorderColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerBorderColor {
    TransparentBlack,
    OpaqueBlack,
    OpaqueWhite,
}

/// Comparison used by depth tests, stencil tests and comparison samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunction {
    Never,
    Less,
    Equal,
    LessEqual,
    Greater,
    NotEqual,
    GreaterEqual,
    Always,
}

impl CompareFunction {
    pub const ALL: [CompareFunction; 8] = [
        CompareFunction::Never,
        CompareFunction::Less,
        CompareFunction::Equal,
        CompareFunction::LessEqual,
        CompareFunction::Greater,
        CompareFunction::NotEqual,
        CompareFunction::GreaterEqual,
        CompareFunction::Always,
    ];
}

#[derive(Debug, Clone)]
pub struct SamplerDescriptor {
    pub min_filter: SamplerMinMagFilter,
    pub mag_filter: SamplerMinMagFilter,
    pub mip_filter: SamplerMipFilter,
    pub max_anisotropy: u16,
    pub s_address_mode: SamplerAddressMode,
    pub t_address_mode: SamplerAddressMode,
    pub r_address_mode: SamplerAddressMode,
    pub border_color: SamplerBorderColor,
    pub lod_min_clamp: f32,
    pub lod_max_clamp: f32,
    /// Makes this a comparison sampler.
    pub compare_function: Option<CompareFunction>,
    pub label: Option<String>,
}

impl Default for SamplerDescriptor {
    fn default() -> Self {
        Self {
            min_filter: SamplerMinMagFilter::Nearest,
            mag_filter: SamplerMinMagFilter::Nearest,
            mip_filter: SamplerMipFilter::NotMipmapped,
            max_anisotropy: 1,
            s_address_mode: SamplerAddressMode::ClampToEdge,
            t_address_mode: SamplerAddressMode::ClampToEdge,
            r_address_mode: SamplerAddressMode::ClampToEdge,
            border_color: SamplerBorderColor::TransparentBlack,
            lod_min_clamp: 0.0,
            lod_max_clamp: f32::MAX,
            compare_function: None,
            label: None,
        }
    }
}

//lod clamps compare by bit pattern so that Eq and Hash agree
impl PartialEq for SamplerDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.min_filter == other.min_filter
            && self.mag_filter == other.mag_filter
            && self.mip_filter == other.mip_filter
            && self.max_anisotropy == other.max_anisotropy
            && self.s_address_mode == other.s_address_mode
            && self.t_address_mode == other.t_address_mode
            && self.r_address_mode == other.r_address_mode
            && self.border_color == other.border_color
            && self.lod_min_clamp.to_bits() == other.lod_min_clamp.to_bits()
            && self.lod_max_clamp.to_bits() == other.lod_max_clamp.to_bits()
            && self.compare_function == other.compare_function
            && self.label == other.label
    }
}
impl Eq for SamplerDescriptor {}

impl Hash for SamplerDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min_filter.hash(state);
        self.mag_filter.hash(state);
        self.mip_filter.hash(state);
        self.max_anisotropy.hash(state);
        self.s_address_mode.hash(state);
        self.t_address_mode.hash(state);
        self.r_address_mode.hash(state);
        self.border_color.hash(state);
        self.lod_min_clamp.to_bits().hash(state);
        self.lod_max_clamp.to_bits().hash(state);
        self.compare_function.hash(state);
        self.label.hash(state);
    }
}
