// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Sampler translation and the device-backed sampler state cache.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::Error;
use crate::bindings::resolver::SamplerStateCache;
use crate::bindings::resource_map::DescriptorIndex;
use crate::bindings::sampler::{
    CompareFunction, SamplerAddressMode, SamplerBorderColor, SamplerDescriptor,
    SamplerMinMagFilter, SamplerMipFilter,
};

pub const fn min_mag_filter_to_wgpu(filter: SamplerMinMagFilter) -> wgpu::FilterMode {
    match filter {
        SamplerMinMagFilter::Nearest => wgpu::FilterMode::Nearest,
        SamplerMinMagFilter::Linear => wgpu::FilterMode::Linear,
    }
}

pub const fn min_mag_filter_from_wgpu(filter: wgpu::FilterMode) -> SamplerMinMagFilter {
    match filter {
        wgpu::FilterMode::Nearest => SamplerMinMagFilter::Nearest,
        wgpu::FilterMode::Linear => SamplerMinMagFilter::Linear,
    }
}

/// wgpu has no unmipmapped filter.  Unmipmapped samplers use nearest and clamp to level 0.
pub const fn mip_filter_to_wgpu(filter: SamplerMipFilter) -> wgpu::FilterMode {
    match filter {
        SamplerMipFilter::NotMipmapped | SamplerMipFilter::Nearest => wgpu::FilterMode::Nearest,
        SamplerMipFilter::Linear => wgpu::FilterMode::Linear,
    }
}

pub const fn address_mode_to_wgpu(mode: SamplerAddressMode) -> wgpu::AddressMode {
    match mode {
        SamplerAddressMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
        SamplerAddressMode::Repeat => wgpu::AddressMode::Repeat,
        SamplerAddressMode::MirrorRepeat => wgpu::AddressMode::MirrorRepeat,
        SamplerAddressMode::ClampToBorderColor => wgpu::AddressMode::ClampToBorder,
    }
}

pub const fn address_mode_from_wgpu(mode: wgpu::AddressMode) -> SamplerAddressMode {
    match mode {
        wgpu::AddressMode::ClampToEdge => SamplerAddressMode::ClampToEdge,
        wgpu::AddressMode::Repeat => SamplerAddressMode::Repeat,
        wgpu::AddressMode::MirrorRepeat => SamplerAddressMode::MirrorRepeat,
        wgpu::AddressMode::ClampToBorder => SamplerAddressMode::ClampToBorderColor,
    }
}

pub const fn border_color_to_wgpu(color: SamplerBorderColor) -> wgpu::SamplerBorderColor {
    match color {
        SamplerBorderColor::TransparentBlack => wgpu::SamplerBorderColor::TransparentBlack,
        SamplerBorderColor::OpaqueBlack => wgpu::SamplerBorderColor::OpaqueBlack,
        SamplerBorderColor::OpaqueWhite => wgpu::SamplerBorderColor::OpaqueWhite,
    }
}

pub fn border_color_from_wgpu(color: wgpu::SamplerBorderColor) -> Result<SamplerBorderColor, Error> {
    match color {
        wgpu::SamplerBorderColor::TransparentBlack => Ok(SamplerBorderColor::TransparentBlack),
        wgpu::SamplerBorderColor::OpaqueBlack => Ok(SamplerBorderColor::OpaqueBlack),
        wgpu::SamplerBorderColor::OpaqueWhite => Ok(SamplerBorderColor::OpaqueWhite),
        other => Err(Error::unmapped("wgpu::SamplerBorderColor", other)),
    }
}

pub const fn compare_function_to_wgpu(function: CompareFunction) -> wgpu::CompareFunction {
    match function {
        CompareFunction::Never => wgpu::CompareFunction::Never,
        CompareFunction::Less => wgpu::CompareFunction::Less,
        CompareFunction::Equal => wgpu::CompareFunction::Equal,
        CompareFunction::LessEqual => wgpu::CompareFunction::LessEqual,
        CompareFunction::Greater => wgpu::CompareFunction::Greater,
        CompareFunction::NotEqual => wgpu::CompareFunction::NotEqual,
        CompareFunction::GreaterEqual => wgpu::CompareFunction::GreaterEqual,
        CompareFunction::Always => wgpu::CompareFunction::Always,
    }
}

pub const fn compare_function_from_wgpu(function: wgpu::CompareFunction) -> CompareFunction {
    match function {
        wgpu::CompareFunction::Never => CompareFunction::Never,
        wgpu::CompareFunction::Less => CompareFunction::Less,
        wgpu::CompareFunction::Equal => CompareFunction::Equal,
        wgpu::CompareFunction::LessEqual => CompareFunction::LessEqual,
        wgpu::CompareFunction::Greater => CompareFunction::Greater,
        wgpu::CompareFunction::NotEqual => CompareFunction::NotEqual,
        wgpu::CompareFunction::GreaterEqual => CompareFunction::GreaterEqual,
        wgpu::CompareFunction::Always => CompareFunction::Always,
    }
}

pub fn translate_sampler(descriptor: &SamplerDescriptor) -> wgpu::SamplerDescriptor<'_> {
    let address_modes = [
        descriptor.s_address_mode,
        descriptor.t_address_mode,
        descriptor.r_address_mode,
    ];
    let border_color = address_modes
        .contains(&SamplerAddressMode::ClampToBorderColor)
        .then(|| border_color_to_wgpu(descriptor.border_color));
    let (lod_min_clamp, lod_max_clamp) = match descriptor.mip_filter {
        SamplerMipFilter::NotMipmapped => (0.0, 0.0),
        _ => (descriptor.lod_min_clamp, descriptor.lod_max_clamp),
    };
    wgpu::SamplerDescriptor {
        label: descriptor.label.as_deref(),
        address_mode_u: address_mode_to_wgpu(descriptor.s_address_mode),
        address_mode_v: address_mode_to_wgpu(descriptor.t_address_mode),
        address_mode_w: address_mode_to_wgpu(descriptor.r_address_mode),
        mag_filter: min_mag_filter_to_wgpu(descriptor.mag_filter),
        min_filter: min_mag_filter_to_wgpu(descriptor.min_filter),
        mipmap_filter: mip_filter_to_wgpu(descriptor.mip_filter),
        lod_min_clamp,
        lod_max_clamp,
        compare: descriptor.compare_function.map(compare_function_to_wgpu),
        anisotropy_clamp: descriptor.max_anisotropy.max(1),
        border_color,
    }
}

#[derive(Debug, Default)]
struct SamplerTable {
    indices: HashMap<SamplerDescriptor, DescriptorIndex>,
    samplers: Vec<wgpu::Sampler>,
}

/**
Creates one `wgpu::Sampler` per distinct [`SamplerDescriptor`] and keeps them in a
sampler binding array.

The index handed out is the sampler's position in [`SamplerCache::samplers`].
*/
#[derive(Debug)]
pub struct SamplerCache {
    device: wgpu::Device,
    table: Mutex<SamplerTable>,
}

impl SamplerCache {
    pub fn new(device: wgpu::Device) -> Self {
        Self {
            device,
            table: Mutex::new(SamplerTable::default()),
        }
    }

    /// Every sampler created so far, in index order.
    pub fn samplers(&self) -> Vec<wgpu::Sampler> {
        self.table.lock().unwrap().samplers.clone()
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().samplers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SamplerStateCache for SamplerCache {
    fn sampler_state(&self, descriptor: &SamplerDescriptor) -> DescriptorIndex {
        let mut table = self.table.lock().unwrap();
        if let Some(index) = table.indices.get(descriptor) {
            return *index;
        }
        let sampler = self.device.create_sampler(&translate_sampler(descriptor));
        let index = DescriptorIndex(table.samplers.len() as u32);
        table.samplers.push(sampler);
        table.indices.insert(descriptor.clone(), index);
        logwise::trace_sync!(
            "Created sampler state {index}",
            index = index.0
        );
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_round_trips() {
        for filter in [SamplerMinMagFilter::Nearest, SamplerMinMagFilter::Linear] {
            assert_eq!(min_mag_filter_from_wgpu(min_mag_filter_to_wgpu(filter)), filter);
        }
        for mode in [
            SamplerAddressMode::ClampToEdge,
            SamplerAddressMode::Repeat,
            SamplerAddressMode::MirrorRepeat,
            SamplerAddressMode::ClampToBorderColor,
        ] {
            assert_eq!(address_mode_from_wgpu(address_mode_to_wgpu(mode)), mode);
        }
        for color in [
            SamplerBorderColor::TransparentBlack,
            SamplerBorderColor::OpaqueBlack,
            SamplerBorderColor::OpaqueWhite,
        ] {
            assert_eq!(border_color_from_wgpu(border_color_to_wgpu(color)), Ok(color));
        }
        for function in CompareFunction::ALL {
            assert_eq!(
                compare_function_from_wgpu(compare_function_to_wgpu(function)),
                function
            );
        }
    }

    #[test]
    fn zero_border_is_unmapped() {
        assert!(border_color_from_wgpu(wgpu::SamplerBorderColor::Zero).is_err());
    }

    #[test]
    fn border_color_only_with_border_addressing() {
        let mut descriptor = SamplerDescriptor {
            border_color: SamplerBorderColor::OpaqueWhite,
            ..SamplerDescriptor::default()
        };
        assert_eq!(translate_sampler(&descriptor).border_color, None);
        descriptor.t_address_mode = SamplerAddressMode::ClampToBorderColor;
        assert_eq!(
            translate_sampler(&descriptor).border_color,
            Some(wgpu::SamplerBorderColor::OpaqueWhite)
        );
    }

    #[test]
    fn fields() {
        let descriptor = SamplerDescriptor {
            min_filter: SamplerMinMagFilter::Linear,
            mag_filter: SamplerMinMagFilter::Nearest,
            mip_filter: SamplerMipFilter::Linear,
            max_anisotropy: 8,
            s_address_mode: SamplerAddressMode::Repeat,
            lod_min_clamp: 1.0,
            lod_max_clamp: 6.0,
            compare_function: Some(CompareFunction::LessEqual),
            label: Some("shadow".to_string()),
            ..SamplerDescriptor::default()
        };
        let native = translate_sampler(&descriptor);
        assert_eq!(native.label, Some("shadow"));
        assert_eq!(native.min_filter, wgpu::FilterMode::Linear);
        assert_eq!(native.mag_filter, wgpu::FilterMode::Nearest);
        assert_eq!(native.mipmap_filter, wgpu::FilterMode::Linear);
        assert_eq!(native.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(native.address_mode_v, wgpu::AddressMode::ClampToEdge);
        assert_eq!(native.anisotropy_clamp, 8);
        assert_eq!(native.lod_min_clamp, 1.0);
        assert_eq!(native.lod_max_clamp, 6.0);
        assert_eq!(native.compare, Some(wgpu::CompareFunction::LessEqual));
    }

    #[test]
    fn unmipmapped_clamps_to_base_level() {
        let descriptor = SamplerDescriptor {
            lod_min_clamp: 2.0,
            lod_max_clamp: 8.0,
            ..SamplerDescriptor::default()
        };
        let native = translate_sampler(&descriptor);
        assert_eq!(native.mipmap_filter, wgpu::FilterMode::Nearest);
        assert_eq!((native.lod_min_clamp, native.lod_max_clamp), (0.0, 0.0));
    }
}
