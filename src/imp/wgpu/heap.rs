// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Heap translation.

wgpu allocates every resource itself, so a heap becomes a budget: one backing buffer of
the heap's size, with a note of how resources inside it are placed.
*/

use crate::Error;
use crate::bindings::heap::{HeapDescriptor, HeapType};
use crate::images::DeviceCapabilities;
use crate::imp::wgpu::texture::buffer_usages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativePlacement {
    Automatic,
    Placement,
    Sparse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeHeapDescriptor {
    pub label: Option<String>,
    pub size: u64,
    pub placement: NativePlacement,
    pub usage: wgpu::BufferUsages,
    /// Set when the requested placement was unavailable and automatic placement was used.
    pub degraded: bool,
}

impl NativeHeapDescriptor {
    /// The backing buffer.
    pub fn buffer_descriptor(&self) -> wgpu::BufferDescriptor<'_> {
        wgpu::BufferDescriptor {
            label: self.label.as_deref(),
            size: self.size,
            usage: self.usage,
            mapped_at_creation: false,
        }
    }
}

/**
Translates `descriptor` for a device with `capabilities`.

Sparse heaps on a device without sparse textures fall back to automatic placement.  The
fallback is logged and recorded in [`NativeHeapDescriptor::degraded`].

# Errors
Memoryless heaps have no counterpart.
*/
pub fn translate_heap(
    descriptor: &HeapDescriptor,
    capabilities: &DeviceCapabilities,
) -> Result<NativeHeapDescriptor, Error> {
    let usage = buffer_usages(descriptor.storage_mode)?;
    let (placement, degraded) = match descriptor.heap_type {
        HeapType::Automatic => (NativePlacement::Automatic, false),
        HeapType::Placement => (NativePlacement::Placement, false),
        HeapType::Sparse if capabilities.sparse_textures => (NativePlacement::Sparse, false),
        HeapType::Sparse => {
            logwise::warn_sync!(
                "Sparse heap {label} requested on a device without sparse textures; using automatic placement",
                label = descriptor.label.clone().unwrap_or_default()
            );
            (NativePlacement::Automatic, true)
        }
    };
    Ok(NativeHeapDescriptor {
        label: descriptor.label.clone(),
        size: descriptor.size,
        placement,
        usage,
        degraded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::visible_to::StorageMode;

    #[test]
    fn sparse_degrades() {
        let descriptor = HeapDescriptor::new(1 << 20, HeapType::Sparse, StorageMode::Private);
        let native = translate_heap(&descriptor, &DeviceCapabilities::default()).unwrap();
        assert_eq!(native.placement, NativePlacement::Automatic);
        assert!(native.degraded);

        let sparse = DeviceCapabilities {
            sparse_textures: true,
            ..DeviceCapabilities::default()
        };
        let native = translate_heap(&descriptor, &sparse).unwrap();
        assert_eq!(native.placement, NativePlacement::Sparse);
        assert!(!native.degraded);
    }

    #[test]
    fn placement_kept() {
        let descriptor = HeapDescriptor::new(4096, HeapType::Placement, StorageMode::Shared);
        let native = translate_heap(&descriptor, &DeviceCapabilities::default()).unwrap();
        assert_eq!(native.placement, NativePlacement::Placement);
        assert_eq!(native.buffer_descriptor().size, 4096);
        assert!(native.usage.contains(wgpu::BufferUsages::MAP_WRITE));
    }

    #[test]
    fn memoryless_heap() {
        let descriptor = HeapDescriptor::new(4096, HeapType::Automatic, StorageMode::Memoryless);
        assert!(matches!(
            translate_heap(&descriptor, &DeviceCapabilities::default()),
            Err(Error::UnmappedEnumerationValue { .. })
        ));
    }
}
