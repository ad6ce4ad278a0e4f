// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Abstract heap descriptions.

use crate::bindings::visible_to::StorageMode;

/// How resources are placed inside a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapType {
    /// The backend picks offsets for each sub-allocation.
    Automatic,
    /// The caller picks offsets, which allows aliasing.
    Placement,
    /// Memory for sparse (tiled) textures.  Not every device has it.
    Sparse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapDescriptor {
    pub size: u64,
    pub heap_type: HeapType,
    pub storage_mode: StorageMode,
    pub label: Option<String>,
}

impl HeapDescriptor {
    pub fn new(size: u64, heap_type: HeapType, storage_mode: StorageMode) -> Self {
        Self {
            size,
            heap_type,
            storage_mode,
            label: None,
        }
    }
}
