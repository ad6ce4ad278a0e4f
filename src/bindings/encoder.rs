// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The seam between argument groups and a backend's binding-table format.
//!
//! A backend describes one table layout with an [`ArgumentLayout`] and writes tables with
//! an [`ArgumentEncoder`].  Encoders are retargeted with
//! [`ArgumentEncoder::set_argument_buffer`] before each encoding, so one encoder can
//! write every element of an array.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::bindings::argument_group::{BindSlot, BindingEntry};
use crate::bindings::resolver::ResourceResolver;
use crate::bindings::resource_map::{DescriptorIndex, PhysicalTexture};

/// A backend table layout.  Shared by every group encoded with it.
pub trait ArgumentLayout: Debug + Send + Sync {
    /// Bytes one encoded element occupies.  Array elements sit this far apart.
    fn encoded_length(&self) -> usize;

    /// Required alignment of a table region's start offset.
    fn alignment(&self) -> usize {
        16
    }

    fn make_encoder(&self) -> Box<dyn ArgumentEncoder>;
}

/**
Writes one binding table.

Each `set_*` call receives the whole table and an encoder index.  The encoder works out
where inside the table the value goes from the last [`Self::set_argument_buffer`] call.
*/
pub trait ArgumentEncoder: Debug + Send {
    /// Targets element `element` of the array whose first element starts at `offset`.
    fn set_argument_buffer(&mut self, offset: usize, element: usize);
    fn set_texture(&mut self, table: &mut [u8], index: u32, texture: &PhysicalTexture);
    fn set_buffer(&mut self, table: &mut [u8], index: u32, buffer: DescriptorIndex, offset: u64);
    fn set_sampler(&mut self, table: &mut [u8], index: u32, sampler: DescriptorIndex);
    fn set_bytes(&mut self, table: &mut [u8], index: u32, bytes: &[u8]);
}

/// The region of a table that a group or group array is bound to.
#[derive(Debug)]
pub struct TableRegion<'t> {
    table: &'t mut [u8],
    offset: usize,
}

impl<'t> TableRegion<'t> {
    pub fn new(table: &'t mut [u8], offset: usize) -> Self {
        Self { table, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn table(&self) -> &[u8] {
        self.table
    }
}

/**
Writes one group's entries into `region`, as element `element`.

# Panics
If the element does not fit in the region, or an entry's resource is missing from the
frame (see [`ResourceResolver`]).
*/
pub(crate) fn encode(
    encoder: &mut dyn ArgumentEncoder,
    layout_length: usize,
    entries: &BTreeMap<BindSlot, BindingEntry>,
    bytes: &[u8],
    region: &mut TableRegion<'_>,
    element: usize,
    resolver: &ResourceResolver<'_>,
) {
    let end = region.offset + (element + 1) * layout_length;
    assert!(
        end <= region.table.len(),
        "element {element} ends at {end} but the table is only {} bytes",
        region.table.len()
    );
    encoder.set_argument_buffer(region.offset, element);
    let table = &mut *region.table;
    for (slot, entry) in entries {
        let index = slot.encoder_index();
        match entry {
            BindingEntry::Texture(handle) => {
                let texture = resolver.texture(*handle);
                encoder.set_texture(table, index, &texture);
            }
            BindingEntry::Buffer { buffer, offset } => {
                let physical = resolver.buffer(*buffer);
                encoder.set_buffer(table, index, physical.index, physical.offset + offset);
            }
            BindingEntry::Sampler(descriptor) => {
                let sampler = resolver.sampler(descriptor);
                encoder.set_sampler(table, index, sampler);
            }
            BindingEntry::Bytes { offset, length } => {
                encoder.set_bytes(table, index, &bytes[*offset..*offset + *length]);
            }
        }
    }
}
