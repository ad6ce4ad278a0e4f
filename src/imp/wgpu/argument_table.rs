// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! Bindless argument tables for wgpu.

A table is a run of bytes in a storage buffer.  Textures, buffers and samplers live in
binding arrays, and the table holds their indices:

| Argument | Bytes | Contents |
|---|---|---|
| sampled or storage image | 4 | texture index |
| sampler | 4 | sampler index |
| uniform or storage buffer | 12 | buffer index, then the 64-bit byte offset as low and high words |
| inline bytes | `byte_length` rounded up to 4 | the bytes |

Arguments are laid out in index order with 4-byte alignment.  An argument with
`array_length` n occupies the n consecutive indices starting at its own, one element
each.  The table as a whole is padded to 16 bytes, which is also the distance between
elements of an argument group array.
*/

use std::collections::BTreeMap;
use std::num::NonZeroU64;
use std::sync::Arc;

use crate::bindings::encoder::{ArgumentEncoder, ArgumentLayout};
use crate::bindings::resource_map::{DescriptorIndex, PhysicalTexture};

const TABLE_ALIGNMENT: usize = 16;

/// What an argument holds, as shader reflection reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    UniformBuffer,
    StorageBuffer,
    SampledImage,
    StorageImage,
    Sampler,
    /// Constant bytes stored in the table itself.
    InlineBytes,
}

impl ArgumentType {
    pub const fn is_image(&self) -> bool {
        matches!(self, ArgumentType::SampledImage | ArgumentType::StorageImage)
    }

    pub const fn is_buffer(&self) -> bool {
        matches!(self, ArgumentType::UniformBuffer | ArgumentType::StorageBuffer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentAccess {
    ReadOnly,
    ReadWrite,
    WriteOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentDescriptor {
    pub index: u32,
    pub argument_type: ArgumentType,
    pub access: ArgumentAccess,
    pub array_length: u32,
    /// Only meaningful for [`ArgumentType::InlineBytes`].
    pub byte_length: u32,
}

impl ArgumentDescriptor {
    /// A single argument.  Storage arguments are read-write, everything else read-only.
    pub const fn new(index: u32, argument_type: ArgumentType) -> Self {
        let access = match argument_type {
            ArgumentType::StorageBuffer | ArgumentType::StorageImage => ArgumentAccess::ReadWrite,
            _ => ArgumentAccess::ReadOnly,
        };
        Self {
            index,
            argument_type,
            access,
            array_length: 1,
            byte_length: 0,
        }
    }

    pub const fn inline_bytes(index: u32, byte_length: u32) -> Self {
        Self {
            byte_length,
            ..Self::new(index, ArgumentType::InlineBytes)
        }
    }

    pub const fn with_array_length(mut self, array_length: u32) -> Self {
        self.array_length = array_length;
        self
    }

    pub const fn with_access(mut self, access: ArgumentAccess) -> Self {
        self.access = access;
        self
    }

    const fn element_size(&self) -> usize {
        match self.argument_type {
            ArgumentType::SampledImage | ArgumentType::StorageImage | ArgumentType::Sampler => 4,
            ArgumentType::UniformBuffer | ArgumentType::StorageBuffer => 12,
            ArgumentType::InlineBytes => (self.byte_length as usize + 3) & !3,
        }
    }
}

/// Where one table index lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
    pub offset: usize,
    pub size: usize,
    pub argument_type: ArgumentType,
    pub access: ArgumentAccess,
}

#[derive(Debug, Clone)]
pub struct TableLayout {
    slots: Arc<BTreeMap<u32, SlotLayout>>,
    stride: usize,
}

impl TableLayout {
    /**
    Lays out `arguments`.

    # Panics
    If two arguments claim the same index.
    */
    pub fn new(arguments: &[ArgumentDescriptor]) -> Self {
        let mut sorted = arguments.to_vec();
        sorted.sort_by_key(|a| a.index);
        let mut slots = BTreeMap::new();
        let mut offset = 0;
        for argument in &sorted {
            let size = argument.element_size();
            for element in 0..argument.array_length {
                let index = argument.index + element;
                let previous = slots.insert(
                    index,
                    SlotLayout {
                        offset,
                        size,
                        argument_type: argument.argument_type,
                        access: argument.access,
                    },
                );
                assert!(previous.is_none(), "table index {index} is declared twice");
                offset += size;
            }
        }
        let stride = offset.div_ceil(TABLE_ALIGNMENT).max(1) * TABLE_ALIGNMENT;
        logwise::trace_sync!(
            "Table layout with {count} slots, stride {stride}",
            count = slots.len(),
            stride = stride
        );
        Self {
            slots: Arc::new(slots),
            stride,
        }
    }

    pub fn slot(&self, index: u32) -> Option<&SlotLayout> {
        self.slots.get(&index)
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The bind group layout entry for a storage buffer holding `elements` tables.
    pub fn bind_group_layout_entry(
        &self,
        binding: u32,
        visibility: wgpu::ShaderStages,
        elements: usize,
    ) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new((self.stride * elements) as u64),
            },
            count: None,
        }
    }
}

impl ArgumentLayout for TableLayout {
    fn encoded_length(&self) -> usize {
        self.stride
    }

    fn alignment(&self) -> usize {
        TABLE_ALIGNMENT
    }

    fn make_encoder(&self) -> Box<dyn ArgumentEncoder> {
        logwise::trace_sync!("Creating table encoder");
        Box::new(TableEncoder {
            slots: self.slots.clone(),
            stride: self.stride,
            base: 0,
        })
    }
}

/// Writes tables laid out by a [`TableLayout`].
#[derive(Debug)]
pub struct TableEncoder {
    slots: Arc<BTreeMap<u32, SlotLayout>>,
    stride: usize,
    base: usize,
}

impl TableEncoder {
    /// # Panics
    /// If the layout has no slot `index`, or the slot holds something else.
    fn slot(&self, index: u32, wanted: &str, accepts: fn(&ArgumentType) -> bool) -> SlotLayout {
        match self.slots.get(&index) {
            Some(slot) if accepts(&slot.argument_type) => *slot,
            Some(slot) => panic!(
                "table index {index} holds {:?}, not a {wanted}",
                slot.argument_type
            ),
            None => panic!("table index {index} is not declared by the layout"),
        }
    }

    fn write_u32(&self, table: &mut [u8], at: usize, value: u32) {
        let at = self.base + at;
        table[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }
}

impl ArgumentEncoder for TableEncoder {
    fn set_argument_buffer(&mut self, offset: usize, element: usize) {
        self.base = offset + element * self.stride;
    }

    fn set_texture(&mut self, table: &mut [u8], index: u32, texture: &PhysicalTexture) {
        let slot = self.slot(index, "texture", ArgumentType::is_image);
        self.write_u32(table, slot.offset, texture.index.0);
    }

    fn set_buffer(&mut self, table: &mut [u8], index: u32, buffer: DescriptorIndex, offset: u64) {
        let slot = self.slot(index, "buffer", ArgumentType::is_buffer);
        self.write_u32(table, slot.offset, buffer.0);
        self.write_u32(table, slot.offset + 4, offset as u32);
        self.write_u32(table, slot.offset + 8, (offset >> 32) as u32);
    }

    fn set_sampler(&mut self, table: &mut [u8], index: u32, sampler: DescriptorIndex) {
        let slot = self.slot(index, "sampler", |t| *t == ArgumentType::Sampler);
        self.write_u32(table, slot.offset, sampler.0);
    }

    fn set_bytes(&mut self, table: &mut [u8], index: u32, bytes: &[u8]) {
        let slot = self.slot(index, "byte range", |t| *t == ArgumentType::InlineBytes);
        assert!(
            bytes.len() <= slot.size,
            "{} bytes do not fit in the {} bytes of table index {index}",
            bytes.len(),
            slot.size
        );
        let at = self.base + slot.offset;
        table[at..at + bytes.len()].copy_from_slice(bytes);
    }
}
