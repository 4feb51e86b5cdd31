//! Backing storage selection for [`BitVector`](crate::BitVector).

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

use crate::bit_ops::{self, Word, byte_len};
use crate::index::BitIndex;

/// The representation chosen for a given capacity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Fixed8,
    Fixed16,
    Fixed32,
    Fixed64,
    Dynamic,
}

impl StorageKind {
    /// Smallest fixed width holding `capacity` bits, or `Dynamic` above 64.
    pub const fn for_capacity(capacity: usize) -> Self {
        match capacity {
            0..=8 => StorageKind::Fixed8,
            9..=16 => StorageKind::Fixed16,
            17..=32 => StorageKind::Fixed32,
            33..=64 => StorageKind::Fixed64,
            _ => StorageKind::Dynamic,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StorageKind::Fixed8 => "8-bit",
            StorageKind::Fixed16 => "16-bit",
            StorageKind::Fixed32 => "32-bit",
            StorageKind::Fixed64 => "64-bit",
            StorageKind::Dynamic => "dynamic-array",
        }
    }

    /// Width of the inline word, `None` for the byte array.
    pub const fn bit_width(self) -> Option<usize> {
        match self {
            StorageKind::Fixed8 => Some(8),
            StorageKind::Fixed16 => Some(16),
            StorageKind::Fixed32 => Some(32),
            StorageKind::Fixed64 => Some(64),
            StorageKind::Dynamic => None,
        }
    }
}

impl core::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly one live representation. Callers must keep bit indices below the
/// capacity the storage was built for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Storage {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Dynamic(Box<[u8]>),
}

impl Storage {
    pub(crate) fn new(capacity: usize) -> Self {
        match StorageKind::for_capacity(capacity) {
            StorageKind::Fixed8 => Storage::U8(0),
            StorageKind::Fixed16 => Storage::U16(0),
            StorageKind::Fixed32 => Storage::U32(0),
            StorageKind::Fixed64 => Storage::U64(0),
            StorageKind::Dynamic => {
                Storage::Dynamic(vec![0u8; byte_len(capacity)].into_boxed_slice())
            }
        }
    }

    pub(crate) fn kind(&self) -> StorageKind {
        match self {
            Storage::U8(_) => StorageKind::Fixed8,
            Storage::U16(_) => StorageKind::Fixed16,
            Storage::U32(_) => StorageKind::Fixed32,
            Storage::U64(_) => StorageKind::Fixed64,
            Storage::Dynamic(_) => StorageKind::Dynamic,
        }
    }

    /// Bytes occupied by the bit data itself.
    pub(crate) fn footprint(&self) -> usize {
        match self {
            Storage::U8(_) => 1,
            Storage::U16(_) => 2,
            Storage::U32(_) => 4,
            Storage::U64(_) => 8,
            Storage::Dynamic(bytes) => bytes.len(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, bit: BitIndex) -> bool {
        let i = bit.get();
        match self {
            Storage::U8(w) => w.bit(i),
            Storage::U16(w) => w.bit(i),
            Storage::U32(w) => w.bit(i),
            Storage::U64(w) => w.bit(i),
            Storage::Dynamic(bytes) => bit_ops::get_bit(bytes, i),
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, bit: BitIndex, on: bool) {
        let i = bit.get();
        match self {
            Storage::U8(w) => *w = w.with_bit(i, on),
            Storage::U16(w) => *w = w.with_bit(i, on),
            Storage::U32(w) => *w = w.with_bit(i, on),
            Storage::U64(w) => *w = w.with_bit(i, on),
            Storage::Dynamic(bytes) => bit_ops::set_bit(bytes, i, on),
        }
    }

    #[inline]
    pub(crate) fn flip(&mut self, bit: BitIndex) {
        let i = bit.get();
        match self {
            Storage::U8(w) => *w = w.flip_bit(i),
            Storage::U16(w) => *w = w.flip_bit(i),
            Storage::U32(w) => *w = w.flip_bit(i),
            Storage::U64(w) => *w = w.flip_bit(i),
            Storage::Dynamic(bytes) => bit_ops::flip_bit(bytes, i),
        }
    }

    /// Sets or clears the first `capacity` bits; padding stays clear.
    pub(crate) fn fill(&mut self, capacity: usize, on: bool) {
        fn masked<W: Word>(capacity: usize, on: bool) -> W {
            if on { W::low_mask(capacity) } else { W::ZERO }
        }

        match self {
            Storage::U8(w) => *w = masked(capacity, on),
            Storage::U16(w) => *w = masked(capacity, on),
            Storage::U32(w) => *w = masked(capacity, on),
            Storage::U64(w) => *w = masked(capacity, on),
            Storage::Dynamic(bytes) => bit_ops::fill_bits(bytes, capacity, on),
        }
    }

    pub(crate) fn count_ones(&self) -> usize {
        match self {
            Storage::U8(w) => Word::count_ones(*w),
            Storage::U16(w) => Word::count_ones(*w),
            Storage::U32(w) => Word::count_ones(*w),
            Storage::U64(w) => Word::count_ones(*w),
            Storage::Dynamic(bytes) => bytes.iter().map(|b| b.count_ones() as usize).sum(),
        }
    }

    /// Writes the packed little-endian image of the first `capacity` bits
    /// into `out[..byte_len(capacity)]`.
    pub(crate) fn write_le(&self, capacity: usize, out: &mut [u8]) {
        match self {
            Storage::U8(w) => bit_ops::write_word_bytes(*w, capacity, out),
            Storage::U16(w) => bit_ops::write_word_bytes(*w, capacity, out),
            Storage::U32(w) => bit_ops::write_word_bytes(*w, capacity, out),
            Storage::U64(w) => bit_ops::write_word_bytes(*w, capacity, out),
            Storage::Dynamic(bytes) => out[..bytes.len()].copy_from_slice(bytes),
        }
    }
}
