//! Fixed-capacity set of on/off output states.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use output_bits::{BitVector, StorageKind};
//!
//! let mut outputs = BitVector::new(16);
//! assert_eq!(outputs.storage_kind(), StorageKind::Fixed16);
//!
//! outputs.set_on_off(1, true).unwrap();
//! assert!(outputs.state(1));
//! assert_eq!(outputs.bitfield(), "0000000000000001");
//! assert_eq!(outputs.reversed_bitfield(), "1000000000000000");
//! ```
//!
//! ## Raw export
//!
//! ```rust
//! use output_bits::BitVector;
//!
//! let mut outputs = BitVector::new(65);
//! outputs.set_on_off(65, true).unwrap();
//!
//! let mut buf = [0xFFu8; 9];
//! outputs.raw_data(&mut buf).unwrap();
//! assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0, 0, 1]);
//! ```
//!
use core::fmt::{self, Write};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

use tracing::{debug, trace};

use crate::BitVectorError;
use crate::bit_ops::{self, byte_len};
use crate::index::{BitIndex, Position};
use crate::storage::{Storage, StorageKind};

type Result<T> = core::result::Result<T, BitVectorError>;

/// A fixed number of binary states kept in the smallest storage that fits.
///
/// Positions are 1-based: valid positions are `1..=capacity`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    capacity: usize,
    storage: Storage,
}

impl BitVector {
    /// Creates a vector of `capacity` outputs, all off.
    ///
    /// A capacity of 0 is accepted; every position is then out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use output_bits::{BitVector, StorageKind};
    ///
    /// assert_eq!(BitVector::new(8).storage_kind(), StorageKind::Fixed8);
    /// assert_eq!(BitVector::new(64).storage_kind(), StorageKind::Fixed64);
    /// assert_eq!(BitVector::new(65).storage_kind(), StorageKind::Dynamic);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let storage = Storage::new(capacity);
        trace!(capacity, kind = storage.kind().label(), "created bit vector");
        Self { capacity, storage }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    pub fn storage_kind(&self) -> StorageKind {
        self.storage.kind()
    }

    /// Bytes used by the backing bit storage.
    pub fn storage_bytes(&self) -> usize {
        self.storage.footprint()
    }

    /// Human readable name of the storage kind, e.g. `"16-bit"`.
    pub fn type_str(&self) -> &'static str {
        self.storage.kind().label()
    }

    #[inline]
    fn bit(&self, position: usize) -> Result<BitIndex> {
        Position(position).to_bit(self.capacity).ok_or_else(|| {
            debug!(position, capacity = self.capacity, "position out of range");
            BitVectorError::InvalidPosition {
                position,
                capacity: self.capacity,
            }
        })
    }

    /// Switches the output at `position` on or off.
    ///
    /// Out-of-range positions are rejected without touching any state.
    pub fn set_on_off(&mut self, position: usize, on: bool) -> Result<()> {
        let bit = self.bit(position)?;
        self.storage.set(bit, on);
        Ok(())
    }

    /// State of the output at `position`.
    ///
    /// An out-of-range position reads as `false`, the same as an output that
    /// is off. Use [`checked_state`](Self::checked_state) to tell them apart.
    pub fn state(&self, position: usize) -> bool {
        self.checked_state(position).unwrap_or(false)
    }

    /// State of the output at `position`, or `None` when out of range.
    pub fn checked_state(&self, position: usize) -> Option<bool> {
        Position(position)
            .to_bit(self.capacity)
            .map(|bit| self.storage.get(bit))
    }

    /// Switches every output on or off.
    pub fn set_all(&mut self, on: bool) {
        self.storage.fill(self.capacity, on);
    }

    /// Flips the output at `position`.
    pub fn toggle(&mut self, position: usize) -> Result<()> {
        let bit = self.bit(position)?;
        self.storage.flip(bit);
        Ok(())
    }

    /// Number of outputs currently on.
    pub fn count_on(&self) -> usize {
        self.storage.count_ones()
    }

    /// Mirrors the stored states in place: position `i` swaps with
    /// `capacity - i + 1`. The middle output of an odd capacity stays put.
    pub fn reverse_bits(&mut self) {
        let n = self.capacity;
        for i in 1..=n / 2 {
            let low = self.state(i);
            let high = self.state(n - i + 1);

            // both positions are in range, neither call can fail
            let _ = self.set_on_off(i, high);
            let _ = self.set_on_off(n - i + 1, low);
        }
    }

    /// States rendered highest position first, one `'1'`/`'0'` per output.
    pub fn bitfield(&self) -> String {
        (1..=self.capacity)
            .rev()
            .map(|p| state_char(self.state(p)))
            .collect()
    }

    /// States rendered from position 1 upward.
    pub fn reversed_bitfield(&self) -> String {
        self.iter().map(state_char).collect()
    }

    fn check_buffer(&self, buffer: &[u8]) -> Result<()> {
        let needed = byte_len(self.capacity);
        if buffer.len() < needed {
            debug!(needed, actual = buffer.len(), "raw export buffer too small");
            return Err(BitVectorError::BufferTooSmall {
                needed,
                actual: buffer.len(),
            });
        }
        Ok(())
    }

    /// Packs the states into `buffer`, position 1 at bit 0 of byte 0.
    ///
    /// The whole buffer is zeroed first. Fails without writing when the
    /// buffer is shorter than `ceil(capacity / 8)` bytes.
    pub fn raw_data(&self, buffer: &mut [u8]) -> Result<()> {
        self.check_buffer(buffer)?;
        buffer.fill(0);
        self.storage.write_le(self.capacity, buffer);
        Ok(())
    }

    /// Packs the states into `buffer` in mirrored order, position `capacity`
    /// at bit 0 of byte 0. The stored states are not modified.
    pub fn raw_data_reversed(&self, buffer: &mut [u8]) -> Result<()> {
        self.check_buffer(buffer)?;
        buffer.fill(0);
        for i in 0..self.capacity {
            let bit = BitIndex(i);
            if self.storage.get(bit) {
                bit_ops::set_bit(buffer, bit.mirrored(self.capacity).get(), true);
            }
        }
        Ok(())
    }

    /// Exact-size copy of [`raw_data`](Self::raw_data).
    pub fn to_raw_vec(&self) -> Vec<u8> {
        let mut out = vec![0u8; byte_len(self.capacity)];
        self.storage.write_le(self.capacity, &mut out);
        out
    }

    /// Exact-size copy of [`raw_data_reversed`](Self::raw_data_reversed).
    pub fn to_raw_vec_reversed(&self) -> Vec<u8> {
        let mut out = vec![0u8; byte_len(self.capacity)];
        // sized from capacity, cannot be too small
        let _ = self.raw_data_reversed(&mut out);
        out
    }

    /// Writes `Output States [<capacity>]: <bitfield>` and a newline to `out`.
    pub fn print_states<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "Output States [{}]: {}", self.capacity, self)
    }

    /// States of positions `1..=capacity`, in order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            bits: self,
            position: 1,
        }
    }
}

impl Default for BitVector {
    fn default() -> Self {
        Self::new(0)
    }
}

#[inline]
fn state_char(on: bool) -> char {
    if on { '1' } else { '0' }
}

/// Renders the same text as [`BitVector::bitfield`].
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in (1..=self.capacity).rev() {
            f.write_char(state_char(self.state(p)))?;
        }
        Ok(())
    }
}

pub struct Iter<'a> {
    bits: &'a BitVector,
    position: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        let state = self.bits.checked_state(self.position)?;
        self.position += 1;
        Some(state)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.bits.capacity() + 1).saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_bit_scenario() -> Result<()> {
        let mut bv = BitVector::new(16);
        assert_eq!(bv.type_str(), "16-bit");
        bv.set_on_off(1, true)?;
        assert_eq!(bv.bitfield(), "0000000000000001");
        assert_eq!(bv.reversed_bitfield(), "1000000000000000");

        bv.set_on_off(16, true)?;
        assert_eq!(bv.bitfield(), "1000000000000001");
        assert_eq!(bv.reversed_bitfield(), "1000000000000001");
        Ok(())
    }

    #[test]
    fn invalid_positions() {
        let mut bv = BitVector::new(8);
        bv.set_on_off(3, true).unwrap();

        assert_eq!(
            bv.set_on_off(0, true),
            Err(BitVectorError::InvalidPosition {
                position: 0,
                capacity: 8
            })
        );
        assert!(bv.set_on_off(9, true).is_err());
        assert!(bv.toggle(0).is_err());
        assert!(bv.toggle(9).is_err());
        assert!(!bv.state(0));
        assert!(!bv.state(9));
        assert_eq!(bv.checked_state(9), None);
        assert_eq!(bv.checked_state(3), Some(true));
        assert_eq!(bv.bitfield(), "00000100");
    }

    #[test]
    fn zero_capacity() {
        let mut bv = BitVector::default();
        assert!(bv.is_empty());
        assert_eq!(bv.storage_kind(), StorageKind::Fixed8);
        assert!(bv.set_on_off(1, true).is_err());
        bv.set_all(true);
        bv.reverse_bits();
        assert_eq!(bv.bitfield(), "");
        assert_eq!(bv.to_raw_vec(), Vec::<u8>::new());
        let mut buf = [0xAA; 2];
        bv.raw_data(&mut buf).unwrap();
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn toggle_twice_restores() -> Result<()> {
        let mut bv = BitVector::new(40);
        bv.toggle(33)?;
        assert!(bv.state(33));
        bv.toggle(33)?;
        assert!(!bv.state(33));
        assert_eq!(bv.count_on(), 0);
        Ok(())
    }

    #[test]
    fn set_all_every_kind() {
        for capacity in [5, 8, 12, 16, 30, 32, 50, 64, 65, 100] {
            let mut bv = BitVector::new(capacity);
            bv.set_all(true);
            assert_eq!(bv.bitfield(), "1".repeat(capacity));
            assert_eq!(bv.count_on(), capacity);
            bv.set_all(false);
            assert_eq!(bv.bitfield(), "0".repeat(capacity));
        }
    }

    #[test]
    fn reverse_odd_keeps_middle() -> Result<()> {
        let mut bv = BitVector::new(5);
        bv.set_on_off(1, true)?;
        bv.set_on_off(3, true)?;
        bv.reverse_bits();
        assert_eq!(bv.reversed_bitfield(), "00101");
        bv.reverse_bits();
        assert_eq!(bv.reversed_bitfield(), "10100");
        Ok(())
    }

    #[test]
    fn dynamic_raw_data() -> Result<()> {
        let mut bv = BitVector::new(65);
        assert_eq!(bv.type_str(), "dynamic-array");
        assert_eq!(bv.storage_bytes(), 9);
        bv.set_on_off(65, true)?;

        let mut buf = [0xFFu8; 9];
        bv.raw_data(&mut buf)?;
        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0, 0, 0x01]);

        bv.raw_data_reversed(&mut buf)?;
        assert_eq!(buf, [0x01, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(bv.state(65));
        Ok(())
    }

    #[test]
    fn raw_data_reversed_fixed() -> Result<()> {
        let mut bv = BitVector::new(10);
        bv.set_on_off(1, true)?;
        bv.set_on_off(2, true)?;
        assert_eq!(bv.to_raw_vec(), [0b0000_0011, 0]);
        assert_eq!(bv.to_raw_vec_reversed(), [0, 0b0000_0011]);
        Ok(())
    }

    #[test]
    fn raw_data_rejects_short_buffer() -> Result<()> {
        let mut bv = BitVector::new(17);
        bv.set_on_off(17, true)?;
        let mut buf = [0xEEu8; 2];
        assert_eq!(
            bv.raw_data(&mut buf),
            Err(BitVectorError::BufferTooSmall {
                needed: 3,
                actual: 2
            })
        );
        assert!(bv.raw_data_reversed(&mut buf).is_err());
        assert_eq!(buf, [0xEE, 0xEE]);

        let mut big = [0xEEu8; 5];
        bv.raw_data(&mut big)?;
        assert_eq!(big, [0, 0, 0x01, 0, 0]);
        Ok(())
    }

    #[test]
    fn print_states_line() -> Result<()> {
        let mut bv = BitVector::new(4);
        bv.set_on_off(2, true)?;
        let mut out = String::new();
        bv.print_states(&mut out).unwrap();
        assert_eq!(out, "Output States [4]: 0010\n");
        assert_eq!(bv.to_string(), "0010");
        Ok(())
    }

    #[test]
    fn iter_matches_positions() -> Result<()> {
        let mut bv = BitVector::new(3);
        bv.set_on_off(2, true)?;
        let it = bv.iter();
        assert_eq!(it.len(), 3);
        let collected: Vec<bool> = (&bv).into_iter().collect();
        assert_eq!(collected, vec![false, true, false]);
        Ok(())
    }
}
