/// A 1-based output position as seen by callers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position(pub usize);

impl Position {
    /// Maps the position onto its zero-based bit, or `None` when it falls
    /// outside `1..=capacity`.
    #[inline]
    pub fn to_bit(self, capacity: usize) -> Option<BitIndex> {
        if self.0 == 0 || self.0 > capacity {
            None
        } else {
            Some(BitIndex(self.0 - 1))
        }
    }
}

/// A zero-based bit offset into the backing storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitIndex(pub usize);

impl BitIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// The bit holding the same state after the whole field is mirrored.
    #[inline]
    pub fn mirrored(self, capacity: usize) -> BitIndex {
        debug_assert!(self.0 < capacity);
        BitIndex(capacity - self.0 - 1)
    }
}
