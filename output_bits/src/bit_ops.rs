use bytemuck::Pod;

/// Number of bytes needed to hold `bits` bits.
///
/// Shared by the dynamic allocation and the raw export paths so both agree
/// on the buffer size.
#[inline(always)]
pub const fn byte_len(bits: usize) -> usize {
    bits.div_ceil(8)
}

/// Fixed-width unsigned integer usable as inline bit storage.
pub trait Word: Pod + Eq {
    const BITS: usize;
    const ZERO: Self;

    fn bit(self, index: usize) -> bool;
    fn with_bit(self, index: usize, on: bool) -> Self;
    fn flip_bit(self, index: usize) -> Self;
    /// A word with the lowest `count` bits set.
    fn low_mask(count: usize) -> Self;
    fn count_ones(self) -> usize;
    /// Little-endian representation, ready for [`bytemuck::bytes_of`].
    fn to_le_word(self) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),*) => {
        $(
            impl Word for $t {
                const BITS: usize = <$t>::BITS as usize;
                const ZERO: Self = 0;

                #[inline(always)]
                fn bit(self, index: usize) -> bool {
                    (self >> index) & 1 == 1
                }

                #[inline(always)]
                fn with_bit(self, index: usize, on: bool) -> Self {
                    if on {
                        self | (1 << index)
                    } else {
                        self & !(1 << index)
                    }
                }

                #[inline(always)]
                fn flip_bit(self, index: usize) -> Self {
                    self ^ (1 << index)
                }

                #[inline(always)]
                fn low_mask(count: usize) -> Self {
                    if count >= <Self as Word>::BITS {
                        <$t>::MAX
                    } else {
                        (1 << count) - 1
                    }
                }

                #[inline(always)]
                fn count_ones(self) -> usize {
                    <$t>::count_ones(self) as usize
                }

                #[inline(always)]
                fn to_le_word(self) -> Self {
                    <$t>::to_le(self)
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);

/// Copies the low `byte_len(bits)` little-endian bytes of `word` into `out`.
pub fn write_word_bytes<W: Word>(word: W, bits: usize, out: &mut [u8]) {
    let le = word.to_le_word();
    let n = byte_len(bits);
    out[..n].copy_from_slice(&bytemuck::bytes_of(&le)[..n]);
}

#[inline]
pub fn get_bit(slice: &[u8], pos: usize) -> bool {
    (slice[pos / 8] >> (pos % 8)) & 1 == 1
}

#[inline]
pub fn set_bit(slice: &mut [u8], pos: usize, on: bool) {
    let byte = pos / 8;
    let bit_in_byte = pos % 8;

    if on {
        slice[byte] |= 1 << bit_in_byte;
    } else {
        slice[byte] &= !(1 << bit_in_byte);
    }
}

#[inline]
pub fn flip_bit(slice: &mut [u8], pos: usize) {
    slice[pos / 8] ^= 1 << (pos % 8);
}

/// Sets or clears the first `bits` bits of `slice`, leaving the trailing
/// padding bits of the last byte cleared.
pub fn fill_bits(slice: &mut [u8], bits: usize, on: bool) {
    if !on {
        slice.fill(0);
        return;
    }

    let full = bits / 8;
    slice[..full].fill(u8::MAX);
    if bits % 8 != 0 {
        slice[full] = u8::low_mask(bits % 8);
    }
}
