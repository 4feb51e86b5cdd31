#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by [`BitVector`](crate::BitVector).
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitVectorError {
    #[cfg_attr(
        feature = "std",
        error("Position {position} is out of range 1..={capacity}")
    )]
    InvalidPosition { position: usize, capacity: usize },

    #[cfg_attr(
        feature = "std",
        error("Buffer too small: need {needed} bytes, got {actual}")
    )]
    BufferTooSmall { needed: usize, actual: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitVectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitVectorError::InvalidPosition { position, capacity } => {
                write!(f, "Position {} is out of range 1..={}", position, capacity)
            }
            BitVectorError::BufferTooSmall { needed, actual } => {
                write!(f, "Buffer too small: need {} bytes, got {}", needed, actual)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = BitVectorError::InvalidPosition {
            position: 0,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "Position 0 is out of range 1..=8");

        let err = BitVectorError::BufferTooSmall {
            needed: 9,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Buffer too small: need 9 bytes, got 4");
    }
}
