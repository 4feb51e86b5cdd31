//! # output_bits
//!
//! A `no_std` compatible store for on/off output states (pins, relays,
//! LEDs) that keeps them in the smallest integer able to hold them.
//!
//! ```rust
//! use output_bits::BitVector;
//!
//! // 12 outputs fit in a single u16
//! let mut outputs = BitVector::new(12);
//! outputs.set_on_off(1, true).unwrap();
//! outputs.toggle(12).unwrap();
//!
//! assert!(outputs.state(1));
//! assert!(outputs.state(12));
//! assert_eq!(outputs.type_str(), "16-bit");
//! assert_eq!(outputs.bitfield(), "100000000001");
//! ```
//!
//! ## Memory Footprint
//!
//! | outputs  | storage          | bytes              |
//! |----------|------------------|--------------------|
//! | 1..=8    | `u8`             | 1                  |
//! | 9..=16   | `u16`            | 2                  |
//! | 17..=32  | `u32`            | 4                  |
//! | 33..=64  | `u64`            | 8                  |
//! | 65..     | boxed byte array | `ceil(outputs / 8)` |
//!
//! ```rust
//! use output_bits::BitVector;
//!
//! let outputs = BitVector::new(100);
//! assert_eq!(outputs.storage_bytes(), 13);
//! ```
//!

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::BitVectorError;

mod bit_ops;
mod index;

pub mod storage;
pub use storage::StorageKind;

pub mod bit_vector;
pub use bit_vector::BitVector;
