//! # Railgun Serde
//! Bit-level buffers and fixed-width integer encoding used by Railgun's wire format.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod bit_counter;
mod bit_reader;
mod bit_writer;
mod bounded_integer;
mod error;
mod serde;

pub use bit_counter::BitCounter;
pub use bit_reader::BitReader;
pub use bit_writer::{BitWrite, BitWriter};
pub use bounded_integer::BoundedInteger;
pub use error::SerdeErr;
pub use serde::{ConstBitLength, Serde};
