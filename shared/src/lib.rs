//! # Railgun Shared
//! Event identifiers and protocol constants shared between the Railgun client & server.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use railgun_serde::{
    BitCounter, BitReader, BitWrite, BitWriter, BoundedInteger, ConstBitLength, Serde, SerdeErr,
};

mod constants;
mod event;

pub use constants::{MAX_EVENT_COUNT, UNRELIABLE_EVENT_MARKER};
pub use event::{error::EventIdError, event_id::EventId};
