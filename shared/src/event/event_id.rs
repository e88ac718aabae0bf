use std::fmt;

use log::warn;

use railgun_serde::{BitReader, BitWrite, BoundedInteger, ConstBitLength, Serde, SerdeErr};

use crate::{
    constants::{MAX_EVENT_COUNT, UNRELIABLE_EVENT_MARKER},
    event::error::EventIdError,
};

/// Identity of an event sent alongside state snapshots.
///
/// Reliable events carry a sequence number in `1..=MAX_EVENT_COUNT`, handed
/// out by `EventId::increment` and strictly increasing within a session.
/// Every unreliable event shares `EventId::UNRELIABLE`, and
/// `EventId::INVALID` stands for "no event".
///
/// Ids have no `PartialOrd`. Two reliable ids are ordered with `is_newer_than`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EventId {
    id: i32,
}

impl EventId {
    pub const INVALID: Self = Self::new(0);
    pub const UNRELIABLE: Self = Self::new(-1);

    // 0 is the invalid id, the top of the range carries UNRELIABLE
    pub const ENCODER: BoundedInteger =
        BoundedInteger::new(0, UNRELIABLE_EVENT_MARKER as i64);

    /// Bits an event id occupies on the wire, whatever its value.
    pub const COST: u32 = Self::ENCODER.bit_length();

    /// Callers must keep `id` within `{-1, 0} ∪ [1, MAX_EVENT_COUNT]`.
    pub(crate) const fn new(id: i32) -> Self {
        Self { id }
    }

    pub fn value(&self) -> i32 {
        self.id
    }

    pub fn is_valid(&self) -> bool {
        self.id > 0 || self.id == -1
    }

    pub fn is_reliable(&self) -> bool {
        self.id > 0
    }

    /// Advances `current` to the next reliable id and returns it.
    ///
    /// `current` is a per-session counter starting at `EventId::INVALID`. No
    /// wrap-around is performed: running past `MAX_EVENT_COUNT` is a fault in
    /// debug builds and the caller's responsibility in release builds. Use
    /// `try_increment` where exhaustion has to be handled.
    pub fn increment(current: &mut Self) -> Self {
        debug_assert!(
            current.id >= 0,
            "can't allocate reliable event ids from {}",
            current
        );
        debug_assert!(
            current.id < MAX_EVENT_COUNT,
            "reliable event counter exhausted at {}",
            current
        );

        *current = Self::new(current.id + 1);
        *current
    }

    /// Checked version of `increment`. Leaves `current` untouched on error.
    pub fn try_increment(current: &mut Self) -> Result<Self, EventIdError> {
        if current.id < 0 {
            return Err(EventIdError::NotACounter {
                current: current.id,
            });
        }
        if current.id >= MAX_EVENT_COUNT {
            return Err(EventIdError::CounterExhausted {
                current: current.id,
            });
        }

        *current = Self::new(current.id + 1);
        Ok(*current)
    }

    /// Whether this id was allocated after `other`.
    ///
    /// Both ids must be reliable; comparing anything else is a fault in debug
    /// builds. Plain integer comparison, so only meaningful while the counter
    /// stays within `MAX_EVENT_COUNT`.
    pub fn is_newer_than(&self, other: &Self) -> bool {
        debug_assert!(self.is_reliable(), "{} is not a reliable event id", self);
        debug_assert!(other.is_reliable(), "{} is not a reliable event id", other);

        self.id > other.id
    }

    /// Reads an event id without advancing `reader`.
    pub fn peek(reader: &BitReader) -> Result<Self, SerdeErr> {
        Self::de(&mut reader.clone())
    }

    fn to_wire(self) -> i64 {
        if self == Self::UNRELIABLE {
            i64::from(UNRELIABLE_EVENT_MARKER)
        } else {
            i64::from(self.id)
        }
    }

    fn from_wire(value: i64) -> Self {
        if value == i64::from(UNRELIABLE_EVENT_MARKER) {
            Self::UNRELIABLE
        } else {
            // the encoder already rejected anything above the marker
            Self::new(value as i32)
        }
    }
}

impl Serde for EventId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        Self::ENCODER.write(writer, self.to_wire());
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match Self::ENCODER.read(reader) {
            Ok(value) => Ok(Self::from_wire(value)),
            Err(err) => {
                warn!("Rejected event id: {}", err);
                Err(err)
            }
        }
    }

    fn bit_length(&self) -> u32 {
        Self::COST
    }
}

impl ConstBitLength for EventId {
    fn const_bit_length() -> u32 {
        Self::COST
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            0 => write!(f, "EventId(invalid)"),
            -1 => write!(f, "EventId(unreliable)"),
            id => write!(f, "EventId({})", id),
        }
    }
}
