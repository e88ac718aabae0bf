// Event id space

/// Largest sequence number a reliable event may carry within one session.
///
/// Both peers derive the event id encoder from this value, so it must match
/// on client and server. At ten reliable events per second it lasts well over
/// a day, which is longer than any session is expected to run; ids are not
/// recycled when it runs out.
pub const MAX_EVENT_COUNT: i32 = 1_000_000;

/// Wire value standing in for the unreliable sentinel. It is the top of the
/// event id encoder's range, one past the last reliable id.
pub const UNRELIABLE_EVENT_MARKER: i32 = MAX_EVENT_COUNT + 1;
