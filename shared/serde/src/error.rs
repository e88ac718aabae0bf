use thiserror::Error;

/// Errors that can occur while deserializing untrusted bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// Attempted to read past the end of the buffer
    #[error("Attempted to read past the end of the buffer after {bits_read} bits")]
    OutOfBits { bits_read: usize },

    /// Decoded value is not representable by the encoder (SECURITY: potentially malicious packet)
    #[error("Decoded value {value} is outside of the encoder range [{min}, {max}]. This may indicate a malformed or malicious packet")]
    OutOfRange { value: i128, min: i64, max: i64 },
}
